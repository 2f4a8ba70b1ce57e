//! weather-client: connect to the weather MCP server and call one tool
//!
//! Over HTTP: `weather-client --url http://localhost:8100/mcp`
//! Over stdio: `weather-client --server-command rmcp-nws`

use clap::{Parser, ValueEnum};
use rmcp::{
    model::CallToolRequestParam,
    service::{RoleClient, RunningService},
    transport::{StreamableHttpClientTransport, TokioChildProcess},
    ServiceExt,
};
use serde_json::json;
use tokio::process::Command;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

#[derive(Debug, Parser)]
#[command(name = "weather-client", version, about = "Call a weather MCP tool")]
struct Args {
    /// Streamable HTTP endpoint of the server.
    #[arg(long, default_value = "http://localhost:8100/mcp", env = "WEATHER_MCP_URL")]
    url: String,

    /// Spawn this server binary and talk to it over stdio instead of HTTP.
    #[arg(long)]
    server_command: Option<String>,

    /// Extra arguments for `--server-command`.
    #[arg(long = "server-arg", allow_hyphen_values = true)]
    server_args: Vec<String>,

    #[arg(long, value_enum, default_value_t = Tool::GetForecast)]
    tool: Tool,

    #[arg(long, default_value_t = 40.7128, allow_hyphen_values = true)]
    latitude: f64,

    #[arg(long, default_value_t = -74.006, allow_hyphen_values = true)]
    longitude: f64,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
#[value(rename_all = "snake_case")]
enum Tool {
    GetForecast,
    GetAlerts,
}

impl Tool {
    fn name(self) -> &'static str {
        match self {
            Tool::GetForecast => "get_forecast",
            Tool::GetAlerts => "get_alerts",
        }
    }
}

async fn connect(args: &Args) -> anyhow::Result<RunningService<RoleClient, ()>> {
    let client = match &args.server_command {
        Some(program) => {
            tracing::info!(%program, "Spawning server over stdio");
            let mut cmd = Command::new(program);
            cmd.args(&args.server_args);
            ().serve(TokioChildProcess::new(cmd)?).await?
        }
        None => {
            tracing::info!(url = %args.url, "Connecting over streamable HTTP");
            ().serve(StreamableHttpClientTransport::from_uri(args.url.clone()))
                .await?
        }
    };
    Ok(client)
}

fn tool_call(tool: Tool, latitude: f64, longitude: f64) -> anyhow::Result<CallToolRequestParam> {
    Ok(serde_json::from_value(json!({
        "name": tool.name(),
        "arguments": { "latitude": latitude, "longitude": longitude },
    }))?)
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    tracing_subscriber::registry()
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();

    let args = Args::parse();
    let client = connect(&args).await?;

    if let Some(info) = client.peer_info() {
        tracing::info!(
            "Connected to {} v{}",
            info.server_info.name,
            info.server_info.version
        );
    }

    let tools = client.list_all_tools().await?;
    for tool in &tools {
        tracing::info!(
            name = %tool.name,
            description = tool.description.as_deref().unwrap_or(""),
            "Available tool"
        );
    }

    let result = client
        .call_tool(tool_call(args.tool, args.latitude, args.longitude)?)
        .await?;

    if result.is_error == Some(true) {
        tracing::warn!(tool = args.tool.name(), "Tool reported an error");
    }
    for content in &result.content {
        if let Some(text) = content.as_text() {
            println!("{}", text.text);
        }
    }

    client.cancel().await?;
    Ok(())
}
