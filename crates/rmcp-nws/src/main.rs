//! rmcp-nws: MCP server for NWS forecasts and alerts
//!
//! Run with: `rmcp-nws` (serves on stdio). Set `NWS_API_URL` to use another API root.

use rmcp::ServiceExt;
use rmcp_nws::{NwsClient, WeatherServer};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Logs go to stderr; stdout carries the protocol
    tracing_subscriber::registry()
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();

    let client = match std::env::var("NWS_API_URL") {
        Ok(base) => NwsClient::with_base_url(base),
        Err(_) => NwsClient::new(),
    };

    tracing::info!(api = client.base_url(), "Starting rmcp-nws server");

    let server = WeatherServer::with_client(client);
    let service = server.serve(rmcp::transport::stdio()).await?;
    service.waiting().await?;

    tracing::info!("rmcp-nws server stopped");
    Ok(())
}
