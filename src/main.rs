//! weather-mcp - NWS forecasts and alerts for AI assistants
//!
//! One binary, two transports: stdio for local clients, streamable HTTP for remote ones.

mod cli;

use std::net::SocketAddr;

use clap::Parser;
use rmcp::{transport::stdio, ServiceExt};
use rmcp_nws::{http::MCP_PATH, http_router, NwsClient, WeatherServer};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use crate::cli::{Cli, Transport};

/// `RUST_LOG` when set and valid, otherwise `info`.
fn env_filter() -> EnvFilter {
    EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"))
}

async fn serve_stdio(server: WeatherServer) -> anyhow::Result<()> {
    let service = server.serve(stdio()).await?;
    service.waiting().await?;
    Ok(())
}

async fn serve_http(server: WeatherServer, bind: SocketAddr) -> anyhow::Result<()> {
    let listener = tokio::net::TcpListener::bind(bind).await?;
    tracing::info!("MCP endpoint at http://{}{}", listener.local_addr()?, MCP_PATH);

    axum::serve(listener, http_router(server))
        .with_graceful_shutdown(async {
            if let Err(e) = tokio::signal::ctrl_c().await {
                tracing::error!("Failed to listen for shutdown signal: {}", e);
            }
        })
        .await?;
    Ok(())
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Logs go to stderr so the stdio transport keeps stdout to itself
    tracing_subscriber::registry()
        .with(env_filter())
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();

    let cli = Cli::parse();
    let server = WeatherServer::with_client(NwsClient::with_base_url(cli.api_base));

    tracing::info!(transport = ?cli.transport, api = server.client().base_url(), "weather-mcp starting...");

    match cli.transport {
        Transport::Stdio => serve_stdio(server).await?,
        Transport::Http => serve_http(server, cli.bind).await?,
    }

    tracing::info!("weather-mcp stopped");
    Ok(())
}
