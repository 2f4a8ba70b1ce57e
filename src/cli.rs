use std::net::SocketAddr;

use clap::{Parser, ValueEnum};
use rmcp_nws::nws::NWS_API_URL;

/// Command-line options for the unified server.
#[derive(Debug, Parser)]
#[command(name = "weather-mcp", version, about = "NWS weather forecasts and alerts as MCP tools")]
pub struct Cli {
    /// Transport to serve the tools on.
    #[arg(long, value_enum, default_value_t = Transport::Stdio, env = "WEATHER_MCP_TRANSPORT")]
    pub transport: Transport,

    /// Listen address for the HTTP transport.
    #[arg(long, default_value = "0.0.0.0:8100", env = "WEATHER_MCP_BIND")]
    pub bind: SocketAddr,

    /// Root of the weather API.
    #[arg(long, default_value = NWS_API_URL, env = "NWS_API_URL")]
    pub api_base: String,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum Transport {
    /// Newline-delimited JSON-RPC on stdin/stdout.
    Stdio,
    /// Streamable HTTP with server-sent events, mounted at `/mcp`.
    Http,
}
