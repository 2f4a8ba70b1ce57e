//! Streamable HTTP transport: JSON-RPC over POST, replies over `text/event-stream`.

use std::sync::Arc;

use rmcp::transport::streamable_http_server::{
    session::local::LocalSessionManager, StreamableHttpServerConfig, StreamableHttpService,
};

use crate::WeatherServer;

pub const MCP_PATH: &str = "/mcp";

/// Router with the MCP endpoint mounted at [`MCP_PATH`].
///
/// Every session gets its own clone of `server`.
pub fn http_router(server: WeatherServer) -> axum::Router {
    let service = StreamableHttpService::new(
        move || Ok(server.clone()),
        Arc::new(LocalSessionManager::default()),
        StreamableHttpServerConfig::default(),
    );

    axum::Router::new().nest_service(MCP_PATH, service)
}
