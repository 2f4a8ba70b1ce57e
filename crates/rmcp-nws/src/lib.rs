//! rmcp-nws: MCP tools for National Weather Service forecasts and alerts.

use rmcp::{
    handler::server::{router::tool::ToolRouter, wrapper::Parameters, ServerHandler},
    model::*,
    ErrorData as McpError,
};
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

pub mod error;
pub mod format;
pub mod http;
pub mod model;
pub mod nws;

pub use error::NwsError;
pub use http::http_router;
pub use nws::NwsClient;

// ============================================================================
// Tool parameters
// ============================================================================

#[derive(Debug, Serialize, Deserialize, JsonSchema)]
pub struct CoordinateParams {
    #[schemars(description = "Latitude of the location in decimal degrees")]
    pub latitude: f64,
    #[schemars(description = "Longitude of the location in decimal degrees")]
    pub longitude: f64,
}

// ============================================================================
// Server
// ============================================================================

/// Server context handed to every request: the tool table plus the upstream client.
///
/// Cloned once per HTTP session; clones share the underlying connection pool.
#[derive(Debug, Clone)]
pub struct WeatherServer {
    pub tool_router: ToolRouter<Self>,
    nws: NwsClient,
}

impl Default for WeatherServer {
    fn default() -> Self {
        Self::new()
    }
}

impl WeatherServer {
    pub fn new() -> Self {
        Self::with_client(NwsClient::new())
    }

    pub fn with_client(nws: NwsClient) -> Self {
        Self {
            tool_router: Self::tool_router(),
            nws,
        }
    }

    pub fn client(&self) -> &NwsClient {
        &self.nws
    }
}

#[rmcp::tool_router]
impl WeatherServer {
    #[rmcp::tool(
        description = "Get a detailed weather forecast for a latitude/longitude. \
                       Returns the next 5 forecast periods with temperature, wind and a summary."
    )]
    pub async fn get_forecast(
        &self,
        Parameters(params): Parameters<CoordinateParams>,
    ) -> Result<CallToolResult, McpError> {
        tracing::info!(latitude = params.latitude, longitude = params.longitude, "get_forecast");
        let text = self.nws.forecast(params.latitude, params.longitude).await;
        Ok(CallToolResult::success(vec![Content::text(text)]))
    }

    #[rmcp::tool(description = "Get active weather alerts for a latitude/longitude")]
    pub async fn get_alerts(
        &self,
        Parameters(params): Parameters<CoordinateParams>,
    ) -> Result<CallToolResult, McpError> {
        tracing::info!(latitude = params.latitude, longitude = params.longitude, "get_alerts");
        let text = self.nws.alerts(params.latitude, params.longitude).await;
        Ok(CallToolResult::success(vec![Content::text(text)]))
    }
}

#[rmcp::tool_handler]
impl ServerHandler for WeatherServer {
    fn get_info(&self) -> ServerInfo {
        ServerInfo {
            protocol_version: ProtocolVersion::V_2024_11_05,
            capabilities: ServerCapabilities::builder().enable_tools().build(),
            server_info: Implementation::from_build_env(),
            instructions: Some(
                "Weather forecasts and active alerts for US locations from the National Weather Service (api.weather.gov)".into(),
            ),
        }
    }
}
