//! End-to-end tool calls through an MCP client, over an in-process pipe and over HTTP.

mod common;

use common::*;
use rmcp::{
    model::{CallToolRequestParam, CallToolResult},
    service::{RoleClient, RunningService},
    transport::StreamableHttpClientTransport,
    ServiceExt,
};
use rmcp_nws::nws::{FORECAST_UNAVAILABLE, NO_ACTIVE_ALERTS};
use rmcp_nws::{http_router, NwsClient, WeatherServer};
use serde_json::json;
use tokio::net::TcpListener;

fn call(tool: &str, latitude: f64, longitude: f64) -> CallToolRequestParam {
    serde_json::from_value(json!({
        "name": tool,
        "arguments": { "latitude": latitude, "longitude": longitude }
    }))
    .unwrap()
}

fn text_of(result: &CallToolResult) -> String {
    result
        .content
        .iter()
        .filter_map(|c| c.as_text())
        .map(|t| t.text.clone())
        .collect::<Vec<_>>()
        .join("")
}

async fn connect_pipe(server: WeatherServer) -> RunningService<RoleClient, ()> {
    let (server_io, client_io) = tokio::io::duplex(64 * 1024);
    tokio::spawn(async move {
        let service = server.serve(server_io).await.unwrap();
        service.waiting().await.unwrap();
    });
    ().serve(client_io).await.unwrap()
}

#[tokio::test]
async fn lists_both_tools() {
    let client = connect_pipe(WeatherServer::new()).await;

    let tools = client.list_all_tools().await.unwrap();
    let mut names: Vec<String> = tools.iter().map(|t| t.name.to_string()).collect();
    names.sort();
    assert_eq!(names, vec!["get_alerts", "get_forecast"]);

    let forecast = tools.iter().find(|t| t.name == "get_forecast").unwrap();
    let schema = serde_json::to_value(&forecast.input_schema).unwrap();
    assert!(schema["properties"]["latitude"].is_object());
    assert!(schema["properties"]["longitude"].is_object());

    client.cancel().await.unwrap();
}

#[tokio::test]
async fn server_info_advertises_tools() {
    let client = connect_pipe(WeatherServer::new()).await;

    let info = client.peer_info().unwrap();
    assert!(info.capabilities.tools.is_some());
    assert!(info.instructions.as_deref().unwrap_or_default().contains("api.weather.gov"));

    client.cancel().await.unwrap();
}

#[tokio::test]
async fn get_forecast_over_pipe() {
    let base = spawn_upstream(forecast_upstream(vec![period("Tonight", 60)])).await;
    let client = connect_pipe(WeatherServer::with_client(NwsClient::with_base_url(base))).await;

    let result = client.call_tool(call("get_forecast", LAT, LON)).await.unwrap();
    let text = text_of(&result);

    assert_ne!(result.is_error, Some(true));
    assert!(text.starts_with("Tonight:"));
    assert!(text.contains("60°F"));

    client.cancel().await.unwrap();
}

#[tokio::test]
async fn failed_lookup_is_a_successful_result() {
    let base = closed_port().await;
    let client = connect_pipe(WeatherServer::with_client(NwsClient::with_base_url(base))).await;

    let result = client.call_tool(call("get_forecast", LAT, LON)).await.unwrap();

    assert_ne!(result.is_error, Some(true));
    assert_eq!(text_of(&result), FORECAST_UNAVAILABLE);

    client.cancel().await.unwrap();
}

#[tokio::test]
async fn get_alerts_over_http() {
    let upstream = spawn_upstream(alerts_upstream(json!({ "features": [] }))).await;
    let server = WeatherServer::with_client(NwsClient::with_base_url(upstream));

    let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    tokio::spawn(async move {
        axum::serve(listener, http_router(server)).await.unwrap();
    });

    let transport = StreamableHttpClientTransport::from_uri(format!("http://{addr}/mcp"));
    let client = ().serve(transport).await.unwrap();

    let result = client.call_tool(call("get_alerts", LAT, LON)).await.unwrap();
    assert_eq!(text_of(&result), NO_ACTIVE_ALERTS);

    client.cancel().await.unwrap();
}
