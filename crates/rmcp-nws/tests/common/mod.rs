//! A local stand-in for api.weather.gov served by axum on an ephemeral port.

#![allow(dead_code)]

use axum::{http::StatusCode, routing::get, Json, Router};
use serde_json::{json, Value};
use tokio::net::TcpListener;

pub const LAT: f64 = 40.7128;
pub const LON: f64 = -74.006;
pub const POINTS_PATH: &str = "/points/40.7128,-74.006";
pub const ALERTS_PATH: &str = "/points/40.7128,-74.006/alerts";
pub const FORECAST_PATH: &str = "/gridpoints/OKX/33,35/forecast";

/// Serve the router returned by `build` and return its base URL.
///
/// `build` receives the base URL so responses can link back to the server.
pub async fn spawn_upstream(build: impl FnOnce(&str) -> Router) -> String {
    let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
    let base = format!("http://{}", listener.local_addr().unwrap());
    let app = build(&base);
    tokio::spawn(async move {
        axum::serve(listener, app).await.unwrap();
    });
    base
}

/// Base URL of a port with nothing listening on it.
pub async fn closed_port() -> String {
    let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
    let base = format!("http://{}", listener.local_addr().unwrap());
    drop(listener);
    base
}

pub fn period(name: &str, temperature: i64) -> Value {
    json!({
        "number": 1,
        "name": name,
        "temperature": temperature,
        "temperatureUnit": "F",
        "windSpeed": "5 mph",
        "windDirection": "NW",
        "detailedForecast": format!("Forecast for {name}")
    })
}

pub fn points_body(base: &str) -> Value {
    json!({ "properties": { "forecast": format!("{base}{FORECAST_PATH}") } })
}

pub fn forecast_body(periods: Vec<Value>) -> Value {
    json!({ "properties": { "periods": periods } })
}

/// Upstream with a working points lookup and the given forecast periods.
pub fn forecast_upstream(periods: Vec<Value>) -> impl FnOnce(&str) -> Router {
    move |base: &str| {
        let points = points_body(base);
        let forecast = forecast_body(periods);
        Router::new()
            .route(POINTS_PATH, get(move || async move { Json(points) }))
            .route(FORECAST_PATH, get(move || async move { Json(forecast) }))
    }
}

pub fn alerts_upstream(body: Value) -> impl FnOnce(&str) -> Router {
    move |_base: &str| Router::new().route(ALERTS_PATH, get(move || async move { Json(body) }))
}

pub fn failing_route(path: &'static str, status: StatusCode) -> Router {
    Router::new().route(path, get(move || async move { status }))
}
