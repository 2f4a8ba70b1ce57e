//! National Weather Service client and the forecast/alerts pipelines.

use std::time::Duration;

use reqwest::header::{ACCEPT, USER_AGENT};
use serde::de::DeserializeOwned;

use crate::error::NwsError;
use crate::format::{render_alerts, render_forecast};
use crate::model::{AlertCollection, ForecastResponse, PointsResponse};

pub const NWS_API_URL: &str = "https://api.weather.gov";
pub const NWS_USER_AGENT: &str = "weather-mcp/1.0";
pub const REQUEST_TIMEOUT: Duration = Duration::from_secs(10);

pub const FORECAST_UNAVAILABLE: &str = "Unable to fetch forecast data for this location";
pub const DETAILED_FORECAST_UNAVAILABLE: &str = "Unable to fetch detailed forecast.";
pub const ALERTS_UNAVAILABLE: &str = "No alerts data available for this location.";
pub const NO_ACTIVE_ALERTS: &str = "No active alerts found for this location.";

#[derive(Debug, Clone)]
pub struct NwsClient {
    http: reqwest::Client,
    base_url: String,
    timeout: Duration,
}

impl Default for NwsClient {
    fn default() -> Self {
        Self::new()
    }
}

impl NwsClient {
    pub fn new() -> Self {
        Self::with_base_url(NWS_API_URL)
    }

    /// Point the client at a different API root (a mirror, or a local fake in tests).
    pub fn with_base_url(base_url: impl Into<String>) -> Self {
        let base_url = base_url.into();
        Self {
            http: reqwest::Client::new(),
            base_url: base_url.trim_end_matches('/').to_string(),
            timeout: REQUEST_TIMEOUT,
        }
    }

    /// Per-request timeout; defaults to [`REQUEST_TIMEOUT`].
    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    pub fn points_url(&self, latitude: f64, longitude: f64) -> String {
        format!("{}/points/{},{}", self.base_url, latitude, longitude)
    }

    pub fn alerts_url(&self, latitude: f64, longitude: f64) -> String {
        format!("{}/alerts", self.points_url(latitude, longitude))
    }

    async fn try_fetch<T: DeserializeOwned>(&self, url: &str) -> Result<T, NwsError> {
        let response = self
            .http
            .get(url)
            .header(USER_AGENT, NWS_USER_AGENT)
            .header(ACCEPT, "application/json")
            .timeout(self.timeout)
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            return Err(NwsError::Status {
                status,
                url: url.to_string(),
            });
        }

        let body = response.bytes().await?;
        Ok(serde_json::from_slice(&body)?)
    }

    /// GET `url` and decode the JSON body as `T`.
    ///
    /// Any failure (transport, timeout, non-2xx, undecodable body) is logged and
    /// reported as `None`; callers turn that into a user-facing message.
    pub async fn fetch_json<T: DeserializeOwned>(&self, url: &str) -> Option<T> {
        match self.try_fetch(url).await {
            Ok(value) => Some(value),
            Err(e) => {
                tracing::warn!(url, error = %e, "NWS request failed");
                None
            }
        }
    }

    /// Two-step lookup: coordinates -> gridpoint forecast URL -> periods.
    pub async fn forecast(&self, latitude: f64, longitude: f64) -> String {
        let points_url = self.points_url(latitude, longitude);
        let Some(points) = self.fetch_json::<PointsResponse>(&points_url).await else {
            return FORECAST_UNAVAILABLE.to_string();
        };

        let forecast_url = points.properties.forecast;
        tracing::debug!(%forecast_url, "resolved forecast endpoint");

        let Some(forecast) = self.fetch_json::<ForecastResponse>(&forecast_url).await else {
            return DETAILED_FORECAST_UNAVAILABLE.to_string();
        };

        render_forecast(&forecast.properties.periods)
    }

    pub async fn alerts(&self, latitude: f64, longitude: f64) -> String {
        let url = self.alerts_url(latitude, longitude);
        let Some(features) = self
            .fetch_json::<AlertCollection>(&url)
            .await
            .and_then(|collection| collection.features)
        else {
            return ALERTS_UNAVAILABLE.to_string();
        };

        if features.is_empty() {
            return NO_ACTIVE_ALERTS.to_string();
        }

        render_alerts(&features)
    }
}
