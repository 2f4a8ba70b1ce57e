//! Typed views of the api.weather.gov JSON documents we read.
//!
//! Only the fields that get rendered are modelled; everything else in the
//! GeoJSON payloads is ignored by serde.

use serde::Deserialize;

// ============================================================================
// /points/{lat},{lon}
// ============================================================================

#[derive(Debug, Deserialize)]
pub struct PointsResponse {
    pub properties: PointProperties,
}

#[derive(Debug, Deserialize)]
pub struct PointProperties {
    /// Absolute URL of the gridpoint forecast for this location.
    pub forecast: String,
}

// ============================================================================
// /gridpoints/{office}/{x},{y}/forecast
// ============================================================================

#[derive(Debug, Deserialize)]
pub struct ForecastResponse {
    pub properties: ForecastProperties,
}

#[derive(Debug, Deserialize)]
pub struct ForecastProperties {
    pub periods: Vec<ForecastPeriod>,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ForecastPeriod {
    pub name: String,
    // Kept as a JSON number so integers render without a trailing ".0".
    pub temperature: serde_json::Number,
    pub temperature_unit: String,
    pub wind_speed: String,
    pub wind_direction: String,
    pub detailed_forecast: String,
}

// ============================================================================
// /points/{lat},{lon}/alerts
// ============================================================================

#[derive(Debug, Deserialize)]
pub struct AlertCollection {
    #[serde(default)]
    pub features: Option<Vec<AlertFeature>>,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct AlertFeature {
    #[serde(default)]
    pub properties: AlertProperties,
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AlertProperties {
    #[serde(default)]
    pub event: Option<String>,
    #[serde(default)]
    pub area_desc: Option<String>,
    #[serde(default)]
    pub severity: Option<String>,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default)]
    pub instruction: Option<String>,
}
