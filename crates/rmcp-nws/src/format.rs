use crate::model::{AlertFeature, ForecastPeriod};

/// Only the next few periods are useful to a caller; the rest are dropped.
pub const MAX_FORECAST_PERIODS: usize = 5;

pub const FORECAST_SEPARATOR: &str = "\n---\n";
pub const ALERT_SEPARATOR: &str = "\n\n";

pub fn render_period(period: &ForecastPeriod) -> String {
    format!(
        "{}:\n\
         Temperature: {}°{}\n\
         Wind: {} {}\n\
         Forecast: {}",
        period.name,
        period.temperature,
        period.temperature_unit,
        period.wind_speed,
        period.wind_direction,
        period.detailed_forecast
    )
}

pub fn render_forecast(periods: &[ForecastPeriod]) -> String {
    periods
        .iter()
        .take(MAX_FORECAST_PERIODS)
        .map(render_period)
        .collect::<Vec<_>>()
        .join(FORECAST_SEPARATOR)
}

pub fn render_alert(feature: &AlertFeature) -> String {
    let props = &feature.properties;
    format!(
        "Event: {}\n\
         Area: {}\n\
         Severity: {}\n\
         Description: {}\n\
         Instructions: {}",
        props.event.as_deref().unwrap_or("Unknown"),
        props.area_desc.as_deref().unwrap_or("Unknown"),
        props.severity.as_deref().unwrap_or("Unknown"),
        props.description.as_deref().unwrap_or("No description available"),
        props
            .instruction
            .as_deref()
            .unwrap_or("No specific instructions provided"),
    )
}

pub fn render_alerts(features: &[AlertFeature]) -> String {
    features
        .iter()
        .map(render_alert)
        .collect::<Vec<_>>()
        .join(ALERT_SEPARATOR)
}
