use reqwest::StatusCode;
use thiserror::Error;

/// Failures talking to the NWS API.
///
/// These never leave the crate as tool errors; [`crate::NwsClient::fetch_json`]
/// logs them and turns them into `None`.
#[derive(Debug, Error)]
pub enum NwsError {
    #[error("HTTP request failed: {0}")]
    Request(#[from] reqwest::Error),

    #[error("NWS API returned status {status} for {url}")]
    Status { status: StatusCode, url: String },

    #[error("Failed to parse NWS response: {0}")]
    Decode(#[from] serde_json::Error),
}
