//! Error taxonomy for hub API calls.

use thiserror::Error;

/// Convenience alias for hub API results.
pub type Result<T> = std::result::Result<T, ApiError>;

/// Everything that can go wrong talking to the hub backend.
#[derive(Debug, Error)]
pub enum ApiError {
    /// Transport-level failure, including requests aborted mid-flight.
    #[error("Network error: {0}")]
    Network(#[from] reqwest::Error),

    /// Backend answered with a non-success status.
    #[error("Request failed: {status}")]
    Status { status: u16 },

    /// Body was not the expected JSON array of resources.
    #[error("Malformed response: {0}")]
    Decode(#[from] serde_json::Error),

    /// The configured base address produced an unparseable request URL.
    #[error("Invalid request URL: {0}")]
    Url(#[from] url::ParseError),
}
