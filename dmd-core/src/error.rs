/// Error types for talking to the dashboard backend
use thiserror::Error;

/// Failure of a single backend fetch.
///
/// Every variant ends up as one generic banner in the UI; the detail is
/// only for the log.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum ApiError {
    /// The request never produced a response
    #[error("request failed: {0}")]
    Transport(String),

    /// The backend answered with a non-2xx status
    #[error("HTTP error! Status: {0}")]
    Status(u16),

    /// The body was not the JSON shape we expected
    #[error("failed to decode response: {0}")]
    Decode(String),

    /// No browser window to fetch from
    #[error("no window available")]
    NoWindow,
}

impl From<serde_json::Error> for ApiError {
    fn from(e: serde_json::Error) -> Self {
        ApiError::Decode(e.to_string())
    }
}

/// Type alias for Results using ApiError
pub type Result<T> = std::result::Result<T, ApiError>;
