//! Error types for the Grafana client.

use thiserror::Error;

/// Result type alias for client operations.
pub type Result<T> = std::result::Result<T, ClientError>;

/// Errors that can occur while talking to the Grafana API.
#[derive(Error, Debug)]
pub enum ClientError {
    /// HTTP request error (connection refused, DNS failure, timeout).
    #[error("HTTP error: {0}")]
    HttpError(#[from] reqwest::Error),

    /// API error response from Grafana.
    #[error("API error ({status}) at {url}: {message}")]
    ApiError {
        status: u16,
        url: String,
        message: String,
    },

    /// A 2xx response whose body did not match the expected shape.
    #[error("Invalid response format: {0}")]
    InvalidResponse(String),
}

impl ClientError {
    /// Check if this error indicates an authentication failure.
    pub fn is_auth_error(&self) -> bool {
        matches!(self, Self::ApiError { status: 401 | 403, .. })
    }
}
