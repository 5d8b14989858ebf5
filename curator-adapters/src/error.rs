//! Error types for collectors.

use thiserror::Error;

/// Errors that can occur when collecting activity counts from a platform.
#[derive(Debug, Error)]
pub enum CollectError {
    /// HTTP request failed.
    #[error("HTTP request failed: {0}")]
    Http(String),

    /// Failed to parse response.
    #[error("Failed to parse response: {0}")]
    Parse(String),

    /// Authentication failed.
    #[error("Authentication failed: {0}")]
    Auth(String),

    /// Connection failed.
    #[error("Connection failed: {0}")]
    Connection(String),

    /// Timeout waiting for response.
    #[error("Request timed out")]
    Timeout,
}

#[cfg(any(feature = "slack", feature = "discord"))]
impl From<reqwest::Error> for CollectError {
    fn from(err: reqwest::Error) -> Self {
        if err.is_timeout() {
            CollectError::Timeout
        } else if err.is_connect() {
            CollectError::Connection(err.to_string())
        } else {
            CollectError::Http(err.to_string())
        }
    }
}
