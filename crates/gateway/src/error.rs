// crates/gateway/src/error.rs
//! Error types for gateway operations

use thiserror::Error;

/// Result type for gateway operations
pub type GatewayResult<T> = Result<T, GatewayError>;

/// Errors that can occur while talking to the catalog service
#[derive(Debug, Error)]
pub enum GatewayError {
    /// The request itself failed: connectivity, timeout, TLS
    #[error("HTTP request failed: {0}")]
    Http(#[from] reqwest::Error),

    /// The server answered with a non-success status code
    ///
    /// The error body text is preserved; the mediation layer matches
    /// server-supplied markers against it.
    #[error("HTTP {code}")]
    Status { code: u16, body: Option<String> },

    /// A success response carried a body that failed to decode
    #[error("Failed to decode response: {0}")]
    Decode(String),
}

impl GatewayError {
    /// Returns the HTTP status code if the server rejected the request
    pub fn status_code(&self) -> Option<u16> {
        match self {
            Self::Status { code, .. } => Some(*code),
            _ => None,
        }
    }

    /// Returns the raw error body, if the server sent one
    pub fn error_body(&self) -> Option<&str> {
        match self {
            Self::Status { body, .. } => body.as_deref(),
            _ => None,
        }
    }
}
