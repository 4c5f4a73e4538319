// crates/core/src/error.rs
//! Failure taxonomy for catalog operations
//!
//! Every mediation-layer operation returns an [`Outcome`]: exactly one of a
//! success payload or a [`CatalogError`]. Transport exceptions never cross
//! the mediation boundary; they are caught at the gateway-call site and
//! converted into the `Transport` variant.

use thiserror::Error;

/// Result type for catalog operations
pub type Outcome<T> = Result<T, CatalogError>;

/// Errors surfaced by the mediation layer
#[derive(Debug, Error)]
pub enum CatalogError {
    /// Entity absent from a successful-but-empty response
    #[error("{entity} not found")]
    NotFound { entity: String },

    /// Server answered with a non-success status code
    #[error("{operation} failed: {code}")]
    ServerRejected { operation: String, code: u16 },

    /// The call itself failed: timeout, connectivity, decode error
    #[error("{operation} failed: {message}")]
    Transport { operation: String, message: String },
}

impl CatalogError {
    /// Creates a `NotFound` error for the named entity
    pub fn not_found(entity: impl Into<String>) -> Self {
        Self::NotFound {
            entity: entity.into(),
        }
    }

    /// Creates a `ServerRejected` error for an operation and status code
    pub fn rejected(operation: impl Into<String>, code: u16) -> Self {
        Self::ServerRejected {
            operation: operation.into(),
            code,
        }
    }

    /// Creates a `Transport` error for an operation
    pub fn transport(operation: impl Into<String>, message: impl Into<String>) -> Self {
        Self::Transport {
            operation: operation.into(),
            message: message.into(),
        }
    }

    /// Returns true if the server explicitly rejected the request (non-2xx)
    pub fn is_rejection(&self) -> bool {
        matches!(self, Self::ServerRejected { .. })
    }

    /// Returns the HTTP status code, if the server produced one
    pub fn status_code(&self) -> Option<u16> {
        match self {
            Self::ServerRejected { code, .. } => Some(*code),
            _ => None,
        }
    }

    /// Returns a message suitable for direct display in the UI
    ///
    /// Screens show these verbatim next to a retry action, so they stay
    /// free of wire-level detail.
    pub fn user_message(&self) -> String {
        match self {
            Self::NotFound { entity } => format!("{} was not found.", entity),
            Self::ServerRejected { operation, code } => {
                format!("{} failed (server error {}).", operation, code)
            }
            Self::Transport { .. } => {
                "Cannot reach the server. Please check your connection.".to_string()
            }
        }
    }
}
