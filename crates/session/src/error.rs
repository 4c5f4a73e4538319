// crates/session/src/error.rs
//! Error types for session persistence

use std::path::PathBuf;
use thiserror::Error;

/// Result type for session-store operations
pub type SessionResult<T> = Result<T, SessionError>;

/// Errors that can occur while persisting the session
#[derive(Debug, Error)]
pub enum SessionError {
    /// Failed to read the session file
    #[error("Failed to read session file at {path}: {source}")]
    ReadError {
        path: PathBuf,
        source: std::io::Error,
    },

    /// Failed to write the session file
    #[error("Failed to write session file at {path}: {source}")]
    WriteError {
        path: PathBuf,
        source: std::io::Error,
    },

    /// Session file exists but does not parse
    #[error("Failed to parse session file at {path}: {source}")]
    ParseError {
        path: PathBuf,
        source: toml::de::Error,
    },

    /// Failed to serialize the session record
    #[error("Failed to serialize session: {0}")]
    SerializeError(#[from] toml::ser::Error),

    /// Session directory path could not be determined
    #[error("Could not determine session directory: {reason}")]
    PathResolutionError { reason: String },

    /// Generic I/O error
    #[error("I/O error: {0}")]
    IoError(#[from] std::io::Error),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_read_error_display() {
        let err = SessionError::ReadError {
            path: PathBuf::from("/data/auth.toml"),
            source: std::io::Error::new(std::io::ErrorKind::PermissionDenied, "denied"),
        };
        assert!(err.to_string().contains("/data/auth.toml"));
    }

    #[test]
    fn test_path_resolution_display() {
        let err = SessionError::PathResolutionError {
            reason: "no home directory".to_string(),
        };
        assert!(err.to_string().contains("no home directory"));
    }
}
