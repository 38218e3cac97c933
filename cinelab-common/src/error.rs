//! Common error types for Cinelab

use thiserror::Error;

/// Common result type for Cinelab operations
pub type Result<T> = std::result::Result<T, Error>;

/// Common error types across Cinelab services
#[derive(Error, Debug)]
pub enum Error {
    /// I/O operation error (wraps std::io::Error)
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// JSON serialization or deserialization error
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// Configuration loading or validation error
    #[error("Configuration error: {0}")]
    Config(String),

    /// HTTP server errors
    #[error("HTTP server error: {0}")]
    Http(String),

    /// Internal server error
    #[error("Internal error: {0}")]
    Internal(String),
}
