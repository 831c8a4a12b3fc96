//! Error types for arcweight-core.
//!
//! Errors only arise at the persistence boundary. Graph mutations signal
//! rejected operations through their `bool` return value instead — a
//! duplicate vertex or a dangling edge is a no-op, not an error.

use thiserror::Error;

/// Persistence error types.
#[derive(Error, Debug)]
pub enum Error {
    /// IO error.
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// JSON serialization/deserialization error.
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// Malformed position string in a graph document.
    #[error("invalid position '{0}': expected three comma-separated coordinates")]
    Position(String),
}

/// Result type alias for persistence operations.
pub type Result<T> = std::result::Result<T, Error>;
