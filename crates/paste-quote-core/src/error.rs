//! Error types for paste-quote-core

use thiserror::Error;

/// Result type alias for core operations
pub type Result<T> = std::result::Result<T, CoreError>;

/// Errors raised outside the parsing and matching pipeline itself.
///
/// Parsing, title normalization and matching never fail; only
/// configuration checks and bibliography decoding produce errors.
#[derive(Error, Debug)]
pub enum CoreError {
    /// A matching parameter is out of range
    #[error("Invalid config: {0}")]
    InvalidConfig(String),

    /// A CSL-JSON bibliography could not be decoded
    #[error("Bibliography decode error: {0}")]
    Json(#[from] serde_json::Error),
}
