//! Error handling module for the gxlt CLI.
//!
//! This module provides custom error types using `thiserror` for structured
//! error handling throughout the application.

use thiserror::Error;

/// Main error type for the gxlt CLI application.
#[derive(Error, Debug)]
pub enum GxltError {
    /// Error when the configuration cannot be found, read or parsed.
    #[error("Configuration error: {0}")]
    Config(String),

    /// Error when IO operations fail.
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Error when JSON serialization fails.
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

/// Result type alias using GxltError.
pub type Result<T> = std::result::Result<T, GxltError>;
