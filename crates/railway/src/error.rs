//! Error types for the Railway CLI

use std::path::PathBuf;
use thiserror::Error;

/// Result type for CLI operations
pub type Result<T> = std::result::Result<T, CliError>;

/// Errors raised while preparing a request for validation
#[derive(Debug, Error)]
pub enum CliError {
    /// IO error
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// JSON parsing error
    #[error("JSON parse error: {0}")]
    Json(#[from] serde_json::Error),

    /// TOML parsing error
    #[error("TOML parse error: {0}")]
    Toml(#[from] toml::de::Error),

    /// Request file with an extension we cannot read
    #[error("Unsupported request format: {path} (expected .toml or .json)")]
    UnsupportedFormat {
        /// Path of the rejected file
        path: PathBuf,
    },
}
