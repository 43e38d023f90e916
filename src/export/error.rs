//! Load error types
//!
//! Everything that can go wrong while turning external bytes into a
//! [`Document`](super::Document). The messages are shown to the user as-is,
//! so each variant names the structural reason the export was rejected.

use thiserror::Error;

/// Errors raised while loading an export
#[derive(Debug, Error)]
pub enum LoadError {
    /// The bytes are not valid JSON
    #[error("Invalid JSON: {0}")]
    Json(#[from] serde_json::Error),

    /// Valid JSON, but not shaped like an export
    #[error("Invalid Bitwarden export format: {0}")]
    InvalidFormat(String),

    /// The export file could not be read
    #[error("Failed to read export: {0}")]
    Io(#[from] std::io::Error),
}

#[cfg(test)]
#[path = "error_tests.rs"]
mod error_tests;
