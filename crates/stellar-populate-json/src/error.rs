//! Error types for the JSON populator.

use thiserror::Error;

/// Errors that can occur during JSON population.
#[derive(Error, Debug)]
pub enum JsonPopulatorError {
    /// IO error.
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Serialization error.
    #[error("JSON serialization error: {0}")]
    Json(#[from] serde_json::Error),
}
