//! Error types for rendering.

use thiserror::Error;

/// Errors that can occur while rendering differences.
#[derive(Debug, Error)]
pub enum RenderError {
    /// Writing to the output failed.
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// JSON serialization failed.
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}
