//! Error types for SlideKit.

use thiserror::Error;

/// Main error type for SlideKit operations.
#[derive(Error, Debug)]
pub enum SlideKitError {
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    Serialization(String),

    #[error("Invalid parameter: {0}")]
    InvalidParameter(String),

    #[error("Resource not found: {0}")]
    NotFound(String),

    #[error("Failed to fetch asset {src}: {reason}")]
    Asset { src: String, reason: String },

    #[error("Export error: {0}")]
    Export(String),
}

impl From<serde_json::Error> for SlideKitError {
    fn from(e: serde_json::Error) -> Self {
        Self::Serialization(e.to_string())
    }
}

/// Result type alias for SlideKit operations.
pub type Result<T> = std::result::Result<T, SlideKitError>;
