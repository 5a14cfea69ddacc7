//! Release source error types

use thiserror::Error;

/// Release retrieval errors
#[derive(Debug, Error)]
pub enum ReleaseError {
    /// No release exists for the tag
    #[error("Release not found: {0}")]
    NotFound(String),

    /// Rate limited by the API
    #[error("Rate limited, retry after {retry_after:?} seconds")]
    RateLimited { retry_after: Option<u64> },

    /// API error from the release host
    #[error("API error: {status} - {message}")]
    ApiError { status: u16, message: String },

    /// Configuration error
    #[error("Configuration error: {0}")]
    ConfigurationError(String),

    /// IO error
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// HTTP error
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    /// JSON error
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

impl ReleaseError {
    /// Whether the release simply does not exist
    pub fn is_not_found(&self) -> bool {
        matches!(self, Self::NotFound(_))
    }
}

/// Result type for release sources
pub type Result<T> = std::result::Result<T, ReleaseError>;
