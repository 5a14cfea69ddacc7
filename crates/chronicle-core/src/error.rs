//! Error types for Chronicle

use std::path::PathBuf;
use thiserror::Error;

/// Result type alias using ChronicleError
pub type Result<T> = std::result::Result<T, ChronicleError>;

/// Main error type for Chronicle operations
#[derive(Debug, Error)]
pub enum ChronicleError {
    /// Configuration-related errors
    #[error(transparent)]
    Config(#[from] ConfigError),

    /// Release notes transformation errors
    #[error(transparent)]
    Notes(#[from] NotesError),

    /// Rendering errors
    #[error(transparent)]
    Render(#[from] RenderError),
}

/// Configuration-related errors
#[derive(Debug, Error)]
pub enum ConfigError {
    /// Configuration file not found
    #[error("Configuration file not found at {0}")]
    NotFound(PathBuf),

    /// Invalid configuration value
    #[error("Invalid configuration: {field} - {message}")]
    InvalidValue { field: String, message: String },

    /// YAML parsing error
    #[error("YAML parsing error: {0}")]
    YamlError(#[from] serde_yaml::Error),

    /// TOML parsing error
    #[error("TOML parsing error: {0}")]
    TomlError(#[from] toml::de::Error),

    /// IO error
    #[error("IO error reading config: {0}")]
    Io(#[from] std::io::Error),
}

/// Release notes transformation errors
#[derive(Debug, Error)]
pub enum NotesError {
    /// A bullet did not have the `<change> by @<author> in <url>` shape.
    ///
    /// Usually means the upstream generator changed its output format.
    #[error("Malformed item in section '{section}': '{item}' ({source})")]
    MalformedItem {
        section: String,
        item: String,
        #[source]
        source: ItemParseError,
    },
}

/// Why a single release note item could not be parsed
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ItemParseError {
    /// No ` by @` marker
    #[error("missing ' by @<author>' marker")]
    MissingAuthor,

    /// No ` in ` marker after the author
    #[error("missing ' in <url>' marker after the author")]
    MissingLink,

    /// Nothing before the author marker
    #[error("empty change description")]
    EmptyDescription,

    /// Author handle is empty or contains whitespace
    #[error("invalid author handle '{0}'")]
    InvalidAuthor(String),

    /// Trailing link is not an absolute URL
    #[error("invalid pull request URL '{url}': {reason}")]
    InvalidUrl { url: String, reason: String },

    /// Last path segment of the URL is not a number
    #[error("URL '{0}' does not end in a pull request number")]
    MissingPrNumber(String),
}

/// Rendering errors
#[derive(Debug, Error)]
pub enum RenderError {
    /// No renderer for the requested format
    #[error("Unsupported output format: {0}")]
    UnsupportedFormat(String),

    /// JSON serialization error
    #[error("JSON serialization error: {0}")]
    Json(#[from] serde_json::Error),
}
