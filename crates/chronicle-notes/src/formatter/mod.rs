//! Release notes formatters

mod json;
mod markdown;
mod registry;

pub use json::JsonFormatter;
pub use markdown::MarkdownFormatter;
pub use registry::FormatterRegistry;

use chronicle_core::RenderError;

use crate::types::ReleaseNotes;

/// Trait for release notes formatters
pub trait NotesFormatter: Send + Sync {
    /// Format release notes to string
    fn format(&self, notes: &ReleaseNotes) -> Result<String, RenderError>;

    /// Format name as used in configuration (e.g. "markdown")
    fn name(&self) -> &'static str;

    /// Get the file extension for this format
    fn extension(&self) -> &'static str;
}
