//! JSON release notes formatter
//!
//! Emits the structured notes for an external template renderer.

use chronicle_core::RenderError;
use tracing::{debug, instrument};

use super::NotesFormatter;
use crate::types::ReleaseNotes;

/// JSON release notes formatter
pub struct JsonFormatter {
    /// Pretty-print the output
    pub pretty: bool,
}

impl JsonFormatter {
    /// Create a pretty-printing JSON formatter
    pub fn new() -> Self {
        Self { pretty: true }
    }

    /// Emit compact single-line JSON
    pub fn compact(mut self) -> Self {
        self.pretty = false;
        self
    }
}

impl Default for JsonFormatter {
    fn default() -> Self {
        Self::new()
    }
}

impl NotesFormatter for JsonFormatter {
    #[instrument(skip(self, notes), fields(version = %notes.metadata.version))]
    fn format(&self, notes: &ReleaseNotes) -> Result<String, RenderError> {
        let mut output = if self.pretty {
            serde_json::to_string_pretty(notes)?
        } else {
            serde_json::to_string(notes)?
        };
        output.push('\n');
        debug!(output_len = output.len(), "json release notes formatted");
        Ok(output)
    }

    fn name(&self) -> &'static str {
        "json"
    }

    fn extension(&self) -> &'static str {
        "json"
    }
}
