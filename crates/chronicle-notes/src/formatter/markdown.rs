//! Markdown release notes formatter

use chronicle_core::RenderError;
use tracing::{debug, instrument};

use super::NotesFormatter;
use crate::types::ReleaseNotes;

/// Markdown release notes formatter
pub struct MarkdownFormatter {
    /// Line emitted above the release heading
    pub header: Option<String>,
}

impl MarkdownFormatter {
    /// Create a new markdown formatter
    pub fn new() -> Self {
        Self { header: None }
    }

    /// Set a header line
    pub fn with_header(mut self, header: impl Into<String>) -> Self {
        self.header = Some(header.into());
        self
    }
}

impl Default for MarkdownFormatter {
    fn default() -> Self {
        Self::new()
    }
}

impl NotesFormatter for MarkdownFormatter {
    #[instrument(skip(self, notes), fields(version = %notes.metadata.version, category_count = notes.categories.len()))]
    fn format(&self, notes: &ReleaseNotes) -> Result<String, RenderError> {
        let mut output = String::new();
        let metadata = &notes.metadata;

        if let Some(header) = &self.header {
            output.push_str(&format!("{}\n\n", header));
        }

        output.push_str(&format!("## {} ({})\n\n", metadata.version, metadata.date));

        let mut has_details = false;
        if let Some(chart) = &metadata.helm_chart_version {
            output.push_str(&format!("Helm chart version: {}\n", chart));
            has_details = true;
        }
        if let Some(platforms) = &metadata.supported_platforms {
            output.push_str(&format!("Supported platform versions: {}\n", platforms));
            has_details = true;
        }
        if has_details {
            output.push('\n');
        }

        for category in &notes.categories {
            if category.is_empty() {
                continue;
            }

            output.push_str(&format!("### {}\n\n", category.title));
            for entry in &category.entries {
                output.push_str(&format!("- {}\n", entry));
            }
            output.push('\n');
        }

        let output = format!("{}\n", output.trim_end());
        debug!(output_len = output.len(), "markdown release notes formatted");
        Ok(output)
    }

    fn name(&self) -> &'static str {
        "markdown"
    }

    fn extension(&self) -> &'static str {
        "md"
    }
}
