//! Section parser for generated release bodies

use chronicle_core::config::NotesConfig;
use tracing::{debug, instrument, trace};

use crate::types::{SectionMap, HEADING_MARKER};

/// Phrase GitHub uses for new-contributor notices
pub const DEFAULT_FIRST_CONTRIBUTION_MARKER: &str = "made their first contribution";

const BULLET_MARKERS: [&str; 2] = ["* ", "- "];

/// Splits a release body into level-3 sections of bullet items
#[derive(Debug, Clone)]
pub struct SectionParser {
    first_contribution_marker: String,
}

impl SectionParser {
    /// Create a parser with the default first-contribution marker
    pub fn new() -> Self {
        Self {
            first_contribution_marker: DEFAULT_FIRST_CONTRIBUTION_MARKER.to_string(),
        }
    }

    /// Create a parser from notes configuration
    pub fn from_config(config: &NotesConfig) -> Self {
        Self::new().with_first_contribution_marker(config.first_contribution_marker.clone())
    }

    /// Use a custom first-contribution marker
    pub fn with_first_contribution_marker(mut self, marker: impl Into<String>) -> Self {
        self.first_contribution_marker = marker.into();
        self
    }

    /// Parse a release body.
    ///
    /// Never fails: text without `### ` headings yields an empty map.
    #[instrument(skip(self, text), fields(text_len = text.len()))]
    pub fn parse(&self, text: &str) -> SectionMap {
        let mut sections = SectionMap::new();
        let mut current: Option<usize> = None;
        let mut dropped = 0usize;

        for line in text.lines() {
            let line = line.trim();
            if line.is_empty() {
                continue;
            }

            if let Some(title) = line.strip_prefix(HEADING_MARKER) {
                let title = title.trim();
                trace!(title, "section heading");
                current = Some(sections.open(title));
                continue;
            }

            // bullets before the first heading have nowhere to go
            let Some(index) = current else {
                continue;
            };

            let Some(item) = strip_bullet(line) else {
                continue;
            };

            if item.contains(self.first_contribution_marker.as_str()) {
                dropped += 1;
                continue;
            }

            sections.push_item(index, item);
        }

        debug!(
            section_count = sections.len(),
            dropped_notices = dropped,
            "release body parsed"
        );
        sections
    }
}

impl Default for SectionParser {
    fn default() -> Self {
        Self::new()
    }
}

/// Parse a release body with the default first-contribution marker
pub fn parse_sections(text: &str) -> SectionMap {
    SectionParser::new().parse(text)
}

fn strip_bullet(line: &str) -> Option<&str> {
    BULLET_MARKERS
        .iter()
        .find_map(|marker| line.strip_prefix(marker))
        .map(str::trim)
        .filter(|item| !item.is_empty())
}
