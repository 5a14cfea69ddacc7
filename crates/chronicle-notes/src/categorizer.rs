//! Section categorization

use chronicle_core::config::{GroupPlacement, NotesConfig};
use chronicle_core::NotesError;
use tracing::{debug, info, instrument};

use crate::grouping::partition;
use crate::parser::parse_item;
use crate::types::{Category, ChangeRecord, Section, SectionMap};

/// Turns parsed sections into renderable categories
#[derive(Debug, Clone)]
pub struct Categorizer {
    config: NotesConfig,
}

impl Categorizer {
    /// Create a categorizer with the given rules
    pub fn new(config: NotesConfig) -> Self {
        Self { config }
    }

    /// Rules in use
    pub fn config(&self) -> &NotesConfig {
        &self.config
    }

    /// Categorize sections in document order.
    ///
    /// Excluded sections are dropped whole. Any item that does not parse
    /// aborts the run with [`NotesError::MalformedItem`].
    #[instrument(skip(self, sections), fields(section_count = sections.len()))]
    pub fn categorize(&self, sections: &SectionMap) -> Result<Vec<Category>, NotesError> {
        let mut categories = Vec::new();

        for section in sections {
            if self.config.is_excluded(&section.title) {
                debug!(title = %section.title, "section excluded");
                continue;
            }

            let records = self.extract(section)?;
            let entries = if self.config.is_dependencies_section(&section.title) {
                self.regroup(records)
            } else {
                records.iter().map(ChangeRecord::entry).collect()
            };

            debug!(title = %section.title, entries = entries.len(), "section categorized");
            categories.push(Category::new(section.title.clone(), entries));
        }

        info!(category_count = categories.len(), "release notes categorized");
        Ok(categories)
    }

    /// Parse every item of a section, skipping contribution notices
    pub fn extract(&self, section: &Section) -> Result<Vec<ChangeRecord>, NotesError> {
        section
            .items
            .iter()
            .filter(|item| !item.contains(self.config.first_contribution_marker.as_str()))
            .map(|item| {
                parse_item(item).map_err(|source| NotesError::MalformedItem {
                    section: section.title.clone(),
                    item: item.clone(),
                    source,
                })
            })
            .collect()
    }

    /// Collapse dependency bumps and order groups against ordinary entries
    fn regroup(&self, records: Vec<ChangeRecord>) -> Vec<String> {
        let partition = partition(records, &self.config.dependency_groups);
        let grouped = partition.group_entries();
        let ordinary = partition.ordinary_entries();

        match self.config.group_placement {
            GroupPlacement::First => grouped.into_iter().chain(ordinary).collect(),
            GroupPlacement::Last => ordinary.into_iter().chain(grouped).collect(),
        }
    }
}

impl Default for Categorizer {
    fn default() -> Self {
        Self::new(NotesConfig::default())
    }
}
