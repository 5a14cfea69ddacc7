//! Release notes types

use std::fmt::Write;

use chronicle_core::ReleaseMetadata;
use serde::{Deserialize, Serialize};

use crate::parser::capitalize;

/// Marker opening a section heading
pub const HEADING_MARKER: &str = "### ";

/// A titled block of raw bullet items
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Section {
    /// Section title (heading text without the marker)
    pub title: String,
    /// Raw items with the bullet marker stripped, in document order
    pub items: Vec<String>,
}

impl Section {
    /// Create a new section
    pub fn new(title: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            items: Vec::new(),
        }
    }

    /// Add an item to the section
    pub fn add_item(&mut self, item: impl Into<String>) {
        self.items.push(item.into());
    }

    /// Check if section is empty
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }
}

/// Sections keyed by title, in first-seen order.
///
/// Titles are unique. Opening a title that already exists continues that
/// section in its original position.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct SectionMap {
    sections: Vec<Section>,
}

impl SectionMap {
    /// Create an empty map
    pub fn new() -> Self {
        Self::default()
    }

    /// Open a section, returning its index
    pub fn open(&mut self, title: &str) -> usize {
        if let Some(index) = self.sections.iter().position(|s| s.title == title) {
            return index;
        }
        self.sections.push(Section::new(title));
        self.sections.len() - 1
    }

    /// Append an item to the section at `index`
    pub fn push_item(&mut self, index: usize, item: impl Into<String>) {
        if let Some(section) = self.sections.get_mut(index) {
            section.add_item(item);
        }
    }

    /// Look up a section by title
    pub fn get(&self, title: &str) -> Option<&Section> {
        self.sections.iter().find(|s| s.title == title)
    }

    /// Iterate sections in order
    pub fn iter(&self) -> impl Iterator<Item = &Section> {
        self.sections.iter()
    }

    /// Section titles in order
    pub fn titles(&self) -> Vec<&str> {
        self.sections.iter().map(|s| s.title.as_str()).collect()
    }

    /// Number of sections
    pub fn len(&self) -> usize {
        self.sections.len()
    }

    /// Check if no section was found
    pub fn is_empty(&self) -> bool {
        self.sections.is_empty()
    }

    /// Serialize back to headings and `* ` bullets
    pub fn to_markdown(&self) -> String {
        let mut output = String::new();
        for section in &self.sections {
            let _ = writeln!(output, "{}{}", HEADING_MARKER, section.title);
            for item in &section.items {
                let _ = writeln!(output, "* {}", item);
            }
            output.push('\n');
        }
        output
    }
}

impl<'a> IntoIterator for &'a SectionMap {
    type Item = &'a Section;
    type IntoIter = std::slice::Iter<'a, Section>;

    fn into_iter(self) -> Self::IntoIter {
        self.sections.iter()
    }
}

/// A change extracted from one release note item
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ChangeRecord {
    /// Description as written in the release body, trimmed
    pub description: String,
    /// Description with its first character capitalized
    pub title: String,
    /// Pull request number (digits only)
    pub pr_number: String,
    /// Pull request URL, ending in `/<pr_number>`
    pub pr_url: String,
}

impl ChangeRecord {
    /// Create a record, deriving the title from the description
    pub fn new(
        description: impl Into<String>,
        pr_number: impl Into<String>,
        pr_url: impl Into<String>,
    ) -> Self {
        let description = description.into();
        Self {
            title: capitalize(&description),
            description,
            pr_number: pr_number.into(),
            pr_url: pr_url.into(),
        }
    }

    /// Markdown link to the pull request, e.g. `[42](https://x/pull/42)`
    pub fn reference(&self) -> String {
        format!("[{}]({})", self.pr_number, self.pr_url)
    }

    /// Formatted entry, e.g. `[42](https://x/pull/42) Fix crash`
    pub fn entry(&self) -> String {
        format!("{} {}", self.reference(), self.title)
    }
}

/// A rendered category: title plus formatted entries
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Category {
    /// Category title, taken from the section heading
    pub title: String,
    /// Formatted entries in output order
    pub entries: Vec<String>,
}

impl Category {
    /// Create a new category
    pub fn new(title: impl Into<String>, entries: Vec<String>) -> Self {
        Self {
            title: title.into(),
            entries,
        }
    }

    /// Check if category has no entries
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

/// Everything the renderer needs for one release
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ReleaseNotes {
    /// Version, date and platform metadata
    #[serde(flatten)]
    pub metadata: ReleaseMetadata,
    /// Categories in document order
    pub categories: Vec<Category>,
}

impl ReleaseNotes {
    /// Create release notes
    pub fn new(metadata: ReleaseMetadata, categories: Vec<Category>) -> Self {
        Self {
            metadata,
            categories,
        }
    }

    /// Look up a category by title
    pub fn category(&self, title: &str) -> Option<&Category> {
        self.categories.iter().find(|c| c.title == title)
    }

    /// Total number of entries across categories
    pub fn entry_count(&self) -> usize {
        self.categories.iter().map(|c| c.entries.len()).sum()
    }

    /// Check if there is nothing to publish
    pub fn is_empty(&self) -> bool {
        self.categories.iter().all(Category::is_empty)
    }
}
