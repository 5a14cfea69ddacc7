//! Formatter registry

use std::sync::Arc;

use super::{JsonFormatter, MarkdownFormatter, NotesFormatter};

/// Registry of available release notes formatters
pub struct FormatterRegistry {
    formatters: Vec<Arc<dyn NotesFormatter>>,
}

impl FormatterRegistry {
    /// Create a new registry with all built-in formatters
    pub fn new() -> Self {
        Self::with_markdown_header(None)
    }

    /// Create a registry whose markdown formatter emits a header line
    pub fn with_markdown_header(header: Option<String>) -> Self {
        let markdown = match header {
            Some(header) => MarkdownFormatter::new().with_header(header),
            None => MarkdownFormatter::new(),
        };
        Self {
            formatters: vec![Arc::new(markdown), Arc::new(JsonFormatter::new())],
        }
    }

    /// Get formatter by name or file extension
    pub fn get(&self, format: &str) -> Option<Arc<dyn NotesFormatter>> {
        self.formatters
            .iter()
            .find(|f| f.name() == format || f.extension() == format)
            .cloned()
    }

    /// Get all supported format names
    pub fn names(&self) -> Vec<&'static str> {
        self.formatters.iter().map(|f| f.name()).collect()
    }
}

impl Default for FormatterRegistry {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_registry_creation() {
        let registry = FormatterRegistry::new();
        assert_eq!(registry.formatters.len(), 2);
    }

    #[test]
    fn test_get_by_name_or_extension() {
        let registry = FormatterRegistry::new();
        assert_eq!(registry.get("markdown").unwrap().extension(), "md");
        assert_eq!(registry.get("md").unwrap().name(), "markdown");
        assert_eq!(registry.get("json").unwrap().name(), "json");
        assert!(registry.get("html").is_none());
    }

    #[test]
    fn test_markdown_header() {
        use crate::types::ReleaseNotes;
        use chronicle_core::ReleaseMetadata;

        let registry = FormatterRegistry::with_markdown_header(Some("# Changelog".to_string()));
        let notes = ReleaseNotes::new(ReleaseMetadata::new("1.0.0"), Vec::new());
        let output = registry.get("markdown").unwrap().format(&notes).unwrap();

        assert!(output.starts_with("# Changelog\n"));
    }

    #[test]
    fn test_names() {
        let registry = FormatterRegistry::new();
        assert_eq!(registry.names(), vec!["markdown", "json"]);
    }
}
