//! Release notes generation

use std::sync::Arc;

use chronicle_core::config::NotesConfig;
use chronicle_core::{NotesError, ReleaseMetadata};
use tracing::{info, instrument};

use crate::categorizer::Categorizer;
use crate::formatter::{MarkdownFormatter, NotesFormatter};
use crate::parser::SectionParser;
use crate::types::ReleaseNotes;

/// Release notes generator: parse, categorize, format
pub struct NotesGenerator {
    parser: SectionParser,
    categorizer: Categorizer,
    formatter: Arc<dyn NotesFormatter>,
}

impl NotesGenerator {
    /// Create a new generator with the markdown formatter
    pub fn new(config: NotesConfig) -> Self {
        Self {
            parser: SectionParser::from_config(&config),
            categorizer: Categorizer::new(config),
            formatter: Arc::new(MarkdownFormatter::new()),
        }
    }

    /// Use a custom formatter
    pub fn with_formatter<F: NotesFormatter + 'static>(mut self, formatter: F) -> Self {
        self.formatter = Arc::new(formatter);
        self
    }

    /// Use a shared formatter (e.g. one picked from the registry)
    pub fn with_shared_formatter(mut self, formatter: Arc<dyn NotesFormatter>) -> Self {
        self.formatter = formatter;
        self
    }

    /// Format already generated notes
    pub fn format(&self, notes: &ReleaseNotes) -> chronicle_core::Result<String> {
        Ok(self.formatter.format(notes)?)
    }

    /// Generate structured release notes from a release body
    #[instrument(skip(self, metadata, body), fields(version = %metadata.version, body_len = body.len()))]
    pub fn generate(
        &self,
        metadata: ReleaseMetadata,
        body: &str,
    ) -> Result<ReleaseNotes, NotesError> {
        let sections = self.parser.parse(body);
        let categories = self.categorizer.categorize(&sections)?;
        let notes = ReleaseNotes::new(metadata, categories);

        info!(
            categories = notes.categories.len(),
            entries = notes.entry_count(),
            "release notes generated"
        );
        Ok(notes)
    }

    /// Generate and format in one step
    pub fn generate_formatted(
        &self,
        metadata: ReleaseMetadata,
        body: &str,
    ) -> chronicle_core::Result<String> {
        let notes = self.generate(metadata, body)?;
        self.format(&notes)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::formatter::JsonFormatter;

    const BODY: &str = "\
## What's Changed
### 🐛 Bug Fixes
* fix reconcile loop by @alice in https://github.com/acme/op/pull/42
### 📝 Documentation
* Update README by @bob in https://github.com/acme/op/pull/43
### ⬆️ Dependencies
* Bump the go group with 2 updates by @dependabot in https://github.com/acme/op/pull/44
* Bump the go group with 5 updates by @dependabot in https://github.com/acme/op/pull/45

## New Contributors
* @carol made their first contribution in https://github.com/acme/op/pull/46
";

    #[test]
    fn test_generate() {
        let generator = NotesGenerator::new(NotesConfig::default());
        let notes = generator.generate(ReleaseMetadata::new("1.4.0"), BODY).unwrap();

        assert_eq!(notes.metadata.version, "1.4.0");
        assert_eq!(notes.categories.len(), 2);
        assert_eq!(
            notes.category("🐛 Bug Fixes").unwrap().entries,
            vec!["[42](https://github.com/acme/op/pull/42) Fix reconcile loop"]
        );
        assert_eq!(
            notes.category("⬆️ Dependencies").unwrap().entries,
            vec!["[44](https://github.com/acme/op/pull/44) & [45](https://github.com/acme/op/pull/45) Bump Go dependencies"]
        );
        assert!(notes.category("📝 Documentation").is_none());
    }

    #[test]
    fn test_generate_formatted_markdown() {
        let generator = NotesGenerator::new(NotesConfig::default());
        let output = generator
            .generate_formatted(ReleaseMetadata::new("1.4.0"), BODY)
            .unwrap();

        assert!(output.contains("## 1.4.0"));
        assert!(output.contains("### 🐛 Bug Fixes"));
        assert!(output.contains("- [42](https://github.com/acme/op/pull/42) Fix reconcile loop"));
        assert!(!output.contains("README"));
    }

    #[test]
    fn test_generate_formatted_json() {
        let generator = NotesGenerator::new(NotesConfig::default()).with_formatter(JsonFormatter::new());
        let output = generator
            .generate_formatted(ReleaseMetadata::new("1.4.0"), BODY)
            .unwrap();

        let value: serde_json::Value = serde_json::from_str(&output).unwrap();
        assert_eq!(value["version"], "1.4.0");
        assert_eq!(value["categories"][0]["title"], "🐛 Bug Fixes");
    }

    #[test]
    fn test_generate_propagates_malformed_items() {
        let generator = NotesGenerator::new(NotesConfig::default());
        let result = generator.generate(
            ReleaseMetadata::new("1.4.0"),
            "### Features\n* a new thing without attribution\n",
        );

        assert!(matches!(result, Err(NotesError::MalformedItem { .. })));
    }

    #[test]
    fn test_generate_without_sections() {
        let generator = NotesGenerator::new(NotesConfig::default());
        let notes = generator
            .generate(ReleaseMetadata::new("1.4.0"), "No changes.")
            .unwrap();

        assert!(notes.is_empty());
        assert!(notes.categories.is_empty());
    }
}
