//! Chronicle Notes - Release notes curation
//!
//! This crate parses generated release bodies into sections, extracts
//! pull request references, collapses dependency bumps and formats the
//! result for publication.

pub mod categorizer;
pub mod formatter;
pub mod generator;
pub mod grouping;
pub mod parser;
pub mod types;

pub use categorizer::Categorizer;
pub use formatter::{FormatterRegistry, JsonFormatter, MarkdownFormatter, NotesFormatter};
pub use generator::NotesGenerator;
pub use parser::{capitalize, parse_item, parse_sections, SectionParser};
pub use types::{Category, ChangeRecord, ReleaseNotes, Section, SectionMap};
