//! Release body parsing
//!
//! Two layers: [`SectionParser`] splits a generated release body into
//! titled sections of raw bullets, and [`parse_item`] turns one raw bullet
//! into a [`ChangeRecord`](crate::types::ChangeRecord).

mod item;
mod sections;

pub use item::{capitalize, parse_item, AUTHOR_MARKER, LINK_MARKER};
pub use sections::{parse_sections, SectionParser, DEFAULT_FIRST_CONTRIBUTION_MARKER};
