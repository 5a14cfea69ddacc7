//! Chronicle Core - Core library for release notes curation
//!
//! This crate provides the foundational types, error handling and
//! configuration shared by the Chronicle crates.

pub mod config;
pub mod error;
pub mod types;

pub use error::{ChronicleError, ConfigError, ItemParseError, NotesError, RenderError, Result};
pub use types::ReleaseMetadata;
