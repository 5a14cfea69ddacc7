//! Chronicle Releases - Release body retrieval
//!
//! Provides the [`ReleaseSource`] trait with implementations for the
//! GitHub Releases API and for local files.
//!
//! ## Usage
//!
//! ```ignore
//! use chronicle_releases::{GitHubReleases, ReleaseSource};
//!
//! let source = GitHubReleases::new(&config.github)?;
//! let body = source.fetch_body("v1.2.0").await?;
//! ```

pub mod error;
pub mod file;
pub mod github;
pub mod traits;

pub use error::{ReleaseError, Result};
pub use file::FileSource;
pub use github::GitHubReleases;
pub use traits::ReleaseSource;
