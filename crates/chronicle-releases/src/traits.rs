//! Release source traits

use crate::error::Result;

/// Trait for anything that can produce the body of a release
#[async_trait::async_trait]
pub trait ReleaseSource: Send + Sync {
    /// Get the source name
    fn name(&self) -> &str;

    /// Fetch the raw body of the release tagged `tag`.
    ///
    /// A missing release is reported as [`crate::ReleaseError::NotFound`];
    /// a release without a body yields an empty string.
    async fn fetch_body(&self, tag: &str) -> Result<String>;
}
