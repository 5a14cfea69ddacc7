//! Local file release source

use std::path::{Path, PathBuf};

use tracing::{debug, instrument};

use crate::error::{ReleaseError, Result};
use crate::traits::ReleaseSource;

/// Reads a release body from a file on disk; the tag is ignored
#[derive(Debug, Clone)]
pub struct FileSource {
    path: PathBuf,
}

impl FileSource {
    /// Create a source backed by `path`
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    /// Path being read
    pub fn path(&self) -> &Path {
        &self.path
    }
}

#[async_trait::async_trait]
impl ReleaseSource for FileSource {
    fn name(&self) -> &str {
        "file"
    }

    #[instrument(skip(self), fields(path = %self.path.display()))]
    async fn fetch_body(&self, _tag: &str) -> Result<String> {
        match tokio::fs::read_to_string(&self.path).await {
            Ok(body) => {
                debug!(body_len = body.len(), "release body read from file");
                Ok(body)
            }
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => {
                Err(ReleaseError::NotFound(self.path.display().to_string()))
            }
            Err(e) => Err(e.into()),
        }
    }
}
