//! Snapshot source backed by a saved JSON document.

use std::path::{Path, PathBuf};

use async_trait::async_trait;
use tracing::info;

use crate::domain::snapshot::Snapshot;
use crate::error::Result;
use crate::port::SnapshotSource;

/// Reads a previously saved bazaar response from disk.
#[derive(Debug, Clone)]
pub struct FileSnapshotSource {
    path: PathBuf,
}

impl FileSnapshotSource {
    #[must_use]
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    #[must_use]
    pub fn path(&self) -> &Path {
        &self.path
    }
}

#[async_trait]
impl SnapshotSource for FileSnapshotSource {
    async fn fetch_snapshot(&self) -> Result<Snapshot> {
        info!(path = %self.path.display(), "Reading bazaar snapshot");
        let bytes = tokio::fs::read(&self.path).await?;
        Snapshot::from_slice(&bytes)
    }

    fn source_name(&self) -> &'static str {
        "file"
    }
}
