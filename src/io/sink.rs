use std::path::{Path, PathBuf};

use async_trait::async_trait;
use tracing::info;

use super::error::ExportError;

/// Destination for a rendered export document
#[async_trait]
pub trait FileSink: Send + Sync {
    /// Create or overwrite `name` with `contents`, returning the final path
    async fn write(&self, name: &str, contents: &str) -> Result<PathBuf, ExportError>;
}

/// Viewer hand-off after a successful write
#[async_trait]
pub trait FileOpener: Send + Sync {
    /// Ask the platform to open `path` with an application registered for
    /// `mime`; fails when no viewer is available.
    async fn open(&self, path: &Path, mime: &str) -> Result<(), ExportError>;
}

/// Writes export files into a base directory via tokio::fs
pub struct LocalFileSink {
    base_dir: PathBuf,
}

impl LocalFileSink {
    pub fn new(base_dir: impl Into<PathBuf>) -> Self {
        Self {
            base_dir: base_dir.into(),
        }
    }
}

#[async_trait]
impl FileSink for LocalFileSink {
    async fn write(&self, name: &str, contents: &str) -> Result<PathBuf, ExportError> {
        let path = self.base_dir.join(name);
        tokio::fs::write(&path, contents)
            .await
            .map_err(|e| ExportError::WriteFailed(e.to_string()))?;
        Ok(path)
    }
}

/// Opener for headless hosts: there is no viewer registry, so the open
/// request is logged instead of dispatched
pub struct TracingOpener;

#[async_trait]
impl FileOpener for TracingOpener {
    async fn open(&self, path: &Path, mime: &str) -> Result<(), ExportError> {
        info!(path = %path.display(), mime, "Export file ready");
        Ok(())
    }
}
