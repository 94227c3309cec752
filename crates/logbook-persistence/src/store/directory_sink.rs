use super::atomic_writer::AtomicWriter;
use crate::traits::ExportSink;
use async_trait::async_trait;
use logbook_core::LogbookResult;
use logbook_domain::ExportPayload;
use std::path::{Path, PathBuf};

/// Saves each export as `<dir>/<payload filename>`.
pub struct DirectorySink {
    dir: PathBuf,
}

impl DirectorySink {
    pub fn new(dir: impl AsRef<Path>) -> Self {
        Self {
            dir: dir.as_ref().to_path_buf(),
        }
    }

    pub fn dir(&self) -> &Path {
        &self.dir
    }
}

#[async_trait]
impl ExportSink for DirectorySink {
    async fn deliver(&self, payload: &ExportPayload) -> LogbookResult<PathBuf> {
        tokio::fs::create_dir_all(&self.dir).await?;
        let path = self.dir.join(&payload.filename);
        AtomicWriter::write_atomic(&path, payload.bytes()).await?;

        tracing::info!(
            "Delivered {} export ({} bytes) to {}",
            payload.content_type,
            payload.len(),
            path.display()
        );
        Ok(path)
    }
}
