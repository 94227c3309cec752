use logbook_core::LogbookResult;
use std::path::Path;
use tokio::fs;

/// Writes export files so readers never observe a half-written file.
pub struct AtomicWriter;

impl AtomicWriter {
    /// Write `data` to a temp file next to `path`, then rename it into place.
    pub async fn write_atomic(path: &Path, data: &[u8]) -> LogbookResult<()> {
        // Same directory keeps the rename on one filesystem
        let parent = match path.parent() {
            Some(parent) if !parent.as_os_str().is_empty() => parent,
            _ => Path::new("."),
        };
        let temp_file = tempfile::NamedTempFile::new_in(parent)?;
        let temp_path = temp_file.into_temp_path();

        fs::write(&temp_path, data).await?;
        fs::rename(&temp_path, path).await?;
        // Renamed away; nothing left to clean up
        let _ = temp_path.keep();

        tracing::debug!("Atomically wrote {} bytes to {}", data.len(), path.display());
        Ok(())
    }

    pub async fn read_to_string(path: &Path) -> LogbookResult<String> {
        let text = fs::read_to_string(path).await?;
        tracing::debug!("Read {} bytes from {}", text.len(), path.display());
        Ok(text)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    #[tokio::test]
    async fn test_atomic_write() {
        let dir = tempdir().unwrap();
        let file_path = dir.path().join("logs.json");

        AtomicWriter::write_atomic(&file_path, b"[]").await.unwrap();

        let text = AtomicWriter::read_to_string(&file_path).await.unwrap();
        assert_eq!(text, "[]");
    }

    #[tokio::test]
    async fn test_atomic_write_overwrites() {
        let dir = tempdir().unwrap();
        let file_path = dir.path().join("logs.txt");

        AtomicWriter::write_atomic(&file_path, b"First").await.unwrap();
        AtomicWriter::write_atomic(&file_path, b"Second").await.unwrap();

        let text = AtomicWriter::read_to_string(&file_path).await.unwrap();
        assert_eq!(text, "Second");

        // Only the target remains in the directory
        let count = std::fs::read_dir(dir.path()).unwrap().count();
        assert_eq!(count, 1);
    }
}
