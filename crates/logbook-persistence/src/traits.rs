use async_trait::async_trait;
use logbook_core::LogbookResult;
use logbook_domain::ExportPayload;
use std::path::PathBuf;

/// Destination for serialized log exports.
/// Implementations decide where the payload ends up (directory, download, etc.)
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait ExportSink: Send + Sync {
    /// Deliver the payload and return where it was stored
    async fn deliver(&self, payload: &ExportPayload) -> LogbookResult<PathBuf>;
}

/// Deliver `payload`, logging a failure instead of propagating it.
///
/// Returns the stored path on success. A failed delivery leaves the caller's
/// state untouched, so the export can simply be retried.
pub async fn deliver_or_report(
    sink: &dyn ExportSink,
    payload: &ExportPayload,
) -> Option<PathBuf> {
    match sink.deliver(payload).await {
        Ok(path) => Some(path),
        Err(e) => {
            tracing::error!("Failed to deliver log export {}: {}", payload.filename, e);
            None
        }
    }
}
