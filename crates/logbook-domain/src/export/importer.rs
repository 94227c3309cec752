//! Reading JSON exports back into entries.

use crate::store::LogStore;
use logbook_core::{LogEntry, LogbookError, LogbookResult};

pub struct LogImporter;

impl LogImporter {
    /// Parse a JSON export into entries, in file order.
    pub fn from_json(json: &str) -> LogbookResult<Vec<LogEntry>> {
        let entries: Vec<LogEntry> = serde_json::from_str(json)
            .map_err(|e| LogbookError::Serialization(format!("Invalid log export: {}", e)))?;
        Ok(entries
            .into_iter()
            .map(|entry| LogEntry {
                module: entry.module.filter(|m| !m.is_empty()),
                ..entry
            })
            .collect())
    }

    /// Replay a JSON export into `store`, subject to its capacity and level.
    /// Returns the number of entries read from the export.
    pub fn load_into(store: &LogStore, json: &str) -> LogbookResult<usize> {
        let entries = Self::from_json(json)?;
        let count = entries.len();
        for entry in entries {
            store.append_entry(entry);
        }
        tracing::debug!(count, "Imported log entries");
        Ok(count)
    }
}
