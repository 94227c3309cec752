//! Bounded in-memory log store.
//!
//! Entries are kept in insertion order. Once the store holds `max_entries`
//! records, each append evicts the oldest one.

use crate::filter::LogFilter;
use logbook_core::config::DEFAULT_MAX_ENTRIES;
use logbook_core::{AppConfig, LogEntry, LogLevel};
use parking_lot::Mutex;
use std::collections::VecDeque;

/// Ring buffer of log entries with a fixed capacity.
///
/// All operations take `&self`; share the store with `Arc` when several
/// threads produce entries.
#[derive(Debug)]
pub struct LogStore {
    entries: Mutex<VecDeque<LogEntry>>,
    max_entries: usize,
    min_level: LogLevel,
    echo: bool,
}

impl LogStore {
    /// Create a store holding at most `max_entries` records (at least one).
    pub fn new(max_entries: usize) -> Self {
        let max_entries = max_entries.max(1);
        Self {
            entries: Mutex::new(VecDeque::with_capacity(max_entries.min(1024))),
            max_entries,
            min_level: LogLevel::Debug,
            echo: false,
        }
    }

    pub fn from_config(config: &AppConfig) -> Self {
        Self::new(config.max_entries)
            .with_min_level(config.min_level)
            .with_echo(config.echo)
    }

    /// Entries below `level` are dropped at append time.
    pub fn with_min_level(mut self, level: LogLevel) -> Self {
        self.min_level = level;
        self
    }

    /// Mirror every recorded entry to `tracing` at the matching level.
    pub fn with_echo(mut self, echo: bool) -> Self {
        self.echo = echo;
        self
    }

    pub fn max_entries(&self) -> usize {
        self.max_entries
    }

    pub fn min_level(&self) -> LogLevel {
        self.min_level
    }

    pub fn append(&self, level: LogLevel, message: impl Into<String>, module: Option<&str>) {
        self.append_entry(LogEntry::new(
            level,
            message.into(),
            module.map(str::to_string),
        ));
    }

    pub fn append_with_data(
        &self,
        level: LogLevel,
        message: impl Into<String>,
        module: Option<&str>,
        data: serde_json::Value,
    ) {
        self.append_entry(
            LogEntry::new(level, message.into(), module.map(str::to_string)).with_data(data),
        );
    }

    /// Append a prebuilt entry, keeping its timestamp.
    pub fn append_entry(&self, entry: LogEntry) {
        if entry.level < self.min_level {
            return;
        }
        if self.echo {
            echo_entry(&entry);
        }

        let mut entries = self.entries.lock();
        entries.push_back(entry);
        let mut evicted = 0usize;
        while entries.len() > self.max_entries {
            entries.pop_front();
            evicted += 1;
        }
        if evicted > 0 {
            tracing::debug!(evicted, capacity = self.max_entries, "Evicted oldest log entries");
        }
    }

    pub fn debug(&self, message: impl Into<String>, module: Option<&str>) {
        self.append(LogLevel::Debug, message, module);
    }

    pub fn info(&self, message: impl Into<String>, module: Option<&str>) {
        self.append(LogLevel::Info, message, module);
    }

    pub fn warning(&self, message: impl Into<String>, module: Option<&str>) {
        self.append(LogLevel::Warning, message, module);
    }

    pub fn error(&self, message: impl Into<String>, module: Option<&str>) {
        self.append(LogLevel::Error, message, module);
    }

    pub fn critical(&self, message: impl Into<String>, module: Option<&str>) {
        self.append(LogLevel::Critical, message, module);
    }

    /// Snapshot of all entries in insertion order.
    pub fn get_logs(&self) -> Vec<LogEntry> {
        self.entries.lock().iter().cloned().collect()
    }

    pub fn filter(&self, filter: &LogFilter) -> Vec<LogEntry> {
        self.entries
            .lock()
            .iter()
            .filter(|entry| filter.matches(entry))
            .cloned()
            .collect()
    }

    /// Entries with exactly `level`.
    pub fn filter_by_level(&self, level: LogLevel) -> Vec<LogEntry> {
        self.entries
            .lock()
            .iter()
            .filter(|entry| entry.level == level)
            .cloned()
            .collect()
    }

    pub fn filter_by_module(&self, module: &str) -> Vec<LogEntry> {
        self.entries
            .lock()
            .iter()
            .filter(|entry| entry.module.as_deref() == Some(module))
            .cloned()
            .collect()
    }

    pub fn clear(&self) {
        let mut entries = self.entries.lock();
        let removed = entries.len();
        entries.clear();
        tracing::debug!(removed, "Cleared log store");
    }

    pub fn len(&self) -> usize {
        self.entries.lock().len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.lock().is_empty()
    }
}

impl Default for LogStore {
    fn default() -> Self {
        Self::new(DEFAULT_MAX_ENTRIES)
    }
}

fn echo_entry(entry: &LogEntry) {
    let module = entry.module.as_deref().unwrap_or("");
    match entry.level {
        LogLevel::Debug => tracing::debug!(module, "{}", entry.message),
        LogLevel::Info => tracing::info!(module, "{}", entry.message),
        LogLevel::Warning => tracing::warn!(module, "{}", entry.message),
        LogLevel::Error | LogLevel::Critical => {
            tracing::error!(module, level = %entry.level, "{}", entry.message)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::Arc;

    #[test]
    fn test_append_preserves_insertion_order() {
        let store = LogStore::new(10);
        store.info("first", None);
        store.error("second", Some("db"));
        store.debug("third", Some("ui"));

        let logs = store.get_logs();
        let messages: Vec<&str> = logs.iter().map(|e| e.message.as_str()).collect();
        assert_eq!(messages, vec!["first", "second", "third"]);
        assert_eq!(logs[1].level, LogLevel::Error);
        assert_eq!(logs[1].module.as_deref(), Some("db"));
        assert_eq!(logs[0].module, None);
    }

    #[test]
    fn test_overflow_keeps_most_recent_entries() {
        let store = LogStore::new(3);
        for i in 0..10 {
            store.info(format!("message {}", i), None);
            assert!(store.len() <= 3);
        }

        let messages: Vec<String> = store.get_logs().into_iter().map(|e| e.message).collect();
        assert_eq!(messages, vec!["message 7", "message 8", "message 9"]);
    }

    #[test]
    fn test_zero_capacity_is_clamped() {
        let store = LogStore::new(0);
        store.info("a", None);
        store.info("b", None);
        assert_eq!(store.max_entries(), 1);
        assert_eq!(store.get_logs()[0].message, "b");
    }

    #[test]
    fn test_clear_empties_store() {
        let store = LogStore::new(5);
        store.warning("one", None);
        store.warning("two", None);
        store.clear();

        assert!(store.get_logs().is_empty());
        assert!(store.is_empty());

        store.info("after", None);
        assert_eq!(store.len(), 1);
    }

    #[test]
    fn test_snapshot_is_independent_of_later_mutation() {
        let store = LogStore::new(2);
        store.info("kept", None);
        let snapshot = store.get_logs();

        store.info("x", None);
        store.info("y", None);
        store.clear();

        assert_eq!(snapshot.len(), 1);
        assert_eq!(snapshot[0].message, "kept");
    }

    #[test]
    fn test_min_level_drops_lower_entries() {
        let store = LogStore::new(10).with_min_level(LogLevel::Warning);
        store.debug("noise", None);
        store.info("chatter", None);
        store.warning("careful", None);
        store.critical("down", None);

        let levels: Vec<LogLevel> = store.get_logs().into_iter().map(|e| e.level).collect();
        assert_eq!(levels, vec![LogLevel::Warning, LogLevel::Critical]);
    }

    #[test]
    fn test_filters() {
        let store = LogStore::new(10);
        store.info("a", Some("auth"));
        store.error("b", Some("sync"));
        store.info("c", Some("sync"));

        let infos = store.filter_by_level(LogLevel::Info);
        assert_eq!(infos.len(), 2);

        let sync = store.filter_by_module("sync");
        let messages: Vec<&str> = sync.iter().map(|e| e.message.as_str()).collect();
        assert_eq!(messages, vec!["b", "c"]);

        assert!(store.filter_by_module("missing").is_empty());
    }

    #[test]
    fn test_append_with_data() {
        let store = LogStore::new(10);
        store.append_with_data(
            LogLevel::Info,
            "saved",
            Some("storage"),
            serde_json::json!({ "bytes": 42 }),
        );

        let logs = store.get_logs();
        assert_eq!(logs[0].data, Some(serde_json::json!({ "bytes": 42 })));
    }

    #[test]
    fn test_from_config() {
        let config = AppConfig {
            max_entries: 2,
            min_level: LogLevel::Error,
            ..AppConfig::default()
        };
        let store = LogStore::from_config(&config);
        assert_eq!(store.max_entries(), 2);
        assert_eq!(store.min_level(), LogLevel::Error);
    }

    #[test]
    fn test_concurrent_appends_respect_capacity() {
        let store = Arc::new(LogStore::new(50));
        let handles: Vec<_> = (0..4)
            .map(|t| {
                let store = Arc::clone(&store);
                std::thread::spawn(move || {
                    for i in 0..100 {
                        store.info(format!("{}-{}", t, i), Some("worker"));
                    }
                })
            })
            .collect();
        for handle in handles {
            handle.join().unwrap();
        }

        assert_eq!(store.len(), 50);
    }
}
