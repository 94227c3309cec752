use logbook_core::{LogEntry, LogLevel};

/// Selects entries at or above a minimum level, optionally from one module.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct LogFilter {
    pub min_level: Option<LogLevel>,
    pub module: Option<String>,
}

impl LogFilter {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn min_level(mut self, level: LogLevel) -> Self {
        self.min_level = Some(level);
        self
    }

    pub fn module(mut self, module: impl Into<String>) -> Self {
        self.module = Some(module.into());
        self
    }

    pub fn is_empty(&self) -> bool {
        self.min_level.is_none() && self.module.is_none()
    }

    pub fn matches(&self, entry: &LogEntry) -> bool {
        if let Some(level) = self.min_level {
            if entry.level < level {
                return false;
            }
        }
        match &self.module {
            Some(module) => entry.module.as_deref() == Some(module.as_str()),
            None => true,
        }
    }

    pub fn apply(&self, entries: &[LogEntry]) -> Vec<LogEntry> {
        entries
            .iter()
            .filter(|entry| self.matches(entry))
            .cloned()
            .collect()
    }
}
