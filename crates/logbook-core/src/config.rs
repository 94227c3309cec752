use crate::logging::LogLevel;
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

pub const DEFAULT_MAX_ENTRIES: usize = 10_000;
pub const DEFAULT_FILENAME_PREFIX: &str = "logbook";

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AppConfig {
    #[serde(default = "default_max_entries")]
    pub max_entries: usize,
    #[serde(default = "default_min_level")]
    pub min_level: LogLevel,
    #[serde(default)]
    pub filename_prefix: Option<String>,
    #[serde(default)]
    pub default_format: Option<String>,
    /// Mirror recorded entries to the tracing subscriber.
    #[serde(default)]
    pub echo: bool,
}

fn default_max_entries() -> usize {
    DEFAULT_MAX_ENTRIES
}

fn default_min_level() -> LogLevel {
    LogLevel::Debug
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            max_entries: DEFAULT_MAX_ENTRIES,
            min_level: default_min_level(),
            filename_prefix: None,
            default_format: None,
            echo: false,
        }
    }
}

impl AppConfig {
    pub fn config_path() -> Option<PathBuf> {
        #[cfg(target_os = "macos")]
        {
            dirs::home_dir().map(|home| home.join(".config/logbook/config.toml"))
        }
        #[cfg(target_os = "linux")]
        {
            dirs::config_dir().map(|config| config.join("logbook/config.toml"))
        }
        #[cfg(target_os = "windows")]
        {
            dirs::config_dir().map(|config| config.join("logbook\\config.toml"))
        }
        #[cfg(not(any(target_os = "macos", target_os = "linux", target_os = "windows")))]
        {
            None
        }
    }

    pub fn load() -> Self {
        match Self::config_path() {
            Some(path) => Self::load_from(&path),
            None => Self::default(),
        }
    }

    /// Missing or unparsable files fall back to defaults.
    pub fn load_from(path: &Path) -> Self {
        if path.exists() {
            if let Ok(content) = std::fs::read_to_string(path) {
                if let Ok(config) = toml::from_str(&content) {
                    return config;
                }
            }
        }
        Self::default()
    }

    pub fn effective_filename_prefix(&self) -> &str {
        self.filename_prefix
            .as_deref()
            .unwrap_or(DEFAULT_FILENAME_PREFIX)
    }

    pub fn effective_default_format(&self) -> &str {
        self.default_format.as_deref().unwrap_or("json")
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    #[test]
    fn test_missing_file_uses_defaults() {
        let dir = tempdir().unwrap();
        let config = AppConfig::load_from(&dir.path().join("absent.toml"));
        assert_eq!(config.max_entries, DEFAULT_MAX_ENTRIES);
        assert_eq!(config.min_level, LogLevel::Debug);
        assert_eq!(config.effective_filename_prefix(), "logbook");
        assert_eq!(config.effective_default_format(), "json");
        assert!(!config.echo);
    }

    #[test]
    fn test_partial_file_keeps_other_defaults() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("config.toml");
        std::fs::write(&path, "max_entries = 250\nmin_level = \"WARNING\"\n").unwrap();

        let config = AppConfig::load_from(&path);
        assert_eq!(config.max_entries, 250);
        assert_eq!(config.min_level, LogLevel::Warning);
        assert_eq!(config.effective_filename_prefix(), "logbook");
    }

    #[test]
    fn test_malformed_file_uses_defaults() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("config.toml");
        std::fs::write(&path, "max_entries = [not toml").unwrap();

        let config = AppConfig::load_from(&path);
        assert_eq!(config.max_entries, DEFAULT_MAX_ENTRIES);
    }
}
