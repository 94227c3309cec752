use crate::cli::FilterArgs;
use chrono::Utc;
use logbook_core::{AppConfig, LogEntry, LogLevel, LogbookResult};
use logbook_domain::{ExportFormat, LogExporter, LogFilter, LogImporter, LogStore};
use logbook_persistence::{deliver_or_report, AtomicWriter, DirectorySink};
use serde::Serialize;
use std::path::{Path, PathBuf};

#[derive(Debug, Clone, Serialize)]
pub struct ExportResponse {
    pub path: PathBuf,
    pub format: ExportFormat,
    pub content_type: &'static str,
    pub entries: usize,
    pub bytes: usize,
}

pub struct CliContext {
    pub config: AppConfig,
}

impl CliContext {
    pub fn load(config_path: Option<&Path>) -> Self {
        let config = match config_path {
            Some(path) => AppConfig::load_from(path),
            None => AppConfig::load(),
        };
        tracing::debug!(
            max_entries = config.max_entries,
            min_level = %config.min_level,
            "Loaded configuration"
        );
        Self { config }
    }

    /// Fresh store from the config, with per-invocation overrides.
    pub fn new_store(&self, max_entries: Option<usize>, min_level: Option<LogLevel>) -> LogStore {
        LogStore::new(max_entries.unwrap_or(self.config.max_entries))
            .with_min_level(min_level.unwrap_or(self.config.min_level))
            .with_echo(self.config.echo)
    }

    /// Store holding every entry of a JSON log export on disk.
    ///
    /// The capture-time capacity and minimum level from the config do not
    /// apply here; only the command's own filters narrow the result.
    pub async fn load_store(&self, input: &Path) -> LogbookResult<LogStore> {
        let json = AtomicWriter::read_to_string(input).await?;
        let entries = LogImporter::from_json(&json)?;
        let store = LogStore::new(entries.len());
        for entry in entries {
            store.append_entry(entry);
        }
        Ok(store)
    }

    pub fn export_format(&self, requested: Option<&str>) -> LogbookResult<ExportFormat> {
        requested
            .unwrap_or_else(|| self.config.effective_default_format())
            .parse()
    }

    /// Serialize `entries` and save them under `output_dir`.
    pub async fn deliver(
        &self,
        entries: &[LogEntry],
        format: ExportFormat,
        output_dir: &Path,
    ) -> anyhow::Result<ExportResponse> {
        let payload = LogExporter::prepare(
            entries,
            format,
            self.config.effective_filename_prefix(),
            Utc::now(),
        )?;
        let sink = DirectorySink::new(output_dir);
        let path = deliver_or_report(&sink, &payload).await.ok_or_else(|| {
            anyhow::anyhow!("Failed to save {} to {}", payload.filename, output_dir.display())
        })?;

        Ok(ExportResponse {
            path,
            format,
            content_type: payload.content_type,
            entries: entries.len(),
            bytes: payload.len(),
        })
    }

    /// Rewrite a JSON log export with the store's current contents.
    pub async fn save_store(&self, store: &LogStore, path: &Path) -> LogbookResult<()> {
        let json = LogExporter::to_json(&store.get_logs())?;
        AtomicWriter::write_atomic(path, json.as_bytes()).await
    }
}

impl FilterArgs {
    pub fn to_filter(&self) -> LogFilter {
        LogFilter {
            min_level: self.level,
            module: self.module.clone(),
        }
    }
}

pub fn filtered(store: &LogStore, args: &FilterArgs) -> Vec<LogEntry> {
    let filter = args.to_filter();
    if filter.is_empty() {
        store.get_logs()
    } else {
        store.filter(&filter)
    }
}
