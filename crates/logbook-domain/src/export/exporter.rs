//! Log export serializers.

use super::format::ExportFormat;
use super::models::ExportPayload;
use chrono::{DateTime, Utc};
use logbook_core::{LogEntry, LogbookResult};
use std::borrow::Cow;

pub const CSV_HEADER: &str = "timestamp,level,module,message";
const GENERAL_MODULE: &str = "general";

/// Serializes log entries into the supported export formats.
pub struct LogExporter;

impl LogExporter {
    /// Serialize `entries` using a format name (`json`, `csv` or `txt`).
    ///
    /// Unknown names fail with `LogbookError::UnsupportedFormat`, even for an
    /// empty entry list.
    pub fn serialize(entries: &[LogEntry], format: &str) -> LogbookResult<String> {
        let format: ExportFormat = format.parse()?;
        Self::serialize_as(entries, format)
    }

    pub fn serialize_as(entries: &[LogEntry], format: ExportFormat) -> LogbookResult<String> {
        match format {
            ExportFormat::Json => Self::to_json(entries),
            ExportFormat::Csv => Ok(Self::to_csv(entries)),
            ExportFormat::Txt => Ok(Self::to_txt(entries)),
        }
    }

    /// Pretty-printed JSON array, one object per entry.
    pub fn to_json(entries: &[LogEntry]) -> LogbookResult<String> {
        Ok(serde_json::to_string_pretty(entries)?)
    }

    pub fn to_csv(entries: &[LogEntry]) -> String {
        let mut out = String::with_capacity(CSV_HEADER.len() + 1 + entries.len() * 64);
        out.push_str(CSV_HEADER);
        out.push('\n');
        for entry in entries {
            let timestamp = entry.formatted_timestamp();
            let fields = [
                csv_field(&timestamp),
                csv_field(entry.level.as_str()),
                csv_field(entry.module.as_deref().unwrap_or("")),
                csv_field(&entry.message),
            ];
            out.push_str(&fields.join(","));
            out.push('\n');
        }
        out
    }

    pub fn to_txt(entries: &[LogEntry]) -> String {
        let mut out = String::new();
        for entry in entries {
            out.push_str(&format!(
                "[{}] {} ({}): {}\n",
                entry.formatted_timestamp(),
                entry.level,
                entry.module.as_deref().unwrap_or(GENERAL_MODULE),
                entry.message
            ));
        }
        out
    }

    /// Serialize and wrap `entries` in a payload named after `prefix` and `now`.
    pub fn prepare(
        entries: &[LogEntry],
        format: ExportFormat,
        prefix: &str,
        now: DateTime<Utc>,
    ) -> LogbookResult<ExportPayload> {
        let body = Self::serialize_as(entries, format)?;
        Ok(ExportPayload {
            filename: Self::default_filename(prefix, format, now),
            content_type: format.content_type(),
            format,
            body,
        })
    }

    /// `<prefix>_logs_<YYYYMMDD_HHMMSS>.<ext>`
    pub fn default_filename(prefix: &str, format: ExportFormat, now: DateTime<Utc>) -> String {
        format!(
            "{}_logs_{}.{}",
            prefix,
            now.format("%Y%m%d_%H%M%S"),
            format.extension()
        )
    }
}

fn csv_field(value: &str) -> Cow<'_, str> {
    if value.contains([',', '"', '\n', '\r']) {
        Cow::Owned(format!("\"{}\"", value.replace('"', "\"\"")))
    } else {
        Cow::Borrowed(value)
    }
}
