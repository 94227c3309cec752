pub mod clearing;
pub mod export;
pub mod filter;
pub mod store;

pub use clearing::{clear_with_confirmation, AssumeYes, Confirm, CLEAR_PROMPT};
pub use export::{ExportFormat, ExportPayload, LogExporter, LogImporter};
pub use filter::LogFilter;
pub use logbook_core::{LogEntry, LogLevel};
pub use store::LogStore;
