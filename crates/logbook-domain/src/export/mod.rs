//! Log export and import.
//!
//! Serializes store snapshots to JSON, CSV or plain text and builds the
//! payload handed to a delivery collaborator. JSON exports can be read back.

pub mod exporter;
pub mod format;
pub mod importer;
pub mod models;

pub use exporter::LogExporter;
pub use format::ExportFormat;
pub use importer::LogImporter;
pub use models::ExportPayload;
