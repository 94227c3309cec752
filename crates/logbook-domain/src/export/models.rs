//! Export payload handed to delivery collaborators.

use super::format::ExportFormat;

/// A serialized export ready to be saved under `filename`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ExportPayload {
    pub filename: String,
    pub content_type: &'static str,
    pub format: ExportFormat,
    pub body: String,
}

impl ExportPayload {
    pub fn bytes(&self) -> &[u8] {
        self.body.as_bytes()
    }

    pub fn len(&self) -> usize {
        self.body.len()
    }

    pub fn is_empty(&self) -> bool {
        self.body.is_empty()
    }
}
