//! Clearing the store behind a yes/no confirmation.

use crate::store::LogStore;

pub const CLEAR_PROMPT: &str = "Are you sure you want to clear all logs?";

/// Answers a yes/no question asked before a destructive action.
#[cfg_attr(test, mockall::automock)]
pub trait Confirm {
    fn confirm(&self, prompt: &str) -> bool;
}

/// Confirms everything, for non-interactive callers.
#[derive(Debug, Clone, Copy, Default)]
pub struct AssumeYes;

impl Confirm for AssumeYes {
    fn confirm(&self, _prompt: &str) -> bool {
        true
    }
}

/// Clear `store` if `confirm` agrees. Returns whether the store was cleared.
pub fn clear_with_confirmation(store: &LogStore, confirm: &dyn Confirm) -> bool {
    if !confirm.confirm(CLEAR_PROMPT) {
        tracing::debug!("Log clearing declined");
        return false;
    }
    store.clear();
    true
}
