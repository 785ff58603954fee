//! Session history summaries.

use serde::Serialize;

use super::storage::SessionStorage;
use crate::core::SessionKind;
use crate::error::SangayError;

/// Aggregated totals for one kind of session.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct KindTotals {
    /// Which cycle these totals cover.
    pub kind: SessionKind,
    /// Number of saved sessions.
    pub sessions: u64,
    /// Counted cycles across all sessions.
    pub completed_cycles: u64,
    /// Running seconds across all sessions.
    pub elapsed_seconds: u64,
}

impl KindTotals {
    /// Whole minutes spent running.
    #[must_use]
    pub const fn minutes(&self) -> u64 {
        self.elapsed_seconds / 60
    }
}

/// Totals for both session kinds.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct SessionReport {
    /// Focus timer totals.
    pub focus: KindTotals,
    /// Breathing totals.
    pub breathing: KindTotals,
}

impl SessionReport {
    /// Build a report from storage.
    ///
    /// # Errors
    ///
    /// Returns an error if the totals cannot be queried.
    pub fn generate(storage: &SessionStorage<'_>) -> Result<Self, SangayError> {
        Ok(Self {
            focus: storage.totals(SessionKind::Focus)?,
            breathing: storage.totals(SessionKind::Breathing)?,
        })
    }

    /// Whether no sessions were ever saved.
    #[must_use]
    pub const fn is_empty(&self) -> bool {
        self.focus.sessions == 0 && self.breathing.sessions == 0
    }
}
