//! Finished session records.

use chrono::{DateTime, Local, Utc};
use serde::{Deserialize, Serialize};

use crate::core::{SessionKind, SessionSummary};

/// A finished focus or breathing session, as persisted.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SessionRecord {
    /// Database ID (None if not persisted)
    pub id: Option<i64>,
    /// Which cycle ran.
    pub kind: SessionKind,
    /// Counted cycles completed.
    pub completed_cycles: u32,
    /// Running seconds consumed (pauses excluded).
    pub elapsed_seconds: u64,
    /// When the session screen opened.
    pub started_at: DateTime<Utc>,
    /// When it was torn down.
    pub ended_at: DateTime<Utc>,
}

impl SessionRecord {
    /// Build a record from a clock's summary.
    #[must_use]
    pub const fn from_summary(
        summary: SessionSummary,
        started_at: DateTime<Utc>,
        ended_at: DateTime<Utc>,
    ) -> Self {
        Self {
            id: None,
            kind: summary.kind,
            completed_cycles: summary.completed_cycles,
            elapsed_seconds: summary.elapsed_seconds,
            started_at,
            ended_at,
        }
    }

    /// Whether the session ran at all.
    #[must_use]
    pub const fn is_empty(&self) -> bool {
        self.elapsed_seconds == 0
    }

    /// Get start time in local timezone.
    #[must_use]
    pub fn started_at_local(&self) -> DateTime<Local> {
        self.started_at.with_timezone(&Local)
    }
}
