//! Seams between the session core and its collaborators.
//!
//! The core never talks to a database or a text generator directly; it goes
//! through these traits so hosts and tests can swap implementations.

use tracing::warn;

use crate::error::SangayError;
use crate::storage::Record;

/// Persistence sink for finished sessions and journal/mood entries.
#[cfg_attr(test, mockall::automock)]
pub trait Store {
    /// Persist a record, returning its row id.
    ///
    /// # Errors
    ///
    /// Returns an error if the record cannot be written.
    fn save(&self, record: &Record) -> Result<i64, SangayError>;
}

/// Produces a supportive reply for some user text.
///
/// Implementations are pure lookups and always return a message.
pub trait ResponderService {
    /// Reply to `input`.
    fn respond(&self, input: &str) -> String;
}

/// Save `record`, logging instead of failing.
///
/// Returns the row id when the save went through.
pub fn save_best_effort<S: Store + ?Sized>(store: &S, record: &Record) -> Option<i64> {
    match store.save(record) {
        Ok(id) => Some(id),
        Err(e) => {
            warn!(kind = record.kind(), error = %e, "failed to save record");
            None
        }
    }
}
