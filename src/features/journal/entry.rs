//! Journal entries.

use chrono::{DateTime, Local, Utc};
use serde::{Deserialize, Serialize};

use crate::core::ResponderService;
use crate::error::SangayError;

/// A saved journal entry.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct JournalEntry {
    /// Database ID (None if not persisted)
    pub id: Option<i64>,
    /// What was written.
    pub text: String,
    /// Reflection prompt generated for the entry.
    pub prompt: Option<String>,
    /// When the entry was written.
    pub written_at: DateTime<Utc>,
}

impl JournalEntry {
    /// Compose an entry from user text, attaching a reflection prompt.
    ///
    /// # Errors
    ///
    /// Returns `SangayError::Validation` if `text` is blank.
    pub fn compose<R: ResponderService + ?Sized>(
        text: &str,
        responder: &R,
    ) -> Result<Self, SangayError> {
        let text = text.trim();
        if text.is_empty() {
            return Err(SangayError::Validation(
                "Please write something before saving".to_string(),
            ));
        }

        Ok(Self {
            id: None,
            text: text.to_string(),
            prompt: Some(responder.respond(text)),
            written_at: Utc::now(),
        })
    }

    /// Get write time in local timezone.
    #[must_use]
    pub fn written_at_local(&self) -> DateTime<Local> {
        self.written_at.with_timezone(&Local)
    }
}
