//! Journal entry storage.

use rusqlite::{params, OptionalExtension, Row};

use super::entry::JournalEntry;
use crate::error::SangayError;
use crate::storage::{parse_timestamp, Database};

/// Queries over the `journal_entries` table.
pub struct JournalStorage<'a> {
    db: &'a Database,
}

impl<'a> JournalStorage<'a> {
    /// Create storage over an open database.
    #[must_use]
    pub const fn new(db: &'a Database) -> Self {
        Self { db }
    }

    /// Insert an entry and return its ID.
    ///
    /// # Errors
    ///
    /// Returns an error if the insert fails.
    pub fn insert(&self, entry: &JournalEntry) -> Result<i64, SangayError> {
        let conn = self.db.connection();

        conn.execute(
            "INSERT INTO journal_entries (text, prompt, written_at) VALUES (?1, ?2, ?3)",
            params![entry.text, entry.prompt, entry.written_at.to_rfc3339()],
        )
        .map_err(|e| SangayError::Database(format!("Failed to insert journal entry: {e}")))?;

        Ok(conn.last_insert_rowid())
    }

    /// Get an entry by ID.
    ///
    /// # Errors
    ///
    /// Returns an error if the query fails.
    pub fn get(&self, id: i64) -> Result<Option<JournalEntry>, SangayError> {
        self.db
            .connection()
            .query_row(
                "SELECT id, text, prompt, written_at FROM journal_entries WHERE id = ?1",
                [id],
                row_to_entry,
            )
            .optional()
            .map_err(|e| SangayError::Database(format!("Failed to query journal entry: {e}")))
    }

    /// Most recent entries, newest first.
    ///
    /// # Errors
    ///
    /// Returns an error if the query fails.
    pub fn recent(&self, limit: usize) -> Result<Vec<JournalEntry>, SangayError> {
        let conn = self.db.connection();

        let mut stmt = conn
            .prepare(
                "SELECT id, text, prompt, written_at FROM journal_entries
                 ORDER BY written_at DESC, id DESC LIMIT ?1",
            )
            .map_err(|e| SangayError::Database(format!("Failed to prepare query: {e}")))?;

        let rows = stmt
            .query_map([limit], row_to_entry)
            .map_err(|e| SangayError::Database(format!("Failed to query journal: {e}")))?;

        rows.collect::<Result<Vec<_>, _>>()
            .map_err(|e| SangayError::Database(e.to_string()))
    }
}

fn row_to_entry(row: &Row<'_>) -> Result<JournalEntry, rusqlite::Error> {
    let written_at: String = row.get(3)?;

    Ok(JournalEntry {
        id: Some(row.get(0)?),
        text: row.get(1)?,
        prompt: row.get(2)?,
        written_at: parse_timestamp(&written_at),
    })
}
