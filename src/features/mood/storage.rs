//! Mood entry storage.

use chrono::{DateTime, Utc};
use rusqlite::{params, Row};

use super::entry::{Mood, MoodEntry};
use crate::error::SangayError;
use crate::storage::{parse_timestamp, Database};

/// Queries over the `mood_entries` table.
pub struct MoodStorage<'a> {
    db: &'a Database,
}

impl<'a> MoodStorage<'a> {
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
    pub fn insert(&self, entry: &MoodEntry) -> Result<i64, SangayError> {
        let conn = self.db.connection();

        conn.execute(
            "INSERT INTO mood_entries (mood, note, recorded_at) VALUES (?1, ?2, ?3)",
            params![
                entry.mood.as_str(),
                entry.note,
                entry.recorded_at.to_rfc3339()
            ],
        )
        .map_err(|e| SangayError::Database(format!("Failed to insert mood: {e}")))?;

        Ok(conn.last_insert_rowid())
    }

    /// Most recent entries, newest first.
    ///
    /// # Errors
    ///
    /// Returns an error if the query fails.
    pub fn recent(&self, limit: usize) -> Result<Vec<MoodEntry>, SangayError> {
        self.query(
            "SELECT id, mood, note, recorded_at FROM mood_entries
             ORDER BY recorded_at DESC, id DESC LIMIT ?1",
            params![limit],
        )
    }

    /// Entries recorded at or after `since`, newest first.
    ///
    /// # Errors
    ///
    /// Returns an error if the query fails.
    pub fn since(&self, since: DateTime<Utc>) -> Result<Vec<MoodEntry>, SangayError> {
        self.query(
            "SELECT id, mood, note, recorded_at FROM mood_entries
             WHERE recorded_at >= ?1
             ORDER BY recorded_at DESC, id DESC",
            params![since.to_rfc3339()],
        )
    }

    fn query(
        &self,
        sql: &str,
        params: &[&dyn rusqlite::ToSql],
    ) -> Result<Vec<MoodEntry>, SangayError> {
        let conn = self.db.connection();

        let mut stmt = conn
            .prepare(sql)
            .map_err(|e| SangayError::Database(format!("Failed to prepare query: {e}")))?;

        let rows = stmt
            .query_map(params, row_to_entry)
            .map_err(|e| SangayError::Database(format!("Failed to query moods: {e}")))?;

        rows.collect::<Result<Vec<_>, _>>()
            .map_err(|e| SangayError::Database(e.to_string()))
    }
}

fn row_to_entry(row: &Row<'_>) -> Result<MoodEntry, rusqlite::Error> {
    let id: i64 = row.get(0)?;
    let mood: String = row.get(1)?;
    let note: Option<String> = row.get(2)?;
    let recorded_at: String = row.get(3)?;

    let mood = Mood::parse(&mood).map_err(|e| {
        rusqlite::Error::FromSqlConversionFailure(1, rusqlite::types::Type::Text, Box::new(e))
    })?;

    Ok(MoodEntry {
        id: Some(id),
        mood,
        note,
        recorded_at: parse_timestamp(&recorded_at),
    })
}
