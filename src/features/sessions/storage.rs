//! Session history storage.
//!
//! Persists finished timer sessions to the local database.

use rusqlite::{params, Row};

use super::record::SessionRecord;
use super::report::KindTotals;
use crate::core::SessionKind;
use crate::error::SangayError;
use crate::storage::{parse_timestamp, Database};

/// Queries over the `timer_sessions` table.
pub struct SessionStorage<'a> {
    db: &'a Database,
}

impl<'a> SessionStorage<'a> {
    /// Create storage over an open database.
    #[must_use]
    pub const fn new(db: &'a Database) -> Self {
        Self { db }
    }

    /// Insert a finished session and return its ID.
    ///
    /// # Errors
    ///
    /// Returns an error if the insert fails.
    pub fn insert(&self, session: &SessionRecord) -> Result<i64, SangayError> {
        let conn = self.db.connection();
        let elapsed = i64::try_from(session.elapsed_seconds).unwrap_or(i64::MAX);

        conn.execute(
            r"INSERT INTO timer_sessions
              (kind, completed_cycles, elapsed_seconds, started_at, ended_at)
              VALUES (?1, ?2, ?3, ?4, ?5)",
            params![
                session.kind.as_str(),
                session.completed_cycles,
                elapsed,
                session.started_at.to_rfc3339(),
                session.ended_at.to_rfc3339(),
            ],
        )
        .map_err(|e| SangayError::Database(format!("Failed to insert session: {e}")))?;

        Ok(conn.last_insert_rowid())
    }

    /// Most recent sessions, newest first.
    ///
    /// # Errors
    ///
    /// Returns an error if the query fails.
    pub fn recent(&self, limit: usize) -> Result<Vec<SessionRecord>, SangayError> {
        let conn = self.db.connection();

        let mut stmt = conn
            .prepare(
                r"SELECT id, kind, completed_cycles, elapsed_seconds, started_at, ended_at
                  FROM timer_sessions
                  ORDER BY started_at DESC, id DESC
                  LIMIT ?1",
            )
            .map_err(|e| SangayError::Database(format!("Failed to prepare query: {e}")))?;

        let rows = stmt
            .query_map([limit], row_to_session)
            .map_err(|e| SangayError::Database(format!("Failed to query sessions: {e}")))?;

        rows.collect::<Result<Vec<_>, _>>()
            .map_err(|e| SangayError::Database(e.to_string()))
    }

    /// Aggregate totals for one kind of session.
    ///
    /// # Errors
    ///
    /// Returns an error if the query fails.
    pub fn totals(&self, kind: SessionKind) -> Result<KindTotals, SangayError> {
        let (sessions, cycles, seconds): (i64, i64, i64) = self
            .db
            .connection()
            .query_row(
                r"SELECT COUNT(*),
                         COALESCE(SUM(completed_cycles), 0),
                         COALESCE(SUM(elapsed_seconds), 0)
                  FROM timer_sessions
                  WHERE kind = ?1",
                [kind.as_str()],
                |row| Ok((row.get(0)?, row.get(1)?, row.get(2)?)),
            )
            .map_err(|e| SangayError::Database(format!("Failed to query totals: {e}")))?;

        Ok(KindTotals {
            kind,
            sessions: u64::try_from(sessions).unwrap_or(0),
            completed_cycles: u64::try_from(cycles).unwrap_or(0),
            elapsed_seconds: u64::try_from(seconds).unwrap_or(0),
        })
    }

    /// Delete all sessions, returning how many were removed.
    ///
    /// # Errors
    ///
    /// Returns an error if the delete fails.
    pub fn clear(&self) -> Result<usize, SangayError> {
        self.db
            .connection()
            .execute("DELETE FROM timer_sessions", [])
            .map_err(|e| SangayError::Database(format!("Failed to delete sessions: {e}")))
    }
}

fn row_to_session(row: &Row<'_>) -> Result<SessionRecord, rusqlite::Error> {
    let kind: String = row.get(1)?;
    let elapsed: i64 = row.get(3)?;
    let started_at: String = row.get(4)?;
    let ended_at: String = row.get(5)?;

    let kind = SessionKind::parse(&kind).ok_or_else(|| {
        rusqlite::Error::FromSqlConversionFailure(
            1,
            rusqlite::types::Type::Text,
            format!("unknown session kind '{kind}'").into(),
        )
    })?;

    Ok(SessionRecord {
        id: Some(row.get(0)?),
        kind,
        completed_cycles: row.get(2)?,
        elapsed_seconds: u64::try_from(elapsed).unwrap_or(0),
        started_at: parse_timestamp(&started_at),
        ended_at: parse_timestamp(&ended_at),
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::SessionSummary;
    use chrono::{Duration, Utc};

    fn record(kind: SessionKind, cycles: u32, seconds: u64, minutes_ago: i64) -> SessionRecord {
        let started = Utc::now() - Duration::minutes(minutes_ago);
        SessionRecord::from_summary(
            SessionSummary {
                kind,
                completed_cycles: cycles,
                elapsed_seconds: seconds,
            },
            started,
            started + Duration::seconds(i64::try_from(seconds).unwrap()),
        )
    }

    #[test]
    fn test_insert_and_recent() {
        let db = Database::open_in_memory().unwrap();
        let storage = SessionStorage::new(&db);

        storage.insert(&record(SessionKind::Focus, 1, 1800, 60)).unwrap();
        storage.insert(&record(SessionKind::Breathing, 0, 120, 5)).unwrap();

        let recent = storage.recent(10).unwrap();
        assert_eq!(recent.len(), 2);
        assert_eq!(recent[0].kind, SessionKind::Breathing);
        assert_eq!(recent[1].completed_cycles, 1);
        assert_eq!(recent[1].elapsed_seconds, 1800);
    }

    #[test]
    fn test_totals_by_kind() {
        let db = Database::open_in_memory().unwrap();
        let storage = SessionStorage::new(&db);

        storage.insert(&record(SessionKind::Focus, 2, 3600, 90)).unwrap();
        storage.insert(&record(SessionKind::Focus, 1, 1500, 30)).unwrap();
        storage.insert(&record(SessionKind::Breathing, 0, 60, 10)).unwrap();

        let focus = storage.totals(SessionKind::Focus).unwrap();
        assert_eq!(focus.sessions, 2);
        assert_eq!(focus.completed_cycles, 3);
        assert_eq!(focus.elapsed_seconds, 5100);

        let breathing = storage.totals(SessionKind::Breathing).unwrap();
        assert_eq!(breathing.sessions, 1);
        assert_eq!(breathing.elapsed_seconds, 60);
    }

    #[test]
    fn test_totals_empty() {
        let db = Database::open_in_memory().unwrap();
        let totals = SessionStorage::new(&db).totals(SessionKind::Focus).unwrap();
        assert_eq!(totals.sessions, 0);
        assert_eq!(totals.elapsed_seconds, 0);
    }

    #[test]
    fn test_clear() {
        let db = Database::open_in_memory().unwrap();
        let storage = SessionStorage::new(&db);
        storage.insert(&record(SessionKind::Focus, 1, 10, 1)).unwrap();

        assert_eq!(storage.clear().unwrap(), 1);
        assert!(storage.recent(10).unwrap().is_empty());
    }
}
