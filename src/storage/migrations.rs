//! Database migrations for sangay.
//!
//! Each migration is a function that upgrades the schema by one version.
//! Migrations are run automatically when the database is opened.

use rusqlite::Connection;

use crate::error::SangayError;

/// Current schema version.
const CURRENT_VERSION: i32 = 1;

/// Get the current schema version from the database.
///
/// Returns 0 if no version has been set (new database).
pub fn get_version(conn: &Connection) -> Result<i32, SangayError> {
    conn.query_row("PRAGMA user_version", [], |row| row.get(0))
        .map_err(|e| SangayError::Database(format!("Failed to get schema version: {e}")))
}

fn set_version(conn: &Connection, version: i32) -> Result<(), SangayError> {
    conn.execute_batch(&format!("PRAGMA user_version = {version};"))
        .map_err(|e| SangayError::Database(format!("Failed to set schema version: {e}")))
}

/// Run all pending migrations.
pub fn run(conn: &Connection) -> Result<(), SangayError> {
    let current = get_version(conn)?;

    if current >= CURRENT_VERSION {
        return Ok(());
    }

    for version in (current + 1)..=CURRENT_VERSION {
        run_migration(conn, version)?;
        set_version(conn, version)?;
        tracing::debug!(version, "applied schema migration");
    }

    Ok(())
}

fn run_migration(conn: &Connection, version: i32) -> Result<(), SangayError> {
    match version {
        1 => migrate_v1(conn),
        _ => Err(SangayError::Database(format!(
            "Unknown migration version: {version}"
        ))),
    }
}

/// Migration v1: Initial schema.
///
/// Creates tables for:
/// - `mood_entries`: recorded moods
/// - `journal_entries`: journal text with its reflection prompt
/// - `timer_sessions`: finished focus and breathing sessions
fn migrate_v1(conn: &Connection) -> Result<(), SangayError> {
    conn.execute_batch(
        r"
        CREATE TABLE IF NOT EXISTS mood_entries (
            id INTEGER PRIMARY KEY AUTOINCREMENT,
            mood TEXT NOT NULL,
            note TEXT,
            recorded_at TEXT NOT NULL
        );

        CREATE INDEX IF NOT EXISTS idx_mood_entries_recorded
        ON mood_entries(recorded_at);

        CREATE TABLE IF NOT EXISTS journal_entries (
            id INTEGER PRIMARY KEY AUTOINCREMENT,
            text TEXT NOT NULL,
            prompt TEXT,
            written_at TEXT NOT NULL
        );

        CREATE INDEX IF NOT EXISTS idx_journal_entries_written
        ON journal_entries(written_at);

        CREATE TABLE IF NOT EXISTS timer_sessions (
            id INTEGER PRIMARY KEY AUTOINCREMENT,
            kind TEXT NOT NULL,
            completed_cycles INTEGER NOT NULL DEFAULT 0,
            elapsed_seconds INTEGER NOT NULL DEFAULT 0,
            started_at TEXT NOT NULL,
            ended_at TEXT NOT NULL
        );

        CREATE INDEX IF NOT EXISTS idx_timer_sessions_started
        ON timer_sessions(started_at);
        ",
    )
    .map_err(|e| SangayError::Database(format!("Migration v1 failed: {e}")))
}
