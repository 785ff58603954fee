//! `SQLite`-backed [`Store`].

use chrono::{DateTime, Utc};
use serde::Serialize;

use crate::core::Store;
use crate::error::SangayError;
use crate::features::journal::{JournalEntry, JournalStorage};
use crate::features::mood::{MoodEntry, MoodStorage};
use crate::features::sessions::{SessionRecord, SessionStorage};

use super::Database;

/// Anything the app persists.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "record", rename_all = "lowercase")]
pub enum Record {
    /// A recorded mood.
    Mood(MoodEntry),
    /// A journal entry.
    Journal(JournalEntry),
    /// A finished focus or breathing session.
    Session(SessionRecord),
}

impl Record {
    /// Short name of the record type, for logging.
    #[must_use]
    pub const fn kind(&self) -> &'static str {
        match self {
            Self::Mood(_) => "mood",
            Self::Journal(_) => "journal",
            Self::Session(_) => "session",
        }
    }
}

/// Store writing records to the local database.
pub struct SqliteStore {
    db: Database,
}

impl SqliteStore {
    /// Open the store at the default location.
    ///
    /// # Errors
    ///
    /// Returns an error if the database cannot be opened.
    pub fn open() -> Result<Self, SangayError> {
        Database::open().map(Self::with_database)
    }

    /// Open a throwaway in-memory store.
    ///
    /// # Errors
    ///
    /// Returns an error if the database cannot be opened.
    pub fn open_in_memory() -> Result<Self, SangayError> {
        Database::open_in_memory().map(Self::with_database)
    }

    /// Create a store over an existing database.
    #[must_use]
    pub const fn with_database(db: Database) -> Self {
        Self { db }
    }

    /// Mood queries.
    #[must_use]
    pub const fn moods(&self) -> MoodStorage<'_> {
        MoodStorage::new(&self.db)
    }

    /// Journal queries.
    #[must_use]
    pub const fn journal(&self) -> JournalStorage<'_> {
        JournalStorage::new(&self.db)
    }

    /// Session queries.
    #[must_use]
    pub const fn sessions(&self) -> SessionStorage<'_> {
        SessionStorage::new(&self.db)
    }
}

impl Store for SqliteStore {
    fn save(&self, record: &Record) -> Result<i64, SangayError> {
        match record {
            Record::Mood(entry) => self.moods().insert(entry),
            Record::Journal(entry) => self.journal().insert(entry),
            Record::Session(session) => self.sessions().insert(session),
        }
    }
}

/// Parse a stored RFC 3339 timestamp, falling back to now.
pub(crate) fn parse_timestamp(s: &str) -> DateTime<Utc> {
    DateTime::parse_from_rfc3339(s).map_or_else(|_| Utc::now(), |t| t.with_timezone(&Utc))
}
