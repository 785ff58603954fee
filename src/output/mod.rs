//! Output formatting for sangay.
//!
//! This module provides formatters for displaying moods, journal entries,
//! chat transcripts and session history as pretty text or JSON.

mod json;
mod pretty;

use crate::cli::args::OutputFormat;
use crate::error::SangayError;
use crate::features::journal::JournalEntry;
use crate::features::mood::{MoodEntry, MoodStats};
use crate::features::responder::Message;
use crate::features::sessions::{SessionRecord, SessionReport};

pub use json::*;
pub use pretty::*;

/// Format mood entries based on output format
///
/// # Errors
///
/// Returns `SangayError::Parse` if JSON serialization fails.
pub fn format_moods(entries: &[MoodEntry], format: OutputFormat) -> Result<String, SangayError> {
    match format {
        OutputFormat::Pretty => Ok(format_moods_pretty(entries)),
        OutputFormat::Json => format_moods_json(entries),
    }
}

/// Format mood stats based on output format
///
/// # Errors
///
/// Returns `SangayError::Parse` if JSON serialization fails.
pub fn format_mood_stats(stats: &MoodStats, format: OutputFormat) -> Result<String, SangayError> {
    match format {
        OutputFormat::Pretty => Ok(format_mood_stats_pretty(stats)),
        OutputFormat::Json => format_mood_stats_json(stats),
    }
}

/// Format journal entries based on output format
///
/// # Errors
///
/// Returns `SangayError::Parse` if JSON serialization fails.
pub fn format_journal(entries: &[JournalEntry], format: OutputFormat) -> Result<String, SangayError> {
    match format {
        OutputFormat::Pretty => Ok(format_journal_pretty(entries)),
        OutputFormat::Json => format_journal_json(entries),
    }
}

/// Format chat messages based on output format
///
/// # Errors
///
/// Returns `SangayError::Parse` if JSON serialization fails.
pub fn format_messages(messages: &[Message], format: OutputFormat) -> Result<String, SangayError> {
    match format {
        OutputFormat::Pretty => Ok(format_messages_pretty(messages)),
        OutputFormat::Json => format_messages_json(messages),
    }
}

/// Format session history based on output format
///
/// # Errors
///
/// Returns `SangayError::Parse` if JSON serialization fails.
pub fn format_sessions(
    sessions: &[SessionRecord],
    format: OutputFormat,
) -> Result<String, SangayError> {
    match format {
        OutputFormat::Pretty => Ok(format_sessions_pretty(sessions)),
        OutputFormat::Json => format_sessions_json(sessions),
    }
}

/// Format a session report based on output format
///
/// # Errors
///
/// Returns `SangayError::Parse` if JSON serialization fails.
pub fn format_report(report: &SessionReport, format: OutputFormat) -> Result<String, SangayError> {
    match format {
        OutputFormat::Pretty => Ok(format_report_pretty(report)),
        OutputFormat::Json => format_report_json(report),
    }
}
