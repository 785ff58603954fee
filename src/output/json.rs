//! JSON output formatting for sangay.

use serde::Serialize;
use serde_json::json;

use crate::error::SangayError;
use crate::features::journal::JournalEntry;
use crate::features::mood::{MoodEntry, MoodStats};
use crate::features::responder::Message;
use crate::features::sessions::{SessionRecord, SessionReport};

/// Format mood entries as JSON
///
/// # Errors
///
/// Returns `SangayError::Parse` if JSON serialization fails.
pub fn format_moods_json(entries: &[MoodEntry]) -> Result<String, SangayError> {
    let output = json!({
        "count": entries.len(),
        "items": entries
    });
    Ok(serde_json::to_string_pretty(&output)?)
}

/// Format mood stats as JSON
///
/// # Errors
///
/// Returns `SangayError::Parse` if JSON serialization fails.
pub fn format_mood_stats_json(stats: &MoodStats) -> Result<String, SangayError> {
    let counts: Vec<_> = stats
        .counts
        .iter()
        .map(|(mood, count)| json!({ "mood": mood, "count": count }))
        .collect();
    let output = json!({
        "days": stats.days,
        "total": stats.total,
        "most_common": stats.most_common(),
        "counts": counts
    });
    Ok(serde_json::to_string_pretty(&output)?)
}

/// Format journal entries as JSON
///
/// # Errors
///
/// Returns `SangayError::Parse` if JSON serialization fails.
pub fn format_journal_json(entries: &[JournalEntry]) -> Result<String, SangayError> {
    let output = json!({
        "count": entries.len(),
        "items": entries
    });
    Ok(serde_json::to_string_pretty(&output)?)
}

/// Format session history as JSON
///
/// # Errors
///
/// Returns `SangayError::Parse` if JSON serialization fails.
pub fn format_sessions_json(sessions: &[SessionRecord]) -> Result<String, SangayError> {
    let output = json!({
        "count": sessions.len(),
        "items": sessions
    });
    Ok(serde_json::to_string_pretty(&output)?)
}

/// Format a session report as JSON
///
/// # Errors
///
/// Returns `SangayError::Parse` if JSON serialization fails.
pub fn format_report_json(report: &SessionReport) -> Result<String, SangayError> {
    to_json(report)
}

/// Format chat messages as JSON
///
/// # Errors
///
/// Returns `SangayError::Parse` if JSON serialization fails.
pub fn format_messages_json(messages: &[Message]) -> Result<String, SangayError> {
    let output = json!({ "messages": messages });
    Ok(serde_json::to_string_pretty(&output)?)
}

/// Generic JSON formatter for any serializable type
///
/// # Errors
///
/// Returns `SangayError::Parse` if JSON serialization fails.
pub fn to_json<T: Serialize>(value: &T) -> Result<String, SangayError> {
    Ok(serde_json::to_string_pretty(value)?)
}
