//! Mood command implementation.

use chrono::{Duration, Utc};
use colored::Colorize;

use crate::cli::args::{MoodCommands, OutputFormat};
use crate::config::HistoryConfig;
use crate::core::save_best_effort;
use crate::error::SangayError;
use crate::features::mood::{mood_stats, Mood, MoodEntry};
use crate::output::{format_mood_logged_pretty, format_mood_stats, format_moods, to_json};
use crate::storage::{Record, SqliteStore};

/// Execute mood subcommands.
///
/// # Errors
///
/// Returns an error for an unknown mood, a failed query, or a formatting
/// failure.
pub fn mood(
    store: &SqliteStore,
    cmd: MoodCommands,
    history: &HistoryConfig,
    format: OutputFormat,
) -> Result<String, SangayError> {
    match cmd {
        MoodCommands::Log { mood, note } => log_mood(store, &mood, note, format),
        MoodCommands::History { limit } => {
            let entries = store.moods().recent(limit.unwrap_or(history.mood_limit))?;
            format_moods(&entries, format)
        }
        MoodCommands::Stats { days } => {
            let days = days.unwrap_or(history.stats_days);
            if days <= 0 {
                return Err(SangayError::Validation(
                    "Days must be a positive number".to_string(),
                ));
            }
            let now = Utc::now();
            let since = Duration::try_days(days)
                .and_then(|window| now.checked_sub_signed(window))
                .ok_or_else(|| SangayError::Validation(format!("Too many days: {days}")))?;
            let entries = store.moods().since(since)?;
            format_mood_stats(&mood_stats(&entries, now, days), format)
        }
    }
}

fn log_mood(
    store: &SqliteStore,
    mood: &str,
    note: Option<String>,
    format: OutputFormat,
) -> Result<String, SangayError> {
    let mut entry = MoodEntry::new(Mood::parse(mood)?, note);
    entry.id = save_best_effort(store, &Record::Mood(entry.clone()));

    match format {
        OutputFormat::Json => to_json(&entry),
        OutputFormat::Pretty => {
            let mut output = format_mood_logged_pretty(&entry);
            if entry.id.is_none() {
                output.push_str(&format!("\n{}", "Could not save this entry".yellow()));
            }
            Ok(output)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn history() -> HistoryConfig {
        HistoryConfig::default()
    }

    #[test]
    fn test_log_then_history() {
        let store = SqliteStore::open_in_memory().unwrap();

        let logged = mood(
            &store,
            MoodCommands::Log {
                mood: "Calm".to_string(),
                note: Some("tea".to_string()),
            },
            &history(),
            OutputFormat::Json,
        )
        .unwrap();
        let parsed: serde_json::Value = serde_json::from_str(&logged).unwrap();
        assert_eq!(parsed["mood"], "calm");
        assert!(parsed["id"].is_i64());

        let listed = mood(
            &store,
            MoodCommands::History { limit: None },
            &history(),
            OutputFormat::Json,
        )
        .unwrap();
        let parsed: serde_json::Value = serde_json::from_str(&listed).unwrap();
        assert_eq!(parsed["count"], 1);
    }

    #[test]
    fn test_unknown_mood() {
        let store = SqliteStore::open_in_memory().unwrap();
        let err = mood(
            &store,
            MoodCommands::Log {
                mood: "hangry".to_string(),
                note: None,
            },
            &history(),
            OutputFormat::Pretty,
        )
        .unwrap_err();
        assert!(matches!(err, SangayError::NotFound(_)));
    }

    #[test]
    fn test_stats_rejects_non_positive_days() {
        let store = SqliteStore::open_in_memory().unwrap();
        let result = mood(
            &store,
            MoodCommands::Stats { days: Some(0) },
            &history(),
            OutputFormat::Pretty,
        );
        assert!(matches!(result, Err(SangayError::Validation(_))));
    }

    #[test]
    fn test_stats_counts_logged_moods() {
        let store = SqliteStore::open_in_memory().unwrap();
        for name in ["happy", "happy", "tired"] {
            mood(
                &store,
                MoodCommands::Log {
                    mood: name.to_string(),
                    note: None,
                },
                &history(),
                OutputFormat::Json,
            )
            .unwrap();
        }

        let stats = mood(
            &store,
            MoodCommands::Stats { days: None },
            &history(),
            OutputFormat::Json,
        )
        .unwrap();
        let parsed: serde_json::Value = serde_json::from_str(&stats).unwrap();
        assert_eq!(parsed["total"], 3);
        assert_eq!(parsed["most_common"], "happy");
    }
}
