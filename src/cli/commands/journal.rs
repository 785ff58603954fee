//! Journal command implementation.

use colored::Colorize;

use crate::cli::args::{JournalCommands, OutputFormat};
use crate::config::HistoryConfig;
use crate::core::save_best_effort;
use crate::error::SangayError;
use crate::features::journal::JournalEntry;
use crate::features::responder::KeywordResponder;
use crate::output::{format_journal, format_journal_saved_pretty, to_json};
use crate::storage::{Record, SqliteStore};

/// Execute journal subcommands.
///
/// # Errors
///
/// Returns `SangayError::Validation` for blank text, or an error if a query
/// or formatting fails.
pub fn journal(
    store: &SqliteStore,
    cmd: JournalCommands,
    history: &HistoryConfig,
    format: OutputFormat,
) -> Result<String, SangayError> {
    match cmd {
        JournalCommands::Add { text } => {
            let mut entry = JournalEntry::compose(&text, &KeywordResponder::journal_prompts())?;
            entry.id = save_best_effort(store, &Record::Journal(entry.clone()));

            match format {
                OutputFormat::Json => to_json(&entry),
                OutputFormat::Pretty => {
                    let mut output = format_journal_saved_pretty(&entry);
                    if entry.id.is_none() {
                        output = format!(
                            "{}\n\n{}",
                            "Could not save this entry".yellow(),
                            entry.prompt.unwrap_or_default().cyan()
                        );
                    }
                    Ok(output)
                }
            }
        }
        JournalCommands::List { limit } => {
            let entries = store
                .journal()
                .recent(limit.unwrap_or(history.journal_limit))?;
            format_journal(&entries, format)
        }
    }
}
