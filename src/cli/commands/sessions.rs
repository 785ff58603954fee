//! Session history command implementation.

use crate::cli::args::{OutputFormat, SessionsCommands};
use crate::error::SangayError;
use crate::features::sessions::SessionReport;
use crate::output::{format_report, format_sessions, to_json};
use crate::storage::SqliteStore;

/// Execute session history subcommands.
///
/// # Errors
///
/// Returns an error if a query fails, or if `clear` is not confirmed.
pub fn sessions(
    store: &SqliteStore,
    cmd: SessionsCommands,
    format: OutputFormat,
) -> Result<String, SangayError> {
    let storage = store.sessions();

    match cmd {
        SessionsCommands::History { limit } => format_sessions(&storage.recent(limit)?, format),
        SessionsCommands::Summary => format_report(&SessionReport::generate(&storage)?, format),
        SessionsCommands::Clear { force } => {
            if !force {
                return Err(SangayError::Validation(
                    "This will delete all session history.\nUse --force to confirm.".to_string(),
                ));
            }
            let removed = storage.clear()?;
            match format {
                OutputFormat::Json => to_json(&serde_json::json!({ "removed": removed })),
                OutputFormat::Pretty => Ok(format!(
                    "Session history cleared ({removed} session{}).",
                    if removed == 1 { "" } else { "s" }
                )),
            }
        }
    }
}
