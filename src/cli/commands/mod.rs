//! Command implementations for sangay.
//!
//! Every command returns the text to print; `main` prints it.

mod chat;
mod config;
mod journal;
mod mood;
mod sessions;
mod timer;

pub use chat::{chat, converse};
pub use config::config;
pub use journal::journal;
pub use mood::mood;
pub use sessions::sessions;
pub use timer::{breathe, breathing_config, focus, focus_config, run_printing};

use clap::CommandFactory;
use clap_complete::Shell;

use crate::cli::args::Cli;
use crate::error::SangayError;

/// Generate a shell completion script.
///
/// # Errors
///
/// Returns `SangayError::Parse` if the script is not valid UTF-8.
pub fn completions(shell: Shell) -> Result<String, SangayError> {
    let mut cmd = Cli::command();
    let mut buf = Vec::new();
    clap_complete::generate(shell, &mut cmd, "sangay", &mut buf);
    String::from_utf8(buf).map_err(|e| SangayError::Parse(format!("UTF-8 error: {e}")))
}
