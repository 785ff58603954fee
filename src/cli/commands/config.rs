//! Configuration command implementation.

use crate::cli::args::{ConfigCommands, OutputFormat};
use crate::config::{Config, Paths};
use crate::error::SangayError;
use crate::output::to_json;

/// Execute configuration subcommands.
///
/// # Errors
///
/// Returns an error if the file cannot be written, or already exists
/// without `--force`.
pub fn config(
    cmd: ConfigCommands,
    paths: &Paths,
    current: &Config,
    format: OutputFormat,
) -> Result<String, SangayError> {
    match cmd {
        ConfigCommands::Show => match format {
            OutputFormat::Json => to_json(current),
            OutputFormat::Pretty => Ok(serde_yaml::to_string(current)?.trim_end().to_string()),
        },
        ConfigCommands::Path => Ok(paths.config_file.display().to_string()),
        ConfigCommands::Init { force } => {
            if paths.config_file.exists() && !force {
                return Err(SangayError::Validation(format!(
                    "{} already exists. Use --force to overwrite.",
                    paths.config_file.display()
                )));
            }
            paths.ensure_dirs()?;
            Config::default().save_to_path(&paths.config_file)?;
            Ok(format!("Wrote {}", paths.config_file.display()))
        }
    }
}
