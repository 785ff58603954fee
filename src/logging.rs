//! Logging initialization.
//!
//! Log lines go to stderr for ordinary commands and to
//! `~/.sangay/logs/sangay.log` while the timer screen owns the terminal.
//! `SANGAY_LOG` overrides the configured level, e.g.
//! `SANGAY_LOG=sangay=debug`.

use std::fs::OpenOptions;
use std::sync::Mutex;

use tracing_subscriber::{fmt, layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use crate::config::{LoggingConfig, Paths};
use crate::error::SangayError;

/// Environment variable that overrides the configured filter.
pub const LOG_ENV: &str = "SANGAY_LOG";

/// Where log lines are written.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LogTarget {
    /// Standard error.
    Stderr,
    /// The log file under the data directory.
    File,
}

/// Build the filter from `SANGAY_LOG`, falling back to the configured level.
#[must_use]
pub fn build_filter(config: &LoggingConfig) -> EnvFilter {
    EnvFilter::try_from_env(LOG_ENV)
        .or_else(|_| EnvFilter::try_new(&config.level))
        .unwrap_or_else(|_| EnvFilter::new("warn"))
}

/// Install the global subscriber.
///
/// Returns `false` when a global subscriber was already installed; the
/// existing one is kept.
///
/// # Errors
///
/// Returns an error if the log file cannot be opened.
pub fn init(config: &LoggingConfig, target: LogTarget, paths: &Paths) -> Result<bool, SangayError> {
    let filter = build_filter(config);

    let result = match target {
        LogTarget::Stderr => tracing_subscriber::registry()
            .with(filter)
            .with(fmt::layer().compact().with_target(false).with_writer(std::io::stderr))
            .try_init(),
        LogTarget::File => {
            paths.ensure_dirs()?;
            let file = OpenOptions::new()
                .create(true)
                .append(true)
                .open(paths.log_file())?;
            tracing_subscriber::registry()
                .with(filter)
                .with(fmt::layer().with_ansi(false).with_writer(Mutex::new(file)))
                .try_init()
        }
    };

    match result {
        Ok(()) => Ok(true),
        Err(e) => {
            tracing::debug!(error = %e, "keeping existing subscriber");
            Ok(false)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_build_filter_uses_config_level() {
        let config = LoggingConfig {
            level: "sangay=debug".to_string(),
        };
        let filter = build_filter(&config);
        if std::env::var(LOG_ENV).is_err() {
            assert_eq!(filter.to_string(), "sangay=debug");
        }
    }

    #[test]
    fn test_build_filter_falls_back_on_garbage() {
        let config = LoggingConfig {
            level: "sangay=loud".to_string(),
        };
        if std::env::var(LOG_ENV).is_err() {
            assert_eq!(build_filter(&config).to_string(), "warn");
        }
    }

    #[test]
    fn test_file_target_creates_log_file() {
        let temp_dir = TempDir::new().unwrap();
        let paths = Paths::with_root(temp_dir.path().to_path_buf());

        init(&LoggingConfig::default(), LogTarget::File, &paths).unwrap();
        assert!(paths.log_file().exists());
    }

    #[test]
    fn test_second_init_reports_existing_subscriber() {
        let temp_dir = TempDir::new().unwrap();
        let paths = Paths::with_root(temp_dir.path().to_path_buf());

        init(&LoggingConfig::default(), LogTarget::Stderr, &paths).unwrap();
        let installed = init(&LoggingConfig::default(), LogTarget::Stderr, &paths).unwrap();
        assert!(!installed);
    }
}
