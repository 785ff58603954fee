//! Path resolution for sangay configuration and data files.
//!
//! All sangay data is stored in `~/.sangay/`:
//! - `config.yaml` - Main configuration file
//! - `sangay.db` - SQLite database for moods, journal and sessions
//! - `logs/` - Log files written while the timer screen is open

use std::path::PathBuf;

use crate::error::SangayError;

/// Paths to sangay configuration and data directories.
#[derive(Debug, Clone)]
pub struct Paths {
    /// Root directory: `~/.sangay/`
    pub root: PathBuf,
    /// Config file: `~/.sangay/config.yaml`
    pub config_file: PathBuf,
    /// Database file: `~/.sangay/sangay.db`
    pub database: PathBuf,
    /// Logs directory: `~/.sangay/logs/`
    pub logs: PathBuf,
}

impl Paths {
    /// Create paths based on the user's home directory.
    ///
    /// # Errors
    ///
    /// Returns an error if the home directory cannot be determined.
    pub fn new() -> Result<Self, SangayError> {
        let home = std::env::var("HOME")
            .map_err(|_| SangayError::Config("Could not determine home directory".to_string()))?;

        Ok(Self::with_root(PathBuf::from(home).join(".sangay")))
    }

    /// Create paths with a custom root directory (useful for testing).
    #[must_use]
    pub fn with_root(root: PathBuf) -> Self {
        Self {
            config_file: root.join("config.yaml"),
            database: root.join("sangay.db"),
            logs: root.join("logs"),
            root,
        }
    }

    /// Log file used by the timer screen.
    #[must_use]
    pub fn log_file(&self) -> PathBuf {
        self.logs.join("sangay.log")
    }

    /// Ensure all directories exist, creating them if necessary.
    ///
    /// # Errors
    ///
    /// Returns an error if directory creation fails.
    pub fn ensure_dirs(&self) -> Result<(), SangayError> {
        for dir in [&self.root, &self.logs] {
            if !dir.exists() {
                std::fs::create_dir_all(dir).map_err(|e| {
                    SangayError::Config(format!(
                        "Failed to create directory {}: {e}",
                        dir.display()
                    ))
                })?;
            }
        }

        Ok(())
    }
}

impl Default for Paths {
    fn default() -> Self {
        Self::new().unwrap_or_else(|_| Self::with_root(PathBuf::from(".sangay")))
    }
}
