//! Configuration settings for sangay.
//!
//! Settings are loaded from `~/.sangay/config.yaml`.

use serde::{Deserialize, Serialize};

use crate::core::TimerConfig;
use crate::error::SangayError;

/// Main configuration structure.
#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq, Eq)]
#[serde(default)]
pub struct Config {
    /// Focus timer settings.
    pub focus: FocusConfig,
    /// Breathing exercise settings.
    pub breathing: BreathingConfig,
    /// History listing settings.
    pub history: HistoryConfig,
    /// Logging settings.
    pub logging: LoggingConfig,
}

/// Focus timer settings.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(default)]
pub struct FocusConfig {
    /// Work phase length in minutes.
    #[serde(default = "default_work_minutes")]
    pub work_minutes: i64,
    /// Break phase length in minutes.
    #[serde(default = "default_break_minutes")]
    pub break_minutes: i64,
}

/// Breathing exercise settings.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(default)]
pub struct BreathingConfig {
    /// Inhale length in seconds.
    #[serde(default = "default_breath_seconds")]
    pub inhale_seconds: i64,
    /// Hold length in seconds.
    #[serde(default = "default_breath_seconds")]
    pub hold_seconds: i64,
    /// Exhale length in seconds.
    #[serde(default = "default_breath_seconds")]
    pub exhale_seconds: i64,
    /// Count only focus work phases as cycles; breathing rounds are not counted.
    #[serde(default = "default_true")]
    pub count_primary_phase_only: bool,
}

/// History listing settings.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(default)]
pub struct HistoryConfig {
    /// Mood entries shown by `mood history`.
    #[serde(default = "default_mood_limit")]
    pub mood_limit: usize,
    /// Journal entries shown by `journal list`.
    #[serde(default = "default_journal_limit")]
    pub journal_limit: usize,
    /// Window for `mood stats`, in days.
    #[serde(default = "default_stats_days")]
    pub stats_days: i64,
}

/// Logging settings.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(default)]
pub struct LoggingConfig {
    /// Filter directive, e.g. `warn` or `sangay=debug`.
    #[serde(default = "default_log_level")]
    pub level: String,
}

const fn default_work_minutes() -> i64 {
    25
}

const fn default_break_minutes() -> i64 {
    5
}

const fn default_breath_seconds() -> i64 {
    4
}

const fn default_true() -> bool {
    true
}

const fn default_mood_limit() -> usize {
    5
}

const fn default_journal_limit() -> usize {
    10
}

const fn default_stats_days() -> i64 {
    7
}

fn default_log_level() -> String {
    "warn".to_string()
}

impl Default for FocusConfig {
    fn default() -> Self {
        Self {
            work_minutes: default_work_minutes(),
            break_minutes: default_break_minutes(),
        }
    }
}

impl Default for BreathingConfig {
    fn default() -> Self {
        Self {
            inhale_seconds: default_breath_seconds(),
            hold_seconds: default_breath_seconds(),
            exhale_seconds: default_breath_seconds(),
            count_primary_phase_only: default_true(),
        }
    }
}

impl Default for HistoryConfig {
    fn default() -> Self {
        Self {
            mood_limit: default_mood_limit(),
            journal_limit: default_journal_limit(),
            stats_days: default_stats_days(),
        }
    }
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: default_log_level(),
        }
    }
}

impl FocusConfig {
    /// Build the timer configuration for a focus session.
    ///
    /// # Errors
    ///
    /// Returns `SangayError::InvalidConfiguration` for out-of-range minutes.
    pub fn timer_config(&self) -> Result<TimerConfig, SangayError> {
        TimerConfig::focus(
            minutes_to_seconds("work", self.work_minutes)?,
            minutes_to_seconds("break", self.break_minutes)?,
        )
    }
}

impl BreathingConfig {
    /// Build the timer configuration for a breathing session.
    ///
    /// # Errors
    ///
    /// Returns `SangayError::InvalidConfiguration` for out-of-range seconds.
    pub fn timer_config(&self) -> Result<TimerConfig, SangayError> {
        Ok(TimerConfig::breathing(
            self.inhale_seconds,
            self.hold_seconds,
            self.exhale_seconds,
        )?
        .with_count_primary_phase_only(self.count_primary_phase_only))
    }
}

fn minutes_to_seconds(name: &str, minutes: i64) -> Result<i64, SangayError> {
    minutes.checked_mul(60).ok_or_else(|| {
        SangayError::InvalidConfiguration(format!("{name} duration of {minutes} minutes is too long"))
    })
}

impl Config {
    /// Load configuration from a specific path.
    ///
    /// If the config file doesn't exist, returns default configuration.
    ///
    /// # Errors
    ///
    /// Returns an error if the config file exists but cannot be parsed.
    pub fn load_from_path(path: &std::path::Path) -> Result<Self, SangayError> {
        if !path.exists() {
            return Ok(Self::default());
        }

        let contents = std::fs::read_to_string(path).map_err(|e| {
            SangayError::Config(format!(
                "Failed to read config file {}: {e}",
                path.display()
            ))
        })?;

        if contents.trim().is_empty() {
            return Ok(Self::default());
        }

        serde_yaml::from_str(&contents).map_err(|e| {
            SangayError::Config(format!(
                "Failed to parse config file {}: {e}",
                path.display()
            ))
        })
    }

    /// Save configuration to a specific path.
    ///
    /// # Errors
    ///
    /// Returns an error if the config file cannot be written.
    pub fn save_to_path(&self, path: &std::path::Path) -> Result<(), SangayError> {
        let contents = serde_yaml::to_string(self)
            .map_err(|e| SangayError::Config(format!("Failed to serialize config: {e}")))?;

        std::fs::write(path, contents).map_err(|e| {
            SangayError::Config(format!(
                "Failed to write config file {}: {e}",
                path.display()
            ))
        })
    }
}
