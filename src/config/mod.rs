//! Configuration management for sangay.
//!
//! This module handles loading and saving configuration from `~/.sangay/`.

mod paths;
mod settings;

pub use paths::Paths;
pub use settings::{BreathingConfig, Config, FocusConfig, HistoryConfig, LoggingConfig};
