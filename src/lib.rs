//! sangay - a mindfulness companion for the terminal
//!
//! This crate provides mood tracking, a prompted journal, a keyword chat
//! companion, and focus and breathing timers driven by a pure session clock.

#![deny(unsafe_code)]
#![deny(clippy::unwrap_used)]
#![deny(clippy::expect_used)]
#![warn(clippy::pedantic)]
#![warn(clippy::nursery)]
#![allow(clippy::module_name_repetitions)]
#![cfg_attr(test, allow(clippy::unwrap_used, clippy::expect_used))]

pub mod cli;
pub mod config;
pub mod core;
pub mod error;
pub mod features;
pub mod logging;
pub mod output;
pub mod storage;
pub mod tui;

pub use cli::args::{Cli, Commands, OutputFormat};
pub use core::{SessionClock, TimerConfig};
pub use error::SangayError;
