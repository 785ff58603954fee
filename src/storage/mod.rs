//! Storage layer for sangay.
//!
//! This module provides SQLite-based persistence for:
//! - Mood entries
//! - Journal entries
//! - Finished focus and breathing sessions

mod database;
mod migrations;
mod store;

pub use database::Database;
pub use store::{Record, SqliteStore};

pub(crate) use store::parse_timestamp;
