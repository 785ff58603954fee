//! Feature implementations for sangay.
//!
//! - Mood tracking and stats
//! - Journal entries with writing prompts
//! - Keyword companion chat
//! - Focus and breathing session history

pub mod journal;
pub mod mood;
pub mod responder;
pub mod sessions;
