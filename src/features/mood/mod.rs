//! Mood tracking.
//!
//! Record how you feel, review recent entries, and see which moods dominated
//! the past week.

mod entry;
mod stats;
mod storage;

pub use entry::{Mood, MoodEntry};
pub use stats::{mood_stats, MoodStats};
pub use storage::MoodStorage;
