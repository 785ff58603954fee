//! Focus and breathing sessions.
//!
//! Provides:
//! - Session records and history storage
//! - Totals across saved sessions
//! - A headless real-time runner
//! - Duration parsing and countdown formatting

mod record;
mod report;
mod runner;
mod storage;
mod timer;

pub use record::SessionRecord;
pub use report::{KindTotals, SessionReport};
pub use runner::{run_headless, SystemTime, TimeSource};
pub use storage::SessionStorage;
pub use timer::{format_duration, format_mmss, parse_duration, render_progress_bar};
