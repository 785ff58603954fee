//! Journaling with reflection prompts.

mod entry;
mod storage;

pub use entry::JournalEntry;
pub use storage::JournalStorage;
