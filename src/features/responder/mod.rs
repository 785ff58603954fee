//! Canned supportive responses.
//!
//! Provides keyword-matched replies for:
//! - Journal entries (reflection prompts)
//! - Chat messages

mod conversation;
mod rules;

pub use conversation::{Conversation, Message, Speaker};
pub use rules::{KeywordResponder, Rule, GREETING};
