//! Chat transcript.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::rules::GREETING;
use crate::core::ResponderService;

/// Who wrote a message.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Speaker {
    /// The person using the app.
    User,
    /// The canned responder.
    Companion,
}

/// One line of a conversation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Message {
    /// Author of the message.
    pub speaker: Speaker,
    /// Message text.
    pub text: String,
    /// When the message was added.
    pub sent_at: DateTime<Utc>,
}

/// An ordered chat transcript, opened by the companion's greeting.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Conversation {
    messages: Vec<Message>,
}

impl Conversation {
    /// Start a conversation with the greeting.
    #[must_use]
    pub fn new() -> Self {
        Self {
            messages: vec![Message {
                speaker: Speaker::Companion,
                text: GREETING.to_string(),
                sent_at: Utc::now(),
            }],
        }
    }

    /// Send `text` and append the responder's reply.
    ///
    /// Blank input is ignored and yields `None`.
    pub fn send<R: ResponderService + ?Sized>(
        &mut self,
        text: &str,
        responder: &R,
    ) -> Option<&Message> {
        let text = text.trim();
        if text.is_empty() {
            return None;
        }

        let reply = responder.respond(text);
        self.messages.push(Message {
            speaker: Speaker::User,
            text: text.to_string(),
            sent_at: Utc::now(),
        });
        self.messages.push(Message {
            speaker: Speaker::Companion,
            text: reply,
            sent_at: Utc::now(),
        });
        self.messages.last()
    }

    /// All messages, oldest first.
    #[must_use]
    pub fn messages(&self) -> &[Message] {
        &self.messages
    }
}

impl Default for Conversation {
    fn default() -> Self {
        Self::new()
    }
}
