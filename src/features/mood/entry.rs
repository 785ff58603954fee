//! Mood types and entries.

use chrono::{DateTime, Local, Utc};
use serde::{Deserialize, Serialize};

use crate::error::SangayError;

/// One of the moods a user can record.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Mood {
    Happy,
    Calm,
    Neutral,
    Sad,
    Anxious,
    Angry,
    Tired,
    Grateful,
}

impl Mood {
    /// Every mood, in display order.
    pub const ALL: [Self; 8] = [
        Self::Happy,
        Self::Calm,
        Self::Neutral,
        Self::Sad,
        Self::Anxious,
        Self::Angry,
        Self::Tired,
        Self::Grateful,
    ];

    /// Get display name.
    #[must_use]
    pub const fn label(&self) -> &'static str {
        match self {
            Self::Happy => "Happy",
            Self::Calm => "Calm",
            Self::Neutral => "Neutral",
            Self::Sad => "Sad",
            Self::Anxious => "Anxious",
            Self::Angry => "Angry",
            Self::Tired => "Tired",
            Self::Grateful => "Grateful",
        }
    }

    /// Emoji shown next to the label.
    #[must_use]
    pub const fn emoji(&self) -> &'static str {
        match self {
            Self::Happy => "😊",
            Self::Calm => "😌",
            Self::Neutral => "😐",
            Self::Sad => "😔",
            Self::Anxious => "😰",
            Self::Angry => "😡",
            Self::Tired => "😴",
            Self::Grateful => "🤗",
        }
    }

    /// Accent colour as an RGB triple.
    #[must_use]
    pub const fn rgb(&self) -> (u8, u8, u8) {
        match self {
            Self::Happy => (0x4C, 0xAF, 0x50),
            Self::Calm => (0x21, 0x96, 0xF3),
            Self::Neutral => (0x9E, 0x9E, 0x9E),
            Self::Sad => (0x60, 0x7D, 0x8B),
            Self::Anxious => (0xFF, 0x98, 0x00),
            Self::Angry => (0xF4, 0x43, 0x36),
            Self::Tired => (0x79, 0x55, 0x48),
            Self::Grateful => (0xE9, 0x1E, 0x63),
        }
    }

    /// Stable identifier used in storage.
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Happy => "happy",
            Self::Calm => "calm",
            Self::Neutral => "neutral",
            Self::Sad => "sad",
            Self::Anxious => "anxious",
            Self::Angry => "angry",
            Self::Tired => "tired",
            Self::Grateful => "grateful",
        }
    }

    /// Parse a mood label, case-insensitively.
    ///
    /// # Errors
    ///
    /// Returns `SangayError::NotFound` for an unknown label.
    pub fn parse(s: &str) -> Result<Self, SangayError> {
        let needle = s.trim();
        Self::ALL
            .into_iter()
            .find(|m| m.as_str().eq_ignore_ascii_case(needle) || m.emoji() == needle)
            .ok_or_else(|| {
                let known = Self::ALL.map(|m| m.as_str()).join(", ");
                SangayError::NotFound(format!("Unknown mood '{needle}' (expected one of: {known})"))
            })
    }
}

impl std::fmt::Display for Mood {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.label())
    }
}

/// A recorded mood.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MoodEntry {
    /// Database ID (None if not persisted)
    pub id: Option<i64>,
    /// The mood picked.
    pub mood: Mood,
    /// Optional free-text note.
    pub note: Option<String>,
    /// When the mood was recorded.
    pub recorded_at: DateTime<Utc>,
}

impl MoodEntry {
    /// Record a mood now. Blank notes are dropped.
    #[must_use]
    pub fn new(mood: Mood, note: Option<String>) -> Self {
        Self::at(mood, note, Utc::now())
    }

    /// Record a mood at a given time.
    #[must_use]
    pub fn at(mood: Mood, note: Option<String>, recorded_at: DateTime<Utc>) -> Self {
        let note = note
            .map(|n| n.trim().to_string())
            .filter(|n| !n.is_empty());
        Self {
            id: None,
            mood,
            note,
            recorded_at,
        }
    }

    /// Get record time in local timezone.
    #[must_use]
    pub fn recorded_at_local(&self) -> DateTime<Local> {
        self.recorded_at.with_timezone(&Local)
    }
}
