//! Phase sequencing for focus and breathing sessions.
//!
//! A [`TimerConfig`] describes one of two never-ending cycles:
//! - focus: `Work -> Break -> Work -> ...`
//! - breathing: `Inhale -> Hold -> Exhale -> Inhale -> ...`
//!
//! Everything here is pure; the clock that walks these sequences lives in
//! [`super::clock`].

use serde::{Deserialize, Serialize};

use crate::error::SangayError;

/// Upper bound for a single phase, in seconds (one day).
pub const MAX_PHASE_SECONDS: i64 = 24 * 60 * 60;

/// A named segment of a session cycle.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Phase {
    /// Focused work.
    Work,
    /// Rest between work phases.
    Break,
    /// Breathe in.
    Inhale,
    /// Hold the breath.
    Hold,
    /// Breathe out.
    Exhale,
}

impl Phase {
    /// Get display name.
    #[must_use]
    pub const fn display_name(&self) -> &'static str {
        match self {
            Self::Work => "Work",
            Self::Break => "Break",
            Self::Inhale => "Inhale",
            Self::Hold => "Hold",
            Self::Exhale => "Exhale",
        }
    }
}

impl std::fmt::Display for Phase {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.display_name())
    }
}

/// Which cycle a configuration drives.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SessionKind {
    /// Pomodoro-style work/break cycle.
    Focus,
    /// Guided inhale/hold/exhale cycle.
    Breathing,
}

impl SessionKind {
    /// Stable identifier used in storage.
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Focus => "focus",
            Self::Breathing => "breathing",
        }
    }

    /// Parse the storage identifier.
    #[must_use]
    pub fn parse(s: &str) -> Option<Self> {
        match s {
            "focus" => Some(Self::Focus),
            "breathing" => Some(Self::Breathing),
            _ => None,
        }
    }
}

impl std::fmt::Display for SessionKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Focus => write!(f, "Focus"),
            Self::Breathing => write!(f, "Breathing"),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Durations {
    Focus { work: u32, rest: u32 },
    Breathing { inhale: u32, hold: u32, exhale: u32 },
}

/// Immutable session configuration, validated once at construction.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TimerConfig {
    durations: Durations,
    count_primary_phase_only: bool,
}

impl TimerConfig {
    /// Build a focus configuration.
    ///
    /// # Errors
    ///
    /// Returns `SangayError::InvalidConfiguration` if a duration is negative
    /// or longer than [`MAX_PHASE_SECONDS`].
    pub fn focus(work_seconds: i64, break_seconds: i64) -> Result<Self, SangayError> {
        Ok(Self {
            durations: Durations::Focus {
                work: validate("work", work_seconds)?,
                rest: validate("break", break_seconds)?,
            },
            count_primary_phase_only: true,
        })
    }

    /// Build a breathing configuration.
    ///
    /// # Errors
    ///
    /// Returns `SangayError::InvalidConfiguration` if a duration is negative
    /// or longer than [`MAX_PHASE_SECONDS`].
    pub fn breathing(
        inhale_seconds: i64,
        hold_seconds: i64,
        exhale_seconds: i64,
    ) -> Result<Self, SangayError> {
        Ok(Self {
            durations: Durations::Breathing {
                inhale: validate("inhale", inhale_seconds)?,
                hold: validate("hold", hold_seconds)?,
                exhale: validate("exhale", exhale_seconds)?,
            },
            count_primary_phase_only: true,
        })
    }

    /// Choose whether only focus work phases count as completed cycles.
    ///
    /// With `false`, a breathing cycle also counts once its exhale completes.
    #[must_use]
    pub const fn with_count_primary_phase_only(mut self, value: bool) -> Self {
        self.count_primary_phase_only = value;
        self
    }

    /// Whether only focus work phases are counted.
    #[must_use]
    pub const fn count_primary_phase_only(&self) -> bool {
        self.count_primary_phase_only
    }

    /// The cycle this configuration drives.
    #[must_use]
    pub const fn kind(&self) -> SessionKind {
        match self.durations {
            Durations::Focus { .. } => SessionKind::Focus,
            Durations::Breathing { .. } => SessionKind::Breathing,
        }
    }

    /// Whether `phase` belongs to this configuration's sequence.
    #[must_use]
    pub const fn contains(&self, phase: Phase) -> bool {
        matches!(
            (self.durations, phase),
            (Durations::Focus { .. }, Phase::Work | Phase::Break)
                | (
                    Durations::Breathing { .. },
                    Phase::Inhale | Phase::Hold | Phase::Exhale
                )
        )
    }

    /// Whether completing `phase` increments the cycle counter.
    #[must_use]
    pub const fn counts_completion_of(&self, phase: Phase) -> bool {
        match phase {
            Phase::Work => true,
            Phase::Exhale => !self.count_primary_phase_only,
            Phase::Break | Phase::Inhale | Phase::Hold => false,
        }
    }
}

fn validate(name: &str, seconds: i64) -> Result<u32, SangayError> {
    if seconds < 0 {
        return Err(SangayError::InvalidConfiguration(format!(
            "{name} duration must not be negative (got {seconds}s)"
        )));
    }
    if seconds > MAX_PHASE_SECONDS {
        return Err(SangayError::InvalidConfiguration(format!(
            "{name} duration must be at most {MAX_PHASE_SECONDS}s (got {seconds}s)"
        )));
    }
    u32::try_from(seconds)
        .map_err(|e| SangayError::InvalidConfiguration(format!("{name} duration: {e}")))
}

/// The phase every session starts in, and returns to on reset.
#[must_use]
pub const fn initial_phase(config: &TimerConfig) -> Phase {
    match config.durations {
        Durations::Focus { .. } => Phase::Work,
        Durations::Breathing { .. } => Phase::Inhale,
    }
}

/// Number of phases in one full cycle.
#[must_use]
pub const fn sequence_len(config: &TimerConfig) -> usize {
    match config.durations {
        Durations::Focus { .. } => 2,
        Durations::Breathing { .. } => 3,
    }
}

/// Configured duration of `phase`, in seconds.
///
/// Phases outside the configuration's sequence have no duration.
#[must_use]
pub const fn duration_for(phase: Phase, config: &TimerConfig) -> u32 {
    match (config.durations, phase) {
        (Durations::Focus { work, .. }, Phase::Work) => work,
        (Durations::Focus { rest, .. }, Phase::Break) => rest,
        (Durations::Breathing { inhale, .. }, Phase::Inhale) => inhale,
        (Durations::Breathing { hold, .. }, Phase::Hold) => hold,
        (Durations::Breathing { exhale, .. }, Phase::Exhale) => exhale,
        _ => 0,
    }
}

/// The phase that follows `current`, with its duration in seconds.
///
/// A phase from the other sequence counts as the end of a cycle and leads
/// back to the initial phase.
#[must_use]
pub const fn next_phase(current: Phase, config: &TimerConfig) -> (Phase, u32) {
    let next = match (config.durations, current) {
        (Durations::Focus { .. }, Phase::Work) => Phase::Break,
        (Durations::Breathing { .. }, Phase::Inhale) => Phase::Hold,
        (Durations::Breathing { .. }, Phase::Hold) => Phase::Exhale,
        _ => initial_phase(config),
    };
    (next, duration_for(next, config))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn focus() -> TimerConfig {
        TimerConfig::focus(1500, 300).unwrap()
    }

    fn breathing() -> TimerConfig {
        TimerConfig::breathing(4, 7, 8).unwrap()
    }

    #[test]
    fn test_focus_alternates() {
        let config = focus();
        assert_eq!(next_phase(Phase::Work, &config), (Phase::Break, 300));
        assert_eq!(next_phase(Phase::Break, &config), (Phase::Work, 1500));
    }

    #[test]
    fn test_breathing_order() {
        let config = breathing();
        assert_eq!(next_phase(Phase::Inhale, &config), (Phase::Hold, 7));
        assert_eq!(next_phase(Phase::Hold, &config), (Phase::Exhale, 8));
        assert_eq!(next_phase(Phase::Exhale, &config), (Phase::Inhale, 4));
    }

    #[test]
    fn test_cycling_returns_to_start() {
        for config in [focus(), breathing()] {
            let len = sequence_len(&config);
            let start = initial_phase(&config);
            for multiple in 1..=4 {
                let mut phase = start;
                for _ in 0..len * multiple {
                    phase = next_phase(phase, &config).0;
                    assert!(config.contains(phase));
                }
                assert_eq!(phase, start);
            }
        }
    }

    #[test]
    fn test_foreign_phase_restarts_sequence() {
        assert_eq!(next_phase(Phase::Hold, &focus()), (Phase::Work, 1500));
        assert_eq!(next_phase(Phase::Break, &breathing()), (Phase::Inhale, 4));
        assert_eq!(duration_for(Phase::Work, &breathing()), 0);
    }

    #[test]
    fn test_negative_duration_rejected() {
        let err = TimerConfig::focus(-1, 300).unwrap_err();
        assert!(matches!(err, SangayError::InvalidConfiguration(_)));
        assert!(err.to_string().contains("work"));

        let err = TimerConfig::breathing(4, 4, -4).unwrap_err();
        assert!(err.to_string().contains("exhale"));
    }

    #[test]
    fn test_oversized_duration_rejected() {
        assert!(TimerConfig::focus(MAX_PHASE_SECONDS + 1, 0).is_err());
        assert!(TimerConfig::focus(MAX_PHASE_SECONDS, 0).is_ok());
    }

    #[test]
    fn test_zero_duration_allowed() {
        let config = TimerConfig::breathing(0, 0, 0).unwrap();
        assert_eq!(next_phase(Phase::Inhale, &config), (Phase::Hold, 0));
    }

    #[test]
    fn test_counted_phases() {
        let config = focus();
        assert!(config.counts_completion_of(Phase::Work));
        assert!(!config.counts_completion_of(Phase::Break));

        let config = breathing();
        assert!(!config.counts_completion_of(Phase::Exhale));
        let config = config.with_count_primary_phase_only(false);
        assert!(config.counts_completion_of(Phase::Exhale));
        assert!(!config.counts_completion_of(Phase::Inhale));
    }

    #[test]
    fn test_kind() {
        assert_eq!(focus().kind(), SessionKind::Focus);
        assert_eq!(breathing().kind(), SessionKind::Breathing);
        assert_eq!(SessionKind::parse("focus"), Some(SessionKind::Focus));
        assert_eq!(SessionKind::parse("nap"), None);
    }
}
