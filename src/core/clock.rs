//! Session clock driving focus and breathing sessions.
//!
//! The clock never schedules itself. A host calls [`SessionClock::tick`] once
//! per elapsed second while the clock is running, and reacts to the
//! [`PhaseCompletion`] it returns.

use serde::{Deserialize, Serialize};
use tracing::debug;

use super::phase::{self, Phase, SessionKind, TimerConfig};

/// Mutable session state, owned by a [`SessionClock`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct SessionState {
    phase: Phase,
    remaining_seconds: u32,
    is_running: bool,
    completed_cycles: u32,
    elapsed_seconds: u64,
}

impl SessionState {
    /// Current phase.
    #[must_use]
    pub const fn phase(&self) -> Phase {
        self.phase
    }

    /// Seconds left in the current phase.
    #[must_use]
    pub const fn remaining_seconds(&self) -> u32 {
        self.remaining_seconds
    }

    /// Whether ticks currently advance the clock.
    #[must_use]
    pub const fn is_running(&self) -> bool {
        self.is_running
    }

    /// Number of counted cycles completed so far.
    #[must_use]
    pub const fn completed_cycles(&self) -> u32 {
        self.completed_cycles
    }

    /// Running seconds consumed since the session was created.
    #[must_use]
    pub const fn elapsed_seconds(&self) -> u64 {
        self.elapsed_seconds
    }
}

/// Notification emitted when a phase runs out.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct PhaseCompletion {
    /// The phase that just finished.
    pub completed: Phase,
    /// The phase now running.
    pub next: Phase,
    /// Duration of the next phase, in seconds.
    pub next_duration: u32,
    /// Cycle count after this completion.
    pub completed_cycles: u32,
}

impl PhaseCompletion {
    /// Short headline for the notification.
    #[must_use]
    pub fn title(&self) -> String {
        match self.completed {
            Phase::Work => "Work Session Complete!".to_string(),
            Phase::Break => "Break Complete!".to_string(),
            Phase::Inhale | Phase::Hold | Phase::Exhale => self.next.display_name().to_string(),
        }
    }

    /// Body text for the notification.
    #[must_use]
    pub fn message(&self) -> String {
        match self.next {
            Phase::Break => format!("Take a {} break.", describe_span(self.next_duration)),
            Phase::Work => "Ready for your next work session?".to_string(),
            Phase::Inhale | Phase::Hold | Phase::Exhale => {
                let seconds = self.next_duration;
                format!(
                    "{} for {seconds} second{}",
                    self.next,
                    if seconds == 1 { "" } else { "s" }
                )
            }
        }
    }
}

/// "5-minute", "90-second" style span used in notifications.
fn describe_span(seconds: u32) -> String {
    if seconds >= 60 && seconds % 60 == 0 {
        format!("{}-minute", seconds / 60)
    } else {
        format!("{seconds}-second")
    }
}

/// What a finished session amounted to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct SessionSummary {
    /// Which cycle ran.
    pub kind: SessionKind,
    /// Counted cycles completed.
    pub completed_cycles: u32,
    /// Running seconds consumed.
    pub elapsed_seconds: u64,
}

/// Countdown clock walking a [`TimerConfig`]'s phase sequence.
#[derive(Debug, Clone)]
pub struct SessionClock {
    config: TimerConfig,
    state: SessionState,
}

impl SessionClock {
    /// Create an idle clock at the start of the sequence.
    #[must_use]
    pub const fn new(config: TimerConfig) -> Self {
        let phase = phase::initial_phase(&config);
        Self {
            state: SessionState {
                phase,
                remaining_seconds: phase::duration_for(phase, &config),
                is_running: false,
                completed_cycles: 0,
                elapsed_seconds: 0,
            },
            config,
        }
    }

    /// The configuration this clock was built with.
    #[must_use]
    pub const fn config(&self) -> &TimerConfig {
        &self.config
    }

    /// Snapshot of the current state.
    #[must_use]
    pub const fn state(&self) -> &SessionState {
        &self.state
    }

    /// Start or resume ticking.
    ///
    /// An exhausted phase is reloaded with its full duration first.
    pub fn start(&mut self) {
        if self.state.is_running {
            return;
        }
        if self.state.remaining_seconds == 0 {
            self.state.remaining_seconds = self.total_for_phase();
        }
        self.state.is_running = true;
        debug!(
            phase = %self.state.phase,
            remaining = self.state.remaining_seconds,
            "session clock started"
        );
    }

    /// Pause ticking, keeping the remaining time.
    pub fn pause(&mut self) {
        if !self.state.is_running {
            return;
        }
        self.state.is_running = false;
        debug!(
            phase = %self.state.phase,
            remaining = self.state.remaining_seconds,
            "session clock paused"
        );
    }

    /// Stop and return to the initial phase with its full duration.
    ///
    /// The cycle counter is kept.
    pub fn reset(&mut self) {
        let phase = phase::initial_phase(&self.config);
        self.state.is_running = false;
        self.state.phase = phase;
        self.state.remaining_seconds = phase::duration_for(phase, &self.config);
        debug!(phase = %phase, "session clock reset");
    }

    /// Toggle between running and paused.
    pub fn toggle(&mut self) {
        if self.state.is_running {
            self.pause();
        } else {
            self.start();
        }
    }

    /// Advance the clock by one second.
    ///
    /// Does nothing unless running. Returns the completion notification when
    /// the current phase runs out; the clock then carries on with the next
    /// phase.
    pub fn tick(&mut self) -> Option<PhaseCompletion> {
        if !self.state.is_running {
            return None;
        }

        self.state.elapsed_seconds += 1;
        self.state.remaining_seconds = self.state.remaining_seconds.saturating_sub(1);
        if self.state.remaining_seconds > 0 {
            return None;
        }

        let completed = self.state.phase;
        let (next, next_duration) = phase::next_phase(completed, &self.config);
        if self.config.counts_completion_of(completed) {
            self.state.completed_cycles += 1;
        }
        self.state.phase = next;
        self.state.remaining_seconds = next_duration;

        debug!(
            completed = %completed,
            next = %next,
            cycles = self.state.completed_cycles,
            "phase complete"
        );

        Some(PhaseCompletion {
            completed,
            next,
            next_duration,
            completed_cycles: self.state.completed_cycles,
        })
    }

    /// Full configured duration of the current phase.
    #[must_use]
    pub const fn total_for_phase(&self) -> u32 {
        phase::duration_for(self.state.phase, &self.config)
    }

    /// Fraction of the current phase already elapsed, in `[0, 1]`.
    ///
    /// A zero-length phase reports `1.0`.
    #[must_use]
    pub fn progress_fraction(&self) -> f64 {
        let total = self.total_for_phase();
        if total == 0 {
            return 1.0;
        }
        let remaining = self.state.remaining_seconds.min(total);
        1.0 - f64::from(remaining) / f64::from(total)
    }

    /// Tear the session down, yielding its summary.
    #[must_use]
    pub fn finish(self) -> SessionSummary {
        debug!(
            kind = %self.config.kind(),
            cycles = self.state.completed_cycles,
            elapsed = self.state.elapsed_seconds,
            "session finished"
        );
        SessionSummary {
            kind: self.config.kind(),
            completed_cycles: self.state.completed_cycles,
            elapsed_seconds: self.state.elapsed_seconds,
        }
    }
}
