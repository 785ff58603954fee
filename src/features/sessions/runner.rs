//! Headless session runner.
//!
//! Drives a [`SessionClock`] in real time without a terminal UI, reporting
//! each phase completion to a callback.

use std::ops::ControlFlow;
use std::time::{Duration, Instant};

use chrono::Utc;
use tracing::info;

use super::record::SessionRecord;
use crate::core::{initial_phase, PhaseCompletion, SessionClock, SessionState, Ticker};

/// Source of time for the runner.
pub trait TimeSource {
    /// Current instant.
    fn now(&self) -> Instant;
    /// Block for `duration`.
    fn sleep(&self, duration: Duration);
}

/// Real wall-clock time.
#[derive(Debug, Clone, Copy, Default)]
pub struct SystemTime;

impl TimeSource for SystemTime {
    fn now(&self) -> Instant {
        Instant::now()
    }

    fn sleep(&self, duration: Duration) {
        std::thread::sleep(duration);
    }
}

/// Run `clock` until `rounds` full passes through its phase sequence finish.
///
/// With `rounds == None` the session runs until the process is stopped or
/// `on_complete` returns [`ControlFlow::Break`]. Returns the record of
/// whatever part of the session ran.
pub fn run_headless<T, F>(
    mut clock: SessionClock,
    time: &T,
    rounds: Option<u32>,
    mut on_complete: F,
) -> SessionRecord
where
    T: TimeSource + ?Sized,
    F: FnMut(&PhaseCompletion, &SessionState) -> ControlFlow<()>,
{
    let started_at = Utc::now();
    let first = initial_phase(clock.config());
    let mut ticker = Ticker::default();
    let mut finished_rounds = 0u32;

    clock.start();
    ticker.resume(time.now());
    info!(kind = %clock.config().kind(), ?rounds, "headless session started");

    'run: loop {
        if rounds.is_some_and(|limit| finished_rounds >= limit) {
            break;
        }

        let now = time.now();
        for _ in 0..ticker.due(now) {
            if let Some(done) = clock.tick() {
                if on_complete(&done, clock.state()).is_break() {
                    info!("headless session stopped early");
                    break 'run;
                }
                if done.next == first {
                    finished_rounds += 1;
                    if rounds.is_some_and(|limit| finished_rounds >= limit) {
                        break 'run;
                    }
                }
            }
        }

        let wait = ticker.until_next(time.now()).unwrap_or(ticker.period());
        time.sleep(wait);
    }

    ticker.cancel();
    SessionRecord::from_summary(clock.finish(), started_at, Utc::now())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::{Phase, SessionKind, TimerConfig};
    use std::cell::Cell;

    /// Virtual clock that advances only when slept on.
    struct FakeTime {
        now: Cell<Instant>,
        sleeps: Cell<u32>,
    }

    impl FakeTime {
        fn new() -> Self {
            Self {
                now: Cell::new(Instant::now()),
                sleeps: Cell::new(0),
            }
        }
    }

    impl TimeSource for FakeTime {
        fn now(&self) -> Instant {
            self.now.get()
        }

        fn sleep(&self, duration: Duration) {
            self.sleeps.set(self.sleeps.get() + 1);
            self.now.set(self.now.get() + duration);
        }
    }

    #[test]
    fn test_runs_requested_rounds() {
        let clock = SessionClock::new(TimerConfig::focus(3, 2).unwrap());
        let time = FakeTime::new();
        let mut seen = Vec::new();

        let record = run_headless(clock, &time, Some(2), |done, _| {
            seen.push(done.completed);
            ControlFlow::Continue(())
        });

        assert_eq!(
            seen,
            vec![Phase::Work, Phase::Break, Phase::Work, Phase::Break]
        );
        assert_eq!(record.kind, SessionKind::Focus);
        assert_eq!(record.completed_cycles, 2);
        assert_eq!(record.elapsed_seconds, 10);
        assert_eq!(time.sleeps.get(), 10);
    }

    #[test]
    fn test_breathing_round() {
        let clock = SessionClock::new(TimerConfig::breathing(4, 4, 4).unwrap());
        let time = FakeTime::new();
        let mut states = Vec::new();

        let record = run_headless(clock, &time, Some(1), |done, state| {
            states.push((done.next, state.remaining_seconds()));
            ControlFlow::Continue(())
        });

        assert_eq!(
            states,
            vec![(Phase::Hold, 4), (Phase::Exhale, 4), (Phase::Inhale, 4)]
        );
        assert_eq!(record.completed_cycles, 0);
        assert_eq!(record.elapsed_seconds, 12);
    }

    #[test]
    fn test_zero_rounds_returns_immediately() {
        let clock = SessionClock::new(TimerConfig::focus(3, 2).unwrap());
        let time = FakeTime::new();

        let record = run_headless(clock, &time, Some(0), |_, _| ControlFlow::Continue(()));
        assert!(record.is_empty());
        assert_eq!(time.sleeps.get(), 0);
    }

    #[test]
    fn test_break_stops_unbounded_run() {
        let clock = SessionClock::new(TimerConfig::focus(3, 2).unwrap());
        let time = FakeTime::new();
        let mut calls = 0;

        let record = run_headless(clock, &time, None, |_, _| {
            calls += 1;
            ControlFlow::Break(())
        });

        assert_eq!(calls, 1);
        assert_eq!(record.completed_cycles, 1);
        assert_eq!(record.elapsed_seconds, 3);
        assert_eq!(time.sleeps.get(), 3);
    }
}
