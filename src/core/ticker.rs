//! Host-side tick source.
//!
//! A `Ticker` turns wall-clock readings into whole tick counts. It never owns
//! a thread or a callback: the event loop asks it how many ticks are due and
//! feeds them into the session clock itself.

use std::time::{Duration, Instant};

/// Default tick period.
pub const ONE_SECOND: Duration = Duration::from_secs(1);

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum TickerState {
    Suspended,
    Armed { anchor: Instant },
    Cancelled,
}

/// Periodic tick accumulator.
#[derive(Debug, Clone)]
pub struct Ticker {
    period: Duration,
    state: TickerState,
}

impl Ticker {
    /// Create a suspended ticker.
    ///
    /// A zero period is bumped to one millisecond.
    #[must_use]
    pub fn new(period: Duration) -> Self {
        Self {
            period: period.max(Duration::from_millis(1)),
            state: TickerState::Suspended,
        }
    }

    /// Tick period.
    #[must_use]
    pub const fn period(&self) -> Duration {
        self.period
    }

    /// Arm the ticker; the first tick falls one period after `now`.
    ///
    /// Does nothing if already armed or cancelled.
    pub fn resume(&mut self, now: Instant) {
        if self.state == TickerState::Suspended {
            self.state = TickerState::Armed { anchor: now };
        }
    }

    /// Disarm the ticker, dropping any partial period.
    pub fn suspend(&mut self) {
        if matches!(self.state, TickerState::Armed { .. }) {
            self.state = TickerState::Suspended;
        }
    }

    /// Permanently stop the ticker.
    pub fn cancel(&mut self) {
        self.state = TickerState::Cancelled;
    }

    /// Whether the ticker is armed.
    #[must_use]
    pub const fn is_armed(&self) -> bool {
        matches!(self.state, TickerState::Armed { .. })
    }

    /// Whether the ticker was cancelled.
    #[must_use]
    pub const fn is_cancelled(&self) -> bool {
        matches!(self.state, TickerState::Cancelled)
    }

    /// Number of whole periods elapsed since the last due tick.
    ///
    /// The anchor advances by exactly the returned number of periods, so
    /// partial periods carry over to the next call.
    pub fn due(&mut self, now: Instant) -> u32 {
        let TickerState::Armed { anchor } = self.state else {
            return 0;
        };

        let elapsed = now.saturating_duration_since(anchor);
        let count = elapsed.as_nanos() / self.period.as_nanos();
        let count = u32::try_from(count).unwrap_or(u32::MAX);
        if count > 0 {
            self.state = TickerState::Armed {
                anchor: anchor + self.period * count,
            };
        }
        count
    }

    /// Time left until the next tick, if armed.
    #[must_use]
    pub fn until_next(&self, now: Instant) -> Option<Duration> {
        let TickerState::Armed { anchor } = self.state else {
            return None;
        };
        let next = anchor + self.period;
        Some(next.saturating_duration_since(now))
    }
}

impl Default for Ticker {
    fn default() -> Self {
        Self::new(ONE_SECOND)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_suspended_ticker_never_ticks() {
        let mut ticker = Ticker::default();
        let now = Instant::now();
        assert_eq!(ticker.due(now + Duration::from_secs(10)), 0);
        assert!(ticker.until_next(now).is_none());
    }

    #[test]
    fn test_due_counts_whole_periods() {
        let mut ticker = Ticker::default();
        let start = Instant::now();
        ticker.resume(start);

        assert_eq!(ticker.due(start + Duration::from_millis(999)), 0);
        assert_eq!(ticker.due(start + Duration::from_millis(1000)), 1);
        assert_eq!(ticker.due(start + Duration::from_millis(3500)), 2);
        assert_eq!(ticker.due(start + Duration::from_millis(4000)), 1);
    }

    #[test]
    fn test_suspend_drops_partial_period() {
        let mut ticker = Ticker::default();
        let start = Instant::now();
        ticker.resume(start);
        ticker.suspend();
        assert!(!ticker.is_armed());

        let later = start + Duration::from_millis(900);
        ticker.resume(later);
        assert_eq!(ticker.due(start + Duration::from_millis(1500)), 0);
        assert_eq!(ticker.due(later + Duration::from_secs(1)), 1);
    }

    #[test]
    fn test_resume_while_armed_keeps_anchor() {
        let mut ticker = Ticker::default();
        let start = Instant::now();
        ticker.resume(start);
        ticker.resume(start + Duration::from_millis(500));
        assert_eq!(ticker.due(start + Duration::from_secs(1)), 1);
    }

    #[test]
    fn test_cancel_is_permanent() {
        let mut ticker = Ticker::default();
        let start = Instant::now();
        ticker.resume(start);
        ticker.cancel();
        ticker.resume(start);

        assert!(ticker.is_cancelled());
        assert_eq!(ticker.due(start + Duration::from_secs(5)), 0);
    }

    #[test]
    fn test_until_next() {
        let mut ticker = Ticker::default();
        let start = Instant::now();
        ticker.resume(start);
        assert_eq!(
            ticker.until_next(start + Duration::from_millis(250)),
            Some(Duration::from_millis(750))
        );
    }
}
