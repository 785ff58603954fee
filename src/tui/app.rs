//! Application state for the timer screen.

use std::time::Instant;

use chrono::{DateTime, Utc};
use tracing::info;

use crate::core::{PhaseCompletion, SessionClock, SessionState, Ticker};
use crate::features::sessions::SessionRecord;

/// Key help shown in the status bar.
pub const HELP: &str = "space/s:start/pause | r:reset | q:quit";

/// Application state.
pub struct App {
    clock: SessionClock,
    ticker: Ticker,
    started_at: DateTime<Utc>,
    /// Most recent phase completion.
    pub last: Option<PhaseCompletion>,
    /// Status message to display.
    pub status: Option<String>,
}

impl App {
    /// Create an idle app around `clock`.
    #[must_use]
    pub fn new(clock: SessionClock) -> Self {
        Self {
            clock,
            ticker: Ticker::default(),
            started_at: Utc::now(),
            last: None,
            status: Some("Press space to begin".to_string()),
        }
    }

    /// The clock being displayed.
    #[must_use]
    pub const fn clock(&self) -> &SessionClock {
        &self.clock
    }

    /// Current clock state.
    #[must_use]
    pub const fn state(&self) -> &SessionState {
        self.clock.state()
    }

    /// Start or pause the clock, arming the ticker to match.
    pub fn toggle(&mut self, now: Instant) {
        self.clock.toggle();
        if self.clock.state().is_running() {
            self.ticker.resume(now);
            self.status = None;
        } else {
            self.ticker.suspend();
            self.status = Some("Paused".to_string());
        }
    }

    /// Return to the first phase, stopped.
    pub fn reset(&mut self) {
        self.clock.reset();
        self.ticker.suspend();
        self.last = None;
        self.status = Some("Reset".to_string());
    }

    /// Show the key help.
    pub fn show_help(&mut self) {
        self.status = Some(HELP.to_string());
    }

    /// Feed every tick due at `now` into the clock.
    ///
    /// Returns how many phases completed.
    pub fn advance(&mut self, now: Instant) -> usize {
        let mut completed = 0;
        for _ in 0..self.ticker.due(now) {
            if let Some(done) = self.clock.tick() {
                info!(completed = %done.completed, next = %done.next, "{}", done.title());
                self.last = Some(done);
                completed += 1;
            }
        }
        completed
    }

    /// Tear the screen down, yielding the session record.
    #[must_use]
    pub fn finish(mut self) -> SessionRecord {
        self.ticker.cancel();
        SessionRecord::from_summary(self.clock.finish(), self.started_at, Utc::now())
    }
}
