//! Event handling for the timer screen.

use std::time::Duration;

use crossterm::event::{self, Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers};

use crate::error::SangayError;

/// How long to wait for input before redrawing.
pub const POLL_INTERVAL: Duration = Duration::from_millis(100);

/// Action to take after handling an event.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Action {
    /// Quit the screen.
    Quit,
    /// Start or pause the clock.
    Toggle,
    /// Reset to the first phase.
    Reset,
    /// Show key help.
    Help,
}

/// Map a key press to an action.
#[must_use]
pub fn map_key(key: KeyEvent) -> Option<Action> {
    if key.kind == KeyEventKind::Release {
        return None;
    }

    // Handle Ctrl+C
    if key.modifiers.contains(KeyModifiers::CONTROL) && key.code == KeyCode::Char('c') {
        return Some(Action::Quit);
    }

    match key.code {
        KeyCode::Char('q') | KeyCode::Esc => Some(Action::Quit),
        KeyCode::Char(' ' | 's') | KeyCode::Enter => Some(Action::Toggle),
        KeyCode::Char('r') => Some(Action::Reset),
        KeyCode::Char('?') => Some(Action::Help),
        _ => None,
    }
}

/// Wait up to [`POLL_INTERVAL`] for a key press.
///
/// Returns an action to take, or None if no action is needed.
///
/// # Errors
///
/// Returns an error if event polling fails.
pub fn handle_events() -> Result<Option<Action>, SangayError> {
    if event::poll(POLL_INTERVAL)
        .map_err(|e| SangayError::Config(format!("Event poll failed: {e}")))?
    {
        if let Event::Key(key) =
            event::read().map_err(|e| SangayError::Config(format!("Event read failed: {e}")))?
        {
            return Ok(map_key(key));
        }
    }

    Ok(None)
}
