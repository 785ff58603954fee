//! Terminal User Interface (TUI) for sangay.
//!
//! A live countdown screen for focus and breathing sessions.
//! Built with ratatui and crossterm.

mod app;
mod event;
mod ui;

pub use app::App;

use std::io;
use std::time::Instant;

use crossterm::{
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use ratatui::prelude::*;
use tracing::debug;

use crate::core::SessionClock;
use crate::error::SangayError;
use crate::features::sessions::SessionRecord;

/// Run the timer screen until the user quits.
///
/// Returns the finished session's record.
///
/// # Errors
///
/// Returns an error if the terminal fails to initialize or draw.
pub fn run(clock: SessionClock) -> Result<SessionRecord, SangayError> {
    enable_raw_mode().map_err(|e| SangayError::Config(format!("Failed to enable raw mode: {e}")))?;
    let mut stdout = io::stdout();
    if let Err(e) = execute!(stdout, EnterAlternateScreen) {
        disable_raw_mode().ok();
        return Err(SangayError::Config(format!("Failed to setup terminal: {e}")));
    }

    let backend = CrosstermBackend::new(stdout);
    let mut app = App::new(clock);
    let result = Terminal::new(backend)
        .map_err(|e| SangayError::Config(format!("Failed to create terminal: {e}")))
        .and_then(|mut terminal| {
            let result = run_app(&mut terminal, &mut app);
            terminal.show_cursor().ok();
            result
        });

    // Restore terminal
    disable_raw_mode().ok();
    execute!(io::stdout(), LeaveAlternateScreen).ok();

    let record = app.finish();
    result.map(|()| record)
}

/// Run the main application loop.
fn run_app<B: Backend>(terminal: &mut Terminal<B>, app: &mut App) -> Result<(), SangayError> {
    loop {
        app.advance(Instant::now());

        terminal
            .draw(|frame| ui::render(frame, app))
            .map_err(|e| SangayError::Config(format!("Failed to draw: {e}")))?;

        if let Some(action) = event::handle_events()? {
            debug!(?action, "key action");
            match action {
                event::Action::Quit => break,
                event::Action::Toggle => app.toggle(Instant::now()),
                event::Action::Reset => app.reset(),
                event::Action::Help => app.show_help(),
            }
        }
    }

    Ok(())
}
