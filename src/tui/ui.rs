//! UI rendering for the timer screen.

use ratatui::{
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Gauge, Paragraph},
    Frame,
};

use crate::core::{Phase, SessionKind};
use crate::features::sessions::format_mmss;
use crate::tui::app::{App, HELP};

/// Accent colour for a phase.
const fn phase_color(phase: Phase) -> Color {
    match phase {
        Phase::Work => Color::Red,
        Phase::Break => Color::Green,
        Phase::Inhale => Color::Cyan,
        Phase::Hold => Color::Yellow,
        Phase::Exhale => Color::Blue,
    }
}

/// Render the application UI.
pub fn render(frame: &mut Frame<'_>, app: &App) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3), // Header
            Constraint::Length(5), // Countdown
            Constraint::Length(3), // Progress
            Constraint::Min(0),    // Notification
            Constraint::Length(1), // Status bar
        ])
        .split(frame.area());

    render_header(frame, app, chunks[0]);
    render_countdown(frame, app, chunks[1]);
    render_progress(frame, app, chunks[2]);
    render_notification(frame, app, chunks[3]);
    render_status_bar(frame, app, chunks[4]);
}

fn render_header(frame: &mut Frame<'_>, app: &App, area: Rect) {
    let state = app.state();
    let title = match app.clock().config().kind() {
        SessionKind::Focus => " Focus Timer ",
        SessionKind::Breathing => " Breathing Exercise ",
    };
    let cycles = format!(
        "Cycles completed: {}{}",
        state.completed_cycles(),
        if state.is_running() { "" } else { "  (paused)" }
    );

    let header = Paragraph::new(cycles)
        .alignment(Alignment::Center)
        .block(
            Block::default()
                .title(title)
                .borders(Borders::ALL)
                .border_style(Style::default().fg(Color::Cyan)),
        );

    frame.render_widget(header, area);
}

fn render_countdown(frame: &mut Frame<'_>, app: &App, area: Rect) {
    let state = app.state();
    let color = phase_color(state.phase());

    let lines = vec![
        Line::from(Span::styled(
            state.phase().display_name().to_uppercase(),
            Style::default().fg(color).add_modifier(Modifier::BOLD),
        )),
        Line::from(""),
        Line::from(Span::styled(
            format_mmss(u64::from(state.remaining_seconds())),
            Style::default().add_modifier(Modifier::BOLD),
        )),
    ];

    let countdown = Paragraph::new(lines)
        .alignment(Alignment::Center)
        .block(Block::default().borders(Borders::ALL));

    frame.render_widget(countdown, area);
}

fn render_progress(frame: &mut Frame<'_>, app: &App, area: Rect) {
    let progress = app.clock().progress_fraction().clamp(0.0, 1.0);

    let gauge = Gauge::default()
        .block(Block::default().borders(Borders::ALL))
        .gauge_style(Style::default().fg(phase_color(app.state().phase())))
        .ratio(progress);

    frame.render_widget(gauge, area);
}

fn render_notification(frame: &mut Frame<'_>, app: &App, area: Rect) {
    let lines = app.last.map_or_else(Vec::new, |done| {
        vec![
            Line::from(Span::styled(
                done.title(),
                Style::default().add_modifier(Modifier::BOLD),
            )),
            Line::from(done.message()),
        ]
    });

    let notification = Paragraph::new(lines).alignment(Alignment::Center);
    frame.render_widget(notification, area);
}

fn render_status_bar(frame: &mut Frame<'_>, app: &App, area: Rect) {
    let status_text = app.status.as_deref().unwrap_or(HELP);
    let status = Paragraph::new(status_text).style(Style::default().fg(Color::DarkGray));
    frame.render_widget(status, area);
}
