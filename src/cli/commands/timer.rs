//! Focus and breathing command implementation.
//!
//! Both commands build a [`TimerConfig`], run it on the live screen or
//! headless, and save the finished session on teardown.

use std::io::{self, Write};
use std::ops::ControlFlow;

use chrono::Utc;
use colored::Colorize;

use crate::cli::args::{BreatheArgs, FocusArgs, OutputFormat};
use crate::config::Config;
use crate::core::{
    duration_for, initial_phase, save_best_effort, sequence_len, Phase, PhaseCompletion,
    SessionClock, SessionState, Store, TimerConfig,
};
use crate::error::SangayError;
use crate::features::sessions::{
    format_mmss, parse_duration, render_progress_bar, run_headless, SessionRecord, SystemTime,
    TimeSource,
};
use crate::output::to_json;
use crate::storage::Record;
use crate::tui;

/// Execute the focus command.
///
/// # Errors
///
/// Returns an error for invalid durations or if the screen fails.
pub fn focus<S: Store + ?Sized>(
    store: &S,
    args: FocusArgs,
    config: &Config,
    format: OutputFormat,
) -> Result<String, SangayError> {
    let timer = focus_config(&args, config)?;
    run(store, timer, args.headless, args.cycles, format)
}

/// Execute the breathe command.
///
/// # Errors
///
/// Returns an error for invalid durations or if the screen fails.
pub fn breathe<S: Store + ?Sized>(
    store: &S,
    args: BreatheArgs,
    config: &Config,
    format: OutputFormat,
) -> Result<String, SangayError> {
    let timer = breathing_config(&args, config)?;
    run(store, timer, args.headless, args.cycles, format)
}

/// Merge `--work`/`--break` over the configured focus lengths.
///
/// # Errors
///
/// Returns an error if a duration does not parse or is out of range.
pub fn focus_config(args: &FocusArgs, config: &Config) -> Result<TimerConfig, SangayError> {
    let defaults = config.focus.timer_config()?;
    let seconds = |arg: Option<&str>, phase: Phase| -> Result<i64, SangayError> {
        match arg {
            Some(s) => Ok(parse_duration(s)?.num_seconds()),
            None => Ok(i64::from(duration_for(phase, &defaults))),
        }
    };

    TimerConfig::focus(
        seconds(args.work.as_deref(), Phase::Work)?,
        seconds(args.rest.as_deref(), Phase::Break)?,
    )
}

/// Merge the breathing flags over the configured lengths.
///
/// # Errors
///
/// Returns an error if a length is out of range.
pub fn breathing_config(args: &BreatheArgs, config: &Config) -> Result<TimerConfig, SangayError> {
    let breathing = &config.breathing;
    Ok(TimerConfig::breathing(
        args.inhale.unwrap_or(breathing.inhale_seconds),
        args.hold.unwrap_or(breathing.hold_seconds),
        args.exhale.unwrap_or(breathing.exhale_seconds),
    )?
    .with_count_primary_phase_only(breathing.count_primary_phase_only && !args.count_cycles))
}

fn run<S: Store + ?Sized>(
    store: &S,
    timer: TimerConfig,
    headless: bool,
    rounds: Option<u32>,
    format: OutputFormat,
) -> Result<String, SangayError> {
    let clock = SessionClock::new(timer);
    if headless {
        let stdout = io::stdout();
        let (mut record, written) = run_printing(clock, &SystemTime, rounds, stdout.lock(), format);
        let summary = finish(store, &mut record, format)?;
        written?;
        return Ok(summary);
    }

    let mut record = tui::run(clock)?;
    finish(store, &mut record, format)
}

/// Run headless, writing one line per phase completion to `out`.
///
/// The run stops at the first failed write. The record of whatever ran is
/// returned alongside the write result so the caller can still save it.
#[must_use]
pub fn run_printing<T, W>(
    clock: SessionClock,
    time: &T,
    rounds: Option<u32>,
    mut out: W,
    format: OutputFormat,
) -> (SessionRecord, Result<(), SangayError>)
where
    T: TimeSource + ?Sized,
    W: Write,
{
    if let Err(e) = write_header(&mut out, &clock, format) {
        let now = Utc::now();
        return (SessionRecord::from_summary(clock.finish(), now, now), Err(e));
    }

    let first = initial_phase(clock.config());
    let steps = sequence_len(clock.config());
    let mut step = 0usize;
    let mut written = Ok(());
    let record = run_headless(clock, time, rounds, |done, state| {
        step += 1;
        #[allow(clippy::cast_precision_loss)]
        let round = step as f64 / steps as f64;
        if done.next == first {
            step = 0;
        }
        match write_completion(&mut out, done, state, round, format) {
            Ok(()) => ControlFlow::Continue(()),
            Err(e) => {
                written = Err(e);
                ControlFlow::Break(())
            }
        }
    });

    (record, written)
}

fn write_header<W: Write>(
    out: &mut W,
    clock: &SessionClock,
    format: OutputFormat,
) -> Result<(), SangayError> {
    if format == OutputFormat::Pretty {
        let first = initial_phase(clock.config());
        writeln!(
            out,
            "{} {} {}",
            clock.config().kind().to_string().bold(),
            first,
            format_mmss(u64::from(duration_for(first, clock.config())))
        )?;
        out.flush()?;
    }
    Ok(())
}

fn write_completion<W: Write>(
    out: &mut W,
    done: &PhaseCompletion,
    state: &SessionState,
    round: f64,
    format: OutputFormat,
) -> Result<(), SangayError> {
    match format {
        OutputFormat::Json => writeln!(out, "{}", serde_json::to_string(done)?)?,
        OutputFormat::Pretty => writeln!(
            out,
            "[{}] {} {} {}",
            format_mmss(state.elapsed_seconds()).dimmed(),
            render_progress_bar(round, 10),
            done.title().bold(),
            done.message()
        )?,
    }
    out.flush()?;
    Ok(())
}

/// Save a finished session and describe it.
///
/// Sessions that never ran are not saved.
fn finish<S: Store + ?Sized>(
    store: &S,
    record: &mut SessionRecord,
    format: OutputFormat,
) -> Result<String, SangayError> {
    if !record.is_empty() {
        record.id = save_best_effort(store, &Record::Session(record.clone()));
    }

    match format {
        OutputFormat::Json => to_json(record),
        OutputFormat::Pretty => {
            let mut output = format!(
                "{} session: {} elapsed, {} cycle{} completed",
                record.kind,
                format_mmss(record.elapsed_seconds),
                record.completed_cycles,
                if record.completed_cycles == 1 { "" } else { "s" }
            );
            if !record.is_empty() && record.id.is_none() {
                output.push_str(&format!("\n{}", "Could not save this session".yellow()));
            }
            Ok(output)
        }
    }
}
