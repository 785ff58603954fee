use colored::Colorize;

use crate::core::SessionKind;
use crate::features::journal::JournalEntry;
use crate::features::mood::{Mood, MoodEntry, MoodStats};
use crate::features::responder::{Message, Speaker};
use crate::features::sessions::{format_duration, format_mmss, KindTotals, SessionRecord, SessionReport};

fn mood_label(mood: Mood) -> String {
    let (r, g, b) = mood.rgb();
    format!("{} {}", mood.emoji(), mood.label().truecolor(r, g, b).bold())
}

/// Format a list of mood entries
pub fn format_moods_pretty(entries: &[MoodEntry]) -> String {
    if entries.is_empty() {
        return "Recent Moods (0)\n  No moods recorded yet".to_string();
    }

    let mut output = format!("Recent Moods ({})\n", entries.len());
    output.push_str(&"─".repeat(50));
    output.push('\n');

    for entry in entries {
        let when = entry.recorded_at_local().format("%a %d %b %H:%M");
        let mut line = format!("  {}  {}", when.to_string().dimmed(), mood_label(entry.mood));
        if let Some(note) = &entry.note {
            line.push_str(&format!("  {}", note.italic()));
        }
        output.push_str(&line);
        output.push('\n');
    }

    output
}

/// Format a freshly logged mood
pub fn format_mood_logged_pretty(entry: &MoodEntry) -> String {
    let mut output = format!("{} Logged {}", "✓".green(), mood_label(entry.mood));
    if let Some(note) = &entry.note {
        output.push_str(&format!("\n  {}: {}", "Note".dimmed(), note));
    }
    output
}

/// Format mood counts with a small bar per mood
pub fn format_mood_stats_pretty(stats: &MoodStats) -> String {
    let mut output = format!("Moods over the last {} days\n", stats.days);
    output.push_str(&"─".repeat(50));
    output.push('\n');

    if stats.total == 0 {
        output.push_str("  No moods recorded in this period\n");
        return output;
    }

    for (mood, count) in &stats.counts {
        let (r, g, b) = mood.rgb();
        output.push_str(&format!(
            "  {} {:<9} {} {}\n",
            mood.emoji(),
            mood.label(),
            "■".repeat(*count).truecolor(r, g, b),
            count
        ));
    }

    output.push_str(&format!("\n  {}: {}\n", "Total".dimmed(), stats.total));
    if let Some(top) = stats.most_common() {
        output.push_str(&format!("  {}: {}\n", "Most common".dimmed(), mood_label(top)));
    }

    output
}

/// Format a list of journal entries
pub fn format_journal_pretty(entries: &[JournalEntry]) -> String {
    if entries.is_empty() {
        return "Journal (0)\n  No entries yet".to_string();
    }

    let mut output = format!("Journal ({})\n", entries.len());
    output.push_str(&"─".repeat(60));
    output.push('\n');

    for entry in entries {
        let when = entry.written_at_local().format("%Y-%m-%d %H:%M");
        output.push_str(&format!("{}\n", when.to_string().bold()));
        output.push_str(&format!("  {}\n", entry.text));
        if let Some(prompt) = &entry.prompt {
            output.push_str(&format!("  {} {}\n", "↳".cyan(), prompt.cyan()));
        }
        output.push('\n');
    }

    output
}

/// Format a saved journal entry and its prompt
pub fn format_journal_saved_pretty(entry: &JournalEntry) -> String {
    let mut output = format!("{} Journal entry saved", "✓".green());
    if let Some(prompt) = &entry.prompt {
        output.push_str(&format!("\n\n{} {}", "Reflect:".bold(), prompt.cyan()));
    }
    output
}

/// Format chat messages
pub fn format_messages_pretty(messages: &[Message]) -> String {
    messages
        .iter()
        .map(|m| match m.speaker {
            Speaker::User => format!("{} {}", "you ›".blue().bold(), m.text),
            Speaker::Companion => format!("{} {}", "sangay ›".magenta().bold(), m.text),
        })
        .collect::<Vec<_>>()
        .join("\n")
}

/// Format session history
pub fn format_sessions_pretty(sessions: &[SessionRecord]) -> String {
    if sessions.is_empty() {
        return "Sessions (0)\n  No sessions yet".to_string();
    }

    let mut output = format!("Sessions ({})\n", sessions.len());
    output.push_str(&"─".repeat(60));
    output.push('\n');

    for session in sessions {
        let when = session.started_at_local().format("%Y-%m-%d %H:%M");
        let kind = match session.kind {
            SessionKind::Focus => "Focus    ".red(),
            SessionKind::Breathing => "Breathing".cyan(),
        };
        output.push_str(&format!(
            "  {}  {}  {}  {} cycle{}\n",
            when.to_string().dimmed(),
            kind,
            format_mmss(session.elapsed_seconds),
            session.completed_cycles,
            if session.completed_cycles == 1 { "" } else { "s" }
        ));
    }

    output
}

fn format_totals(totals: &KindTotals) -> String {
    let elapsed = i64::try_from(totals.elapsed_seconds).unwrap_or(i64::MAX);
    let time = chrono::Duration::try_seconds(elapsed).map_or_else(String::new, format_duration);
    format!(
        "  {}\n    {}: {}\n    {}: {}\n    {}: {}\n",
        totals.kind.to_string().bold(),
        "Sessions".dimmed(),
        totals.sessions,
        "Cycles".dimmed(),
        totals.completed_cycles,
        "Time".dimmed(),
        time
    )
}

/// Format the all-time session summary
pub fn format_report_pretty(report: &SessionReport) -> String {
    let mut output = String::from("Session Summary\n");
    output.push_str(&"─".repeat(40));
    output.push('\n');

    if report.is_empty() {
        output.push_str("  No sessions yet\n");
        return output;
    }

    output.push_str(&format_totals(&report.focus));
    output.push_str(&format_totals(&report.breathing));
    output
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::SessionSummary;
    use crate::features::mood::mood_stats;
    use crate::features::responder::Conversation;
    use crate::features::responder::KeywordResponder;
    use chrono::Utc;

    #[test]
    fn test_format_empty_lists() {
        assert!(format_moods_pretty(&[]).contains("No moods recorded yet"));
        assert!(format_journal_pretty(&[]).contains("No entries yet"));
        assert!(format_sessions_pretty(&[]).contains("No sessions yet"));
    }

    #[test]
    fn test_format_moods_pretty() {
        colored::control::set_override(false);
        let entries = vec![MoodEntry::new(Mood::Grateful, Some("sunny walk".to_string()))];
        let output = format_moods_pretty(&entries);

        assert!(output.contains("Recent Moods (1)"));
        assert!(output.contains("Grateful"));
        assert!(output.contains("sunny walk"));
    }

    #[test]
    fn test_format_mood_stats_pretty() {
        colored::control::set_override(false);
        let now = Utc::now();
        let entries = vec![
            MoodEntry::at(Mood::Calm, None, now),
            MoodEntry::at(Mood::Calm, None, now),
        ];
        let output = format_mood_stats_pretty(&mood_stats(&entries, now, 7));

        assert!(output.contains("last 7 days"));
        assert!(output.contains("■■ 2"));
        assert!(output.contains("Most common"));
    }

    #[test]
    fn test_format_messages_pretty() {
        colored::control::set_override(false);
        let mut conversation = Conversation::new();
        conversation.send("hello", &KeywordResponder::chat());
        let output = format_messages_pretty(conversation.messages());

        assert!(output.contains("you › hello"));
        assert_eq!(output.lines().count(), 3);
    }

    #[test]
    fn test_format_report_pretty() {
        colored::control::set_override(false);
        let focus = KindTotals {
            kind: SessionKind::Focus,
            sessions: 2,
            completed_cycles: 3,
            elapsed_seconds: 5400,
        };
        let breathing = KindTotals {
            kind: SessionKind::Breathing,
            sessions: 0,
            completed_cycles: 0,
            elapsed_seconds: 0,
        };
        let output = format_report_pretty(&SessionReport { focus, breathing });

        assert!(output.contains("1 hour, 30 minutes"));
        assert!(output.contains("Breathing"));
    }

    #[test]
    fn test_format_sessions_pretty() {
        colored::control::set_override(false);
        let summary = SessionSummary {
            kind: SessionKind::Focus,
            completed_cycles: 1,
            elapsed_seconds: 1500,
        };
        let record = SessionRecord::from_summary(summary, Utc::now(), Utc::now());
        let output = format_sessions_pretty(&[record]);

        assert!(output.contains("25:00"));
        assert!(output.contains("1 cycle\n"));
    }
}
