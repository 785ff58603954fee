//! Duration parsing and countdown formatting.

use chrono::Duration;

use crate::error::SangayError;

/// Format a number of seconds as MM:SS.
#[must_use]
pub fn format_mmss(seconds: u64) -> String {
    let minutes = seconds / 60;
    let seconds = seconds % 60;
    format!("{minutes:02}:{seconds:02}")
}

/// Format a duration as a human-readable string.
#[must_use]
pub fn format_duration(d: Duration) -> String {
    let total_minutes = d.num_minutes();

    if total_minutes < 1 {
        let seconds = d.num_seconds();
        return format!("{} second{}", seconds, if seconds == 1 { "" } else { "s" });
    }

    let hours = total_minutes / 60;
    let minutes = total_minutes % 60;

    if hours > 0 {
        if minutes > 0 {
            format!(
                "{} hour{}, {} minute{}",
                hours,
                if hours == 1 { "" } else { "s" },
                minutes,
                if minutes == 1 { "" } else { "s" }
            )
        } else {
            format!("{} hour{}", hours, if hours == 1 { "" } else { "s" })
        }
    } else {
        format!("{} minute{}", minutes, if minutes == 1 { "" } else { "s" })
    }
}

/// Parse a duration string like "25m", "1h30m", "90s".
///
/// A bare number is read as minutes. Zero is allowed.
///
/// # Errors
///
/// Returns `SangayError::Validation` if the string is not a duration.
pub fn parse_duration(s: &str) -> Result<Duration, SangayError> {
    let input = s.trim().to_lowercase();
    let invalid = || SangayError::Validation(format!("Invalid duration '{}'", s.trim()));

    if input.is_empty() {
        return Err(invalid());
    }

    if let Ok(minutes) = input.parse::<i64>() {
        return Duration::try_minutes(minutes).ok_or_else(invalid);
    }

    let mut total_seconds: i64 = 0;
    let mut current_num = String::new();

    for c in input.chars() {
        if c.is_ascii_digit() {
            current_num.push(c);
            continue;
        }
        if current_num.is_empty() {
            return Err(invalid());
        }
        let num: i64 = current_num.parse().map_err(|_| invalid())?;
        current_num.clear();

        let unit = match c {
            'h' => 3600,
            'm' => 60,
            's' => 1,
            _ => return Err(invalid()),
        };
        total_seconds = num
            .checked_mul(unit)
            .and_then(|n| total_seconds.checked_add(n))
            .ok_or_else(invalid)?;
    }

    if !current_num.is_empty() {
        let num: i64 = current_num.parse().map_err(|_| invalid())?;
        total_seconds = num
            .checked_mul(60)
            .and_then(|n| total_seconds.checked_add(n))
            .ok_or_else(invalid)?;
    }

    Duration::try_seconds(total_seconds).ok_or_else(invalid)
}

/// Render a progress bar.
#[must_use]
#[allow(
    clippy::cast_possible_truncation,
    clippy::cast_sign_loss,
    clippy::cast_precision_loss
)]
pub fn render_progress_bar(progress: f64, width: usize) -> String {
    let filled = ((progress.clamp(0.0, 1.0) * width as f64) as usize).min(width);
    let empty = width - filled;

    format!("[{}{}]", "█".repeat(filled), "░".repeat(empty))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_duration_minutes() {
        assert_eq!(parse_duration("25").unwrap(), Duration::minutes(25));
        assert_eq!(parse_duration("25m").unwrap(), Duration::minutes(25));
        assert_eq!(parse_duration("0").unwrap(), Duration::zero());
    }

    #[test]
    fn test_parse_duration_hours() {
        assert_eq!(parse_duration("1h").unwrap(), Duration::hours(1));
        assert_eq!(parse_duration("2h30m").unwrap(), Duration::minutes(150));
    }

    #[test]
    fn test_parse_duration_seconds() {
        assert_eq!(parse_duration("90s").unwrap(), Duration::seconds(90));
        assert_eq!(parse_duration("1m30s").unwrap(), Duration::seconds(90));
    }

    #[test]
    fn test_parse_duration_invalid() {
        assert!(parse_duration("").is_err());
        assert!(parse_duration("abc").is_err());
        assert!(parse_duration("5x").is_err());
        assert!(parse_duration("m5").is_err());
    }

    #[test]
    fn test_parse_duration_out_of_range() {
        assert!(parse_duration("99999999999999999").is_err());
        assert!(parse_duration("9999999999999999h").is_err());
    }

    #[test]
    fn test_parse_duration_negative_passes_through() {
        assert_eq!(parse_duration("-5").unwrap(), Duration::minutes(-5));
    }

    #[test]
    fn test_format_duration() {
        assert_eq!(format_duration(Duration::minutes(25)), "25 minutes");
        assert_eq!(format_duration(Duration::minutes(1)), "1 minute");
        assert_eq!(format_duration(Duration::hours(2)), "2 hours");
        assert_eq!(format_duration(Duration::minutes(90)), "1 hour, 30 minutes");
        assert_eq!(format_duration(Duration::seconds(4)), "4 seconds");
    }

    #[test]
    fn test_format_mmss() {
        assert_eq!(format_mmss(1500), "25:00");
        assert_eq!(format_mmss(90), "01:30");
        assert_eq!(format_mmss(0), "00:00");
    }

    #[test]
    fn test_render_progress_bar() {
        let bar = render_progress_bar(0.5, 10);
        assert_eq!(bar, "[█████░░░░░]");
        assert_eq!(render_progress_bar(1.5, 4), "[████]");
    }
}
