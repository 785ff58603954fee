//! Mood statistics over a trailing window.

use chrono::{DateTime, Duration, Utc};
use serde::Serialize;

use super::entry::{Mood, MoodEntry};

/// Mood counts for a time window.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct MoodStats {
    /// Window length in days.
    pub days: i64,
    /// Number of entries in the window.
    pub total: usize,
    /// Non-zero counts, most frequent first.
    pub counts: Vec<(Mood, usize)>,
}

impl MoodStats {
    /// The most frequently recorded mood, if any.
    #[must_use]
    pub fn most_common(&self) -> Option<Mood> {
        self.counts.first().map(|(mood, _)| *mood)
    }

    /// Count for one mood.
    #[must_use]
    pub fn count(&self, mood: Mood) -> usize {
        self.counts
            .iter()
            .find(|(m, _)| *m == mood)
            .map_or(0, |(_, n)| *n)
    }
}

/// Count moods recorded within `days` before `now`.
///
/// Ties are broken by the mood's display order.
#[must_use]
pub fn mood_stats(entries: &[MoodEntry], now: DateTime<Utc>, days: i64) -> MoodStats {
    let since = now - Duration::days(days);
    let in_window: Vec<&MoodEntry> = entries
        .iter()
        .filter(|e| e.recorded_at >= since && e.recorded_at <= now)
        .collect();

    let mut counts: Vec<(Mood, usize)> = Mood::ALL
        .into_iter()
        .map(|mood| (mood, in_window.iter().filter(|e| e.mood == mood).count()))
        .filter(|(_, n)| *n > 0)
        .collect();
    counts.sort_by(|a, b| b.1.cmp(&a.1).then(a.0.cmp(&b.0)));

    MoodStats {
        days,
        total: in_window.len(),
        counts,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn entry(mood: Mood, days_ago: i64, now: DateTime<Utc>) -> MoodEntry {
        MoodEntry::at(mood, None, now - Duration::days(days_ago))
    }

    #[test]
    fn test_seven_day_window() {
        let now = Utc::now();
        let entries = vec![
            entry(Mood::Happy, 0, now),
            entry(Mood::Happy, 2, now),
            entry(Mood::Sad, 3, now),
            entry(Mood::Calm, 6, now),
            entry(Mood::Angry, 8, now),
        ];

        let stats = mood_stats(&entries, now, 7);
        assert_eq!(stats.days, 7);
        assert_eq!(stats.total, 4);
        assert_eq!(stats.count(Mood::Happy), 2);
        assert_eq!(stats.count(Mood::Angry), 0);
        assert_eq!(stats.most_common(), Some(Mood::Happy));
    }

    #[test]
    fn test_ties_follow_display_order() {
        let now = Utc::now();
        let entries = vec![entry(Mood::Tired, 1, now), entry(Mood::Calm, 1, now)];
        let stats = mood_stats(&entries, now, 7);
        assert_eq!(stats.counts, vec![(Mood::Calm, 1), (Mood::Tired, 1)]);
    }

    #[test]
    fn test_empty() {
        let stats = mood_stats(&[], Utc::now(), 30);
        assert_eq!(stats.total, 0);
        assert!(stats.most_common().is_none());
    }
}
