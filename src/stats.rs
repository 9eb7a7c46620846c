//! Aggregates derived from the full mood collection: category frequencies,
//! the longest consecutive-day streak, and the mean mood rating.

use chrono::NaiveDate;

use crate::entry::{MoodEntry, ThoughtEntry};
use crate::mood;

#[derive(Debug, Clone, PartialEq)]
pub struct MoodStats {
    /// Per-category counts, in first-encounter order.
    pub counts: Vec<(String, usize)>,
    pub most_common: Option<String>,
    pub longest_streak: Option<u32>,
    /// Unrounded mean rating; rounding to one decimal happens at display.
    pub average: Option<f64>,
}

pub fn mood_stats(entries: &[MoodEntry]) -> MoodStats {
    let counts = frequency(entries.iter().map(|e| e.mood.as_str()));
    MoodStats {
        most_common: most_common(&counts),
        counts,
        longest_streak: longest_streak(entries),
        average: average_score(entries),
    }
}

pub fn most_common_tag(thoughts: &[ThoughtEntry]) -> Option<String> {
    let counts = frequency(thoughts.iter().map(|t| t.tag.as_str()));
    most_common(&counts)
}

/// Counts occurrences per category, keeping categories in the order they
/// first appear. The collections here are tiny, so a Vec scan beats a map.
fn frequency<'a>(categories: impl Iterator<Item = &'a str>) -> Vec<(String, usize)> {
    let mut counts: Vec<(String, usize)> = Vec::new();
    for category in categories {
        match counts.iter_mut().find(|(c, _)| c == category) {
            Some((_, n)) => *n += 1,
            None => counts.push((category.to_string(), 1)),
        }
    }
    counts
}

/// The category with the highest count. Only a strictly greater count
/// displaces the current best, so ties go to the first-encountered category.
fn most_common(counts: &[(String, usize)]) -> Option<String> {
    let mut best: Option<&(String, usize)> = None;
    for candidate in counts {
        match best {
            Some(current) if candidate.1 <= current.1 => {}
            _ => best = Some(candidate),
        }
    }
    best.map(|(category, _)| category.clone())
}

/// Longest run of entries on consecutive calendar days, computed over the
/// dates in chronological order. Dates that do not parse as `YYYY-MM-DD`
/// break whatever run they land in, as do duplicates (a zero-day gap is not
/// a one-day gap).
fn longest_streak(entries: &[MoodEntry]) -> Option<u32> {
    if entries.is_empty() {
        return None;
    }
    let mut dates: Vec<Option<NaiveDate>> = entries
        .iter()
        .map(|e| NaiveDate::parse_from_str(&e.date, "%Y-%m-%d").ok())
        .collect();
    dates.sort();

    let mut longest = 1u32;
    let mut current = 1u32;
    for pair in dates.windows(2) {
        match (pair[0], pair[1]) {
            (Some(prev), Some(next)) if next - prev == chrono::Duration::days(1) => {
                current += 1;
                longest = longest.max(current);
            }
            _ => current = 1,
        }
    }
    Some(longest)
}

fn average_score(entries: &[MoodEntry]) -> Option<f64> {
    if entries.is_empty() {
        return None;
    }
    let total: f64 = entries.iter().map(|e| mood::score_for(&e.mood)).sum();
    Some(total / entries.len() as f64)
}

pub fn format_average(average: Option<f64>) -> String {
    match average {
        Some(avg) => format!("{avg:.1}/10"),
        None => "N/A".to_string(),
    }
}

pub fn format_streak(streak: Option<u32>) -> String {
    match streak {
        Some(days) => format!("{days} days"),
        None => "N/A".to_string(),
    }
}

pub fn format_category(category: Option<&str>) -> String {
    category.unwrap_or("N/A").to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn mood(category: &str, date: &str) -> MoodEntry {
        MoodEntry::new(category, "", date)
    }

    #[test]
    fn empty_collection_reports_not_available() {
        let stats = mood_stats(&[]);
        assert_eq!(stats.most_common, None);
        assert_eq!(stats.longest_streak, None);
        assert_eq!(stats.average, None);
        assert_eq!(format_average(stats.average), "N/A");
        assert_eq!(format_streak(stats.longest_streak), "N/A");
        assert_eq!(format_category(stats.most_common.as_deref()), "N/A");
    }

    #[test]
    fn most_common_and_average_over_happy_happy_sad() {
        let entries = vec![
            mood("happy", "2024-07-01"),
            mood("happy", "2024-07-02"),
            mood("sad", "2024-07-03"),
        ];
        let stats = mood_stats(&entries);
        assert_eq!(stats.most_common.as_deref(), Some("happy"));
        // (10 + 10 + 0) / 3 rounds to one decimal at display.
        assert_eq!(format_average(stats.average), "6.7/10");
    }

    #[test]
    fn frequency_ties_go_to_the_first_encountered_category() {
        let entries = vec![
            mood("tired", "2024-07-01"),
            mood("happy", "2024-07-02"),
            mood("happy", "2024-07-03"),
            mood("tired", "2024-07-04"),
        ];
        let stats = mood_stats(&entries);
        assert_eq!(stats.most_common.as_deref(), Some("tired"));
        assert_eq!(
            stats.counts,
            vec![("tired".to_string(), 2), ("happy".to_string(), 2)]
        );
    }

    #[test]
    fn streak_breaks_on_a_skipped_day() {
        let entries = vec![
            mood("happy", "2024-07-01"),
            mood("neutral", "2024-07-02"),
            mood("sad", "2024-07-04"),
        ];
        assert_eq!(mood_stats(&entries).longest_streak, Some(2));
    }

    #[test]
    fn streak_orders_by_date_not_insertion() {
        let entries = vec![
            mood("happy", "2024-07-03"),
            mood("happy", "2024-07-01"),
            mood("happy", "2024-07-02"),
        ];
        assert_eq!(mood_stats(&entries).longest_streak, Some(3));
    }

    #[test]
    fn duplicate_and_unparseable_dates_break_runs() {
        let entries = vec![
            mood("happy", "2024-07-01"),
            mood("happy", "2024-07-01"),
            mood("happy", "2024-07-02"),
        ];
        // 07-01 -> 07-01 is a zero-day gap; only 07-01 -> 07-02 extends a run.
        assert_eq!(mood_stats(&entries).longest_streak, Some(2));

        let entries = vec![mood("happy", "sometime"), mood("happy", "2024-07-01")];
        assert_eq!(mood_stats(&entries).longest_streak, Some(1));
    }

    #[test]
    fn unrecognized_categories_score_five() {
        let entries = vec![mood("🦀", "2024-07-01"), mood("happy", "2024-07-02")];
        // (5 + 10) / 2
        assert_eq!(format_average(mood_stats(&entries).average), "7.5/10");
    }

    #[test]
    fn most_common_tag_over_thoughts() {
        let thoughts = vec![
            ThoughtEntry::new("a", "work"),
            ThoughtEntry::new("b", "life"),
            ThoughtEntry::new("c", "work"),
        ];
        assert_eq!(most_common_tag(&thoughts).as_deref(), Some("work"));
        assert_eq!(most_common_tag(&[]), None);
    }
}
