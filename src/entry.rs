use std::cmp::Ordering;

use chrono::{DateTime, Local};
use serde::{Deserialize, Serialize};

use crate::store::Record;

/// One logged mood. `date` is the calendar day the mood belongs to, entered
/// as `YYYY-MM-DD`; the store accepts any text and leaves validation to the
/// input form.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MoodEntry {
    pub id: String,
    pub mood: String,
    pub description: String,
    pub date: String,
}

impl MoodEntry {
    /// A new entry with no id yet; the store assigns one on add.
    pub fn new(
        mood: impl Into<String>,
        description: impl Into<String>,
        date: impl Into<String>,
    ) -> Self {
        MoodEntry {
            id: String::new(),
            mood: mood.into(),
            description: description.into(),
            date: date.into(),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MoodField {
    Date,
    Mood,
    Description,
}

impl MoodField {
    pub fn label(self) -> &'static str {
        match self {
            MoodField::Date => "date",
            MoodField::Mood => "mood",
            MoodField::Description => "description",
        }
    }
}

impl Record for MoodEntry {
    type Field = MoodField;

    fn id(&self) -> &str {
        &self.id
    }

    fn assign_id(&mut self, id: String) {
        self.id = id;
    }

    fn matches(&self, needle: &str) -> bool {
        self.date.contains(needle)
            || self.mood.contains(needle)
            || self.description.contains(needle)
    }

    fn compare_by(&self, other: &Self, field: MoodField) -> Ordering {
        match field {
            MoodField::Date => self.date.cmp(&other.date),
            MoodField::Mood => self.mood.cmp(&other.mood),
            MoodField::Description => self.description.cmp(&other.description),
        }
    }

    fn absorb(&mut self, patch: Self) {
        // The date is a user-entered calendar day, not a creation timestamp,
        // so an edit may move the entry to another day.
        self.mood = patch.mood;
        self.description = patch.description;
        self.date = patch.date;
    }
}

/// One journaled thought. `created_at` is set when the thought is written
/// and survives edits.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ThoughtEntry {
    pub id: String,
    pub text: String,
    pub tag: String,
    pub created_at: DateTime<Local>,
}

impl ThoughtEntry {
    pub fn new(text: impl Into<String>, tag: impl Into<String>) -> Self {
        ThoughtEntry {
            id: String::new(),
            text: text.into(),
            tag: tag.into(),
            created_at: Local::now(),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ThoughtField {
    Date,
    Text,
    Tag,
}

impl ThoughtField {
    pub fn label(self) -> &'static str {
        match self {
            ThoughtField::Date => "date",
            ThoughtField::Text => "text",
            ThoughtField::Tag => "tag",
        }
    }
}

impl Record for ThoughtEntry {
    type Field = ThoughtField;

    fn id(&self) -> &str {
        &self.id
    }

    fn assign_id(&mut self, id: String) {
        self.id = id;
    }

    fn matches(&self, needle: &str) -> bool {
        self.text.contains(needle) || self.tag.contains(needle)
    }

    fn compare_by(&self, other: &Self, field: ThoughtField) -> Ordering {
        match field {
            ThoughtField::Date => self.created_at.cmp(&other.created_at),
            ThoughtField::Text => self.text.cmp(&other.text),
            ThoughtField::Tag => self.tag.cmp(&other.tag),
        }
    }

    fn absorb(&mut self, patch: Self) {
        self.text = patch.text;
        self.tag = patch.tag;
    }
}

/// Share text for a mood entry. Composing the message is in scope; where it
/// goes is the platform's business.
pub fn share_message(entry: &MoodEntry) -> String {
    format!("I'm feeling {} today! {}", entry.mood, entry.description)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn mood_matching_is_case_sensitive_over_all_fields() {
        let entry = MoodEntry::new("happy", "Feeling great!", "2024-07-01");
        assert!(entry.matches("happy"));
        assert!(entry.matches("2024-07"));
        assert!(entry.matches("great"));
        assert!(!entry.matches("Great"));
        assert!(!entry.matches("HAPPY"));
    }

    #[test]
    fn thought_matching_ignores_the_timestamp() {
        let entry = ThoughtEntry::new("remember to water the plants", "chores");
        assert!(entry.matches("plants"));
        assert!(entry.matches("chores"));
        assert!(!entry.matches("2024"));
    }

    #[test]
    fn absorb_keeps_thought_creation_time() {
        let mut entry = ThoughtEntry::new("first draft", "ideas");
        entry.id = "t-1".into();
        let created = entry.created_at;
        entry.absorb(ThoughtEntry::new("second draft", "ideas"));
        assert_eq!(entry.id, "t-1");
        assert_eq!(entry.created_at, created);
        assert_eq!(entry.text, "second draft");
    }

    #[test]
    fn absorb_replaces_the_mood_calendar_day() {
        let mut entry = MoodEntry::new("sad", "rough morning", "2024-07-01");
        entry.id = "m-1".into();
        entry.absorb(MoodEntry::new("happy", "it got better", "2024-07-02"));
        assert_eq!(entry.id, "m-1");
        assert_eq!(entry.date, "2024-07-02");
        assert_eq!(entry.mood, "happy");
    }

    #[test]
    fn share_message_embeds_mood_and_description() {
        let entry = MoodEntry::new("excited", "Big day ahead", "2024-07-01");
        assert_eq!(share_message(&entry), "I'm feeling excited today! Big day ahead");
    }
}
