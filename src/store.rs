//! In-memory record store shared by moods and thoughts.
//!
//! The canonical collection keeps insertion order; `filter` and `sorted`
//! hand out derived views and never touch it.

use std::cmp::Ordering;

use log::{debug, info};
use thiserror::Error;
use uuid::Uuid;

pub type Result<T> = std::result::Result<T, StoreError>;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum StoreError {
    #[error("no record with id {0}")]
    NotFound(String),
}

/// What a record type has to provide for the store to manage it.
pub trait Record: Clone {
    /// Typed sort key for this record kind.
    type Field: Copy;

    fn id(&self) -> &str;
    fn assign_id(&mut self, id: String);

    /// Case-sensitive substring match over the record's searchable fields.
    fn matches(&self, needle: &str) -> bool;

    /// Ascending comparison on one field. Chronological fields compare as
    /// timestamps, everything else lexicographically.
    fn compare_by(&self, other: &Self, field: Self::Field) -> Ordering;

    /// Replace the mutable fields from `patch`, keeping id and creation
    /// timestamp.
    fn absorb(&mut self, patch: Self);
}

pub struct Store<R: Record> {
    records: Vec<R>,
}

impl<R: Record> Store<R> {
    pub fn new() -> Self {
        Store {
            records: Vec::new(),
        }
    }

    /// Appends a record, assigning a fresh UUID when it carries no id yet.
    /// Always succeeds; returns the record's id.
    pub fn add(&mut self, mut record: R) -> String {
        if record.id().is_empty() {
            record.assign_id(Uuid::new_v4().to_string());
        }
        let id = record.id().to_string();
        self.records.push(record);
        info!("added record {id} ({} total)", self.records.len());
        id
    }

    /// Replaces the mutable fields of the record with `id` from `patch`.
    /// The collection is left untouched when no record matches.
    pub fn update(&mut self, id: &str, patch: R) -> Result<()> {
        match self.records.iter_mut().find(|r| r.id() == id) {
            Some(record) => {
                record.absorb(patch);
                info!("updated record {id}");
                Ok(())
            }
            None => Err(StoreError::NotFound(id.to_string())),
        }
    }

    /// Removes the record with `id` if present. Removing an absent id is a
    /// no-op, so callers may retry freely.
    pub fn remove(&mut self, id: &str) {
        let before = self.records.len();
        self.records.retain(|r| r.id() != id);
        if self.records.len() < before {
            info!("removed record {id}");
        } else {
            debug!("remove of absent id {id} ignored");
        }
    }

    pub fn get(&self, id: &str) -> Option<&R> {
        self.records.iter().find(|r| r.id() == id)
    }

    /// Records whose searchable fields contain `needle`, in insertion order.
    /// An empty needle matches everything.
    pub fn filter(&self, needle: &str) -> Vec<R> {
        self.records
            .iter()
            .filter(|r| r.matches(needle))
            .cloned()
            .collect()
    }

    /// A copy of the collection ordered by `field`.
    pub fn sorted(&self, field: R::Field) -> Vec<R> {
        let mut view = self.records.clone();
        sort_view(&mut view, field);
        view
    }

    pub fn records(&self) -> &[R] {
        &self.records
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }
}

impl<R: Record> Default for Store<R> {
    fn default() -> Self {
        Store::new()
    }
}

/// Orders a presented view by `field`, ascending. `sort_by` is stable, so
/// records equal on the field keep their relative order.
pub fn sort_view<R: Record>(view: &mut [R], field: R::Field) {
    view.sort_by(|a, b| a.compare_by(b, field));
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::entry::{MoodEntry, MoodField};

    fn seeded() -> Store<MoodEntry> {
        let mut store = Store::new();
        store.add(MoodEntry::new("happy", "Feeling great!", "2024-07-01"));
        store.add(MoodEntry::new("neutral", "It was an okay day.", "2024-07-02"));
        store.add(MoodEntry::new("sad", "Feeling a bit down.", "2024-07-03"));
        store
    }

    #[test]
    fn add_grows_by_one_with_distinct_ids() {
        let mut store = Store::new();
        let mut ids = Vec::new();
        for i in 0..20 {
            ids.push(store.add(MoodEntry::new("happy", format!("day {i}"), "2024-07-01")));
        }
        assert_eq!(store.len(), 20);
        let mut deduped = ids.clone();
        deduped.sort();
        deduped.dedup();
        assert_eq!(deduped.len(), ids.len());
    }

    #[test]
    fn add_keeps_a_caller_supplied_id() {
        let mut store = Store::new();
        let mut entry = MoodEntry::new("happy", "", "2024-07-01");
        entry.id = "chosen".into();
        assert_eq!(store.add(entry), "chosen");
    }

    #[test]
    fn update_replaces_fields_and_keeps_the_id() {
        let mut store = seeded();
        let id = store.records()[0].id.clone();
        store
            .update(&id, MoodEntry::new("excited", "turned around", "2024-07-05"))
            .unwrap();
        let record = store.get(&id).unwrap();
        assert_eq!(record.id, id);
        assert_eq!(record.mood, "excited");
        assert_eq!(record.date, "2024-07-05");
    }

    #[test]
    fn update_on_absent_id_is_not_found_and_changes_nothing() {
        let mut store = seeded();
        let before: Vec<String> = store.filter("").iter().map(|r| r.mood.clone()).collect();
        let err = store
            .update("missing", MoodEntry::new("happy", "", "2024-07-09"))
            .unwrap_err();
        assert_eq!(err, StoreError::NotFound("missing".into()));
        let after: Vec<String> = store.filter("").iter().map(|r| r.mood.clone()).collect();
        assert_eq!(before, after);
    }

    #[test]
    fn remove_is_idempotent() {
        let mut store = seeded();
        let id = store.records()[1].id.clone();
        store.remove(&id);
        assert!(store.filter("").iter().all(|r| r.id != id));
        store.remove(&id);
        assert_eq!(store.len(), 2);
    }

    #[test]
    fn filter_is_case_sensitive_and_keeps_insertion_order() {
        let store = seeded();
        let hits = store.filter("Feeling");
        assert_eq!(hits.len(), 2);
        assert_eq!(hits[0].mood, "happy");
        assert_eq!(hits[1].mood, "sad");
        assert!(store.filter("feeling").is_empty());
    }

    #[test]
    fn filter_is_pure() {
        let store = seeded();
        let first: Vec<String> = store.filter("okay").iter().map(|r| r.id.clone()).collect();
        let second: Vec<String> = store.filter("okay").iter().map(|r| r.id.clone()).collect();
        assert_eq!(first, second);
    }

    #[test]
    fn empty_filter_returns_everything() {
        let store = seeded();
        assert_eq!(store.filter("").len(), store.len());
    }

    #[test]
    fn sort_is_stable_and_idempotent() {
        let mut store = Store::new();
        store.add(MoodEntry::new("happy", "b", "2024-07-02"));
        store.add(MoodEntry::new("happy", "a", "2024-07-01"));
        store.add(MoodEntry::new("happy", "c", "2024-07-01"));

        let once = store.sorted(MoodField::Date);
        let mut twice = once.clone();
        sort_view(&mut twice, MoodField::Date);

        let order =
            |view: &[MoodEntry]| view.iter().map(|r| r.description.clone()).collect::<Vec<_>>();
        // Equal dates keep their insertion order.
        assert_eq!(order(&once), vec!["a", "c", "b"]);
        assert_eq!(order(&once), order(&twice));
        // The canonical store still reads in insertion order.
        assert_eq!(order(&store.filter("")), vec!["b", "a", "c"]);
    }
}
