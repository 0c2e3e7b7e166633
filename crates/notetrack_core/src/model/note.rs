//! Note domain model and seed dataset.
//!
//! # Responsibility
//! - Define `Note` and the persisted `NotesDatabase` aggregate.
//! - Generate stable identifiers and creation timestamps for new notes.
//!
//! # Invariants
//! - `id` is unique across the collection and immutable for the note's lifetime.
//! - `created_at` is assigned at construction and never changes.
//! - The serialized blob uses camelCase field names (`createdAt`).

use chrono::{DateTime, Duration, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Stable identifier for a note.
///
/// Kept as a type alias to make semantic intent explicit in signatures.
pub type NoteId = Uuid;

/// A user-authored title/content pair with immutable identity and creation time.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Note {
    /// Stable ID used for deletion and deduplication.
    pub id: NoteId,
    /// Short display title. Non-empty after trim at creation.
    pub title: String,
    /// Free-form body text. Non-empty after trim at creation.
    pub content: String,
    /// Creation instant, serialized as an ISO-8601 string.
    pub created_at: DateTime<Utc>,
}

impl Note {
    /// Creates a note with a generated ID and the current timestamp.
    pub fn new(title: impl Into<String>, content: impl Into<String>) -> Self {
        Self::with_created_at(title, content, Utc::now())
    }

    /// Creates a note with a generated ID and a caller-provided timestamp.
    ///
    /// Used by seeding, where the default dataset carries staggered
    /// creation times.
    pub fn with_created_at(
        title: impl Into<String>,
        content: impl Into<String>,
        created_at: DateTime<Utc>,
    ) -> Self {
        Self {
            id: Uuid::new_v4(),
            title: title.into(),
            content: content.into(),
            created_at,
        }
    }
}

/// The sole persisted aggregate: the full ordered notes collection.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct NotesDatabase {
    /// Notes in storage order. Display ordering is derived, never persisted.
    pub notes: Vec<Note>,
}

/// Builds the fixed first-run dataset: three example notes with
/// descending creation times (now, now-1day, now-2days).
pub fn seed_notes() -> Vec<Note> {
    let now = Utc::now();
    vec![
        Note::with_created_at(
            "Welcome to Notes Tracking",
            "This is your first note. You can add, view, and delete notes \
             using this application.",
            now,
        ),
        Note::with_created_at(
            "Getting Started",
            "Use the form above to create new notes. Each note has a title \
             and content that you can manage easily.",
            now - Duration::days(1),
        ),
        Note::with_created_at(
            "Tips & Tricks",
            "Notes are automatically saved to a local JSON database. Your \
             data persists across browser sessions.",
            now - Duration::days(2),
        ),
    ]
}

#[cfg(test)]
mod tests {
    use super::{seed_notes, Note, NotesDatabase};
    use std::collections::HashSet;

    #[test]
    fn note_serializes_with_camel_case_timestamp_field() {
        let note = Note::new("Shopping", "milk, eggs");
        let value = serde_json::to_value(&note).unwrap();
        let object = value.as_object().unwrap();
        assert!(object.contains_key("id"));
        assert!(object.contains_key("title"));
        assert!(object.contains_key("content"));
        assert!(object.contains_key("createdAt"));
        assert!(!object.contains_key("created_at"));
    }

    #[test]
    fn note_roundtrips_through_json() {
        let note = Note::new("Title", "Body");
        let json = serde_json::to_string(&note).unwrap();
        let parsed: Note = serde_json::from_str(&json).unwrap();
        assert_eq!(parsed, note);
    }

    #[test]
    fn created_at_serializes_as_iso_8601() {
        let note = Note::new("Title", "Body");
        let value = serde_json::to_value(&note).unwrap();
        let raw = value["createdAt"].as_str().unwrap();
        assert!(chrono::DateTime::parse_from_rfc3339(raw).is_ok());
    }

    #[test]
    fn seed_notes_are_three_fixed_titles_in_descending_recency() {
        let seeds = seed_notes();
        let titles: Vec<&str> = seeds.iter().map(|note| note.title.as_str()).collect();
        assert_eq!(
            titles,
            vec!["Welcome to Notes Tracking", "Getting Started", "Tips & Tricks"]
        );
        assert!(seeds[0].created_at > seeds[1].created_at);
        assert!(seeds[1].created_at > seeds[2].created_at);
    }

    #[test]
    fn seed_notes_have_unique_ids() {
        let ids: HashSet<_> = seed_notes().into_iter().map(|note| note.id).collect();
        assert_eq!(ids.len(), 3);
    }

    #[test]
    fn database_with_no_notes_field_fails_to_deserialize() {
        assert!(serde_json::from_str::<NotesDatabase>(r#"{"version":2}"#).is_err());
    }
}
