//! Note domain model.
//!
//! # Responsibility
//! - Define the note record and its tag-set semantics.
//! - Parse the comma-separated tag input used by note forms.
//!
//! # Invariants
//! - `title` and `content` are non-blank for every stored note.
//! - `tags` holds no blank entries and no case-insensitive duplicates.
//! - `updated_at` is never earlier than `created_at`.

use crate::model::{require_text, ValidationError};
use chrono::NaiveDate;
use once_cell::sync::Lazy;
use regex::Regex;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Subject used when the form leaves it blank.
pub const DEFAULT_SUBJECT: &str = "General";

static TAG_SEPARATOR_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"\s*,\s*").expect("valid tag separator regex"));

/// Stable identifier of a note.
pub type NoteId = Uuid;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Note {
    pub id: NoteId,
    pub title: String,
    pub content: String,
    pub subject: String,
    pub tags: Vec<String>,
    pub created_at: NaiveDate,
    pub updated_at: NaiveDate,
}

impl Note {
    pub fn validate(&self) -> Result<(), ValidationError> {
        require_text("title", &self.title)?;
        require_text("content", &self.content)
    }

    /// Returns whether `needle` (already lowercased) occurs in any searchable field.
    pub(crate) fn contains_lowercase(&self, needle: &str) -> bool {
        self.title.to_lowercase().contains(needle)
            || self.content.to_lowercase().contains(needle)
            || self.subject.to_lowercase().contains(needle)
            || self
                .tags
                .iter()
                .any(|tag| tag.to_lowercase().contains(needle))
    }
}

/// Form input shared by "new note" and "edit note".
///
/// `tags` is the raw comma-separated text from the form.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct NoteDraft {
    pub title: String,
    pub content: String,
    pub subject: String,
    pub tags: String,
}

impl NoteDraft {
    pub fn new(title: impl Into<String>, content: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            content: content.into(),
            ..Self::default()
        }
    }

    pub fn subject(mut self, subject: impl Into<String>) -> Self {
        self.subject = subject.into();
        self
    }

    pub fn tags(mut self, tags: impl Into<String>) -> Self {
        self.tags = tags.into();
        self
    }

    /// Builds a new note stamped with `today`.
    ///
    /// A blank subject falls back to [`DEFAULT_SUBJECT`].
    pub fn into_note(self, today: NaiveDate) -> Result<Note, ValidationError> {
        let subject = if self.subject.trim().is_empty() {
            DEFAULT_SUBJECT.to_string()
        } else {
            self.subject
        };
        let note = Note {
            id: Uuid::new_v4(),
            title: self.title,
            content: self.content,
            subject,
            tags: parse_tags(&self.tags),
            created_at: today,
            updated_at: today,
        };
        note.validate()?;
        Ok(note)
    }

    /// Copies the draft over `note`, keeping id and creation date.
    ///
    /// Edits keep the subject as typed, including blank.
    pub fn apply_to(&self, note: &Note, today: NaiveDate) -> Result<Note, ValidationError> {
        let updated = Note {
            id: note.id,
            title: self.title.clone(),
            content: self.content.clone(),
            subject: self.subject.clone(),
            tags: parse_tags(&self.tags),
            created_at: note.created_at,
            updated_at: today.max(note.created_at),
        };
        updated.validate()?;
        Ok(updated)
    }

    /// Pre-fills an edit form from an existing note.
    pub fn from_note(note: &Note) -> Self {
        Self {
            title: note.title.clone(),
            content: note.content.clone(),
            subject: note.subject.clone(),
            tags: note.tags.join(", "),
        }
    }
}

/// Splits comma-separated tag input, dropping blanks and repeated tags.
///
/// First spelling wins; comparison is case-insensitive.
pub fn parse_tags(raw: &str) -> Vec<String> {
    let mut tags: Vec<String> = Vec::new();
    for tag in TAG_SEPARATOR_RE.split(raw.trim()) {
        let tag = tag.trim();
        if tag.is_empty() {
            continue;
        }
        let folded = tag.to_lowercase();
        if tags.iter().any(|known| known.to_lowercase() == folded) {
            continue;
        }
        tags.push(tag.to_string());
    }
    tags
}

#[cfg(test)]
mod tests {
    use super::{parse_tags, NoteDraft, DEFAULT_SUBJECT};
    use chrono::NaiveDate;

    fn day(d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(2024, 7, d).unwrap()
    }

    #[test]
    fn parse_tags_trims_drops_blanks_and_duplicates() {
        assert_eq!(
            parse_tags(" calculus ,, Derivatives,calculus ,  "),
            vec!["calculus".to_string(), "Derivatives".to_string()]
        );
        assert!(parse_tags("   ").is_empty());
    }

    #[test]
    fn parse_tags_folds_non_ascii_case() {
        assert_eq!(parse_tags("Ärger, ärger, ÉTÉ, été"), vec!["Ärger", "ÉTÉ"]);
    }

    #[test]
    fn blank_subject_defaults_to_general() {
        let note = NoteDraft::new("Title", "Body").into_note(day(1)).unwrap();
        assert_eq!(note.subject, DEFAULT_SUBJECT);
        assert_eq!(note.created_at, note.updated_at);
    }

    #[test]
    fn draft_requires_title_and_content() {
        assert!(NoteDraft::new("", "Body").into_note(day(1)).is_err());
        assert!(NoteDraft::new("Title", "  ").into_note(day(1)).is_err());
    }

    #[test]
    fn edit_keeps_identity_and_creation_date() {
        let note = NoteDraft::new("Title", "Body").into_note(day(1)).unwrap();
        let edited = NoteDraft::from_note(&note)
            .tags("a, b")
            .apply_to(&note, day(3))
            .unwrap();
        assert_eq!(edited.id, note.id);
        assert_eq!(edited.created_at, day(1));
        assert_eq!(edited.updated_at, day(3));
        assert_eq!(edited.tags, vec!["a".to_string(), "b".to_string()]);
    }
}
