//! Note repository contract and in-memory implementation.
//!
//! # Responsibility
//! - Hold the note collection newest-first.
//! - Apply text search while listing.
//!
//! # Invariants
//! - New notes are prepended; edits keep a note's position.
//! - Stored notes always pass `Note::validate()`.

use crate::model::note::{Note, NoteId};
use crate::repo::memory::MemoryList;
use crate::repo::RepoResult;
use crate::search::filter::NoteSearch;

/// Query options for listing notes.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct NoteListQuery {
    pub search: NoteSearch,
}

impl NoteListQuery {
    pub fn search(term: &str) -> Self {
        Self {
            search: NoteSearch::new(term),
        }
    }
}

/// Repository interface for note collection operations.
pub trait NoteRepository {
    fn create_note(&mut self, note: &Note) -> RepoResult<NoteId>;
    fn update_note(&mut self, note: &Note) -> RepoResult<()>;
    fn get_note(&self, id: NoteId) -> RepoResult<Option<Note>>;
    fn list_notes(&self, query: &NoteListQuery) -> RepoResult<Vec<Note>>;
    fn delete_note(&mut self, id: NoteId) -> RepoResult<()>;
}

#[derive(Debug, Clone, Default)]
pub struct InMemoryNoteRepository {
    notes: MemoryList<Note>,
}

impl InMemoryNoteRepository {
    pub fn new() -> Self {
        Self::default()
    }

    /// Builds a repository whose list order matches `notes`.
    pub fn with_notes(notes: impl IntoIterator<Item = Note>) -> RepoResult<Self> {
        let mut repo = Self::new();
        for note in notes {
            note.validate()?;
            repo.notes.push_back(note)?;
        }
        Ok(repo)
    }
}

impl NoteRepository for InMemoryNoteRepository {
    fn create_note(&mut self, note: &Note) -> RepoResult<NoteId> {
        note.validate()?;
        self.notes.push_front(note.clone())
    }

    fn update_note(&mut self, note: &Note) -> RepoResult<()> {
        note.validate()?;
        self.notes.replace(note.clone())
    }

    fn get_note(&self, id: NoteId) -> RepoResult<Option<Note>> {
        Ok(self.notes.get(id).cloned())
    }

    fn list_notes(&self, query: &NoteListQuery) -> RepoResult<Vec<Note>> {
        Ok(self
            .notes
            .iter()
            .filter(|note| query.search.matches(note))
            .cloned()
            .collect())
    }

    fn delete_note(&mut self, id: NoteId) -> RepoResult<()> {
        self.notes.remove(id).map(|_| ())
    }
}
