//! Note collection use-case service.
//!
//! # Responsibility
//! - Create, edit and delete notes from form drafts.
//! - Track which note is open in the reader pane.
//! - Serve text search over the collection.
//!
//! # Invariants
//! - Creating a note selects it.
//! - Deleting the selected note clears the selection.
//! - Edits use full replacement semantics and refresh `updated_at`.

use crate::model::note::{Note, NoteDraft, NoteId};
use crate::model::ValidationError;
use crate::repo::note_repo::{NoteListQuery, NoteRepository};
use crate::repo::{RepoError, RepoResult};
use chrono::{Local, NaiveDate};
use log::info;
use std::error::Error;
use std::fmt::{Display, Formatter};

/// Service error for note use-cases.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum NoteServiceError {
    Invalid(ValidationError),
    NoteNotFound(NoteId),
    Repo(RepoError),
}

impl Display for NoteServiceError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Invalid(err) => write!(f, "invalid note: {err}"),
            Self::NoteNotFound(id) => write!(f, "note not found: {id}"),
            Self::Repo(err) => write!(f, "{err}"),
        }
    }
}

impl Error for NoteServiceError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::Invalid(err) => Some(err),
            Self::Repo(err) => Some(err),
            Self::NoteNotFound(_) => None,
        }
    }
}

impl From<RepoError> for NoteServiceError {
    fn from(value: RepoError) -> Self {
        match value {
            RepoError::NotFound(id) => Self::NoteNotFound(id),
            RepoError::Validation(err) => Self::Invalid(err),
            other => Self::Repo(other),
        }
    }
}

impl From<ValidationError> for NoteServiceError {
    fn from(value: ValidationError) -> Self {
        Self::Invalid(value)
    }
}

fn local_today() -> NaiveDate {
    Local::now().date_naive()
}

/// Note collection facade over repository implementations.
pub struct NoteService<R: NoteRepository> {
    repo: R,
    selected: Option<NoteId>,
    today: fn() -> NaiveDate,
}

impl<R: NoteRepository> NoteService<R> {
    pub fn new(repo: R) -> Self {
        Self::with_clock(repo, local_today)
    }

    /// Uses `today` to stamp `created_at` / `updated_at`.
    pub fn with_clock(repo: R, today: fn() -> NaiveDate) -> Self {
        Self {
            repo,
            selected: None,
            today,
        }
    }

    /// Prepends a note built from `draft` and opens it.
    pub fn create_note(&mut self, draft: NoteDraft) -> Result<Note, NoteServiceError> {
        let note = draft.into_note((self.today)())?;
        self.repo.create_note(&note)?;
        self.selected = Some(note.id);
        info!(
            "event=note_create module=notes status=ok note_id={} tags={}",
            note.id,
            note.tags.len()
        );
        Ok(note)
    }

    /// Replaces title, content, subject and tags of an existing note.
    pub fn edit_note(&mut self, id: NoteId, draft: &NoteDraft) -> Result<Note, NoteServiceError> {
        let current = self
            .repo
            .get_note(id)?
            .ok_or(NoteServiceError::NoteNotFound(id))?;
        let updated = draft.apply_to(&current, (self.today)())?;
        self.repo.update_note(&updated)?;
        info!("event=note_update module=notes status=ok note_id={id}");
        Ok(updated)
    }

    pub fn delete_note(&mut self, id: NoteId) -> Result<(), NoteServiceError> {
        self.repo.delete_note(id)?;
        if self.selected == Some(id) {
            self.selected = None;
        }
        info!("event=note_delete module=notes status=ok note_id={id}");
        Ok(())
    }

    pub fn select_note(&mut self, id: NoteId) -> Result<Note, NoteServiceError> {
        let note = self
            .repo
            .get_note(id)?
            .ok_or(NoteServiceError::NoteNotFound(id))?;
        self.selected = Some(id);
        Ok(note)
    }

    pub fn clear_selection(&mut self) {
        self.selected = None;
    }

    /// Currently opened note, if it still exists.
    pub fn selected_note(&self) -> RepoResult<Option<Note>> {
        match self.selected {
            Some(id) => self.repo.get_note(id),
            None => Ok(None),
        }
    }

    pub fn get_note(&self, id: NoteId) -> RepoResult<Option<Note>> {
        self.repo.get_note(id)
    }

    /// Lists notes matching `term` as typed; an empty term lists all notes.
    pub fn search_notes(&self, term: &str) -> Result<Vec<Note>, NoteServiceError> {
        Ok(self.repo.list_notes(&NoteListQuery::search(term))?)
    }
}
