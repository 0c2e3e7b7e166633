//! Note use-case service: validation, display ordering, submit/delete flows.
//!
//! # Responsibility
//! - Validate form input before it ever reaches the repository.
//! - Derive the display ordering (`created_at` descending) at read time.
//! - Gate deletion behind an interactive confirmation callback.
//!
//! # Invariants
//! - A form failing validation never causes a repository call.
//! - Title and content are trimmed before storage.
//! - Display ordering is computed per call and never persisted.
//! - A submission is rejected while a prior one is still in flight.

use crate::model::note::{Note, NoteId};
use crate::repo::note_repo::{NoteRepository, RepoError};
use crate::store::KeyValueBackend;
use std::error::Error;
use std::fmt::{Display, Formatter};

/// Field-scoped message shown when the title is blank.
pub const TITLE_REQUIRED: &str = "Title is required";
/// Field-scoped message shown when the content is blank.
pub const CONTENT_REQUIRED: &str = "Content is required";

/// User-entered note draft, as captured by an input form.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct NoteForm {
    pub title: String,
    pub content: String,
}

impl NoteForm {
    pub fn new(title: impl Into<String>, content: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            content: content.into(),
        }
    }

    /// Checks that title and content are non-empty after trimming.
    ///
    /// Both field errors may be present at once.
    pub fn validate(&self) -> Result<(), FormErrors> {
        let mut errors = FormErrors::default();
        if self.title.trim().is_empty() {
            errors.title = Some(TITLE_REQUIRED.to_string());
        }
        if self.content.trim().is_empty() {
            errors.content = Some(CONTENT_REQUIRED.to_string());
        }

        if errors.is_empty() {
            Ok(())
        } else {
            Err(errors)
        }
    }
}

/// Per-field validation messages. Empty means the form is valid.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FormErrors {
    pub title: Option<String>,
    pub content: Option<String>,
}

impl FormErrors {
    pub fn is_empty(&self) -> bool {
        self.title.is_none() && self.content.is_none()
    }
}

impl Display for FormErrors {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        let messages: Vec<&str> = [self.title.as_deref(), self.content.as_deref()]
            .into_iter()
            .flatten()
            .collect();
        write!(f, "{}", messages.join("; "))
    }
}

/// Service error for note use-cases.
#[derive(Debug)]
pub enum NoteServiceError {
    /// Form input failed validation; nothing reached the repository.
    Validation(FormErrors),
    /// A prior submission has not completed yet.
    SubmissionInFlight,
    /// Persistence-layer failure; safe to retry.
    Repo(RepoError),
}

impl Display for NoteServiceError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Validation(errors) => write!(f, "invalid note form: {errors}"),
            Self::SubmissionInFlight => write!(f, "a submission is already in flight"),
            Self::Repo(err) => write!(f, "{err}"),
        }
    }
}

impl Error for NoteServiceError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::Repo(err) => Some(err),
            _ => None,
        }
    }
}

impl From<RepoError> for NoteServiceError {
    fn from(value: RepoError) -> Self {
        Self::Repo(value)
    }
}

/// Outcome of a confirmed-delete interaction.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DeleteOutcome {
    /// The note existed, was confirmed, and is gone.
    Deleted,
    /// The user declined; the repository was not touched.
    Cancelled,
    /// No note with that ID exists.
    NotFound,
}

/// Sorts notes for display: newest first by creation time.
///
/// Storage order is left untouched; this is derived per render.
pub fn sort_for_display(mut notes: Vec<Note>) -> Vec<Note> {
    notes.sort_by(|a, b| b.created_at.cmp(&a.created_at));
    notes
}

/// Presentation facade over the notes repository.
pub struct NoteService<B: KeyValueBackend> {
    repo: NoteRepository<B>,
    submitting: bool,
}

impl<B: KeyValueBackend> NoteService<B> {
    pub fn new(repo: NoteRepository<B>) -> Self {
        Self {
            repo,
            submitting: false,
        }
    }

    /// Loads or seeds stored state. Delegates to the repository.
    pub fn initialize(&mut self) -> Result<(), NoteServiceError> {
        self.repo.initialize()?;
        Ok(())
    }

    /// Returns all notes in display order (newest first).
    pub fn notes(&mut self) -> Result<Vec<Note>, NoteServiceError> {
        let notes = self.repo.list()?;
        Ok(sort_for_display(notes))
    }

    /// Validates and submits a new note, returning the created record.
    ///
    /// Rejected with `SubmissionInFlight` when re-entered before a prior
    /// submission completed; the guard clears on completion either way.
    pub fn submit(&mut self, form: &NoteForm) -> Result<Note, NoteServiceError> {
        if self.submitting {
            return Err(NoteServiceError::SubmissionInFlight);
        }
        form.validate().map_err(NoteServiceError::Validation)?;

        self.submitting = true;
        let result = self.repo.add(form.title.trim(), form.content.trim());
        self.submitting = false;

        result.map_err(NoteServiceError::from)
    }

    /// Deletes a note after asking `confirm`, which receives the note about
    /// to be removed. The repository is only invoked on confirmation.
    pub fn delete(
        &mut self,
        id: NoteId,
        confirm: impl FnOnce(&Note) -> bool,
    ) -> Result<DeleteOutcome, NoteServiceError> {
        let notes = self.repo.list()?;
        let Some(target) = notes.iter().find(|note| note.id == id) else {
            return Ok(DeleteOutcome::NotFound);
        };

        if !confirm(target) {
            return Ok(DeleteOutcome::Cancelled);
        }

        // The store may have changed between the lookup and this call, so
        // the repository answer still decides the outcome.
        if self.repo.delete(id)? {
            Ok(DeleteOutcome::Deleted)
        } else {
            Ok(DeleteOutcome::NotFound)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::{
        sort_for_display, NoteForm, NoteService, NoteServiceError, CONTENT_REQUIRED,
        TITLE_REQUIRED,
    };
    use crate::model::note::Note;
    use crate::repo::note_repo::NoteRepository;
    use crate::store::MemoryBackend;
    use chrono::{Duration, Utc};

    #[test]
    fn validate_accepts_trimmed_non_empty_fields() {
        assert!(NoteForm::new("  Shopping ", "milk, eggs").validate().is_ok());
    }

    #[test]
    fn validate_flags_blank_title_only() {
        let errors = NoteForm::new("   ", "x").validate().unwrap_err();
        assert_eq!(errors.title.as_deref(), Some(TITLE_REQUIRED));
        assert_eq!(errors.content, None);
    }

    #[test]
    fn validate_flags_both_fields_at_once() {
        let errors = NoteForm::new("", " \t ").validate().unwrap_err();
        assert_eq!(errors.title.as_deref(), Some(TITLE_REQUIRED));
        assert_eq!(errors.content.as_deref(), Some(CONTENT_REQUIRED));
    }

    #[test]
    fn sort_for_display_orders_newest_first() {
        let now = Utc::now();
        let oldest = Note::with_created_at("c", "3", now - Duration::days(2));
        let newest = Note::with_created_at("a", "1", now);
        let middle = Note::with_created_at("b", "2", now - Duration::days(1));

        let sorted = sort_for_display(vec![oldest.clone(), newest.clone(), middle.clone()]);
        assert_eq!(sorted, vec![newest, middle, oldest]);
    }

    #[test]
    fn submit_is_rejected_while_in_flight() {
        let mut service = NoteService::new(NoteRepository::new(MemoryBackend::new()));
        service.submitting = true;

        let result = service.submit(&NoteForm::new("Title", "Body"));
        assert!(matches!(
            result,
            Err(NoteServiceError::SubmissionInFlight)
        ));
    }

    #[test]
    fn submit_clears_in_flight_guard_on_success() {
        let mut service = NoteService::new(NoteRepository::new(MemoryBackend::new()));
        service.submit(&NoteForm::new("First", "one")).unwrap();
        service.submit(&NoteForm::new("Second", "two")).unwrap();
        assert!(!service.submitting);
    }
}
