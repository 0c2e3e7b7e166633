//! Notes collection repository.
//!
//! # Responsibility
//! - Provide initialize/list/add/delete over the single persisted blob.
//! - Seed the fixed default dataset on first run or after corruption.
//!
//! # Invariants
//! - Every operation re-reads the store before acting, so out-of-band
//!   writes by another context are picked up rather than overwritten blind.
//! - The last known in-memory state is only replaced after a successful
//!   read or write; a failed write leaves it untouched.
//! - Conflict policy across contexts is last-write-wins.

use crate::model::note::{seed_notes, Note, NoteId, NotesDatabase};
use crate::store::{KeyValueBackend, ScopedStore, StoreError};
use log::{debug, info};
use std::error::Error;
use std::fmt::{Display, Formatter};

/// Fixed storage key holding the serialized notes collection.
pub const NOTES_STORE_KEY: &str = "notes-db";

pub type RepoResult<T> = Result<T, RepoError>;

/// Repository error for notes persistence operations.
#[derive(Debug)]
pub enum RepoError {
    /// Storage-layer failure (write quota, disk, serialization).
    Store(StoreError),
}

impl Display for RepoError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Store(err) => write!(f, "{err}"),
        }
    }
}

impl Error for RepoError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::Store(err) => Some(err),
        }
    }
}

impl From<StoreError> for RepoError {
    fn from(value: StoreError) -> Self {
        Self::Store(value)
    }
}

/// Read-modify-write repository for the notes collection.
pub struct NoteRepository<B: KeyValueBackend> {
    store: ScopedStore<B>,
    state: NotesDatabase,
}

impl<B: KeyValueBackend> NoteRepository<B> {
    /// Creates a repository over the given backend, scoped to the fixed
    /// notes key. The in-memory state starts empty until the first read.
    pub fn new(backend: B) -> Self {
        Self {
            store: ScopedStore::new(backend, NOTES_STORE_KEY),
            state: NotesDatabase::default(),
        }
    }

    /// Loads stored state, seeding the default dataset when nothing valid
    /// is present.
    ///
    /// A corrupt blob was already purged by the store's self-healing read,
    /// so it takes the same path as an absent one: wholesale reseed.
    /// Idempotent once valid data exists.
    pub fn initialize(&mut self) -> RepoResult<()> {
        if let Some(stored) = self.store.read::<NotesDatabase>()? {
            self.state = stored;
            debug!(
                "event=repo_init module=repo status=ok count={}",
                self.state.notes.len()
            );
            return Ok(());
        }

        let seeded = NotesDatabase {
            notes: seed_notes(),
        };
        self.store.write(&seeded)?;
        self.state = seeded;
        info!(
            "event=repo_init module=repo status=seeded count={}",
            self.state.notes.len()
        );
        Ok(())
    }

    /// Returns all notes in storage order.
    ///
    /// Re-reads the store to reflect out-of-band changes; when the store
    /// currently holds nothing, the last known in-memory state is returned.
    pub fn list(&mut self) -> RepoResult<Vec<Note>> {
        self.refresh()?;
        Ok(self.state.notes.clone())
    }

    /// Appends a freshly constructed note and persists the collection.
    ///
    /// The created note carries a new unique ID and the current timestamp.
    /// A failed write propagates and leaves the in-memory state as it was.
    pub fn add(
        &mut self,
        title: impl Into<String>,
        content: impl Into<String>,
    ) -> RepoResult<Note> {
        self.refresh()?;

        let note = Note::new(title, content);
        let mut next = self.state.clone();
        next.notes.push(note.clone());
        self.store.write(&next)?;
        self.state = next;

        info!("event=note_add module=repo status=ok id={}", note.id);
        Ok(note)
    }

    /// Removes the note with the given ID, persisting only if something
    /// was removed. Returns whether a note matched; an unknown ID is
    /// `false`, not an error.
    pub fn delete(&mut self, id: NoteId) -> RepoResult<bool> {
        self.refresh()?;

        let mut next = self.state.clone();
        next.notes.retain(|note| note.id != id);
        if next.notes.len() == self.state.notes.len() {
            debug!("event=note_delete module=repo status=not_found id={id}");
            return Ok(false);
        }

        self.store.write(&next)?;
        self.state = next;
        info!("event=note_delete module=repo status=ok id={id}");
        Ok(true)
    }

    fn refresh(&mut self) -> RepoResult<()> {
        if let Some(stored) = self.store.read::<NotesDatabase>()? {
            self.state = stored;
        }
        Ok(())
    }
}
