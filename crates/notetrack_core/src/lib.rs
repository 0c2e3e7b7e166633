//! Core domain logic for NoteTrack.
//! This crate is the single source of truth for notes persistence invariants.

pub mod logging;
pub mod model;
pub mod repo;
pub mod service;
pub mod store;

pub use logging::{default_log_level, init_logging, logging_status};
pub use model::note::{Note, NoteId, NotesDatabase};
pub use repo::note_repo::{NoteRepository, RepoError, RepoResult, NOTES_STORE_KEY};
pub use service::note_service::{
    sort_for_display, DeleteOutcome, FormErrors, NoteForm, NoteService, NoteServiceError,
};
pub use store::{
    FileBackend, KeyValueBackend, MemoryBackend, ScopedStore, StoreError, StoreResult,
};

/// Returns the core crate version.
pub fn core_version() -> &'static str {
    env!("CARGO_PKG_VERSION")
}

#[cfg(test)]
mod tests {
    use super::core_version;

    #[test]
    fn version_is_not_empty() {
        assert!(!core_version().is_empty());
    }
}
