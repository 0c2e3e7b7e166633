//! File-backed key-value storage.
//!
//! # Responsibility
//! - Persist one file per key under a data directory.
//!
//! # Invariants
//! - A missing file reads as an absent key, never as an error.
//! - Writes create the data directory on demand.

use super::{KeyValueBackend, StoreResult};
use std::fs;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};

/// Durable backend storing each key as `<dir>/<key>.json`.
#[derive(Debug, Clone)]
pub struct FileBackend {
    dir: PathBuf,
}

impl FileBackend {
    /// Creates a backend rooted at `dir`. The directory is created lazily
    /// on first write.
    pub fn new(dir: impl Into<PathBuf>) -> Self {
        Self { dir: dir.into() }
    }

    /// Returns the directory this backend stores its entries in.
    pub fn dir(&self) -> &Path {
        &self.dir
    }

    fn path_for(&self, key: &str) -> PathBuf {
        self.dir.join(format!("{key}.json"))
    }
}

impl KeyValueBackend for FileBackend {
    fn get(&self, key: &str) -> StoreResult<Option<String>> {
        match fs::read_to_string(self.path_for(key)) {
            Ok(value) => Ok(Some(value)),
            Err(err) if err.kind() == ErrorKind::NotFound => Ok(None),
            Err(err) => Err(err.into()),
        }
    }

    fn set(&self, key: &str, value: &str) -> StoreResult<()> {
        fs::create_dir_all(&self.dir)?;
        fs::write(self.path_for(key), value)?;
        Ok(())
    }

    fn remove(&self, key: &str) -> StoreResult<()> {
        match fs::remove_file(self.path_for(key)) {
            Ok(()) => Ok(()),
            Err(err) if err.kind() == ErrorKind::NotFound => Ok(()),
            Err(err) => Err(err.into()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::FileBackend;
    use crate::store::KeyValueBackend;

    #[test]
    fn get_on_missing_key_is_none() {
        let dir = tempfile::tempdir().unwrap();
        let backend = FileBackend::new(dir.path());
        assert_eq!(backend.get("notes-db").unwrap(), None);
    }

    #[test]
    fn set_then_get_roundtrips_across_instances() {
        let dir = tempfile::tempdir().unwrap();
        let backend = FileBackend::new(dir.path());
        backend.set("notes-db", r#"{"notes":[]}"#).unwrap();

        // A fresh backend over the same directory sees the value.
        let reopened = FileBackend::new(dir.path());
        assert_eq!(
            reopened.get("notes-db").unwrap().as_deref(),
            Some(r#"{"notes":[]}"#)
        );
    }

    #[test]
    fn remove_is_idempotent() {
        let dir = tempfile::tempdir().unwrap();
        let backend = FileBackend::new(dir.path());
        backend.set("notes-db", "x").unwrap();
        backend.remove("notes-db").unwrap();
        backend.remove("notes-db").unwrap();
        assert_eq!(backend.get("notes-db").unwrap(), None);
    }
}
