//! Key-value storage boundary for the persisted notes blob.
//!
//! # Responsibility
//! - Define the raw string-keyed backend contract (`KeyValueBackend`).
//! - Provide a typed, single-key JSON view over a backend (`ScopedStore`).
//!
//! # Invariants
//! - A corrupt stored value is purged on read and reported as absent.
//! - Write failures surface to the caller; they are never swallowed.
//! - No concurrency control: callers sharing a key get last-write-wins.

use log::warn;
use serde::de::DeserializeOwned;
use serde::Serialize;
use std::error::Error;
use std::fmt::{Display, Formatter};

mod file;
mod memory;

pub use file::FileBackend;
pub use memory::MemoryBackend;

pub type StoreResult<T> = Result<T, StoreError>;

/// Storage-layer error for backend and serialization failures.
#[derive(Debug)]
pub enum StoreError {
    /// Underlying medium failed (disk full, permissions, quota).
    Io(std::io::Error),
    /// Value could not be serialized for storage.
    Serialize(serde_json::Error),
}

impl Display for StoreError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Io(err) => write!(f, "storage backend error: {err}"),
            Self::Serialize(err) => write!(f, "failed to serialize stored value: {err}"),
        }
    }
}

impl Error for StoreError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::Io(err) => Some(err),
            Self::Serialize(err) => Some(err),
        }
    }
}

impl From<std::io::Error> for StoreError {
    fn from(value: std::io::Error) -> Self {
        Self::Io(value)
    }
}

/// Raw string-keyed storage primitive.
///
/// Stand-in for a browser-style local store: synchronous get/set/remove by
/// string key, capacity-limited, shared across execution contexts.
pub trait KeyValueBackend {
    /// Returns the stored value for `key`, or `None` when absent.
    fn get(&self, key: &str) -> StoreResult<Option<String>>;
    /// Stores `value` under `key`, replacing any previous value.
    fn set(&self, key: &str, value: &str) -> StoreResult<()>;
    /// Removes the value under `key`. Removing an absent key is a no-op.
    fn remove(&self, key: &str) -> StoreResult<()>;
}

/// Typed JSON view over one fixed key of a backend.
///
/// # Invariants
/// - `read` treats an unparseable stored value as absent and purges it,
///   so a later write starts from a clean slate (self-healing read).
pub struct ScopedStore<B: KeyValueBackend> {
    backend: B,
    key: String,
}

impl<B: KeyValueBackend> ScopedStore<B> {
    /// Binds a backend to one fixed key.
    pub fn new(backend: B, key: impl Into<String>) -> Self {
        Self {
            backend,
            key: key.into(),
        }
    }

    /// Reads and deserializes the stored blob.
    ///
    /// Returns `None` when the key is absent. A present-but-corrupt value is
    /// purged and also reported as `None`.
    pub fn read<T: DeserializeOwned>(&self) -> StoreResult<Option<T>> {
        let Some(raw) = self.backend.get(&self.key)? else {
            return Ok(None);
        };

        match serde_json::from_str(&raw) {
            Ok(value) => Ok(Some(value)),
            Err(err) => {
                warn!(
                    "event=store_read module=store status=corrupt key={} error={}",
                    self.key, err
                );
                if let Err(purge_err) = self.backend.remove(&self.key) {
                    warn!(
                        "event=store_purge module=store status=error key={} error={}",
                        self.key, purge_err
                    );
                }
                Ok(None)
            }
        }
    }

    /// Serializes and stores the blob. Backend failures propagate.
    pub fn write<T: Serialize>(&self, value: &T) -> StoreResult<()> {
        let payload = serde_json::to_string(value).map_err(StoreError::Serialize)?;
        self.backend.set(&self.key, &payload)
    }
}

#[cfg(test)]
mod tests {
    use super::{KeyValueBackend, MemoryBackend, ScopedStore};
    use serde::{Deserialize, Serialize};

    #[derive(Debug, PartialEq, Serialize, Deserialize)]
    struct Payload {
        value: u32,
    }

    #[test]
    fn read_returns_none_for_absent_key() {
        let store = ScopedStore::new(MemoryBackend::default(), "payload");
        assert_eq!(store.read::<Payload>().unwrap(), None);
    }

    #[test]
    fn write_then_read_roundtrips() {
        let store = ScopedStore::new(MemoryBackend::default(), "payload");
        store.write(&Payload { value: 7 }).unwrap();
        assert_eq!(store.read::<Payload>().unwrap(), Some(Payload { value: 7 }));
    }

    #[test]
    fn corrupt_value_is_purged_and_reported_absent() {
        let backend = MemoryBackend::default();
        backend.set("payload", "{definitely not json").unwrap();

        let store = ScopedStore::new(backend.clone(), "payload");
        assert_eq!(store.read::<Payload>().unwrap(), None);
        // The corrupt entry is gone from the underlying backend.
        assert_eq!(backend.get("payload").unwrap(), None);
    }

    #[test]
    fn wrong_shape_is_treated_as_corrupt() {
        let backend = MemoryBackend::default();
        backend.set("payload", r#"{"other": true}"#).unwrap();

        let store = ScopedStore::new(backend.clone(), "payload");
        assert_eq!(store.read::<Payload>().unwrap(), None);
        assert_eq!(backend.get("payload").unwrap(), None);
    }
}
