//! Saved-password list persistence.
//!
//! This module defines the persisted saved-list and the key/value
//! boundary it is written through.
//!
//! The list is an ordered, duplicate-free sequence of password strings
//! serialized as a single JSON array under one well-known key. Every
//! mutation rewrites the full record synchronously; there is no partial
//! persistence. A missing or malformed record always loads as the empty
//! list.
//!
//! The key/value boundary is a small trait so the backing store can be
//! swapped: [`FileStore`] persists one file per key on disk, while
//! [`MemoryStore`] is an in-memory substitute for tests and embedding.

use std::collections::HashMap;
use std::fs;
use std::io;
use std::path::PathBuf;

/// Well-known key holding the serialized saved-password list.
pub const PASSWORDS_KEY: &str = "passwords";

/// Errors from the persistence layer.
#[derive(Debug, thiserror::Error)]
pub enum StoreError {
    #[error("storage I/O error: {0}")]
    Io(#[from] io::Error),

    #[error("storage encoding error: {0}")]
    Serialize(#[from] serde_json::Error),
}

/// Byte-string key/value persistence boundary.
///
/// Reads are fail-soft: any key that cannot be read is reported as
/// absent. Writes and removals report failure to the caller.
pub trait KeyValueStore {
    /// Read the value stored under `key`, or `None` if absent.
    fn get(&self, key: &str) -> Option<Vec<u8>>;

    /// Store `value` under `key`, replacing any previous value.
    fn set(&mut self, key: &str, value: &[u8]) -> Result<(), StoreError>;

    /// Remove the value stored under `key`. Removing an absent key is
    /// not an error.
    fn remove(&mut self, key: &str) -> Result<(), StoreError>;
}

impl<S: KeyValueStore> KeyValueStore for &mut S {
    fn get(&self, key: &str) -> Option<Vec<u8>> {
        (**self).get(key)
    }

    fn set(&mut self, key: &str, value: &[u8]) -> Result<(), StoreError> {
        (**self).set(key, value)
    }

    fn remove(&mut self, key: &str) -> Result<(), StoreError> {
        (**self).remove(key)
    }
}

/// Key/value store keeping one JSON file per key inside a directory.
pub struct FileStore {
    dir: PathBuf,
}

impl FileStore {
    /// Create a store rooted at `dir`. The directory is not created
    /// until the first write.
    pub fn new(dir: impl Into<PathBuf>) -> Self {
        Self { dir: dir.into() }
    }

    fn path_for(&self, key: &str) -> PathBuf {
        self.dir.join(format!("{}.json", key))
    }
}

impl KeyValueStore for FileStore {
    fn get(&self, key: &str) -> Option<Vec<u8>> {
        fs::read(self.path_for(key)).ok()
    }

    fn set(&mut self, key: &str, value: &[u8]) -> Result<(), StoreError> {
        if !self.dir.as_os_str().is_empty() && !self.dir.exists() {
            fs::create_dir_all(&self.dir)?;
        }
        fs::write(self.path_for(key), value)?;
        Ok(())
    }

    fn remove(&mut self, key: &str) -> Result<(), StoreError> {
        match fs::remove_file(self.path_for(key)) {
            Ok(()) => Ok(()),
            Err(e) if e.kind() == io::ErrorKind::NotFound => Ok(()),
            Err(e) => Err(e.into()),
        }
    }
}

/// In-memory key/value store.
#[derive(Debug, Default)]
#[allow(dead_code)]
pub struct MemoryStore {
    entries: HashMap<String, Vec<u8>>,
}

impl KeyValueStore for MemoryStore {
    fn get(&self, key: &str) -> Option<Vec<u8>> {
        self.entries.get(key).cloned()
    }

    fn set(&mut self, key: &str, value: &[u8]) -> Result<(), StoreError> {
        self.entries.insert(key.to_string(), value.to_vec());
        Ok(())
    }

    fn remove(&mut self, key: &str) -> Result<(), StoreError> {
        self.entries.remove(key);
        Ok(())
    }
}

/// Outcome of a [`SavedPasswords::save`] call.
///
/// The no-op cases are distinct variants rather than an empty-string
/// sentinel, so callers can report what actually happened.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SaveOutcome {
    /// The candidate was appended and persisted.
    Saved,

    /// The candidate was already in the list; nothing was written.
    Duplicate,

    /// The candidate was empty; nothing was written.
    EmptyCandidate,
}

/// The saved-password list, backed by a key/value store.
///
/// The list owns the persisted representation: callers only ever see a
/// read-only slice of it. Insertion order is preserved and values are
/// unique by exact string equality.
pub struct SavedPasswords<S: KeyValueStore> {
    store: S,
    values: Vec<String>,
}

impl<S: KeyValueStore> SavedPasswords<S> {
    /// Load the saved list from `store`.
    ///
    /// An absent or malformed record loads as the empty list. This never
    /// fails: unreadable data is treated as no data.
    pub fn load(store: S) -> Self {
        let values = store
            .get(PASSWORDS_KEY)
            .and_then(|bytes| serde_json::from_slice(&bytes).ok())
            .unwrap_or_default();
        Self { store, values }
    }

    /// The saved passwords, in insertion order.
    pub fn passwords(&self) -> &[String] {
        &self.values
    }

    /// Save a candidate password.
    ///
    /// An empty candidate or one already present leaves the list and
    /// the persisted record untouched. Otherwise the candidate is
    /// appended and the full record is rewritten.
    ///
    /// # Errors
    ///
    /// Returns a [`StoreError`] if the rewrite fails. The in-memory
    /// list is rolled back so it never diverges from the persisted
    /// record.
    pub fn save(&mut self, candidate: &str) -> Result<SaveOutcome, StoreError> {
        if candidate.is_empty() {
            return Ok(SaveOutcome::EmptyCandidate);
        }
        if self.values.iter().any(|p| p == candidate) {
            return Ok(SaveOutcome::Duplicate);
        }

        self.values.push(candidate.to_string());
        if let Err(e) = self.persist() {
            self.values.pop();
            return Err(e);
        }
        Ok(SaveOutcome::Saved)
    }

    /// Empty the list and remove the persisted record.
    pub fn clear(&mut self) -> Result<(), StoreError> {
        self.store.remove(PASSWORDS_KEY)?;
        self.values.clear();
        Ok(())
    }

    fn persist(&mut self) -> Result<(), StoreError> {
        let json = serde_json::to_vec(&self.values)?;
        self.store.set(PASSWORDS_KEY, &json)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn save_appends_and_persists() {
        let mut kv = MemoryStore::default();
        let mut list = SavedPasswords::load(&mut kv);

        let outcome = list.save("Xk9!aB2@Lm1#").unwrap();
        assert_eq!(outcome, SaveOutcome::Saved);
        assert_eq!(list.passwords(), ["Xk9!aB2@Lm1#"]);
    }

    #[test]
    fn save_is_idempotent() {
        let mut kv = MemoryStore::default();
        let mut list = SavedPasswords::load(&mut kv);

        list.save("Xk9!aB2@Lm1#").unwrap();
        let outcome = list.save("Xk9!aB2@Lm1#").unwrap();

        assert_eq!(outcome, SaveOutcome::Duplicate);
        assert_eq!(list.passwords(), ["Xk9!aB2@Lm1#"]);
    }

    #[test]
    fn save_preserves_insertion_order() {
        let mut kv = MemoryStore::default();
        let mut list = SavedPasswords::load(&mut kv);

        list.save("first").unwrap();
        list.save("second").unwrap();

        assert_eq!(list.passwords(), ["first", "second"]);
    }

    /// A duplicate save leaves the persisted bytes untouched.
    #[test]
    fn duplicate_save_does_not_rewrite_record() {
        let mut kv = MemoryStore::default();
        let mut list = SavedPasswords::load(&mut kv);
        list.save("abc").unwrap();
        drop(list);

        let before = kv.get(PASSWORDS_KEY).unwrap();
        let mut list = SavedPasswords::load(&mut kv);
        assert_eq!(list.save("abc").unwrap(), SaveOutcome::Duplicate);
        drop(list);

        assert_eq!(kv.get(PASSWORDS_KEY).unwrap(), before);
    }

    #[test]
    fn empty_candidate_is_a_no_op() {
        let mut kv = MemoryStore::default();
        let mut list = SavedPasswords::load(&mut kv);

        assert_eq!(list.save("").unwrap(), SaveOutcome::EmptyCandidate);
        assert!(list.passwords().is_empty());
        drop(list);
        assert!(kv.get(PASSWORDS_KEY).is_none());
    }

    #[test]
    fn reload_round_trips_the_list() {
        let mut kv = MemoryStore::default();
        let mut list = SavedPasswords::load(&mut kv);
        list.save("one").unwrap();
        list.save("two").unwrap();
        drop(list);

        let reloaded = SavedPasswords::load(&mut kv);
        assert_eq!(reloaded.passwords(), ["one", "two"]);
    }

    #[test]
    fn malformed_record_loads_as_empty() {
        let mut kv = MemoryStore::default();
        kv.set(PASSWORDS_KEY, b"not json at all").unwrap();

        let list = SavedPasswords::load(&mut kv);
        assert!(list.passwords().is_empty());
    }

    #[test]
    fn clear_then_load_is_empty() {
        let mut kv = MemoryStore::default();
        let mut list = SavedPasswords::load(&mut kv);
        list.save("one").unwrap();
        list.clear().unwrap();
        assert!(list.passwords().is_empty());
        drop(list);

        assert!(kv.get(PASSWORDS_KEY).is_none());
        let reloaded = SavedPasswords::load(&mut kv);
        assert!(reloaded.passwords().is_empty());
    }

    #[test]
    fn file_store_survives_restart() {
        let dir = tempfile::tempdir().unwrap();

        let mut list = SavedPasswords::load(FileStore::new(dir.path()));
        list.save("first").unwrap();
        list.save("second").unwrap();
        drop(list);

        let reloaded = SavedPasswords::load(FileStore::new(dir.path()));
        assert_eq!(reloaded.passwords(), ["first", "second"]);
    }

    #[test]
    fn file_store_remove_of_absent_key_is_ok() {
        let dir = tempfile::tempdir().unwrap();
        let mut store = FileStore::new(dir.path());
        store.remove(PASSWORDS_KEY).unwrap();
    }

    #[test]
    fn file_store_clear_removes_the_record_file() {
        let dir = tempfile::tempdir().unwrap();

        let mut list = SavedPasswords::load(FileStore::new(dir.path()));
        list.save("one").unwrap();
        assert!(dir.path().join("passwords.json").exists());

        list.clear().unwrap();
        assert!(!dir.path().join("passwords.json").exists());
    }
}
