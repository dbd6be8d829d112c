// ---------------------------------------------------------------------------
// store – key/value storage for persisted records
// ---------------------------------------------------------------------------
//
// Two keys are used by the tracker: the latest assessment and the user goal.
// `FileStore` maps each key to `<dir>/<key>.ecot` and writes atomically.

use std::collections::HashMap;
use std::fs;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};

use crate::atomic_write::atomic_write;
use crate::save_error::SaveError;

/// File extension for records written by [`FileStore`].
pub const RECORD_EXTENSION: &str = "ecot";

/// Minimal key/value storage. Values are opaque bytes.
pub trait KeyValueStore {
    /// Returns `Ok(None)` when the key has never been written.
    fn get(&self, key: &str) -> Result<Option<Vec<u8>>, SaveError>;
    fn set(&mut self, key: &str, value: &[u8]) -> Result<(), SaveError>;
    /// Removing a missing key is not an error.
    fn remove(&mut self, key: &str) -> Result<(), SaveError>;
}

fn check_key(key: &str) -> Result<(), SaveError> {
    let valid = !key.is_empty()
        && key
            .chars()
            .all(|c| c.is_ascii_alphanumeric() || c == '_' || c == '-');
    if valid {
        Ok(())
    } else {
        Err(SaveError::InvalidKey(key.to_string()))
    }
}

// ---------------------------------------------------------------------------
// FileStore
// ---------------------------------------------------------------------------

#[derive(Debug, Clone)]
pub struct FileStore {
    dir: PathBuf,
}

impl FileStore {
    pub fn new(dir: impl Into<PathBuf>) -> Self {
        Self { dir: dir.into() }
    }

    pub fn dir(&self) -> &Path {
        &self.dir
    }

    pub fn path_for(&self, key: &str) -> Result<PathBuf, SaveError> {
        check_key(key)?;
        Ok(self.dir.join(format!("{key}.{RECORD_EXTENSION}")))
    }
}

impl KeyValueStore for FileStore {
    fn get(&self, key: &str) -> Result<Option<Vec<u8>>, SaveError> {
        match fs::read(self.path_for(key)?) {
            Ok(bytes) => Ok(Some(bytes)),
            Err(e) if e.kind() == ErrorKind::NotFound => Ok(None),
            Err(e) => Err(e.into()),
        }
    }

    fn set(&mut self, key: &str, value: &[u8]) -> Result<(), SaveError> {
        atomic_write(&self.path_for(key)?, value)?;
        Ok(())
    }

    fn remove(&mut self, key: &str) -> Result<(), SaveError> {
        match fs::remove_file(self.path_for(key)?) {
            Ok(()) => Ok(()),
            Err(e) if e.kind() == ErrorKind::NotFound => Ok(()),
            Err(e) => Err(e.into()),
        }
    }
}

// ---------------------------------------------------------------------------
// MemoryStore
// ---------------------------------------------------------------------------

/// In-memory store for headless tests and sessions without a data directory.
#[derive(Debug, Clone, Default)]
pub struct MemoryStore {
    entries: HashMap<String, Vec<u8>>,
}

impl MemoryStore {
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl KeyValueStore for MemoryStore {
    fn get(&self, key: &str) -> Result<Option<Vec<u8>>, SaveError> {
        check_key(key)?;
        Ok(self.entries.get(key).cloned())
    }

    fn set(&mut self, key: &str, value: &[u8]) -> Result<(), SaveError> {
        check_key(key)?;
        self.entries.insert(key.to_string(), value.to_vec());
        Ok(())
    }

    fn remove(&mut self, key: &str) -> Result<(), SaveError> {
        check_key(key)?;
        self.entries.remove(key);
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn test_dir(name: &str) -> PathBuf {
        let dir = std::env::temp_dir().join(format!("ecotrack_store_test_{name}"));
        let _ = fs::remove_dir_all(&dir);
        dir
    }

    #[test]
    fn test_file_store_set_get_remove() {
        let dir = test_dir("set_get_remove");
        let mut store = FileStore::new(&dir);

        assert_eq!(store.get("ecotrack_goal").unwrap(), None);

        store.set("ecotrack_goal", b"9000").unwrap();
        assert_eq!(store.get("ecotrack_goal").unwrap().as_deref(), Some(&b"9000"[..]));
        assert!(dir.join("ecotrack_goal.ecot").exists());

        store.remove("ecotrack_goal").unwrap();
        assert_eq!(store.get("ecotrack_goal").unwrap(), None);
        // Second remove is a no-op.
        store.remove("ecotrack_goal").unwrap();

        let _ = fs::remove_dir_all(&dir);
    }

    #[test]
    fn test_file_store_rejects_path_keys() {
        let store = FileStore::new(test_dir("bad_keys"));
        for key in ["", "../escape", "a/b", "with space"] {
            assert!(
                matches!(store.get(key), Err(SaveError::InvalidKey(_))),
                "key {key:?} should be rejected"
            );
        }
    }

    #[test]
    fn test_memory_store() {
        let mut store = MemoryStore::default();
        assert!(store.is_empty());

        store.set("ecotrack_emissions", b"{}").unwrap();
        store.set("ecotrack_goal", b"12000").unwrap();
        assert_eq!(store.len(), 2);
        assert_eq!(
            store.get("ecotrack_goal").unwrap().as_deref(),
            Some(&b"12000"[..])
        );

        store.remove("ecotrack_goal").unwrap();
        assert_eq!(store.get("ecotrack_goal").unwrap(), None);
        assert!(store.set("no/slash", b"").is_err());
    }
}
