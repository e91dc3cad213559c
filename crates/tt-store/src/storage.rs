//! Persistence port
//!
//! The store is written against [`StorageBackend`] so a real database
//! can replace the local files without touching any call site. The
//! backend persists two values: the serialized snapshot and the session
//! pointer (the logged-in user's id).

use std::path::PathBuf;
use std::sync::Arc;

use parking_lot::Mutex;
use thiserror::Error;

/// Storage errors
#[derive(Debug, Error)]
pub enum StorageError {
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Storage unavailable: {0}")]
    Unavailable(String),
}

/// Backend the store loads from and flushes to
pub trait StorageBackend: Send + Sync {
    /// Read the persisted snapshot, `None` if nothing was written yet
    fn load(&self) -> Result<Option<String>, StorageError>;

    /// Overwrite the persisted snapshot
    fn save(&self, snapshot: &str) -> Result<(), StorageError>;

    /// Read the session pointer, `None` when logged out
    fn load_session(&self) -> Result<Option<String>, StorageError>;

    /// Persist the session pointer
    fn save_session(&self, user_id: &str) -> Result<(), StorageError>;

    /// Remove the session pointer
    fn clear_session(&self) -> Result<(), StorageError>;
}

/// File-backed storage: one JSON file for the snapshot, one plain file
/// for the session pointer, both under a data directory.
pub struct FileStorage {
    data_dir: PathBuf,
}

const SNAPSHOT_FILE: &str = "tracktime-data.json";
const SESSION_FILE: &str = "tracktime-session";

impl FileStorage {
    pub fn new(data_dir: impl Into<PathBuf>) -> Self {
        Self {
            data_dir: data_dir.into(),
        }
    }

    fn snapshot_path(&self) -> PathBuf {
        self.data_dir.join(SNAPSHOT_FILE)
    }

    fn session_path(&self) -> PathBuf {
        self.data_dir.join(SESSION_FILE)
    }

    fn read_optional(&self, path: &PathBuf) -> Result<Option<String>, StorageError> {
        match std::fs::read_to_string(path) {
            Ok(contents) => Ok(Some(contents)),
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => Ok(None),
            Err(e) => Err(e.into()),
        }
    }

    fn write(&self, path: &PathBuf, contents: &str) -> Result<(), StorageError> {
        std::fs::create_dir_all(&self.data_dir)?;
        std::fs::write(path, contents)?;
        Ok(())
    }
}

impl StorageBackend for FileStorage {
    fn load(&self) -> Result<Option<String>, StorageError> {
        self.read_optional(&self.snapshot_path())
    }

    fn save(&self, snapshot: &str) -> Result<(), StorageError> {
        self.write(&self.snapshot_path(), snapshot)
    }

    fn load_session(&self) -> Result<Option<String>, StorageError> {
        Ok(self
            .read_optional(&self.session_path())?
            .map(|s| s.trim().to_string())
            .filter(|s| !s.is_empty()))
    }

    fn save_session(&self, user_id: &str) -> Result<(), StorageError> {
        self.write(&self.session_path(), user_id)
    }

    fn clear_session(&self) -> Result<(), StorageError> {
        match std::fs::remove_file(self.session_path()) {
            Ok(()) => Ok(()),
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => Ok(()),
            Err(e) => Err(e.into()),
        }
    }
}

/// In-memory storage for tests and throwaway sessions. Clones share
/// state, so a test can keep a handle while the store owns another.
#[derive(Clone, Default)]
pub struct MemoryStorage {
    inner: Arc<MemoryStorageInner>,
}

#[derive(Default)]
struct MemoryStorageInner {
    snapshot: Mutex<Option<String>>,
    session: Mutex<Option<String>>,
    fail_saves: Mutex<bool>,
}

impl MemoryStorage {
    pub fn new() -> Self {
        Self::default()
    }

    /// Make every subsequent `save` fail, to exercise the
    /// persistence-failure policy
    pub fn fail_saves(&self, fail: bool) {
        *self.inner.fail_saves.lock() = fail;
    }

    /// The last snapshot successfully saved
    pub fn saved_snapshot(&self) -> Option<String> {
        self.inner.snapshot.lock().clone()
    }
}

impl StorageBackend for MemoryStorage {
    fn load(&self) -> Result<Option<String>, StorageError> {
        Ok(self.inner.snapshot.lock().clone())
    }

    fn save(&self, snapshot: &str) -> Result<(), StorageError> {
        if *self.inner.fail_saves.lock() {
            return Err(StorageError::Unavailable("save disabled".to_string()));
        }
        *self.inner.snapshot.lock() = Some(snapshot.to_string());
        Ok(())
    }

    fn load_session(&self) -> Result<Option<String>, StorageError> {
        Ok(self.inner.session.lock().clone())
    }

    fn save_session(&self, user_id: &str) -> Result<(), StorageError> {
        *self.inner.session.lock() = Some(user_id.to_string());
        Ok(())
    }

    fn clear_session(&self) -> Result<(), StorageError> {
        *self.inner.session.lock() = None;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_file_storage_round_trip() {
        let dir = tempfile::tempdir().unwrap();
        let storage = FileStorage::new(dir.path());

        assert!(storage.load().unwrap().is_none());
        storage.save("{\"users\":[]}").unwrap();
        assert_eq!(storage.load().unwrap().as_deref(), Some("{\"users\":[]}"));
    }

    #[test]
    fn test_file_storage_session_pointer() {
        let dir = tempfile::tempdir().unwrap();
        let storage = FileStorage::new(dir.path());

        assert!(storage.load_session().unwrap().is_none());
        storage.save_session("user-1").unwrap();
        assert_eq!(storage.load_session().unwrap().as_deref(), Some("user-1"));

        storage.clear_session().unwrap();
        assert!(storage.load_session().unwrap().is_none());
        // clearing twice is fine
        storage.clear_session().unwrap();
    }

    #[test]
    fn test_file_storage_creates_data_dir() {
        let dir = tempfile::tempdir().unwrap();
        let nested = dir.path().join("deeper").join("still");
        let storage = FileStorage::new(&nested);

        storage.save("{}").unwrap();
        assert!(nested.join(SNAPSHOT_FILE).exists());
    }

    #[test]
    fn test_memory_storage_fail_toggle() {
        let storage = MemoryStorage::new();
        storage.save("a").unwrap();

        storage.fail_saves(true);
        assert!(storage.save("b").is_err());
        // the earlier snapshot is untouched
        assert_eq!(storage.saved_snapshot().as_deref(), Some("a"));

        storage.fail_saves(false);
        storage.save("c").unwrap();
        assert_eq!(storage.saved_snapshot().as_deref(), Some("c"));
    }
}
