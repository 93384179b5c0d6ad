//! Persistent player identity

use rustc_hash::FxHashMap;
use std::fs;
use std::io;
use std::path::{Path, PathBuf};
use thiserror::Error;
use tracing::debug;

/// Key under which the chosen player name is stored
pub const USER_KEY: &str = "abacus_user";

const APP_DIR: &str = "abacus-tty";
const FILE_NAME: &str = "identity.json";

#[derive(Debug, Error)]
pub enum StoreError {
    #[error("identity store I/O at {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
    #[error("identity store at {path} is not valid JSON: {source}")]
    Json {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },
    #[error("unable to resolve a local data directory")]
    NoDataDir,
}

pub trait IdentityStore {
    fn get(&self, key: &str) -> Option<String>;
    fn set(&mut self, key: &str, value: &str) -> Result<(), StoreError>;
    fn remove(&mut self, key: &str) -> Result<(), StoreError>;
}

/// Store that forgets everything on exit
#[derive(Debug, Default)]
pub struct MemoryIdentityStore {
    entries: FxHashMap<String, String>,
}

impl MemoryIdentityStore {
    pub fn new() -> Self {
        Self::default()
    }
}

impl IdentityStore for MemoryIdentityStore {
    fn get(&self, key: &str) -> Option<String> {
        self.entries.get(key).cloned()
    }

    fn set(&mut self, key: &str, value: &str) -> Result<(), StoreError> {
        self.entries.insert(key.to_string(), value.to_string());
        Ok(())
    }

    fn remove(&mut self, key: &str) -> Result<(), StoreError> {
        self.entries.remove(key);
        Ok(())
    }
}

/// JSON object on disk, rewritten on every change
#[derive(Debug)]
pub struct FileIdentityStore {
    path: PathBuf,
    entries: FxHashMap<String, String>,
}

impl FileIdentityStore {
    /// `<data_dir>/identity.json`, or the platform local data directory
    pub fn default_path(data_dir: Option<&Path>) -> Result<PathBuf, StoreError> {
        let root = match data_dir {
            Some(dir) => dir.to_path_buf(),
            None => dirs::data_local_dir()
                .ok_or(StoreError::NoDataDir)?
                .join(APP_DIR),
        };
        Ok(root.join(FILE_NAME))
    }

    /// Open the store at `path`; a missing file is an empty store.
    pub fn open(path: impl Into<PathBuf>) -> Result<Self, StoreError> {
        let path = path.into();
        let entries = match fs::read_to_string(&path) {
            Ok(raw) => serde_json::from_str(&raw).map_err(|source| StoreError::Json {
                path: path.clone(),
                source,
            })?,
            Err(err) if err.kind() == io::ErrorKind::NotFound => FxHashMap::default(),
            Err(source) => return Err(StoreError::Io { path, source }),
        };
        debug!(path = %path.display(), "identity store opened");
        Ok(FileIdentityStore { path, entries })
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    fn persist(&self) -> Result<(), StoreError> {
        let io_err = |source: io::Error| StoreError::Io {
            path: self.path.clone(),
            source,
        };
        if let Some(parent) = self.path.parent() {
            fs::create_dir_all(parent).map_err(io_err)?;
        }
        let raw = serde_json::to_string_pretty(&self.entries).map_err(|source| {
            StoreError::Json {
                path: self.path.clone(),
                source,
            }
        })?;
        fs::write(&self.path, raw).map_err(io_err)
    }
}

impl IdentityStore for FileIdentityStore {
    fn get(&self, key: &str) -> Option<String> {
        self.entries.get(key).cloned()
    }

    fn set(&mut self, key: &str, value: &str) -> Result<(), StoreError> {
        self.entries.insert(key.to_string(), value.to_string());
        self.persist()
    }

    fn remove(&mut self, key: &str) -> Result<(), StoreError> {
        if self.entries.remove(key).is_some() {
            self.persist()?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::time::{SystemTime, UNIX_EPOCH};

    fn temp_root() -> PathBuf {
        let suffix = SystemTime::now()
            .duration_since(UNIX_EPOCH)
            .expect("clock")
            .as_nanos();
        std::env::temp_dir().join(format!("abacus_tty_identity_test_{suffix}"))
    }

    #[test]
    fn test_file_store_round_trips_through_disk() {
        let root = temp_root();
        let path = FileIdentityStore::default_path(Some(root.as_path())).expect("path");

        let mut store = FileIdentityStore::open(&path).expect("open empty");
        assert_eq!(store.get(USER_KEY), None);
        store.set(USER_KEY, "Lilly").expect("set");

        let reopened = FileIdentityStore::open(&path).expect("reopen");
        assert_eq!(reopened.get(USER_KEY), Some("Lilly".to_string()));

        fs::remove_dir_all(root).expect("cleanup");
    }

    #[test]
    fn test_corrupt_file_is_reported() {
        let root = temp_root();
        fs::create_dir_all(&root).expect("mkdir");
        let path = root.join(FILE_NAME);
        fs::write(&path, "not json").expect("write");

        assert!(matches!(
            FileIdentityStore::open(&path),
            Err(StoreError::Json { .. })
        ));

        fs::remove_dir_all(root).expect("cleanup");
    }

    #[test]
    fn test_memory_store_remove() {
        let mut store = MemoryIdentityStore::new();
        store.set(USER_KEY, "Georgia").unwrap();
        store.remove(USER_KEY).unwrap();
        assert_eq!(store.get(USER_KEY), None);
    }
}
