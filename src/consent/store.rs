use std::collections::BTreeMap;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::error::ConsentError;

/// A persisted value plus the retention it was written with.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct StoredValue {
    pub value: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub max_age_secs: Option<u64>,
}

/// Minimal key-value persistence behind the consent gate. A browser build
/// would back this with cookies; the CLI backs it with a JSON file.
pub trait ConsentStore {
    /// Returns the stored value for `key`, if any.
    ///
    /// # Errors
    ///
    /// Returns an error when the backing storage cannot be read.
    fn get(&self, key: &str) -> Result<Option<StoredValue>, ConsentError>;

    /// Stores `entry` under `key`, replacing any previous value.
    ///
    /// # Errors
    ///
    /// Returns an error when the backing storage cannot be written.
    fn set(&mut self, key: &str, entry: StoredValue) -> Result<(), ConsentError>;

    /// Removes the value stored under `key`, if any.
    ///
    /// # Errors
    ///
    /// Returns an error when the backing storage cannot be written.
    fn clear(&mut self, key: &str) -> Result<(), ConsentError>;
}

impl<S> ConsentStore for &mut S
where
    S: ConsentStore,
{
    fn get(&self, key: &str) -> Result<Option<StoredValue>, ConsentError> {
        (**self).get(key)
    }

    fn set(&mut self, key: &str, entry: StoredValue) -> Result<(), ConsentError> {
        (**self).set(key, entry)
    }

    fn clear(&mut self, key: &str) -> Result<(), ConsentError> {
        (**self).clear(key)
    }
}

/// File-backed store holding a JSON object of key/value entries.
#[derive(Debug, Clone)]
pub struct FileStore {
    path: PathBuf,
}

impl FileStore {
    #[must_use]
    pub const fn new(path: PathBuf) -> Self {
        Self { path }
    }

    fn load(&self) -> Result<BTreeMap<String, StoredValue>, ConsentError> {
        if !self.path.exists() {
            return Ok(BTreeMap::new());
        }
        let content = std::fs::read_to_string(&self.path).map_err(|err| {
            ConsentError::ReadStore {
                path: self.path.clone(),
                source: err,
            }
        })?;
        serde_json::from_str(&content).map_err(|err| ConsentError::ParseStore {
            path: self.path.clone(),
            source: err,
        })
    }

    fn persist(&self, entries: &BTreeMap<String, StoredValue>) -> Result<(), ConsentError> {
        if let Some(parent) = self.path.parent().filter(|dir| !dir.as_os_str().is_empty()) {
            std::fs::create_dir_all(parent).map_err(|err| ConsentError::CreateStoreDir {
                path: parent.to_path_buf(),
                source: err,
            })?;
        }
        let content = serde_json::to_string_pretty(entries)
            .map_err(|err| ConsentError::SerializeStore { source: err })?;
        std::fs::write(&self.path, content).map_err(|err| ConsentError::WriteStore {
            path: self.path.clone(),
            source: err,
        })
    }

    #[must_use]
    pub fn path(&self) -> &Path {
        &self.path
    }
}

impl ConsentStore for FileStore {
    fn get(&self, key: &str) -> Result<Option<StoredValue>, ConsentError> {
        Ok(self.load()?.remove(key))
    }

    fn set(&mut self, key: &str, entry: StoredValue) -> Result<(), ConsentError> {
        let mut entries = self.load()?;
        entries.insert(key.to_owned(), entry);
        self.persist(&entries)
    }

    fn clear(&mut self, key: &str) -> Result<(), ConsentError> {
        let mut entries = self.load()?;
        if entries.remove(key).is_some() {
            self.persist(&entries)?;
        }
        Ok(())
    }
}

/// In-memory store for tests and embedding.
#[derive(Debug, Clone, Default)]
pub struct MemoryStore {
    entries: BTreeMap<String, StoredValue>,
}

impl MemoryStore {
    #[must_use]
    pub const fn new() -> Self {
        Self {
            entries: BTreeMap::new(),
        }
    }
}

impl ConsentStore for MemoryStore {
    fn get(&self, key: &str) -> Result<Option<StoredValue>, ConsentError> {
        Ok(self.entries.get(key).cloned())
    }

    fn set(&mut self, key: &str, entry: StoredValue) -> Result<(), ConsentError> {
        self.entries.insert(key.to_owned(), entry);
        Ok(())
    }

    fn clear(&mut self, key: &str) -> Result<(), ConsentError> {
        self.entries.remove(key);
        Ok(())
    }
}
