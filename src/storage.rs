//! Persistent key-value storage with JSON-encoded values.
//!
//! [`LocalStorage`] is the front door: it serializes values to JSON, hands
//! the strings to a [`StorageBackend`], and turns every failure into a log
//! line plus `None` or a no-op. Two backends ship with the crate:
//!
//! - [`MemoryStorage`]: a shared in-memory map, for tests
//! - [`FileStorage`]: one JSON file on disk, by default in the platform's
//!   config directory
//!
//! ## Examples
//!
//! ```rust
//! use serde::{Deserialize, Serialize};
//! use utilkit::{LocalStorage, MemoryStorage};
//!
//! #[derive(Serialize, Deserialize, Debug, PartialEq)]
//! struct Prefs { theme: String, font_size: u8 }
//!
//! let storage = LocalStorage::new(MemoryStorage::new());
//! storage.set("prefs", &Prefs { theme: "dark".into(), font_size: 14 });
//!
//! let prefs: Option<Prefs> = storage.get("prefs");
//! assert_eq!(prefs.unwrap().font_size, 14);
//!
//! storage.remove("prefs");
//! assert_eq!(storage.get::<Prefs>("prefs"), None);
//! ```

use crate::error::{Error, Result};
use directories::ProjectDirs;
use indexmap::IndexMap;
use serde::de::DeserializeOwned;
use serde::Serialize;
use std::fs;
use std::path::{Path, PathBuf};
use std::sync::{Arc, RwLock, RwLockReadGuard, RwLockWriteGuard};

/// Raw string storage. Implementations report failures; [`LocalStorage`]
/// decides what to do with them.
pub trait StorageBackend: Send + Sync {
    fn get_item(&self, key: &str) -> Result<Option<String>>;

    fn set_item(&self, key: &str, value: &str) -> Result<()>;

    fn remove_item(&self, key: &str) -> Result<()>;
}

fn read_lock<T>(lock: &RwLock<T>) -> Result<RwLockReadGuard<'_, T>> {
    lock.read()
        .map_err(|e| Error::storage(format!("failed to acquire read lock: {e}")))
}

fn write_lock<T>(lock: &RwLock<T>) -> Result<RwLockWriteGuard<'_, T>> {
    lock.write()
        .map_err(|e| Error::storage(format!("failed to acquire write lock: {e}")))
}

/// An in-memory backend. Clones share the same map.
#[derive(Debug, Clone, Default)]
pub struct MemoryStorage {
    items: Arc<RwLock<IndexMap<String, String>>>,
}

impl MemoryStorage {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Stored keys in insertion order.
    pub fn keys(&self) -> Result<Vec<String>> {
        Ok(read_lock(&self.items)?.keys().cloned().collect())
    }
}

impl StorageBackend for MemoryStorage {
    fn get_item(&self, key: &str) -> Result<Option<String>> {
        Ok(read_lock(&self.items)?.get(key).cloned())
    }

    fn set_item(&self, key: &str, value: &str) -> Result<()> {
        write_lock(&self.items)?.insert(key.to_string(), value.to_string());
        Ok(())
    }

    fn remove_item(&self, key: &str) -> Result<()> {
        write_lock(&self.items)?.shift_remove(key);
        Ok(())
    }
}

/// A backend that keeps every entry in a single JSON object on disk.
///
/// The file is read once when opened and rewritten after every change. The
/// in-memory copy only changes once the new contents are on disk.
#[derive(Debug)]
pub struct FileStorage {
    path: PathBuf,
    cache: RwLock<IndexMap<String, String>>,
}

impl FileStorage {
    /// Opens (or prepares to create) the storage file at `path`.
    ///
    /// # Errors
    ///
    /// Returns an error if the file exists but cannot be read or does not
    /// hold a JSON object of strings.
    pub fn open(path: impl Into<PathBuf>) -> Result<Self> {
        let path = path.into();
        let cache: IndexMap<String, String> = if path.exists() {
            let data = fs::read_to_string(&path)?;
            if data.trim().is_empty() {
                IndexMap::new()
            } else {
                serde_json::from_str(&data)?
            }
        } else {
            IndexMap::new()
        };

        tracing::debug!(path = %path.display(), entries = cache.len(), "file storage opened");
        Ok(FileStorage {
            path,
            cache: RwLock::new(cache),
        })
    }

    /// Opens `storage.json` in the platform config directory for the given
    /// application, e.g. `~/.config/<application>/storage.json` on Linux.
    ///
    /// # Errors
    ///
    /// Returns [`Error::Storage`] when no home directory can be determined,
    /// or any error from [`FileStorage::open`].
    pub fn in_config_dir(qualifier: &str, organization: &str, application: &str) -> Result<Self> {
        let dirs = ProjectDirs::from(qualifier, organization, application)
            .ok_or_else(|| Error::storage("no home directory for the current user"))?;
        Self::open(dirs.config_dir().join("storage.json"))
    }

    #[must_use]
    pub fn path(&self) -> &Path {
        &self.path
    }

    fn persist(&self, items: &IndexMap<String, String>) -> Result<()> {
        if let Some(parent) = self.path.parent().filter(|p| !p.as_os_str().is_empty()) {
            fs::create_dir_all(parent)?;
        }

        let data = serde_json::to_string_pretty(items)?;
        let staging = self.path.with_extension("json.tmp");
        fs::write(&staging, data)?;
        fs::rename(&staging, &self.path)?;
        Ok(())
    }
}

impl StorageBackend for FileStorage {
    fn get_item(&self, key: &str) -> Result<Option<String>> {
        Ok(read_lock(&self.cache)?.get(key).cloned())
    }

    fn set_item(&self, key: &str, value: &str) -> Result<()> {
        let mut cache = write_lock(&self.cache)?;
        let mut updated = cache.clone();
        updated.insert(key.to_string(), value.to_string());
        self.persist(&updated)?;
        *cache = updated;
        Ok(())
    }

    fn remove_item(&self, key: &str) -> Result<()> {
        let mut cache = write_lock(&self.cache)?;
        if !cache.contains_key(key) {
            return Ok(());
        }
        let mut updated = cache.clone();
        updated.shift_remove(key);
        self.persist(&updated)?;
        *cache = updated;
        Ok(())
    }
}

/// JSON-valued storage that never fails loudly.
///
/// Reads of missing, empty, or undecodable entries return `None`; failed
/// writes and removals are no-ops. Every failure is logged at `error` level.
#[derive(Debug, Clone, Default)]
pub struct LocalStorage<B> {
    backend: B,
}

impl<B: StorageBackend> LocalStorage<B> {
    pub fn new(backend: B) -> Self {
        LocalStorage { backend }
    }

    pub fn backend(&self) -> &B {
        &self.backend
    }

    /// Reads and decodes the value stored under `key`.
    pub fn get<T: DeserializeOwned>(&self, key: &str) -> Option<T> {
        let raw = match self.backend.get_item(key) {
            Ok(Some(raw)) if !raw.is_empty() => raw,
            Ok(_) => return None,
            Err(err) => {
                tracing::error!(key, error = %err, "storage get failed");
                return None;
            }
        };

        match serde_json::from_str(&raw) {
            Ok(value) => Some(value),
            Err(err) => {
                tracing::error!(key, error = %err, "storage get failed to decode value");
                None
            }
        }
    }

    /// Encodes `value` as JSON and stores it under `key`.
    pub fn set<T: Serialize + ?Sized>(&self, key: &str, value: &T) {
        let encoded = match serde_json::to_string(value) {
            Ok(encoded) => encoded,
            Err(err) => {
                tracing::error!(key, error = %err, "storage set failed to encode value");
                return;
            }
        };

        if let Err(err) = self.backend.set_item(key, &encoded) {
            tracing::error!(key, error = %err, "storage set failed");
        }
    }

    pub fn remove(&self, key: &str) {
        if let Err(err) = self.backend.remove_item(key) {
            tracing::error!(key, error = %err, "storage remove failed");
        }
    }
}
