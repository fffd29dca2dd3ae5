//! File-backed local storage (JSON)
//!
//! Keeps every key in a single JSON object file, by default
//! `~/.config/devhub/storage.json`.

use std::collections::BTreeMap;
use std::fs;
use std::path::{Path, PathBuf};

use parking_lot::RwLock;

use super::traits::{LocalStorage, StorageResult};

type Items = BTreeMap<String, String>;

/// File-backed key-value storage
///
/// The file is read lazily on first access and cached; every write
/// rewrites the whole file (last write wins).
///
/// # Example
///
/// ```no_run
/// use devhub_core::storage::{FileStorage, LocalStorage};
///
/// let storage = FileStorage::user();
/// storage.set_item("devtools-hub-preferences", "{}").unwrap();
/// ```
pub struct FileStorage {
    path: PathBuf,
    cache: RwLock<Option<Items>>,
}

impl FileStorage {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self {
            path: path.into(),
            cache: RwLock::new(None),
        }
    }

    /// Storage under the user's config directory
    pub fn user() -> Self {
        Self::new(Self::default_path())
    }

    /// `<config dir>/devhub/storage.json`
    pub fn default_path() -> PathBuf {
        let config_dir = dirs::config_dir()
            .unwrap_or_else(|| dirs::home_dir().unwrap_or_else(|| PathBuf::from(".")).join(".config"));
        config_dir.join("devhub").join("storage.json")
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    pub fn exists(&self) -> bool {
        self.path.exists()
    }

    fn load(&self) -> StorageResult<Items> {
        if !self.path.exists() {
            return Ok(Items::new());
        }

        let content = fs::read_to_string(&self.path)?;
        if content.trim().is_empty() {
            return Ok(Items::new());
        }
        Ok(serde_json::from_str(&content)?)
    }

    fn persist(&self, items: &Items) -> StorageResult<()> {
        if let Some(parent) = self.path.parent() {
            fs::create_dir_all(parent)?;
        }

        let content = serde_json::to_string_pretty(items)?;
        fs::write(&self.path, content)?;
        Ok(())
    }

    fn items(&self) -> StorageResult<Items> {
        if let Some(items) = self.cache.read().as_ref() {
            return Ok(items.clone());
        }

        let items = self.load()?;
        *self.cache.write() = Some(items.clone());
        Ok(items)
    }

    fn update<F>(&self, mutate: F) -> StorageResult<()>
    where
        F: FnOnce(&mut Items),
    {
        let mut items = self.items()?;
        mutate(&mut items);
        self.persist(&items)?;
        *self.cache.write() = Some(items);
        Ok(())
    }

    /// Drop the cache and read the file again
    pub fn reload(&self) -> StorageResult<()> {
        let items = self.load()?;
        *self.cache.write() = Some(items);
        Ok(())
    }
}

impl std::fmt::Debug for FileStorage {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("FileStorage")
            .field("path", &self.path)
            .field("exists", &self.exists())
            .finish()
    }
}

impl LocalStorage for FileStorage {
    fn name(&self) -> &str {
        "file"
    }

    fn get_item(&self, key: &str) -> StorageResult<Option<String>> {
        Ok(self.items()?.get(key).cloned())
    }

    fn set_item(&self, key: &str, value: &str) -> StorageResult<()> {
        self.update(|items| {
            items.insert(key.to_string(), value.to_string());
        })
    }

    fn remove_item(&self, key: &str) -> StorageResult<()> {
        self.update(|items| {
            items.remove(key);
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::storage::StorageError;
    use tempfile::tempdir;

    #[test]
    fn test_file_storage_persists_across_instances() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("nested").join("storage.json");

        let storage = FileStorage::new(&path);
        assert!(!storage.exists());
        assert_eq!(storage.get_item("k").unwrap(), None);

        storage.set_item("k", "{\"favorites\":[]}").unwrap();
        assert!(storage.exists());

        let reopened = FileStorage::new(&path);
        assert_eq!(reopened.get_item("k").unwrap(), Some("{\"favorites\":[]}".to_string()));
    }

    #[test]
    fn test_file_storage_remove() {
        let dir = tempdir().unwrap();
        let storage = FileStorage::new(dir.path().join("storage.json"));

        storage.set_item("a", "1").unwrap();
        storage.set_item("b", "2").unwrap();
        storage.remove_item("a").unwrap();

        storage.reload().unwrap();
        assert!(!storage.has_item("a"));
        assert_eq!(storage.get_item("b").unwrap(), Some("2".to_string()));
    }

    #[test]
    fn test_file_storage_corrupt_file() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("storage.json");
        fs::write(&path, "not json").unwrap();

        let storage = FileStorage::new(&path);
        assert!(matches!(storage.get_item("k"), Err(StorageError::Corrupt(_))));
    }

    #[test]
    fn test_default_path() {
        let path = FileStorage::default_path();
        assert!(path.ends_with("devhub/storage.json"));
    }
}
