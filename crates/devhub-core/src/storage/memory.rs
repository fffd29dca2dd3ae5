//! In-memory local storage

use std::collections::HashMap;

use parking_lot::RwLock;

use super::traits::{LocalStorage, StorageResult};

/// In-memory key-value storage for tests and ephemeral sessions
///
/// # Example
///
/// ```
/// use devhub_core::storage::{LocalStorage, MemoryStorage};
///
/// let storage = MemoryStorage::new();
/// storage.set_item("theme", "dark").unwrap();
/// assert_eq!(storage.get_item("theme").unwrap(), Some("dark".to_string()));
/// ```
#[derive(Debug, Default)]
pub struct MemoryStorage {
    items: RwLock<HashMap<String, String>>,
}

impl MemoryStorage {
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a storage pre-populated with items
    pub fn with_items(items: HashMap<String, String>) -> Self {
        Self {
            items: RwLock::new(items),
        }
    }

    pub fn len(&self) -> usize {
        self.items.read().len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    pub fn clear(&self) {
        self.items.write().clear();
    }
}

impl LocalStorage for MemoryStorage {
    fn name(&self) -> &str {
        "memory"
    }

    fn get_item(&self, key: &str) -> StorageResult<Option<String>> {
        Ok(self.items.read().get(key).cloned())
    }

    fn set_item(&self, key: &str, value: &str) -> StorageResult<()> {
        self.items.write().insert(key.to_string(), value.to_string());
        Ok(())
    }

    fn remove_item(&self, key: &str) -> StorageResult<()> {
        self.items.write().remove(key);
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_memory_storage_crud() {
        let storage = MemoryStorage::new();
        assert!(storage.is_empty());
        assert_eq!(storage.get_item("k").unwrap(), None);

        storage.set_item("k", "v1").unwrap();
        storage.set_item("k", "v2").unwrap();
        assert_eq!(storage.len(), 1);
        assert_eq!(storage.get_item("k").unwrap(), Some("v2".to_string()));
        assert!(storage.has_item("k"));

        storage.remove_item("k").unwrap();
        storage.remove_item("k").unwrap();
        assert!(!storage.has_item("k"));
    }

    #[test]
    fn test_memory_storage_with_items() {
        let mut items = HashMap::new();
        items.insert("a".to_string(), "1".to_string());
        let storage = MemoryStorage::with_items(items);
        assert_eq!(storage.get_item("a").unwrap(), Some("1".to_string()));

        storage.clear();
        assert!(storage.is_empty());
    }
}
