//! Name-to-factory lookup for storage backends

use std::collections::HashMap;
use std::path::PathBuf;
use std::sync::Arc;

use once_cell::sync::Lazy;

use super::file::FileStorage;
use super::memory::MemoryStorage;
use super::traits::{LocalStorage, StorageError, StorageResult};

/// Options handed to a backend factory
#[derive(Debug, Clone, Default)]
pub struct StorageOptions {
    /// Location override for file-like backends
    pub path: Option<PathBuf>,
}

impl StorageOptions {
    pub fn with_path(path: impl Into<PathBuf>) -> Self {
        Self {
            path: Some(path.into()),
        }
    }
}

/// Factory function type for creating storage backends
type StorageFactory = fn(&StorageOptions) -> Arc<dyn LocalStorage>;

static REGISTRY: Lazy<HashMap<&'static str, StorageFactory>> = Lazy::new(|| {
    let mut map: HashMap<&'static str, StorageFactory> = HashMap::new();
    map.insert("memory", |_| Arc::new(MemoryStorage::new()));
    map.insert("file", |options| match &options.path {
        Some(path) => Arc::new(FileStorage::new(path)),
        None => Arc::new(FileStorage::user()),
    });
    map
});

/// Create a storage backend by name
pub fn create_storage(name: &str, options: &StorageOptions) -> StorageResult<Arc<dyn LocalStorage>> {
    REGISTRY
        .get(name.to_lowercase().as_str())
        .map(|factory| factory(options))
        .ok_or_else(|| StorageError::UnknownBackend(name.to_string()))
}
