//! Local storage trait

use thiserror::Error;

/// Errors that can occur while reading or writing local storage
#[derive(Error, Debug)]
pub enum StorageError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Corrupt storage file: {0}")]
    Corrupt(#[from] serde_json::Error),

    #[error("Unknown storage backend: {0}")]
    UnknownBackend(String),

    #[error("Storage error: {0}")]
    Other(String),
}

pub type StorageResult<T> = Result<T, StorageError>;

/// String key-value store standing in for browser local storage
///
/// Implementations:
/// - `MemoryStorage`: In-process map, lost on drop
/// - `FileStorage`: One JSON object on disk
/// - Host adapters: a browser shell can bridge to `window.localStorage`
pub trait LocalStorage: Send + Sync {
    /// Human-readable backend name
    fn name(&self) -> &str;

    /// Read the value stored under `key`
    fn get_item(&self, key: &str) -> StorageResult<Option<String>>;

    /// Replace the value stored under `key`
    fn set_item(&self, key: &str, value: &str) -> StorageResult<()>;

    /// Remove `key`; removing an absent key is not an error
    fn remove_item(&self, key: &str) -> StorageResult<()>;

    fn has_item(&self, key: &str) -> bool {
        matches!(self.get_item(key), Ok(Some(_)))
    }
}
