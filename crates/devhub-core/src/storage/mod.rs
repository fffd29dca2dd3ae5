//! Local storage abstractions and implementations
//!
//! Preferences persist as a single JSON blob under one key of a
//! [`LocalStorage`] backend:
//! - `MemoryStorage`: in-process map
//! - `FileStorage`: JSON object file on disk
//! - `create_storage` for opening a backend by its configured name

mod traits;
mod memory;
mod file;
mod registry;

pub use traits::{LocalStorage, StorageError, StorageResult};
pub use memory::MemoryStorage;
pub use file::FileStorage;
pub use registry::{create_storage, StorageOptions};
