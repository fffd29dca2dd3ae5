//! Configuration
//!
//! [`HubConfig`] is read from a YAML [`ConfigFile`] and may be overridden by
//! `DEVHUB_STORAGE`, `DEVHUB_STORAGE_PATH` and `DEVHUB_AUTHOR`.

mod error;
mod settings;
mod file;

pub use error::{ConfigError, ConfigResult};
pub use settings::{HubConfig, StorageBackend, StorageSettings, ENV_AUTHOR, ENV_STORAGE, ENV_STORAGE_PATH};
pub use file::{ConfigFile, ConfigLevel};
