//! Hub settings and environment overrides

use std::path::PathBuf;
use std::str::FromStr;
use std::sync::Arc;

use serde::{Deserialize, Serialize};

use crate::logging::ConsoleLogger;
use crate::preferences::DEFAULT_PREFERENCES_KEY;
use crate::storage::{create_storage, LocalStorage, StorageOptions};
use super::error::{ConfigError, ConfigResult};

/// Overrides `storage.backend`
pub const ENV_STORAGE: &str = "DEVHUB_STORAGE";
/// Overrides `storage.path`
pub const ENV_STORAGE_PATH: &str = "DEVHUB_STORAGE_PATH";
/// Overrides `author`
pub const ENV_AUTHOR: &str = "DEVHUB_AUTHOR";

const DEFAULT_AUTHOR: &str = "anonymous";
const DEFAULT_LOG_PREFIX: &str = "[DevHub]";

/// Where preferences are persisted
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum StorageBackend {
    Memory,
    #[default]
    File,
}

impl StorageBackend {
    /// Registry name of the backend
    pub fn as_str(&self) -> &'static str {
        match self {
            StorageBackend::Memory => "memory",
            StorageBackend::File => "file",
        }
    }
}

impl FromStr for StorageBackend {
    type Err = ConfigError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "memory" => Ok(StorageBackend::Memory),
            "file" => Ok(StorageBackend::File),
            _ => Err(ConfigError::invalid_value("storage.backend", s)),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Default)]
pub struct StorageSettings {
    #[serde(default)]
    pub backend: StorageBackend,
    /// File location for the `file` backend; defaults to the user config dir
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub path: Option<PathBuf>,
}

/// Settings read from `config.yaml`
///
/// ```yaml
/// author: ana
/// storage:
///   backend: file
///   path: /home/ana/.local/share/devhub/storage.json
/// preferences_key: devtools-hub-preferences
/// log_prefix: "[DevHub]"
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct HubConfig {
    /// Recorded as `created_by` / `last_updated_by` on writes
    #[serde(default = "default_author")]
    pub author: String,
    #[serde(default)]
    pub storage: StorageSettings,
    /// Local storage key holding the preference blob
    #[serde(default = "default_preferences_key")]
    pub preferences_key: String,
    #[serde(default = "default_log_prefix")]
    pub log_prefix: String,
}

fn default_author() -> String {
    DEFAULT_AUTHOR.to_string()
}

fn default_preferences_key() -> String {
    DEFAULT_PREFERENCES_KEY.to_string()
}

fn default_log_prefix() -> String {
    DEFAULT_LOG_PREFIX.to_string()
}

impl Default for HubConfig {
    fn default() -> Self {
        Self {
            author: default_author(),
            storage: StorageSettings::default(),
            preferences_key: default_preferences_key(),
            log_prefix: default_log_prefix(),
        }
    }
}

impl HubConfig {
    /// Parse settings from YAML; an empty document gives the defaults
    pub fn from_yaml(yaml: &str) -> ConfigResult<Self> {
        if yaml.trim().is_empty() {
            return Ok(Self::default());
        }
        Ok(serde_yaml::from_str(yaml)?)
    }

    pub fn to_yaml(&self) -> ConfigResult<String> {
        Ok(serde_yaml::to_string(self)?)
    }

    /// Apply `DEVHUB_*` environment variables
    pub fn apply_env(&mut self) -> ConfigResult<()> {
        self.apply_overrides(|key| std::env::var(key).ok())
    }

    /// Apply overrides from a variable lookup; empty values are ignored
    pub fn apply_overrides<F>(&mut self, lookup: F) -> ConfigResult<()>
    where
        F: Fn(&str) -> Option<String>,
    {
        let lookup = |key: &str| lookup(key).filter(|v| !v.trim().is_empty());

        if let Some(backend) = lookup(ENV_STORAGE) {
            self.storage.backend = backend.parse()?;
        }
        if let Some(path) = lookup(ENV_STORAGE_PATH) {
            self.storage.path = Some(PathBuf::from(path));
        }
        if let Some(author) = lookup(ENV_AUTHOR) {
            self.author = author;
        }
        Ok(())
    }

    /// Build the configured preference storage backend
    pub fn open_storage(&self) -> ConfigResult<Arc<dyn LocalStorage>> {
        let options = StorageOptions {
            path: self.storage.path.clone(),
        };
        let storage = create_storage(self.storage.backend.as_str(), &options)?;
        crate::debug_log!("opened {} storage", storage.name());
        Ok(storage)
    }

    /// Console logger using the configured prefix
    pub fn console_logger(&self) -> ConsoleLogger {
        ConsoleLogger::with_prefix(self.log_prefix.clone())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;
    use tempfile::tempdir;

    #[test]
    fn test_defaults() {
        let config = HubConfig::from_yaml("").unwrap();
        assert_eq!(config, HubConfig::default());
        assert_eq!(config.author, "anonymous");
        assert_eq!(config.storage.backend, StorageBackend::File);
        assert_eq!(config.preferences_key, "devtools-hub-preferences");
        assert_eq!(config.console_logger().prefix(), "[DevHub]");
    }

    #[test]
    fn test_partial_yaml() {
        let yaml = r#"
author: ana
storage:
  backend: memory
"#;
        let config = HubConfig::from_yaml(yaml).unwrap();
        assert_eq!(config.author, "ana");
        assert_eq!(config.storage.backend, StorageBackend::Memory);
        assert_eq!(config.storage.path, None);
        assert_eq!(config.log_prefix, "[DevHub]");
    }

    #[test]
    fn test_invalid_yaml() {
        assert!(matches!(HubConfig::from_yaml("storage: [1, 2"), Err(ConfigError::Yaml(_))));
        assert!(matches!(
            HubConfig::from_yaml("storage:\n  backend: cloud\n"),
            Err(ConfigError::Yaml(_))
        ));
    }

    #[test]
    fn test_overrides() {
        let vars: HashMap<&str, &str> = [
            (ENV_STORAGE, "MEMORY"),
            (ENV_STORAGE_PATH, "/tmp/devhub.json"),
            (ENV_AUTHOR, ""),
        ]
        .into_iter()
        .collect();

        let mut config = HubConfig::default();
        config
            .apply_overrides(|key| vars.get(key).map(|v| v.to_string()))
            .unwrap();

        assert_eq!(config.storage.backend, StorageBackend::Memory);
        assert_eq!(config.storage.path, Some(PathBuf::from("/tmp/devhub.json")));
        assert_eq!(config.author, "anonymous");
    }

    #[test]
    fn test_invalid_backend_override() {
        let mut config = HubConfig::default();
        let result = config.apply_overrides(|key| (key == ENV_STORAGE).then(|| "s3".to_string()));
        assert!(matches!(result, Err(ConfigError::InvalidValue { .. })));
    }

    #[test]
    fn test_open_storage() {
        let dir = tempdir().unwrap();
        let mut config = HubConfig::default();
        config.storage.path = Some(dir.path().join("storage.json"));

        let storage = config.open_storage().unwrap();
        assert_eq!(storage.name(), "file");
        storage.set_item("k", "v").unwrap();
        assert!(dir.path().join("storage.json").exists());

        config.storage.backend = StorageBackend::Memory;
        assert_eq!(config.open_storage().unwrap().name(), "memory");
    }
}
