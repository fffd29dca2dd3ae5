//! Config file location and persistence (YAML)
//!
//! User-level settings live at `~/.config/devhub/config.yaml`; a workspace
//! can carry its own at `.config/devhub/config.yaml`.

use std::fs;
use std::path::{Path, PathBuf};

use super::error::ConfigResult;
use super::settings::HubConfig;

/// Config level (user or workspace)
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ConfigLevel {
    User,
    Workspace,
}

impl ConfigLevel {
    pub fn as_str(&self) -> &'static str {
        match self {
            ConfigLevel::User => "user",
            ConfigLevel::Workspace => "workspace",
        }
    }
}

/// A `config.yaml` on disk
///
/// # Example
///
/// ```no_run
/// use devhub_core::config::ConfigFile;
///
/// let config = ConfigFile::user().load_with_env().unwrap();
/// let storage = config.open_storage().unwrap();
/// ```
#[derive(Debug, Clone)]
pub struct ConfigFile {
    path: PathBuf,
    level: ConfigLevel,
}

impl ConfigFile {
    pub fn new(path: impl Into<PathBuf>, level: ConfigLevel) -> Self {
        Self {
            path: path.into(),
            level,
        }
    }

    /// `<config dir>/devhub/config.yaml`
    pub fn user() -> Self {
        let config_dir = dirs::config_dir()
            .unwrap_or_else(|| dirs::home_dir().unwrap_or_else(|| PathBuf::from(".")).join(".config"));
        Self::new(config_dir.join("devhub").join("config.yaml"), ConfigLevel::User)
    }

    /// `<workspace>/.config/devhub/config.yaml`
    pub fn workspace(workspace_root: impl AsRef<Path>) -> Self {
        let path = workspace_root.as_ref().join(".config").join("devhub").join("config.yaml");
        Self::new(path, ConfigLevel::Workspace)
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    pub fn level(&self) -> ConfigLevel {
        self.level
    }

    pub fn exists(&self) -> bool {
        self.path.exists()
    }

    /// Read the file; a missing file gives the defaults
    pub fn load(&self) -> ConfigResult<HubConfig> {
        if !self.path.exists() {
            return Ok(HubConfig::default());
        }
        let content = fs::read_to_string(&self.path)?;
        HubConfig::from_yaml(&content)
    }

    /// Read the file, then apply environment overrides
    pub fn load_with_env(&self) -> ConfigResult<HubConfig> {
        let mut config = self.load()?;
        config.apply_env()?;
        Ok(config)
    }

    pub fn save(&self, config: &HubConfig) -> ConfigResult<()> {
        if let Some(parent) = self.path.parent() {
            fs::create_dir_all(parent)?;
        }
        fs::write(&self.path, config.to_yaml()?)?;
        Ok(())
    }

    /// Copy the current file next to itself with a `.backup` suffix
    pub fn backup(&self) -> ConfigResult<Option<PathBuf>> {
        if !self.exists() {
            return Ok(None);
        }
        let backup_path = self.path.with_extension("yaml.backup");
        fs::copy(&self.path, &backup_path)?;
        Ok(Some(backup_path))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::StorageBackend;
    use tempfile::tempdir;

    #[test]
    fn test_missing_file_gives_defaults() {
        let dir = tempdir().unwrap();
        let file = ConfigFile::new(dir.path().join("config.yaml"), ConfigLevel::User);
        assert!(!file.exists());
        assert_eq!(file.load().unwrap(), HubConfig::default());
        assert_eq!(file.backup().unwrap(), None);
    }

    #[test]
    fn test_save_and_load() {
        let dir = tempdir().unwrap();
        let file = ConfigFile::workspace(dir.path());
        assert_eq!(file.level(), ConfigLevel::Workspace);

        let mut config = HubConfig::default();
        config.author = "bruno".to_string();
        config.storage.backend = StorageBackend::Memory;
        file.save(&config).unwrap();

        assert!(file.path().ends_with(".config/devhub/config.yaml"));
        assert_eq!(file.load().unwrap(), config);

        let backup = file.backup().unwrap().unwrap();
        assert!(backup.exists());
    }

    #[test]
    fn test_user_path() {
        assert!(ConfigFile::user().path().ends_with("devhub/config.yaml"));
    }
}
