//! snapsearch settings
//!
//! One TOML file holds the API endpoint and client id, the thumbnail cache
//! location, and the log format. A missing file means all defaults; a file
//! that fails to parse is an error naming its path.

pub mod schema;

pub use schema::{ApiConfig, CacheConfig, Config, GeneralConfig};

use crate::error::{SnapError, SnapResult};
use std::path::{Path, PathBuf};
use tokio::fs;
use tracing::{debug, info};

/// Reads and writes the settings file at one fixed path
pub struct ConfigManager {
    config_path: PathBuf,
}

impl ConfigManager {
    /// Manager for the per-user settings file
    pub fn new() -> Self {
        Self {
            config_path: Self::default_config_path(),
        }
    }

    /// Manager for an explicit settings file (`--config` / `SNAPSEARCH_CONFIG`)
    pub fn with_path(path: PathBuf) -> Self {
        Self { config_path: path }
    }

    /// `<config dir>/snapsearch/config.toml`, or `./snapsearch/config.toml`
    /// when the platform has no config dir
    pub fn default_config_path() -> PathBuf {
        dirs::config_dir()
            .unwrap_or_else(|| PathBuf::from("."))
            .join("snapsearch")
            .join("config.toml")
    }

    /// Load settings. Without a settings file every section takes its defaults.
    pub async fn load(&self) -> SnapResult<Config> {
        if !self.config_path.exists() {
            debug!(
                "No settings file at {}, using defaults",
                self.config_path.display()
            );
            return Ok(Config::default());
        }

        self.load_from_file(&self.config_path).await
    }

    /// Parse settings from `path`
    pub async fn load_from_file(&self, path: &Path) -> SnapResult<Config> {
        let content = fs::read_to_string(path)
            .await
            .map_err(|e| SnapError::io(format!("reading settings file {}", path.display()), e))?;

        let config: Config = toml::from_str(&content).map_err(|e| SnapError::ConfigInvalid {
            path: path.to_path_buf(),
            reason: e.to_string(),
        })?;
        debug!("Loaded settings from {}", path.display());
        Ok(config)
    }

    /// Write settings, creating the parent directory on first use
    pub async fn save(&self, config: &Config) -> SnapResult<()> {
        if let Some(parent) = self.config_path.parent() {
            fs::create_dir_all(parent)
                .await
                .map_err(|e| SnapError::ConfigDirCreate {
                    path: parent.to_path_buf(),
                    source: e,
                })?;
        }

        let content = toml::to_string_pretty(config)?;
        fs::write(&self.config_path, content).await.map_err(|e| {
            SnapError::io(
                format!("writing settings file {}", self.config_path.display()),
                e,
            )
        })?;

        info!("Settings written to {}", self.config_path.display());
        Ok(())
    }

    pub fn path(&self) -> &Path {
        &self.config_path
    }
}

impl Default for ConfigManager {
    fn default() -> Self {
        Self::new()
    }
}
