//! Configuration schema for snapsearch
//!
//! Configuration is stored at `~/.config/snapsearch/config.toml`

use serde::{Deserialize, Serialize};
use std::path::PathBuf;

/// Default image search endpoint
pub const DEFAULT_BASE_URL: &str = "https://api.unsplash.com/search/photos";

/// Root configuration structure
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    /// General settings
    pub general: GeneralConfig,

    /// Remote search API settings
    pub api: ApiConfig,

    /// Thumbnail cache settings
    pub cache: CacheConfig,
}

/// General application settings
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct GeneralConfig {
    /// Log format: "text" or "json"
    pub log_format: String,
}

impl Default for GeneralConfig {
    fn default() -> Self {
        Self {
            log_format: "text".to_string(),
        }
    }
}

/// Remote search API settings
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct ApiConfig {
    /// Search endpoint, without query parameters
    pub base_url: String,

    /// Access key sent as `client_id`
    pub client_id: String,
}

impl Default for ApiConfig {
    fn default() -> Self {
        Self {
            base_url: DEFAULT_BASE_URL.to_string(),
            client_id: String::new(),
        }
    }
}

/// Thumbnail cache settings
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct CacheConfig {
    /// Download and store thumbnails after each search (default: true)
    pub enabled: bool,

    /// Cache directory override (default: platform cache dir)
    pub dir: Option<PathBuf>,
}

impl Default for CacheConfig {
    fn default() -> Self {
        Self {
            enabled: true,
            dir: None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_config_serializes() {
        let config = Config::default();
        let toml = toml::to_string_pretty(&config).unwrap();
        assert!(toml.contains("[general]"));
        assert!(toml.contains("[api]"));
        assert!(toml.contains("[cache]"));
    }

    #[test]
    fn config_deserializes_empty() {
        let config: Config = toml::from_str("").unwrap();
        assert_eq!(config.api.base_url, DEFAULT_BASE_URL);
        assert!(config.api.client_id.is_empty());
        assert!(config.cache.enabled);
    }

    #[test]
    fn config_deserializes_partial() {
        let toml = r#"
            [api]
            client_id = "abc123"

            [cache]
            dir = "/tmp/snaps"
        "#;
        let config: Config = toml::from_str(toml).unwrap();
        assert_eq!(config.api.client_id, "abc123");
        assert_eq!(config.api.base_url, DEFAULT_BASE_URL); // default preserved
        assert_eq!(config.cache.dir, Some(PathBuf::from("/tmp/snaps")));
        assert_eq!(config.general.log_format, "text");
    }
}
