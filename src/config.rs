/// Application configuration
///
/// Read once at startup from `config.toml` in the user's config
/// directory (e.g. ~/.config/fluent-icons/config.toml on Linux).
/// Every key is optional:
///
/// ```toml
/// asset_root = "https://example.github.io/FluentIcons-Online"
/// index_file = "icons-index.json"
/// request_timeout_secs = 15
/// ```
use serde::Deserialize;
use std::path::{Path, PathBuf};
use std::time::Duration;

use crate::error::Result;

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Directory or http(s) URL holding `icons-index.json` and the
    /// per-icon folders
    pub asset_root: String,
    /// Index document, relative to `asset_root`
    pub index_file: String,
    /// Timeout for HTTP asset sources
    pub request_timeout_secs: u64,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            asset_root: "public".to_string(),
            index_file: "icons-index.json".to_string(),
            request_timeout_secs: 15,
        }
    }
}

impl Config {
    /// Load from the default location. A missing file yields the defaults;
    /// a malformed one is logged and also yields the defaults.
    pub fn load() -> Self {
        let Some(path) = Self::get_config_path() else {
            return Self::default();
        };

        if !path.exists() {
            tracing::debug!("No config at {}, using defaults", path.display());
            return Self::default();
        }

        match Self::from_file(&path) {
            Ok(config) => {
                tracing::info!("⚙️  Loaded config from {}", path.display());
                config
            }
            Err(e) => {
                tracing::warn!("⚠️  Ignoring {}: {}", path.display(), e);
                Self::default()
            }
        }
    }

    pub fn from_file(path: &Path) -> Result<Self> {
        let text = std::fs::read_to_string(path)?;
        Self::parse(&text)
    }

    pub fn parse(text: &str) -> Result<Self> {
        Ok(toml::from_str(text)?)
    }

    fn get_config_path() -> Option<PathBuf> {
        let mut path = dirs::config_dir()?;
        path.push("fluent-icons");
        path.push("config.toml");
        Some(path)
    }

    pub fn request_timeout(&self) -> Duration {
        Duration::from_secs(self.request_timeout_secs)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_config_uses_defaults() {
        assert_eq!(Config::parse("").unwrap(), Config::default());
    }

    #[test]
    fn test_partial_config() {
        let config = Config::parse(r#"asset_root = "https://icons.example.com/""#).unwrap();

        assert_eq!(config.asset_root, "https://icons.example.com/");
        assert_eq!(config.index_file, "icons-index.json");
        assert_eq!(config.request_timeout(), Duration::from_secs(15));
    }

    #[test]
    fn test_malformed_config_is_an_error() {
        assert!(Config::parse("request_timeout_secs = \"soon\"").is_err());
    }

    #[test]
    fn test_from_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("config.toml");
        std::fs::write(&path, "index_file = \"data/index.json\"\nrequest_timeout_secs = 3\n").unwrap();

        let config = Config::from_file(&path).unwrap();

        assert_eq!(config.index_file, "data/index.json");
        assert_eq!(config.request_timeout_secs, 3);
    }
}
