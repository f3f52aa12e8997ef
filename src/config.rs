//! Configuration management
//!
//! Loads configuration from config.toml with support for:
//! - The bounty list to start from when nothing is cached
//! - Local cache location
//! - Log level

use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use tracing::warn;

use crate::error::{BountyError, BountyResult};
use crate::registry::default_targets;
use crate::text::parse_bounty_list;
use crate::types::BountyList;

const DEFAULT_CONFIG: &str = include_str!("../config.toml");

/// Main configuration structure matching config.toml
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Config {
    #[serde(default)]
    pub targets: TargetsConfig,
    #[serde(default)]
    pub storage: StorageConfig,
    #[serde(default)]
    pub logging: LoggingConfig,
}

/// Initial bounty list, in the bounty text format
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct TargetsConfig {
    #[serde(default)]
    pub default: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct StorageConfig {
    pub path: PathBuf,
}

impl Default for StorageConfig {
    fn default() -> Self {
        Self {
            path: PathBuf::from("bounty.db"),
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LoggingConfig {
    pub level: String,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: "info".to_string(),
        }
    }
}

impl Config {
    /// Load from config.toml or use defaults
    pub fn load() -> BountyResult<Self> {
        Self::load_from("config.toml")
    }

    /// Load from specific path, falling back to the embedded default
    pub fn load_from(path: impl AsRef<Path>) -> BountyResult<Self> {
        let path = path.as_ref();

        if path.exists() {
            let content = std::fs::read_to_string(path).map_err(|e| {
                BountyError::Config(format!("failed to read {}: {}", path.display(), e))
            })?;
            Self::from_toml(&content)
        } else {
            Self::from_toml(DEFAULT_CONFIG)
        }
    }

    pub fn from_toml(content: &str) -> BountyResult<Self> {
        toml::from_str(content).map_err(|e| BountyError::Config(e.to_string()))
    }

    /// Configured starting list; the built-in Thunderlake entry if the
    /// configured text has no entries.
    pub fn default_targets(&self) -> BountyList {
        match parse_bounty_list(&self.targets.default) {
            Ok(list) => list,
            Err(e) => {
                if !self.targets.default.trim().is_empty() {
                    warn!("Ignoring configured default targets: {}", e);
                }
                default_targets()
            }
        }
    }

    /// Cache path (env var takes precedence)
    pub fn database_path(&self) -> PathBuf {
        match std::env::var("BOUNTY_DB") {
            Ok(path) if !path.is_empty() => PathBuf::from(path),
            _ => self.storage.path.clone(),
        }
    }
}

impl Default for Config {
    fn default() -> Self {
        // The embedded config ships with the crate and is covered by tests
        Self::from_toml(DEFAULT_CONFIG).unwrap_or_else(|_| Self {
            targets: TargetsConfig::default(),
            storage: StorageConfig::default(),
            logging: LoggingConfig::default(),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_embedded_default_parses() {
        let config = Config::from_toml(DEFAULT_CONFIG).unwrap();
        assert_eq!(config.logging.level, "info");
        assert_eq!(config.storage.path, PathBuf::from("bounty.db"));
        assert_eq!(config.default_targets(), default_targets());
    }

    #[test]
    fn test_missing_file_uses_default() {
        let config = Config::load_from("/nonexistent/blood-token/config.toml").unwrap();
        assert_eq!(config.default_targets(), default_targets());
    }

    #[test]
    fn test_custom_targets() {
        let config = Config::from_toml(
            r#"
            [targets]
            default = "Alice | headshot only\nBob"
            "#,
        )
        .unwrap();

        let targets = config.default_targets();
        assert_eq!(targets.len(), 2);
        assert_eq!(targets.get("Bob"), Some(None));
        assert_eq!(config.logging.level, "info");
    }

    #[test]
    fn test_blank_targets_fall_back() {
        let config = Config::from_toml("[targets]\ndefault = \"  \"").unwrap();
        assert_eq!(config.default_targets(), default_targets());
    }

    #[test]
    fn test_invalid_toml() {
        assert!(matches!(
            Config::from_toml("[targets"),
            Err(BountyError::Config(_))
        ));
    }
}
