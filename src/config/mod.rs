// SPDX-License-Identifier: MPL-2.0
//! This module handles the application's configuration, including loading and saving
//! user preferences to a `settings.toml` file.
//!
//! # Configuration Sections
//!
//! - `[general]` - Preferred display language
//! - `[resources]` - Optional on-disk resource directory replacing the embedded set
//!
//! # Path Resolution
//!
//! 1. Use `load_from_path()`/`save_to_path()` with explicit path
//! 2. Set `LANGSWITCH_CONFIG_DIR` environment variable
//! 3. Falls back to platform-specific config directory
//!
//! # Examples
//!
//! ```no_run
//! use langswitch::config::{self, Config};
//!
//! let mut config = config::load().unwrap_or_default();
//! config.general.language = Some("es".to_string());
//! config::save(&config).expect("Failed to save config");
//! ```

pub mod defaults;
pub mod paths;

pub use defaults::*;

use crate::error::{Error, Result};
use crate::i18n::language::{self, LANGUAGES};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

/// General application settings.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
pub struct GeneralConfig {
    /// Preferred language, either an index ("1") or a locale tag ("es", "es-ES").
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub language: Option<String>,
}

impl GeneralConfig {
    fn is_empty(&self) -> bool {
        self.language.is_none()
    }
}

#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
pub struct ResourcesConfig {
    /// Directory holding `messages/` and `translations/`. When unset the
    /// resources compiled into the binary are used.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub directory: Option<PathBuf>,
}

impl ResourcesConfig {
    fn is_empty(&self) -> bool {
        self.directory.is_none()
    }
}

#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
pub struct Config {
    #[serde(default, skip_serializing_if = "GeneralConfig::is_empty")]
    pub general: GeneralConfig,
    #[serde(default, skip_serializing_if = "ResourcesConfig::is_empty")]
    pub resources: ResourcesConfig,
}

impl Config {
    /// Stores a user supplied language (index or locale tag) as the preferred
    /// language, normalized to the table locale so later runs resolve it.
    ///
    /// Values naming no supported language are rejected and leave the config
    /// unchanged.
    pub fn set_language(&mut self, value: &str) -> Result<usize> {
        let index = language::index_for_value(value)
            .ok_or_else(|| Error::Config(format!("unsupported language: {}", value)))?;
        self.general.language = Some(LANGUAGES[index].locale.to_string());
        Ok(index)
    }
}

fn get_default_config_path() -> Option<PathBuf> {
    paths::get_app_config_dir().map(|dir| dir.join(CONFIG_FILE))
}

pub fn load() -> Result<Config> {
    if let Some(path) = get_default_config_path() {
        if path.exists() {
            return load_from_path(&path);
        }
    }
    Ok(Config::default())
}

pub fn save(config: &Config) -> Result<()> {
    if let Some(path) = get_default_config_path() {
        return save_to_path(config, &path);
    }
    Ok(())
}

/// Reads a settings file. A file that is not valid TOML yields the defaults.
pub fn load_from_path(path: &Path) -> Result<Config> {
    let content = fs::read_to_string(path)?;
    match toml::from_str(&content) {
        Ok(config) => Ok(config),
        Err(err) => {
            log::warn!("Ignoring invalid settings file {}: {}", path.display(), err);
            Ok(Config::default())
        }
    }
}

pub fn save_to_path(config: &Config, path: &Path) -> Result<()> {
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent)?;
    }
    let content = toml::to_string_pretty(config)?;
    fs::write(path, content)?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    #[test]
    fn save_and_load_round_trip_preserves_language() {
        let config = Config {
            general: GeneralConfig {
                language: Some("es".to_string()),
            },
            resources: ResourcesConfig {
                directory: Some(PathBuf::from("/opt/app/resources")),
            },
        };
        let temp_dir = tempdir().expect("failed to create temp dir");
        let config_path = temp_dir.path().join("nested").join(CONFIG_FILE);

        save_to_path(&config, &config_path).expect("failed to save config");
        let loaded = load_from_path(&config_path).expect("failed to load config");

        assert_eq!(loaded, config);
    }

    #[test]
    fn load_from_path_returns_default_on_invalid_toml() {
        let temp_dir = tempdir().expect("failed to create temp dir");
        let config_path = temp_dir.path().join(CONFIG_FILE);
        fs::write(&config_path, "not = valid = toml").expect("failed to write invalid toml");

        let loaded = load_from_path(&config_path).expect("load should not error");
        assert!(loaded.general.language.is_none());
    }

    #[test]
    fn load_from_path_errors_when_file_is_missing() {
        let temp_dir = tempdir().expect("failed to create temp dir");
        let result = load_from_path(&temp_dir.path().join("missing.toml"));
        assert!(matches!(result, Err(crate::error::Error::Io(_))));
    }

    #[test]
    fn missing_sections_fall_back_to_defaults() {
        let temp_dir = tempdir().expect("failed to create temp dir");
        let config_path = temp_dir.path().join(CONFIG_FILE);
        fs::write(&config_path, "[general]\nlanguage = \"1\"\n").expect("failed to write toml");

        let loaded = load_from_path(&config_path).expect("load should succeed");
        assert_eq!(loaded.general.language.as_deref(), Some("1"));
        assert!(loaded.resources.directory.is_none());
    }

    #[test]
    fn empty_config_serializes_to_nothing() {
        let content = toml::to_string_pretty(&Config::default()).expect("serialize");
        assert!(content.trim().is_empty(), "unexpected content: {content}");
    }

    #[test]
    fn language_only_config_omits_resources_section() {
        let mut config = Config::default();
        config.set_language("1").expect("supported language");
        let content = toml::to_string_pretty(&config).expect("serialize");
        assert!(content.contains("[general]"));
        assert!(!content.contains("[resources]"));
    }

    #[test]
    fn set_language_stores_table_locale() {
        let mut config = Config::default();
        assert_eq!(config.set_language("es-MX"), Ok(1));
        assert_eq!(config.general.language.as_deref(), Some("es"));
        assert_eq!(config.set_language("0"), Ok(0));
        assert_eq!(config.general.language.as_deref(), Some("en"));
    }

    #[test]
    fn set_language_rejects_unsupported_values() {
        let mut config = Config::default();
        config.set_language("es").expect("supported language");

        for value in ["fr", "7", ""] {
            let result = config.set_language(value);
            assert!(matches!(result, Err(Error::Config(_))), "{value} accepted");
        }
        assert_eq!(config.general.language.as_deref(), Some("es"));
    }
}
