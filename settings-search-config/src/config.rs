//! The `SearchConfig` struct and its YAML persistence.

use crate::defaults;
use crate::error::ConfigError;
use crate::types::LogLevel;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

/// Tunables for the settings search engine.
///
/// Every field has a serde default so partial files (or an empty file) load
/// cleanly and new fields never break existing configs.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SearchConfig {
    /// Match terms case-sensitively instead of case folding.
    #[serde(default = "defaults::bool_false")]
    pub case_sensitive: bool,

    /// Unfold every collapsible group a search leaves visible.
    /// Groups are never folded back by search.
    #[serde(default = "defaults::bool_true")]
    pub auto_expand: bool,

    /// Treat an untitled two-child container whose first child is a label
    /// as a single key/value row matched on that label.
    #[serde(default = "defaults::bool_true")]
    pub implicit_pair_rows: bool,

    /// Verbosity of the command-line log bridge.
    #[serde(default = "defaults::log_level")]
    pub log_level: LogLevel,
}

impl Default for SearchConfig {
    fn default() -> Self {
        Self {
            case_sensitive: defaults::bool_false(),
            auto_expand: defaults::bool_true(),
            implicit_pair_rows: defaults::bool_true(),
            log_level: defaults::log_level(),
        }
    }
}

impl SearchConfig {
    /// Load configuration from the default path, or defaults if it is missing.
    pub fn load() -> Result<Self, ConfigError> {
        let path = Self::config_path();
        if path.exists() {
            Self::load_from(&path)
        } else {
            log::info!("Config file not found at {:?}, using defaults", path);
            Ok(Self::default())
        }
    }

    /// Load configuration from an explicit file.
    pub fn load_from(path: &Path) -> Result<Self, ConfigError> {
        log::info!("Loading search config from {:?}", path);
        let contents = fs::read_to_string(path)?;
        Self::from_yaml_str(&contents)
    }

    /// Parse configuration from YAML text. Blank text yields defaults.
    pub fn from_yaml_str(contents: &str) -> Result<Self, ConfigError> {
        if contents.trim().is_empty() {
            return Ok(Self::default());
        }
        Ok(serde_yaml_ng::from_str(contents)?)
    }

    /// Save configuration to an explicit file.
    pub fn save_to(&self, path: &Path) -> Result<(), ConfigError> {
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent)?;
        }

        let yaml = serde_yaml_ng::to_string(self)?;

        // Atomic save: write to temp file then rename to prevent corruption on crash
        let temp_path = path.with_extension("yaml.tmp");
        fs::write(&temp_path, &yaml)?;
        fs::rename(&temp_path, path)?;
        Ok(())
    }

    /// Save configuration to the default path.
    pub fn save(&self) -> Result<(), ConfigError> {
        self.save_to(&Self::config_path())
    }

    /// Default configuration file path (`~/.config/settings-search/config.yaml`).
    pub fn config_path() -> PathBuf {
        #[cfg(target_os = "windows")]
        {
            if let Some(config_dir) = dirs::config_dir() {
                config_dir.join("settings-search").join("config.yaml")
            } else {
                PathBuf::from("config.yaml")
            }
        }
        #[cfg(not(target_os = "windows"))]
        {
            if let Some(home_dir) = dirs::home_dir() {
                home_dir
                    .join(".config")
                    .join("settings-search")
                    .join("config.yaml")
            } else {
                PathBuf::from("config.yaml")
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let config = SearchConfig::default();
        assert!(!config.case_sensitive);
        assert!(config.auto_expand);
        assert!(config.implicit_pair_rows);
        assert_eq!(config.log_level, LogLevel::Info);
    }

    #[test]
    fn test_partial_yaml_fills_defaults() {
        let config = SearchConfig::from_yaml_str("case_sensitive: true\n").unwrap();
        assert!(config.case_sensitive);
        assert!(config.auto_expand);
        assert_eq!(config.log_level, LogLevel::Info);
    }

    #[test]
    fn test_blank_yaml_is_default() {
        assert_eq!(
            SearchConfig::from_yaml_str("  \n").unwrap(),
            SearchConfig::default()
        );
    }

    #[test]
    fn test_bad_log_level_is_parse_error() {
        let err = SearchConfig::from_yaml_str("log_level: loud\n").unwrap_err();
        assert!(matches!(err, ConfigError::Parse(_)));
    }

    #[test]
    fn test_config_path_file_name() {
        assert!(SearchConfig::config_path().ends_with("config.yaml"));
    }
}
