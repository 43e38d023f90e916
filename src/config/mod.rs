//! Configuration module for bwedit
//!
//! Editor defaults such as the export directory and the search debounce.
//! Configuration is stored in the user's config directory; every key is
//! optional.

use crate::ui::FrontendConfig;
use config::{Config, ConfigError, File, FileFormat};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};
use std::time::Duration;

const fn default_search_debounce_ms() -> u64 {
    300
}

const fn default_message_ttl_secs() -> u64 {
    3
}

const fn default_true() -> bool {
    true
}

/// Application configuration structure
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq, Eq)]
pub struct EditorConfig {
    /// Directory exports are written to; the current directory when unset
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub export_dir: Option<PathBuf>,

    /// Quiet period after the last keystroke before the search is applied
    #[serde(default = "default_search_debounce_ms")]
    pub search_debounce_ms: u64,

    /// How long status messages stay on screen
    #[serde(default = "default_message_ttl_secs")]
    pub message_ttl_secs: u64,

    /// Ask before deleting items
    #[serde(default = "default_true")]
    pub confirm_deletes: bool,

    /// Suppress informational output by default
    #[serde(default)]
    pub quiet: bool,
}

impl Default for EditorConfig {
    fn default() -> Self {
        Self {
            export_dir: None,
            search_debounce_ms: default_search_debounce_ms(),
            message_ttl_secs: default_message_ttl_secs(),
            confirm_deletes: true,
            quiet: false,
        }
    }
}

impl EditorConfig {
    /// Get the path to the config file
    ///
    /// # Errors
    ///
    /// Returns `ConfigError` if the system config directory cannot be determined.
    pub fn config_path() -> Result<PathBuf, ConfigError> {
        let config_dir = dirs::config_dir().ok_or_else(|| {
            ConfigError::Message("Could not determine config directory".to_string())
        })?;

        Ok(config_dir.join("bwedit").join("config.toml"))
    }

    /// Load configuration from the default location, creating it if missing
    ///
    /// # Errors
    ///
    /// Returns `ConfigError` if the config file cannot be read, parsed, or created.
    pub fn load() -> Result<Self, ConfigError> {
        let config_path = Self::config_path()?;

        if !config_path.exists() {
            let default_config = Self::default();
            default_config.save_to(&config_path)?;
            return Ok(default_config);
        }

        Self::load_from(&config_path)
    }

    /// Load configuration from a specific file
    ///
    /// # Errors
    ///
    /// Returns `ConfigError` if the file cannot be read or parsed.
    pub fn load_from(path: &Path) -> Result<Self, ConfigError> {
        let settings = Config::builder()
            .add_source(File::from(path).format(FileFormat::Toml))
            .build()?;

        settings.try_deserialize()
    }

    /// Save configuration to the default location
    ///
    /// # Errors
    ///
    /// Returns `ConfigError` if the config directory cannot be created or
    /// the file cannot be written.
    pub fn save(&self) -> Result<(), ConfigError> {
        self.save_to(&Self::config_path()?)
    }

    /// Save configuration to `path`
    ///
    /// # Errors
    ///
    /// Returns `ConfigError` if the directory cannot be created, the
    /// configuration cannot be serialized to TOML, or the file cannot be written.
    pub fn save_to(&self, path: &Path) -> Result<(), ConfigError> {
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent).map_err(|e| {
                ConfigError::Message(format!("Failed to create config directory: {e}"))
            })?;
        }

        let toml_string = toml::to_string_pretty(self)
            .map_err(|e| ConfigError::Message(format!("Failed to serialize config: {e}")))?;

        fs::write(path, toml_string)
            .map_err(|e| ConfigError::Message(format!("Failed to write config file: {e}")))?;

        Ok(())
    }

    /// Export directory, falling back to the current directory
    #[must_use]
    pub fn export_dir(&self) -> PathBuf {
        self.export_dir
            .clone()
            .unwrap_or_else(|| PathBuf::from("."))
    }

    #[must_use]
    pub const fn search_debounce(&self) -> Duration {
        Duration::from_millis(self.search_debounce_ms)
    }

    #[must_use]
    pub const fn message_ttl(&self) -> Duration {
        Duration::from_secs(self.message_ttl_secs)
    }

    /// Settings for the interactive editor; `export_dir` overrides the
    /// configured directory
    #[must_use]
    pub fn frontend_config(&self, export_dir: Option<&Path>) -> FrontendConfig {
        let dir = export_dir.map_or_else(|| self.export_dir(), Path::to_path_buf);
        FrontendConfig::new(dir)
            .with_search_debounce(self.search_debounce())
            .with_message_ttl(self.message_ttl())
    }
}
