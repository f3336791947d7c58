//! Configuration management for wordsquad.
//!
//! This crate provides configuration loading, saving, and validation
//! with support for TOML format and XDG directory conventions.

pub mod constants;
mod settings;
mod xdg;

pub use settings::{ChatSettings, Config, GameSettings, GeneralSettings, LoggingSettings};
pub use xdg::{get_config_dir, get_data_dir};

use anyhow::Result;
use std::path::PathBuf;

/// Default values as constants
pub mod defaults {
    pub const THEME_NAME: &str = "dark";
    pub const PLAYER_EMOJI: &str = "🙂";
    pub const HARD_MODE: bool = false;
    pub const DAILY_DOUBLE: bool = true;
    pub const CHAT_RATE_LIMIT_SECS: u64 = 2;
    pub const CHAT_MAX_MESSAGE_LEN: usize = 280;
    pub const MIN_LOG_LEVEL: &str = "info";
}

impl Config {
    /// Load configuration from file.
    ///
    /// On first run, creates config file with default values.
    /// Auto-completes missing keys with default values.
    pub fn load() -> Result<Self> {
        let config_path = Self::config_file_path()?;

        if config_path.exists() {
            let original_content = std::fs::read_to_string(&config_path)?;
            let config: Self = toml::from_str(&original_content)?;

            // Serialize back to get normalized content
            let normalized_content = toml::to_string_pretty(&config)?;

            // If content changed, save the updated config
            if original_content != normalized_content {
                config.save()?;
            }

            Ok(config)
        } else {
            // First run - create config file with default values
            let config = Self::default();
            config.save()?;

            // Create themes directory
            Self::ensure_themes_dir()?;

            Ok(config)
        }
    }

    /// Save configuration to file.
    pub fn save(&self) -> Result<()> {
        let config_path = Self::config_file_path()?;

        if let Some(parent) = config_path.parent() {
            std::fs::create_dir_all(parent)?;
        }

        let content = toml::to_string_pretty(self)?;
        std::fs::write(config_path, content)?;
        Ok(())
    }

    /// Get path to config file.
    pub fn config_file_path() -> Result<PathBuf> {
        Ok(get_config_dir()?.join("config.toml"))
    }

    /// Get path to themes directory.
    pub fn get_themes_dir() -> Result<PathBuf> {
        Ok(get_config_dir()?.join("themes"))
    }

    /// Validate config content.
    pub fn validate_content(content: &str) -> Result<Config> {
        toml::from_str(content).map_err(|e| anyhow::anyhow!("{}", e))
    }

    /// Ensure themes directory exists.
    fn ensure_themes_dir() -> Result<()> {
        let themes_dir = Self::get_themes_dir()?;
        if !themes_dir.exists() {
            std::fs::create_dir_all(themes_dir)?;
        }
        Ok(())
    }
}
