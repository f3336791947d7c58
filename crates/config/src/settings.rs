//! Configuration structures for wordsquad settings.

use serde::{Deserialize, Serialize};

use crate::defaults;

/// Application configuration with nested sections.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Config {
    /// General application settings
    #[serde(default)]
    pub general: GeneralSettings,

    /// Game rule settings
    #[serde(default)]
    pub game: GameSettings,

    /// Chat settings
    #[serde(default)]
    pub chat: ChatSettings,

    /// Logging settings
    #[serde(default)]
    pub logging: LoggingSettings,
}

/// General application settings.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GeneralSettings {
    /// Selected theme name
    #[serde(default = "default_theme_name")]
    pub theme: String,

    /// Emoji identity of the local player
    #[serde(default = "default_player_emoji")]
    pub player_emoji: String,
}

/// Game rule settings.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GameSettings {
    /// Require guesses to reuse every revealed letter
    #[serde(default = "default_hard_mode")]
    pub hard_mode: bool,

    /// Place a hidden daily double tile on the board
    #[serde(default = "default_daily_double")]
    pub daily_double: bool,
}

/// Chat settings.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ChatSettings {
    /// Minimum seconds between messages from one player
    #[serde(default = "default_chat_rate_limit_secs")]
    pub rate_limit_secs: u64,

    /// Maximum message length in characters
    #[serde(default = "default_chat_max_message_len")]
    pub max_message_len: usize,
}

/// Logging settings.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LoggingSettings {
    /// Log file path (optional)
    #[serde(default)]
    pub file_path: Option<String>,

    /// Minimum log level (debug, info, warn, error)
    #[serde(default = "default_min_level")]
    pub min_level: String,
}

// Default value functions for serde
fn default_theme_name() -> String {
    defaults::THEME_NAME.to_string()
}

fn default_player_emoji() -> String {
    defaults::PLAYER_EMOJI.to_string()
}

fn default_hard_mode() -> bool {
    defaults::HARD_MODE
}

fn default_daily_double() -> bool {
    defaults::DAILY_DOUBLE
}

fn default_chat_rate_limit_secs() -> u64 {
    defaults::CHAT_RATE_LIMIT_SECS
}

fn default_chat_max_message_len() -> usize {
    defaults::CHAT_MAX_MESSAGE_LEN
}

fn default_min_level() -> String {
    defaults::MIN_LOG_LEVEL.to_string()
}

// Default implementations
impl Default for GeneralSettings {
    fn default() -> Self {
        Self {
            theme: default_theme_name(),
            player_emoji: default_player_emoji(),
        }
    }
}

impl Default for GameSettings {
    fn default() -> Self {
        Self {
            hard_mode: default_hard_mode(),
            daily_double: default_daily_double(),
        }
    }
}

impl Default for ChatSettings {
    fn default() -> Self {
        Self {
            rate_limit_secs: default_chat_rate_limit_secs(),
            max_message_len: default_chat_max_message_len(),
        }
    }
}

impl Default for LoggingSettings {
    fn default() -> Self {
        Self {
            file_path: None,
            min_level: default_min_level(),
        }
    }
}
