//! Saving and loading the game session.
//!
//! Everything lives in one TOML file under the XDG data dir, so a
//! restart resumes the in-flight round, leaderboard and chat intact.

use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};

use wordsquad_config::get_data_dir;

use crate::chat::ChatMessage;
use crate::daily_double::DailyDouble;
use crate::guess::{GuessRow, PastGame};
use crate::players::Leaderboard;

/// On-disk snapshot of a session. Every field defaults so files from
/// older versions still load.
#[derive(Debug, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct SavedState {
    pub target_word: Option<String>,
    pub is_over: bool,
    pub winner: Option<String>,
    pub win_ts_ms: Option<u64>,
    pub found_greens: Vec<char>,
    pub found_yellows: Vec<char>,
    pub definition: Option<String>,
    pub last_word: Option<String>,
    pub last_definition: Option<String>,
    pub guesses: Vec<GuessRow>,
    pub past_games: Vec<PastGame>,
    pub chat_messages: Vec<ChatMessage>,
    pub leaderboard: Leaderboard,
    pub daily_double: DailyDouble,
}

/// Default state file location, `~/.local/share/wordsquad/state.toml`.
pub fn state_file_path() -> Result<PathBuf> {
    Ok(get_data_dir()?.join("state.toml"))
}

/// Load a snapshot, or `None` when there is nothing usable on disk.
///
/// A corrupt file is logged and treated as absent rather than
/// aborting the app.
pub fn load_from(path: &Path) -> Option<SavedState> {
    if !path.exists() {
        return None;
    }
    let raw = match std::fs::read_to_string(path) {
        Ok(raw) => raw,
        Err(e) => {
            wordsquad_logger::warn(&format!(
                "Failed to read saved state from {}: {}",
                path.display(),
                e
            ));
            return None;
        }
    };
    match toml::from_str(&raw) {
        Ok(state) => Some(state),
        Err(e) => {
            wordsquad_logger::warn(&format!(
                "Ignoring corrupt saved state at {}: {}",
                path.display(),
                e
            ));
            None
        }
    }
}

pub fn save_to(path: &Path, state: &SavedState) -> Result<()> {
    if let Some(parent) = path.parent() {
        std::fs::create_dir_all(parent)
            .with_context(|| format!("Failed to create data directory: {}", parent.display()))?;
    }
    let content = toml::to_string_pretty(state).context("Failed to serialize saved state")?;
    std::fs::write(path, content)
        .with_context(|| format!("Failed to write saved state to {}", path.display()))?;
    Ok(())
}
