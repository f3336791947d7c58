//! Game rules and session state for WordSquad.
//!
//! Everything here is UI-free: guess evaluation, scoring, hard mode,
//! the daily double, chat, the leaderboard and on-disk persistence.
//! The terminal front end drives it through [`Game`].

pub mod chat;
pub mod daily_double;
pub mod definitions;
pub mod game;
pub mod guess;
pub mod hard_mode;
pub mod persist;
pub mod players;
pub mod score;
pub mod state;
pub mod words;

pub use chat::{ChatLog, ChatMessage, ChatRejection};
pub use daily_double::DailyDouble;
pub use game::{CloseCall, Game, GuessOutcome, GuessRejection, HintRejection, HintReveal};
pub use guess::{result_for_guess, GuessRow, LetterResult, PastGame};
pub use persist::{load_from, save_to, state_file_path, SavedState};
pub use players::{base_emoji, Leaderboard, PlayerStats};
pub use score::format_half_points;
pub use state::GameState;
pub use words::WordList;

/// Length of every target and guess word.
pub const WORD_LENGTH: usize = 5;

/// Guesses available per round.
pub const MAX_ROWS: usize = 6;

/// Solving the word this soon after the winner counts as a close call.
pub const CLOSE_CALL_WINDOW_MS: u64 = 2000;

pub(crate) fn now_ms() -> u64 {
    chrono::Utc::now().timestamp_millis().max(0) as u64
}
