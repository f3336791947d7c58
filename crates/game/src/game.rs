//! Game facade tying rounds, scoring, hints, chat and the
//! leaderboard together.

use anyhow::{anyhow, Result};

use wordsquad_config::Config;

use crate::chat::{ChatLog, ChatRejection};
use crate::daily_double::DailyDouble;
use crate::definitions;
use crate::guess::{result_for_guess, GuessRow, LetterResult, PastGame};
use crate::hard_mode::HardModeConstraints;
use crate::persist::SavedState;
use crate::players::Leaderboard;
use crate::score::{
    score_discoveries, FAILED_GAME_PENALTY, NO_DISCOVERY_PENALTY, WIN_BONUS,
};
use crate::state::GameState;
use crate::words::WordList;
use crate::{now_ms, CLOSE_CALL_WINDOW_MS, MAX_ROWS, WORD_LENGTH};

/// A second player solved the word moments after the winner.
#[derive(Debug, Clone, PartialEq)]
pub struct CloseCall {
    pub delta_ms: u64,
    pub winner: String,
}

/// Why a guess was not accepted.
#[derive(Debug, Clone, PartialEq)]
pub enum GuessRejection {
    GameOver { close_call: Option<CloseCall> },
    NotAWord,
    AlreadyGuessed,
    Unregistered,
    HardMode(String),
}

impl GuessRejection {
    pub fn message(&self) -> String {
        match self {
            GuessRejection::GameOver { .. } => "Game is over. Please reset.".to_string(),
            GuessRejection::NotAWord => "Not a valid 5-letter word.".to_string(),
            GuessRejection::AlreadyGuessed => "You've already guessed that word.".to_string(),
            GuessRejection::Unregistered => "Please pick an emoji before playing.".to_string(),
            GuessRejection::HardMode(msg) => msg.clone(),
        }
    }
}

/// What an accepted guess produced.
#[derive(Debug, Clone, PartialEq)]
pub struct GuessOutcome {
    pub row_index: usize,
    pub result: [LetterResult; WORD_LENGTH],
    /// Points awarded, in half-point units
    pub points: i32,
    pub won: bool,
    pub over: bool,
    /// Daily double tile hit by this guess, if any
    pub daily_double: Option<(usize, usize)>,
}

#[derive(Debug, Clone, PartialEq)]
pub enum HintRejection {
    Unregistered,
    NoHint,
    InvalidColumn,
}

impl HintRejection {
    pub fn message(&self) -> String {
        match self {
            HintRejection::Unregistered => "Invalid player.".to_string(),
            HintRejection::NoHint => "No hint available.".to_string(),
            HintRejection::InvalidColumn => "Invalid column.".to_string(),
        }
    }
}

/// A daily double hint redeemed into a revealed board cell.
#[derive(Debug, Clone, PartialEq)]
pub struct HintReveal {
    pub row: usize,
    pub col: usize,
    pub letter: char,
}

pub struct Game {
    state: GameState,
    leaderboard: Leaderboard,
    chat: ChatLog,
    daily_double: DailyDouble,
    words: &'static WordList,
    hard_mode: bool,
    daily_double_enabled: bool,
}

impl Game {
    /// Start a fresh session with a random target word.
    pub fn new(config: &Config) -> Result<Self> {
        let words = WordList::bundled();
        let target = pick_target(words)?;
        let mut game = Self {
            state: GameState::new(target),
            leaderboard: Leaderboard::default(),
            chat: ChatLog::new(
                config.chat.rate_limit_secs,
                config.chat.max_message_len,
            ),
            daily_double: DailyDouble::default(),
            words,
            hard_mode: config.game.hard_mode,
            daily_double_enabled: config.game.daily_double,
        };
        game.roll_daily_double();
        Ok(game)
    }

    /// Resume a session from a saved snapshot.
    ///
    /// A snapshot without a target word (fresh install, wiped file)
    /// starts a new round instead.
    pub fn from_saved(config: &Config, saved: SavedState) -> Result<Self> {
        let words = WordList::bundled();
        let target = match saved.target_word {
            Some(word) if !word.is_empty() => word,
            _ => pick_target(words)?,
        };
        let mut state = GameState::new(target);
        state.guesses = saved.guesses;
        state.is_over = saved.is_over;
        state.winner = saved.winner;
        state.win_ts_ms = saved.win_ts_ms;
        state.definition = saved.definition;
        state.last_word = saved.last_word;
        state.last_definition = saved.last_definition;
        state.past_games = saved.past_games;
        state.found_greens = saved.found_greens.into_iter().collect();
        state.found_yellows = saved.found_yellows.into_iter().collect();

        let mut chat = ChatLog::new(
            config.chat.rate_limit_secs,
            config.chat.max_message_len,
        );
        chat.restore(saved.chat_messages);

        let mut game = Self {
            state,
            leaderboard: saved.leaderboard,
            chat,
            daily_double: saved.daily_double,
            words,
            hard_mode: config.game.hard_mode,
            daily_double_enabled: config.game.daily_double,
        };
        if game.daily_double.tile().is_none() {
            game.roll_daily_double();
        } else if !game.daily_double_enabled {
            game.daily_double.disable();
        }
        Ok(game)
    }

    #[cfg(test)]
    pub(crate) fn new_with_target(config: &Config, target: &str) -> Self {
        let mut game = Self {
            state: GameState::new(target.to_string()),
            leaderboard: Leaderboard::default(),
            chat: ChatLog::new(
                config.chat.rate_limit_secs,
                config.chat.max_message_len,
            ),
            daily_double: DailyDouble::default(),
            words: WordList::bundled(),
            hard_mode: config.game.hard_mode,
            daily_double_enabled: config.game.daily_double,
        };
        game.roll_daily_double();
        game
    }

    /// Serializable snapshot of the whole session.
    pub fn snapshot(&self) -> SavedState {
        SavedState {
            target_word: Some(self.state.target_word.clone()),
            is_over: self.state.is_over,
            winner: self.state.winner.clone(),
            win_ts_ms: self.state.win_ts_ms,
            found_greens: self.state.found_greens.iter().copied().collect(),
            found_yellows: self.state.found_yellows.iter().copied().collect(),
            definition: self.state.definition.clone(),
            last_word: self.state.last_word.clone(),
            last_definition: self.state.last_definition.clone(),
            guesses: self.state.guesses.clone(),
            past_games: self.state.past_games.clone(),
            chat_messages: self.chat.to_vec(),
            leaderboard: self.leaderboard.clone(),
            daily_double: self.daily_double.clone(),
        }
    }

    pub fn register_player(&mut self, base: &str) -> String {
        self.register_player_at(now_ms(), base)
    }

    pub(crate) fn register_player_at(&mut self, now_ms: u64, base: &str) -> String {
        self.leaderboard.register_at(now_ms, base)
    }

    pub fn submit_guess(
        &mut self,
        emoji: &str,
        raw_guess: &str,
    ) -> Result<GuessOutcome, GuessRejection> {
        self.submit_guess_at(now_ms(), emoji, raw_guess)
    }

    /// Validate and score one guess.
    ///
    /// Checks run in order: game over (with close-call detection),
    /// word validity, duplicate guess, registration, hard mode.
    pub(crate) fn submit_guess_at(
        &mut self,
        now_ms: u64,
        emoji: &str,
        raw_guess: &str,
    ) -> Result<GuessOutcome, GuessRejection> {
        let guess = raw_guess.trim().to_lowercase();

        if self.state.is_over {
            return Err(GuessRejection::GameOver {
                close_call: self.close_call(now_ms, emoji, &guess),
            });
        }
        if guess.chars().count() != WORD_LENGTH || !self.words.contains(&guess) {
            return Err(GuessRejection::NotAWord);
        }
        if self.state.already_guessed(&guess) {
            return Err(GuessRejection::AlreadyGuessed);
        }
        if !self.leaderboard.contains(emoji) {
            return Err(GuessRejection::Unregistered);
        }
        self.leaderboard.touch_at(now_ms, emoji);
        if self.hard_mode {
            HardModeConstraints::from_guesses(&self.state.guesses)
                .validate(&guess)
                .map_err(GuessRejection::HardMode)?;
        }

        let row_index = self.state.current_row();
        let result = result_for_guess(&guess, &self.state.target_word);
        let daily_double = self.daily_double.check_hit(row_index, &result, emoji);

        let mut points = score_discoveries(
            &guess,
            &result,
            &mut self.state.found_greens,
            &mut self.state.found_yellows,
        );

        let won = guess == self.state.target_word;
        let mut over = false;
        if won {
            points += WIN_BONUS;
            self.state.mark_won_at(now_ms, emoji);
            over = true;
        } else if row_index + 1 == MAX_ROWS {
            points += FAILED_GAME_PENALTY;
            self.state.mark_lost();
            over = true;
        }

        if over {
            let definition = definitions::lookup(&self.state.target_word);
            self.state.last_word = Some(self.state.target_word.clone());
            self.state.last_definition = definition.clone();
            self.state.definition = definition;
        }

        // Guesses that discover nothing cost half a point
        if points == 0 && !won && !over {
            points += NO_DISCOVERY_PENALTY;
        }

        self.leaderboard.add_points(emoji, points);
        self.state.guesses.push(GuessRow {
            word: guess,
            result,
            player: emoji.to_string(),
            points,
            ts_ms: now_ms,
        });

        Ok(GuessOutcome {
            row_index,
            result,
            points,
            won,
            over,
            daily_double,
        })
    }

    fn close_call(&self, now_ms: u64, emoji: &str, guess: &str) -> Option<CloseCall> {
        let winner = self.state.winner.as_deref()?;
        let win_ts = self.state.win_ts_ms?;
        if guess != self.state.target_word || emoji == winner {
            return None;
        }
        let delta_ms = now_ms.saturating_sub(win_ts);
        if delta_ms <= CLOSE_CALL_WINDOW_MS {
            Some(CloseCall {
                delta_ms,
                winner: winner.to_string(),
            })
        } else {
            None
        }
    }

    pub fn select_hint(&mut self, emoji: &str, col: usize) -> Result<HintReveal, HintRejection> {
        if !self.leaderboard.contains(emoji) {
            return Err(HintRejection::Unregistered);
        }
        if !self.daily_double.has_pending(emoji) {
            return Err(HintRejection::NoHint);
        }
        if col >= WORD_LENGTH {
            return Err(HintRejection::InvalidColumn);
        }
        let row = match self.daily_double.redeem(emoji) {
            Some(row) => row,
            None => return Err(HintRejection::NoHint),
        };
        let letter = match self.state.target_word.chars().nth(col) {
            Some(letter) => letter,
            None => return Err(HintRejection::InvalidColumn),
        };
        self.state.hint_cells.insert((row, col), letter);
        Ok(HintReveal { row, col, letter })
    }

    pub fn send_chat(&mut self, emoji: &str, text: &str) -> Result<(), ChatRejection> {
        self.send_chat_at(now_ms(), emoji, text)
    }

    pub(crate) fn send_chat_at(
        &mut self,
        now_ms: u64,
        emoji: &str,
        text: &str,
    ) -> Result<(), ChatRejection> {
        let registered = self.leaderboard.contains(emoji);
        self.chat.push_at(now_ms, emoji, text, registered)?;
        Ok(())
    }

    /// Post an announcement into the chat log.
    pub fn announce(&mut self, text: &str) {
        self.chat.push_system_at(now_ms(), text);
    }

    /// Archive the current round and start a new one.
    pub fn reset(&mut self) -> Result<()> {
        let target = pick_target(self.words)?;
        self.state.start_new_round(target);
        self.roll_daily_double();
        Ok(())
    }

    fn roll_daily_double(&mut self) {
        if self.daily_double_enabled {
            let mut rng = rand::rng();
            self.daily_double.roll(&mut rng);
        } else {
            self.daily_double.disable();
        }
    }

    pub fn set_hard_mode(&mut self, on: bool) {
        self.hard_mode = on;
    }

    pub fn hard_mode(&self) -> bool {
        self.hard_mode
    }

    pub fn state(&self) -> &GameState {
        &self.state
    }

    pub fn leaderboard(&self) -> &Leaderboard {
        &self.leaderboard
    }

    pub fn chat(&self) -> &ChatLog {
        &self.chat
    }

    pub fn daily_double(&self) -> &DailyDouble {
        &self.daily_double
    }

    pub fn has_pending_hint(&self, emoji: &str) -> bool {
        self.daily_double.has_pending(emoji)
    }

    pub fn past_games(&self) -> &[PastGame] {
        &self.state.past_games
    }

    /// Most recently solved word and its definition, shown by the
    /// definition panel until the next round ends.
    pub fn last_definition(&self) -> Option<(&str, &str)> {
        match (&self.state.last_word, &self.state.last_definition) {
            (Some(word), Some(def)) => Some((word.as_str(), def.as_str())),
            _ => None,
        }
    }
}

fn pick_target(words: &WordList) -> Result<String> {
    let mut rng = rand::rng();
    words
        .random(&mut rng)
        .map(|w| w.to_string())
        .ok_or_else(|| anyhow!("Word list is empty"))
}
