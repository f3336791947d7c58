//! Mutable state for the current round plus archived history.

use std::collections::{HashMap, HashSet};

use wordsquad_config::constants::MAX_PAST_GAMES;

use crate::guess::{GuessRow, PastGame};

#[derive(Debug)]
pub struct GameState {
    pub target_word: String,
    pub guesses: Vec<GuessRow>,
    pub is_over: bool,
    pub winner: Option<String>,
    pub win_ts_ms: Option<u64>,
    /// Definition of the solved word, looked up when the round ends
    pub definition: Option<String>,
    pub last_word: Option<String>,
    pub last_definition: Option<String>,
    pub past_games: Vec<PastGame>,
    /// Letters already scored as green this round
    pub(crate) found_greens: HashSet<char>,
    /// Letters already scored as yellow this round
    pub(crate) found_yellows: HashSet<char>,
    /// Board cells revealed by daily double hints, (row, col) -> letter
    pub hint_cells: HashMap<(usize, usize), char>,
}

impl GameState {
    pub fn new(target_word: String) -> Self {
        Self {
            target_word,
            guesses: Vec::new(),
            is_over: false,
            winner: None,
            win_ts_ms: None,
            definition: None,
            last_word: None,
            last_definition: None,
            past_games: Vec::new(),
            found_greens: HashSet::new(),
            found_yellows: HashSet::new(),
            hint_cells: HashMap::new(),
        }
    }

    /// Row index the next guess will land on.
    pub fn current_row(&self) -> usize {
        self.guesses.len()
    }

    pub fn already_guessed(&self, word: &str) -> bool {
        self.guesses.iter().any(|g| g.word == word)
    }

    pub fn mark_won_at(&mut self, now_ms: u64, emoji: &str) {
        self.is_over = true;
        self.winner = Some(emoji.to_string());
        self.win_ts_ms = Some(now_ms);
    }

    pub fn mark_lost(&mut self) {
        self.is_over = true;
    }

    /// Archive the finished round and start over with a new target.
    ///
    /// Rounds with no guesses are not archived. History is capped at
    /// [`MAX_PAST_GAMES`], dropping the oldest entries.
    pub fn start_new_round(&mut self, target_word: String) {
        if !self.guesses.is_empty() {
            self.past_games.push(PastGame {
                word: self.target_word.clone(),
                solved: self.winner.is_some(),
                guesses: std::mem::take(&mut self.guesses),
            });
            if self.past_games.len() > MAX_PAST_GAMES {
                let excess = self.past_games.len() - MAX_PAST_GAMES;
                self.past_games.drain(..excess);
            }
        }
        self.target_word = target_word;
        self.guesses.clear();
        self.is_over = false;
        self.winner = None;
        self.win_ts_ms = None;
        self.definition = None;
        self.found_greens.clear();
        self.found_yellows.clear();
        self.hint_cells.clear();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::guess::{result_for_guess, GuessRow};

    fn row(word: &str, target: &str) -> GuessRow {
        GuessRow {
            word: word.to_string(),
            result: result_for_guess(word, target),
            player: "🐶".to_string(),
            points: 0,
            ts_ms: 0,
        }
    }

    #[test]
    fn test_new_round_archives_guesses() {
        let mut state = GameState::new("crane".to_string());
        state.guesses.push(row("slate", "crane"));
        state.mark_won_at(5000, "🐶");

        state.start_new_round("toast".to_string());

        assert_eq!(state.target_word, "toast");
        assert!(state.guesses.is_empty());
        assert!(!state.is_over);
        assert_eq!(state.winner, None);
        assert_eq!(state.past_games.len(), 1);
        assert_eq!(state.past_games[0].word, "crane");
        assert!(state.past_games[0].solved);
    }

    #[test]
    fn test_untouched_round_is_not_archived() {
        let mut state = GameState::new("crane".to_string());
        state.start_new_round("toast".to_string());
        assert!(state.past_games.is_empty());
    }

    #[test]
    fn test_history_capped() {
        let mut state = GameState::new("crane".to_string());
        for i in 0..(MAX_PAST_GAMES + 5) {
            state.guesses.push(row("slate", "crane"));
            state.start_new_round(format!("wrd{:02}", i));
        }
        assert_eq!(state.past_games.len(), MAX_PAST_GAMES);
    }

    #[test]
    fn test_new_round_clears_discoveries_and_hints() {
        let mut state = GameState::new("crane".to_string());
        state.found_greens.insert('c');
        state.found_yellows.insert('r');
        state.hint_cells.insert((1, 2), 'a');
        state.guesses.push(row("crane", "crane"));

        state.start_new_round("toast".to_string());

        assert!(state.found_greens.is_empty());
        assert!(state.found_yellows.is_empty());
        assert!(state.hint_cells.is_empty());
    }
}
