//! Daily double tile: a hidden board cell that awards a letter hint.

use std::collections::{HashMap, HashSet};

use rand::Rng;
use serde::{Deserialize, Serialize};

use crate::guess::LetterResult;
use crate::{MAX_ROWS, WORD_LENGTH};

/// Daily double lifecycle for one lobby of players.
///
/// The tile index is flat (`row * WORD_LENGTH + col`) and never lands
/// on the final row, so an earned hint always has a next row to
/// reveal into. Pending hints survive a game reset: the stored reveal
/// row is rebased to the first row of the new game.
#[derive(Debug, Default, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct DailyDouble {
    /// Flat tile index, None when the feature is disabled
    index: Option<usize>,
    /// Players who already hit the tile this game
    winners: HashSet<String>,
    /// Player -> row their pending hint reveals into
    pending: HashMap<String, usize>,
}

impl DailyDouble {
    /// Roll a fresh tile position, keeping pending hints.
    pub fn roll(&mut self, rng: &mut impl Rng) {
        self.index = Some(rng.random_range(0..(MAX_ROWS - 1) * WORD_LENGTH));
        self.winners.clear();
        for row in self.pending.values_mut() {
            *row = 0;
        }
    }

    /// Disable the tile (config switch).
    pub fn disable(&mut self) {
        self.index = None;
        self.winners.clear();
    }

    /// Fix the tile position (tests).
    #[cfg(test)]
    pub(crate) fn set_index(&mut self, index: usize) {
        self.index = Some(index);
    }

    /// Tile position as (row, col), if enabled.
    pub fn tile(&self) -> Option<(usize, usize)> {
        self.index.map(|i| (i / WORD_LENGTH, i % WORD_LENGTH))
    }

    /// Check whether a scored row hits the tile for this player.
    ///
    /// A hit awards a pending hint for the next row and returns the
    /// tile position. Each player can win at most once per game.
    pub fn check_hit(
        &mut self,
        row_index: usize,
        result: &[LetterResult; WORD_LENGTH],
        player: &str,
    ) -> Option<(usize, usize)> {
        let (dd_row, dd_col) = self.tile()?;
        if row_index != dd_row {
            return None;
        }
        if result[dd_col] != LetterResult::Correct {
            return None;
        }
        if self.winners.contains(player) {
            return None;
        }
        self.winners.insert(player.to_string());
        self.pending.insert(player.to_string(), row_index + 1);
        Some((dd_row, dd_col))
    }

    /// Whether the player hit the tile this game.
    pub fn hit_by(&self, player: &str) -> bool {
        self.winners.contains(player)
    }

    /// Whether the player holds an unused hint.
    pub fn has_pending(&self, player: &str) -> bool {
        self.pending.contains_key(player)
    }

    /// Consume the player's pending hint, returning its reveal row.
    pub fn redeem(&mut self, player: &str) -> Option<usize> {
        self.pending.remove(player)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::guess::result_for_guess;

    #[test]
    fn test_hit_awards_pending_hint() {
        let mut dd = DailyDouble::default();
        dd.set_index(2); // row 0, col 2
        assert_eq!(dd.tile(), Some((0, 2)));

        let result = result_for_guess("crane", "crane");
        let tile = dd.check_hit(0, &result, "🐶");
        assert_eq!(tile, Some((0, 2)));
        assert!(dd.has_pending("🐶"));
        assert!(dd.hit_by("🐶"));
        assert!(!dd.hit_by("🦊"));
    }

    #[test]
    fn test_wrong_row_or_cell_does_not_award() {
        let mut dd = DailyDouble::default();
        dd.set_index(7); // row 1, col 2

        let all_correct = result_for_guess("crane", "crane");
        assert_eq!(dd.check_hit(0, &all_correct, "🐶"), None);

        // Right row but the tile cell is not green
        let partial = result_for_guess("crews", "crane");
        assert_eq!(partial[2], crate::guess::LetterResult::Present);
        assert_eq!(dd.check_hit(1, &partial, "🐶"), None);
    }

    #[test]
    fn test_player_wins_at_most_once() {
        let mut dd = DailyDouble::default();
        dd.set_index(0);

        let result = result_for_guess("crane", "crane");
        assert!(dd.check_hit(0, &result, "🐶").is_some());
        dd.redeem("🐶");
        assert_eq!(dd.check_hit(0, &result, "🐶"), None);
    }

    #[test]
    fn test_pending_survives_roll() {
        let mut dd = DailyDouble::default();
        dd.set_index(0);
        let result = result_for_guess("crane", "crane");
        dd.check_hit(0, &result, "🐶");

        let mut rng = rand::rng();
        dd.roll(&mut rng);

        // Hint survives with its reveal row rebased to the new game
        assert!(dd.has_pending("🐶"));
        assert_eq!(dd.redeem("🐶"), Some(0));
        // And the player may win again in the new game
        assert!(dd.tile().is_some());
    }
}
