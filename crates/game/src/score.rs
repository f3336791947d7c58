//! Scrabble-based scoring for letter discoveries.
//!
//! Scores are tracked in half-point units so that half-value yellow
//! awards stay exact integers. A letter worth 3 awards 6 half-points
//! when discovered green and 3 half-points when discovered yellow.

use std::collections::HashSet;

use crate::guess::LetterResult;
use crate::WORD_LENGTH;

/// Win bonus, in half-point units (+3 points).
pub const WIN_BONUS: i32 = 6;

/// Penalty for a failed final row, in half-point units (-3 points).
pub const FAILED_GAME_PENALTY: i32 = -6;

/// Penalty for a guess with no new discoveries, in half-point units (-1 point).
pub const NO_DISCOVERY_PENALTY: i32 = -2;

/// Standard Scrabble value of a letter.
pub fn scrabble_score(letter: char) -> i32 {
    match letter {
        'a' | 'e' | 'i' | 'l' | 'n' | 'o' | 'r' | 's' | 't' | 'u' => 1,
        'd' | 'g' => 2,
        'b' | 'c' | 'm' | 'p' => 3,
        'f' | 'h' | 'v' | 'w' | 'y' => 4,
        'k' => 5,
        'j' | 'x' => 8,
        'q' | 'z' => 10,
        _ => 1,
    }
}

/// Score the globally new discoveries of one guess.
///
/// Awards only letters never scored before in this game: a brand-new
/// green earns the full letter value, a new yellow earns half, and a
/// letter promoted from yellow to green earns the remaining half.
/// `found_greens` and `found_yellows` are updated in place.
/// Returns the delta in half-point units.
pub fn score_discoveries(
    guess: &str,
    result: &[LetterResult; WORD_LENGTH],
    found_greens: &mut HashSet<char>,
    found_yellows: &mut HashSet<char>,
) -> i32 {
    let mut delta = 0;
    let mut found_this_turn: HashSet<char> = HashSet::new();

    for (i, letter) in guess.chars().enumerate() {
        let value = scrabble_score(letter);
        match result[i] {
            LetterResult::Correct => {
                if !found_greens.contains(&letter) && !found_this_turn.contains(&letter) {
                    if found_yellows.contains(&letter) {
                        // Yellow previously discovered: award the remaining half
                        delta += value;
                        found_yellows.remove(&letter);
                    } else {
                        // Brand-new green: full value
                        delta += value * 2;
                    }
                    found_greens.insert(letter);
                    found_this_turn.insert(letter);
                }
            }
            LetterResult::Present => {
                if !found_greens.contains(&letter)
                    && !found_yellows.contains(&letter)
                    && !found_this_turn.contains(&letter)
                {
                    // Yellow discovery: half value
                    delta += value;
                    found_yellows.insert(letter);
                    found_this_turn.insert(letter);
                }
            }
            LetterResult::Absent => {}
        }
    }

    delta
}

/// Format half-point units for display ("7", "7.5", "-1").
pub fn format_half_points(half: i32) -> String {
    if half % 2 == 0 {
        format!("{}", half / 2)
    } else {
        format!("{:.1}", half as f64 / 2.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::guess::result_for_guess;

    #[test]
    fn test_scrabble_values() {
        assert_eq!(scrabble_score('e'), 1);
        assert_eq!(scrabble_score('d'), 2);
        assert_eq!(scrabble_score('b'), 3);
        assert_eq!(scrabble_score('f'), 4);
        assert_eq!(scrabble_score('k'), 5);
        assert_eq!(scrabble_score('x'), 8);
        assert_eq!(scrabble_score('z'), 10);
    }

    #[test]
    fn test_new_green_awards_full_value() {
        let mut greens = HashSet::new();
        let mut yellows = HashSet::new();
        // "crane" vs "crane": c=3, r=1, a=1, n=1, e=1 -> 7 points = 14 half
        let result = result_for_guess("crane", "crane");
        let delta = score_discoveries("crane", &result, &mut greens, &mut yellows);
        assert_eq!(delta, 14);
        assert_eq!(greens.len(), 5);
        assert!(yellows.is_empty());
    }

    #[test]
    fn test_new_yellow_awards_half_value() {
        let mut greens = HashSet::new();
        let mut yellows = HashSet::new();
        // "earns" vs "slate": e, a, s yellow -> (1+1+1) half-units = 3
        let result = result_for_guess("earns", "slate");
        let delta = score_discoveries("earns", &result, &mut greens, &mut yellows);
        assert_eq!(delta, 3);
        assert!(yellows.contains(&'e') && yellows.contains(&'a') && yellows.contains(&'s'));
    }

    #[test]
    fn test_yellow_to_green_awards_remaining_half() {
        let mut greens = HashSet::new();
        let mut yellows = HashSet::new();
        yellows.insert('t');
        // 't' promoted to green earns the remaining half: 1 half-unit
        let result = result_for_guess("toast", "toast");
        let delta = score_discoveries("toast", &result, &mut greens, &mut yellows);
        // t promoted (+1), o new green (+2), a new green (+2), s new green (+2);
        // the second 't' is already green this turn
        assert_eq!(delta, 7);
        assert!(greens.contains(&'t'));
        assert!(!yellows.contains(&'t'));
    }

    #[test]
    fn test_rediscovered_letters_award_nothing() {
        let mut greens = HashSet::new();
        let mut yellows = HashSet::new();
        let result = result_for_guess("crane", "crane");
        score_discoveries("crane", &result, &mut greens, &mut yellows);
        // Same guess again discovers nothing
        let delta = score_discoveries("crane", &result, &mut greens, &mut yellows);
        assert_eq!(delta, 0);
    }

    #[test]
    fn test_format_half_points() {
        assert_eq!(format_half_points(14), "7");
        assert_eq!(format_half_points(15), "7.5");
        assert_eq!(format_half_points(-2), "-1");
        assert_eq!(format_half_points(0), "0");
        assert_eq!(format_half_points(-1), "-0.5");
    }
}
