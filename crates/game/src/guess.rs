//! Guess feedback in the classic two-pass style.

use serde::{Deserialize, Serialize};

use crate::WORD_LENGTH;

/// Per-letter feedback for a guess.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum LetterResult {
    /// Letter is in the word at this position
    Correct,
    /// Letter is in the word at another position
    Present,
    /// Letter is not in the word
    Absent,
}

/// One submitted guess with its feedback.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GuessRow {
    /// The guessed word
    pub word: String,
    /// Per-letter feedback
    pub result: [LetterResult; WORD_LENGTH],
    /// Emoji of the player who guessed
    pub player: String,
    /// Points awarded for this guess, in half-point units
    pub points: i32,
    /// Submission time, Unix milliseconds
    pub ts_ms: u64,
}

/// A finished game archived into history.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PastGame {
    /// The target word of the archived game
    pub word: String,
    /// Whether the word was found
    pub solved: bool,
    /// All guesses of the archived game, in order
    pub guesses: Vec<GuessRow>,
}

/// Compare a guess to the target and return per-letter feedback.
///
/// First pass marks exact matches and consumes those target letters;
/// second pass marks remaining letters present if an unconsumed target
/// letter matches. Duplicate letters never report more occurrences
/// than the target contains.
pub fn result_for_guess(guess: &str, target: &str) -> [LetterResult; WORD_LENGTH] {
    let guess_letters: Vec<char> = guess.chars().collect();
    let mut target_letters: Vec<Option<char>> = target.chars().map(Some).collect();
    let mut result = [LetterResult::Absent; WORD_LENGTH];

    for i in 0..WORD_LENGTH {
        if target_letters[i] == Some(guess_letters[i]) {
            result[i] = LetterResult::Correct;
            target_letters[i] = None;
        }
    }

    for i in 0..WORD_LENGTH {
        if result[i] == LetterResult::Correct {
            continue;
        }
        if let Some(pos) = target_letters
            .iter()
            .position(|&t| t == Some(guess_letters[i]))
        {
            result[i] = LetterResult::Present;
            target_letters[pos] = None;
        }
    }

    result
}

#[cfg(test)]
mod tests {
    use super::*;
    use LetterResult::*;

    #[test]
    fn test_all_correct() {
        assert_eq!(
            result_for_guess("crane", "crane"),
            [Correct, Correct, Correct, Correct, Correct]
        );
    }

    #[test]
    fn test_all_absent() {
        assert_eq!(
            result_for_guess("jumpy", "stone"),
            [Absent, Absent, Absent, Absent, Absent]
        );
    }

    #[test]
    fn test_present_letters() {
        // 'a' and 'e' are in "slate" but misplaced; 'r' and 'c' are not
        assert_eq!(
            result_for_guess("earns", "slate"),
            [Present, Present, Absent, Absent, Present]
        );
    }

    #[test]
    fn test_duplicate_guess_letter_single_target_occurrence() {
        // Target "toast" has one 'o'; it is consumed by the exact match,
        // so the second 'o' of "books" must be absent
        let result = result_for_guess("books", "toast");
        assert_eq!(result[1], Correct);
        assert_eq!(result[2], Absent);
    }

    #[test]
    fn test_duplicate_guess_letter_consumed_by_first_match() {
        // Target "state" has one 'a'; the first 'a' of "atlas" consumes it,
        // so the second 'a' reports absent
        let result = result_for_guess("atlas", "state");
        assert_eq!(result, [Present, Correct, Absent, Absent, Present]);
    }
}
