//! Hard mode guess constraints.
//!
//! In hard mode every revealed letter must be reused: greens in the
//! same position, yellows anywhere in the guess.

use std::collections::{HashMap, HashSet};

use crate::guess::{GuessRow, LetterResult};

/// Constraints aggregated from prior guesses.
#[derive(Debug, Default)]
pub struct HardModeConstraints {
    /// Letters revealed green or yellow so far
    pub required_letters: HashSet<char>,
    /// Position -> letter for revealed greens
    pub green_positions: HashMap<usize, char>,
}

impl HardModeConstraints {
    /// Aggregate constraints from all prior guesses.
    pub fn from_guesses(guesses: &[GuessRow]) -> Self {
        let mut constraints = Self::default();
        for row in guesses {
            for (i, letter) in row.word.chars().enumerate() {
                match row.result[i] {
                    LetterResult::Correct => {
                        constraints.required_letters.insert(letter);
                        constraints.green_positions.insert(i, letter);
                    }
                    LetterResult::Present => {
                        constraints.required_letters.insert(letter);
                    }
                    LetterResult::Absent => {}
                }
            }
        }
        constraints
    }

    /// Check a guess against the constraints.
    ///
    /// Returns the rejection message on violation.
    pub fn validate(&self, guess: &str) -> Result<(), String> {
        let letters: Vec<char> = guess.chars().collect();

        for (&idx, &ch) in &self.green_positions {
            if letters.get(idx) != Some(&ch) {
                return Err(format!(
                    "Letter {} must be in position {}.",
                    ch.to_uppercase(),
                    idx + 1
                ));
            }
        }

        let missing: Vec<char> = self
            .required_letters
            .iter()
            .filter(|l| !letters.contains(l))
            .copied()
            .collect();
        if !missing.is_empty() {
            let mut names: Vec<String> = missing
                .iter()
                .map(|m| m.to_uppercase().to_string())
                .collect();
            names.sort();
            return Err(format!(
                "Guess must contain letter(s): {}.",
                names.join(", ")
            ));
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::guess::result_for_guess;

    fn row(word: &str, target: &str) -> GuessRow {
        GuessRow {
            word: word.to_string(),
            result: result_for_guess(word, target),
            player: "🙂".to_string(),
            points: 0,
            ts_ms: 0,
        }
    }

    #[test]
    fn test_no_prior_guesses_allows_anything() {
        let constraints = HardModeConstraints::from_guesses(&[]);
        assert!(constraints.validate("crane").is_ok());
    }

    #[test]
    fn test_green_must_stay_in_position() {
        // "crane" vs "crate": c, r, a, e green in place, n absent
        let constraints = HardModeConstraints::from_guesses(&[row("crane", "crate")]);
        assert!(constraints.validate("crate").is_ok());

        let err = constraints.validate("react").unwrap_err();
        assert!(err.contains("must be in position"));
    }

    #[test]
    fn test_yellow_must_be_reused() {
        // "earns" vs "slate": e, a, s yellow
        let constraints = HardModeConstraints::from_guesses(&[row("earns", "slate")]);
        assert!(constraints.validate("slate").is_ok());

        let err = constraints.validate("round").unwrap_err();
        assert!(err.contains("must contain"));
    }
}
