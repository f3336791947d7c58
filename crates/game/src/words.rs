//! Bundled five-letter word list.

use std::collections::HashSet;
use std::sync::OnceLock;

use rand::Rng;

use crate::WORD_LENGTH;

const WORDS_TXT: &str = include_str!("../assets/words.txt");

static BUNDLED: OnceLock<WordList> = OnceLock::new();

#[derive(Debug)]
pub struct WordList {
    words: Vec<String>,
    index: HashSet<String>,
}

impl WordList {
    /// The word list compiled into the binary.
    pub fn bundled() -> &'static WordList {
        BUNDLED.get_or_init(|| WordList::parse(WORDS_TXT))
    }

    /// One lowercase word per line; anything that is not exactly five
    /// ASCII letters is skipped.
    pub fn parse(raw: &str) -> Self {
        let mut words = Vec::new();
        let mut index = HashSet::new();
        for line in raw.lines() {
            let word = line.trim().to_lowercase();
            if word.chars().count() == WORD_LENGTH
                && word.chars().all(|c| c.is_ascii_lowercase())
                && index.insert(word.clone())
            {
                words.push(word);
            }
        }
        Self { words, index }
    }

    pub fn contains(&self, word: &str) -> bool {
        self.index.contains(word)
    }

    pub fn random(&self, rng: &mut impl Rng) -> Option<&str> {
        if self.words.is_empty() {
            return None;
        }
        let idx = rng.random_range(0..self.words.len());
        Some(&self.words[idx])
    }

    pub fn len(&self) -> usize {
        self.words.len()
    }

    pub fn is_empty(&self) -> bool {
        self.words.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_bundled_list_is_sane() {
        let list = WordList::bundled();
        assert!(list.len() > 100);
        assert!(list.contains("crane"));
        assert!(list.contains("slate"));
        assert!(!list.contains("zzzzz"));
    }

    #[test]
    fn test_parse_skips_malformed_lines() {
        let list = WordList::parse("crane\nSLATE\n\ntoo\nlonger\ncr4ne\ncrane\n");
        assert_eq!(list.len(), 2);
        assert!(list.contains("crane"));
        assert!(list.contains("slate"));
    }

    #[test]
    fn test_random_draws_from_list() {
        let list = WordList::parse("crane\n");
        let mut rng = rand::rng();
        assert_eq!(list.random(&mut rng), Some("crane"));
        let empty = WordList::parse("");
        assert_eq!(empty.random(&mut rng), None);
    }
}
