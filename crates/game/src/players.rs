//! Player identities and the persistent leaderboard.
//!
//! Players are keyed by emoji. Scores are stored in half-point units
//! so the ledger stays integral (a yellow `b` is worth 1.5 points,
//! stored as 3).

use std::collections::HashMap;

use serde::{Deserialize, Serialize};

/// Suffixes tried in order when a base emoji is already claimed.
pub const EMOJI_VARIANTS: [&str; 8] = [
    "red", "blue", "green", "yellow", "purple", "orange", "pink", "cyan",
];

/// First free identity derived from `base`: the base itself, then
/// `base-red` through `base-cyan`, then `base-9`, `base-10`, ...
pub fn emoji_variant(base: &str, is_taken: impl Fn(&str) -> bool) -> String {
    if !is_taken(base) {
        return base.to_string();
    }
    for suffix in EMOJI_VARIANTS {
        let candidate = format!("{}-{}", base, suffix);
        if !is_taken(&candidate) {
            return candidate;
        }
    }
    let mut counter = EMOJI_VARIANTS.len() + 1;
    loop {
        let candidate = format!("{}-{}", base, counter);
        if !is_taken(&candidate) {
            return candidate;
        }
        counter += 1;
    }
}

/// Base glyph of an identity, with any variant suffix removed.
pub fn base_emoji(emoji: &str) -> &str {
    match emoji.find('-') {
        Some(idx) => &emoji[..idx],
        None => emoji,
    }
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct PlayerStats {
    /// Cumulative score in half-point units
    #[serde(default)]
    pub score: i32,
    #[serde(default)]
    pub last_active_ms: u64,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Leaderboard {
    players: HashMap<String, PlayerStats>,
}

impl Leaderboard {
    /// Register `base`, resuming its stats when already present.
    ///
    /// A fresh registration claims the first free variant of `base`.
    /// Returns the identity the player now plays under.
    pub fn register_at(&mut self, now_ms: u64, base: &str) -> String {
        if self.players.contains_key(base) {
            self.touch_at(now_ms, base);
            return base.to_string();
        }
        let assigned = emoji_variant(base, |e| self.players.contains_key(e));
        self.players.insert(
            assigned.clone(),
            PlayerStats {
                score: 0,
                last_active_ms: now_ms,
            },
        );
        assigned
    }

    pub fn contains(&self, emoji: &str) -> bool {
        self.players.contains_key(emoji)
    }

    pub fn touch_at(&mut self, now_ms: u64, emoji: &str) {
        if let Some(stats) = self.players.get_mut(emoji) {
            stats.last_active_ms = now_ms;
        }
    }

    /// Apply a score delta in half-point units.
    pub fn add_points(&mut self, emoji: &str, delta: i32) {
        if let Some(stats) = self.players.get_mut(emoji) {
            stats.score += delta;
        }
    }

    pub fn score(&self, emoji: &str) -> Option<i32> {
        self.players.get(emoji).map(|s| s.score)
    }

    /// Entries sorted by score, highest first. Ties break on the
    /// emoji key so the ordering is stable across renders.
    pub fn sorted(&self) -> Vec<(&str, &PlayerStats)> {
        let mut entries: Vec<(&str, &PlayerStats)> = self
            .players
            .iter()
            .map(|(e, s)| (e.as_str(), s))
            .collect();
        entries.sort_by(|a, b| b.1.score.cmp(&a.1.score).then_with(|| a.0.cmp(b.0)));
        entries
    }

    pub fn len(&self) -> usize {
        self.players.len()
    }

    pub fn is_empty(&self) -> bool {
        self.players.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_variant_progression() {
        let taken: Vec<String> = Vec::new();
        assert_eq!(emoji_variant("🐶", |e| taken.contains(&e.to_string())), "🐶");

        let taken = vec!["🐶".to_string()];
        assert_eq!(
            emoji_variant("🐶", |e| taken.contains(&e.to_string())),
            "🐶-red"
        );

        let mut taken = vec!["🐶".to_string()];
        for suffix in EMOJI_VARIANTS {
            taken.push(format!("🐶-{}", suffix));
        }
        assert_eq!(
            emoji_variant("🐶", |e| taken.contains(&e.to_string())),
            "🐶-9"
        );
    }

    #[test]
    fn test_base_emoji_strips_suffix() {
        assert_eq!(base_emoji("🐶-red"), "🐶");
        assert_eq!(base_emoji("🐶-10"), "🐶");
        assert_eq!(base_emoji("🐶"), "🐶");
    }

    #[test]
    fn test_register_resumes_existing_stats() {
        let mut board = Leaderboard::default();
        let assigned = board.register_at(1000, "🐶");
        assert_eq!(assigned, "🐶");
        board.add_points("🐶", 14);

        // The same emoji registering again keeps its score
        let again = board.register_at(2000, "🐶");
        assert_eq!(again, "🐶");
        assert_eq!(board.score("🐶"), Some(14));
        assert_eq!(board.len(), 1);
    }

    #[test]
    fn test_sorted_by_score_descending() {
        let mut board = Leaderboard::default();
        board.register_at(0, "🐶");
        board.register_at(0, "🦊");
        board.register_at(0, "🐸");
        board.add_points("🦊", 20);
        board.add_points("🐸", 8);

        let order: Vec<&str> = board.sorted().iter().map(|(e, _)| *e).collect();
        assert_eq!(order, vec!["🦊", "🐸", "🐶"]);
    }
}
