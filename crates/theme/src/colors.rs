//! Theme color definitions.

use ratatui::style::Color;

/// Application theme with semantic color assignments.
///
/// The palette has three groups:
/// - base UI colors (bg, fg, accents, selection, disabled)
/// - semantic colors (success, warning, error)
/// - board tile colors (correct, present, absent)
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Theme {
    /// Theme name for display
    pub name: &'static str,

    // === Base ===
    /// Panel backgrounds
    pub bg: Color,
    /// Main text
    pub fg: Color,
    /// Header and status bar background
    pub accented_bg: Color,
    /// Active borders, hotkey letters, panel titles
    pub accented_fg: Color,
    /// Selected item background
    pub selected_bg: Color,
    /// Selected item text
    pub selected_fg: Color,
    /// Inactive elements, secondary text, hint letters
    pub disabled: Color,

    // === Semantic ===
    /// Positive score deltas, win banner
    pub success: Color,
    /// Daily double marker, close call notice
    pub warning: Color,
    /// Errors, negative score deltas
    pub error: Color,

    // === Board tiles ===
    /// Letter in the right position
    pub tile_correct: Color,
    /// Letter in the word, wrong position
    pub tile_present: Color,
    /// Letter not in the word
    pub tile_absent: Color,
}

impl Default for Theme {
    fn default() -> Self {
        *Self::get_by_name("dark")
    }
}
