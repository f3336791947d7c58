//! State types and data structures for wordsquad.
//!
//! This crate contains pure data types used throughout the application,
//! without dependencies on specific implementations.

use wordsquad_core::SidePanel;

/// Layout mode
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LayoutMode {
    /// Board only (width < 48)
    Compact,
    /// Side panels overlay the board, one at a time (width 48-155)
    Medium,
    /// Side panels flank the board (width > 155)
    Full,
}

impl LayoutMode {
    /// Short label for the status bar.
    pub fn label(self) -> &'static str {
        match self {
            LayoutMode::Compact => "compact",
            LayoutMode::Medium => "medium",
            LayoutMode::Full => "full",
        }
    }
}

/// Layout information
#[derive(Debug, Clone)]
pub struct LayoutInfo {
    /// Layout mode
    pub mode: LayoutMode,
}

impl LayoutInfo {
    /// Calculate layout based on terminal width
    pub fn calculate(width: u16) -> Self {
        use wordsquad_config::constants::*;

        let mode = if width > SIDE_PANEL_MIN_WIDTH {
            LayoutMode::Full
        } else if width >= MEDIUM_MIN_WIDTH {
            LayoutMode::Medium
        } else {
            LayoutMode::Compact
        };

        Self { mode }
    }
}

/// Focus target within the application
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum FocusTarget {
    /// The game board
    #[default]
    Board,
    /// One of the side panels
    Side(SidePanel),
}

/// UI components state
#[derive(Debug, Default)]
pub struct UiState {
    /// Current focus target
    pub focus: FocusTarget,
    /// Status line message (for displaying errors and notifications)
    pub status_message: Option<(String, bool)>, // (message, is_error)
}

impl UiState {
    /// Set a status message, replacing the previous one.
    pub fn set_status(&mut self, message: impl Into<String>, is_error: bool) {
        self.status_message = Some((message.into(), is_error));
    }

    /// Clear the status message.
    pub fn clear_status(&mut self) {
        self.status_message = None;
    }

    /// Panel the focus currently rests on, if any.
    pub fn focused_side_panel(&self) -> Option<SidePanel> {
        match self.focus {
            FocusTarget::Board => None,
            FocusTarget::Side(panel) => Some(panel),
        }
    }
}

/// Terminal state (dimensions)
#[derive(Debug, Clone, Copy)]
pub struct TerminalState {
    /// Terminal width
    pub width: u16,
    /// Terminal height
    pub height: u16,
}

impl Default for TerminalState {
    fn default() -> Self {
        Self {
            width: 80,
            height: 24,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_layout_compact_below_medium_threshold() {
        assert_eq!(LayoutInfo::calculate(20).mode, LayoutMode::Compact);
        assert_eq!(LayoutInfo::calculate(47).mode, LayoutMode::Compact);
    }

    #[test]
    fn test_layout_medium_range() {
        assert_eq!(LayoutInfo::calculate(48).mode, LayoutMode::Medium);
        assert_eq!(LayoutInfo::calculate(80).mode, LayoutMode::Medium);
        // Exactly at the side panel threshold is still medium
        assert_eq!(LayoutInfo::calculate(155).mode, LayoutMode::Medium);
    }

    #[test]
    fn test_layout_full_above_threshold() {
        assert_eq!(LayoutInfo::calculate(156).mode, LayoutMode::Full);
        assert_eq!(LayoutInfo::calculate(200).mode, LayoutMode::Full);
    }

    #[test]
    fn test_default_terminal_state() {
        let terminal = TerminalState::default();
        assert_eq!(terminal.width, 80);
        assert_eq!(terminal.height, 24);
    }

    #[test]
    fn test_focus_target_default_is_board() {
        let ui = UiState::default();
        assert_eq!(ui.focus, FocusTarget::Board);
        assert_eq!(ui.focused_side_panel(), None);
    }

    #[test]
    fn test_status_message_set_and_clear() {
        let mut ui = UiState::default();
        ui.set_status("saved", false);
        assert_eq!(ui.status_message.as_ref().map(|m| m.1), Some(false));
        ui.clear_status();
        assert!(ui.status_message.is_none());
    }
}
