//! Application state and types.
//!
//! Re-exports pure types from wordsquad-state and adds the mutable
//! state the orchestrator owns.

use wordsquad_config::Config;
use wordsquad_theme::Theme;

// Re-export pure types from state crate
pub use wordsquad_state::{FocusTarget, LayoutInfo, LayoutMode, TerminalState, UiState};

/// Global application state
#[derive(Debug)]
pub struct AppState {
    /// Should application quit
    pub should_quit: bool,
    /// UI components state
    pub ui: UiState,
    /// Terminal state
    pub terminal: TerminalState,
    /// Current layout information
    pub layout_info: LayoutInfo,
    /// Current theme
    pub theme: &'static Theme,
    /// Application configuration
    pub config: Config,
    /// Emoji identity of the local player, as assigned at registration
    /// (may differ from the configured emoji when a variant was issued)
    pub player_emoji: String,
    /// Flag indicating UI needs to be redrawn (for CPU optimization)
    pub needs_redraw: bool,
}

impl Default for AppState {
    fn default() -> Self {
        Self::new()
    }
}

impl AppState {
    /// Create new application state, loading config from file
    pub fn new() -> Self {
        let config = Config::load().unwrap_or_else(|e| {
            eprintln!("Warning: Could not load config: {}. Using defaults.", e);
            Config::default()
        });
        let theme = Theme::get_by_name(&config.general.theme);
        Self::with_config_and_theme(config, theme)
    }

    /// Create new application state with given config and theme
    pub fn with_config_and_theme(config: Config, theme: &'static Theme) -> Self {
        let terminal = TerminalState::default();
        let layout_info = LayoutInfo::calculate(terminal.width);
        let player_emoji = config.general.player_emoji.clone();

        Self {
            should_quit: false,
            ui: UiState::default(),
            terminal,
            layout_info,
            theme,
            config,
            player_emoji,
            needs_redraw: true, // Initial draw needed
        }
    }

    /// Set new theme and update config
    pub fn set_theme(&mut self, theme_name: &str) {
        self.theme = Theme::get_by_name(theme_name);
        self.config.general.theme = theme_name.to_string();
    }

    /// Request application quit
    pub fn quit(&mut self) {
        self.should_quit = true;
    }

    /// Update terminal dimensions
    pub fn update_terminal_size(&mut self, width: u16, height: u16) {
        self.terminal.width = width;
        self.terminal.height = height;
        self.layout_info = LayoutInfo::calculate(width);
    }

    /// Set error message
    pub fn set_error(&mut self, message: String) {
        self.ui.status_message = Some((message, true));
    }

    /// Set informational message
    pub fn set_info(&mut self, message: String) {
        self.ui.status_message = Some((message, false));
    }

    /// Clear status message
    pub fn clear_status(&mut self) {
        self.ui.status_message = None;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_with_config_applies_theme() {
        let mut config = Config::default();
        config.general.theme = "light".to_string();
        let theme = Theme::get_by_name(&config.general.theme);
        let state = AppState::with_config_and_theme(config, theme);
        assert_eq!(state.theme.name, "light");
        assert_eq!(state.player_emoji, "🙂");
        assert!(state.needs_redraw);
        assert!(!state.should_quit);
    }

    #[test]
    fn test_set_theme_updates_config() {
        let config = Config::default();
        let theme = Theme::get_by_name(&config.general.theme);
        let mut state = AppState::with_config_and_theme(config, theme);

        state.set_theme("light");
        assert_eq!(state.theme.name, "light");
        assert_eq!(state.config.general.theme, "light");
    }

    #[test]
    fn test_resize_recalculates_layout() {
        let config = Config::default();
        let theme = Theme::get_by_name(&config.general.theme);
        let mut state = AppState::with_config_and_theme(config, theme);

        state.update_terminal_size(200, 50);
        assert_eq!(state.layout_info.mode, LayoutMode::Full);
        assert_eq!(state.terminal.width, 200);

        state.update_terminal_size(80, 24);
        assert_eq!(state.layout_info.mode, LayoutMode::Medium);

        state.update_terminal_size(40, 24);
        assert_eq!(state.layout_info.mode, LayoutMode::Compact);
    }

    #[test]
    fn test_status_helpers() {
        let config = Config::default();
        let theme = Theme::get_by_name(&config.general.theme);
        let mut state = AppState::with_config_and_theme(config, theme);

        state.set_error("bad".to_string());
        assert_eq!(state.ui.status_message, Some(("bad".to_string(), true)));
        state.set_info("ok".to_string());
        assert_eq!(state.ui.status_message, Some(("ok".to_string(), false)));
        state.clear_status();
        assert!(state.ui.status_message.is_none());
    }
}
