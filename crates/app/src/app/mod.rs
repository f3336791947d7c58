//! Main application module.
//!
//! Owns the game session, the panels and the visibility controller,
//! and runs the event loop that ties them together.

use anyhow::Result;
use ratatui::{backend::Backend, layout::Rect, Terminal};
use std::path::PathBuf;
use std::str::FromStr;
use std::time::Duration;

use wordsquad_core::event::{Event, EventHandler};
use wordsquad_game::Game;
use wordsquad_layout::VisibilityController;
use wordsquad_state::LayoutMode;

use crate::hotkeys::DefaultHotkeyProcessor;
use crate::registry::PanelRegistry;
use crate::state::AppState;

mod game_ops;
mod global_hotkeys;
mod key_handler;

/// Main application
pub struct App {
    state: AppState,
    game: Game,
    controller: VisibilityController,
    panels: PanelRegistry,
    event_handler: EventHandler,
    /// Global hotkey processor
    hotkey_processor: DefaultHotkeyProcessor,
    /// Where game state is persisted between runs
    state_path: PathBuf,
}

impl App {
    /// Create a new application
    pub fn new() -> Result<Self> {
        let mut state = AppState::new();

        // Initialize logger before anything that logs.
        // Use config override if specified, otherwise the data directory.
        let log_file_path = if let Some(ref path) = state.config.logging.file_path {
            PathBuf::from(path)
        } else {
            wordsquad_config::get_data_dir()
                .map(|dir| dir.join("logs").join("wordsquad.log"))
                .unwrap_or_else(|_| std::env::temp_dir().join("wordsquad.log"))
        };
        let min_log_level = wordsquad_logger::LogLevel::from_str(&state.config.logging.min_level)
            .ok()
            .unwrap_or(wordsquad_logger::LogLevel::Info);
        wordsquad_logger::init(
            log_file_path,
            wordsquad_config::constants::MAX_LOG_ENTRIES,
            min_log_level,
        );
        wordsquad_logger::info("Application started");

        let state_path = wordsquad_game::state_file_path()?;
        let mut game = match wordsquad_game::load_from(&state_path) {
            Some(saved) => {
                wordsquad_logger::info("Restored saved game state");
                Game::from_saved(&state.config, saved)?
            }
            None => Game::new(&state.config)?,
        };
        state.player_emoji = game.register_player(&state.config.general.player_emoji);

        let panels = PanelRegistry::new(state.config.chat.max_message_len);

        let mut app = Self {
            state,
            game,
            controller: VisibilityController::new(),
            panels,
            event_handler: EventHandler::new(Duration::from_millis(
                wordsquad_config::constants::EVENT_HANDLER_INTERVAL_MS,
            )),
            hotkey_processor: DefaultHotkeyProcessor::new(),
            state_path,
        };
        app.sync_panels();
        app.refresh_visibility();
        Ok(app)
    }

    /// Create a new application with specified terminal size
    /// This is useful during initialization to set proper terminal dimensions
    /// before the first visibility pass
    pub fn new_with_size(width: u16, height: u16) -> Result<Self> {
        let mut app = Self::new()?;
        app.state.update_terminal_size(width, height);
        app.handle_resize();
        Ok(app)
    }

    /// Run the main application loop
    pub fn run<B: Backend>(
        &mut self,
        terminal: &mut Terminal<B>,
        render_fn: impl Fn(
            &mut ratatui::Frame<'_>,
            &mut AppState,
            &mut PanelRegistry,
            &VisibilityController,
            &Game,
        ),
    ) -> Result<()> {
        // Initialize terminal dimensions
        let size = terminal.size()?;
        self.state.update_terminal_size(size.width, size.height);
        self.handle_resize();

        while !self.state.should_quit {
            // Process events
            match self.event_handler.next()? {
                Event::Key(key) => {
                    self.handle_key_event(key)?;
                    self.state.needs_redraw = true;
                }
                Event::Resize(width, height) => {
                    // Update terminal dimensions in state
                    self.state.update_terminal_size(width, height);
                    self.handle_resize();
                    self.state.needs_redraw = true;
                }
                Event::FocusGained => {
                    // Redraw on focus gain to refresh display
                    self.state.needs_redraw = true;
                }
                Event::FocusLost => {}
                Event::Tick => {}
            }

            // Render UI only when needed (reduces idle CPU from 24fps to near-zero)
            if self.state.needs_redraw {
                terminal.draw(|frame| {
                    render_fn(
                        frame,
                        &mut self.state,
                        &mut self.panels,
                        &self.controller,
                        &self.game,
                    );
                })?;
                self.state.needs_redraw = false;
            }
        }

        Ok(())
    }

    /// The region between the header line and the status bar.
    pub fn main_area(&self) -> Rect {
        let width = self.state.terminal.width;
        let height = self.state.terminal.height;
        Rect::new(0, 1, width, height.saturating_sub(2))
    }

    /// Recompute visibility and geometry for the current terminal size.
    fn handle_resize(&mut self) {
        let area = self.main_area();

        // Overlay layouts show one panel at a time. When shrinking out
        // of the full layout leaves several panels visible, keep the
        // focused one and close the rest.
        if self.state.layout_info.mode == LayoutMode::Medium {
            let visible: Vec<_> = wordsquad_core::SidePanel::ALL
                .into_iter()
                .filter(|panel| self.controller.is_visible(*panel))
                .collect();
            if visible.len() > 1 {
                let keep = self
                    .state
                    .ui
                    .focused_side_panel()
                    .filter(|panel| visible.contains(panel))
                    .unwrap_or(visible[0]);
                // Close then reopen: the medium toggle hides every
                // other panel before showing the requested one.
                self.controller
                    .toggle_panel(keep, LayoutMode::Medium, area);
                self.controller
                    .toggle_panel(keep, LayoutMode::Medium, area);
            }
        }

        // In narrow layouts the visibility pass below does not run,
        // so rects must be recomputed here or they go stale.
        self.controller.position_side_panels(area);
        self.controller.update_chat_panel_position(area);
        self.refresh_visibility();
    }

    /// Handle events emitted by panels
    pub(crate) fn process_panel_events(&mut self, events: Vec<wordsquad_core::PanelEvent>) {
        use wordsquad_core::PanelEvent;

        for event in events {
            match event {
                PanelEvent::NeedsRedraw => {
                    self.state.needs_redraw = true;
                }
                PanelEvent::Quit => {
                    self.quit();
                }
                PanelEvent::SubmitGuess(word) => {
                    self.submit_guess(&word);
                }
                PanelEvent::SelectHintColumn(col) => {
                    self.select_hint(col);
                }
                PanelEvent::SendChat(text) => {
                    self.send_chat(&text);
                }
                PanelEvent::NewGame => {
                    self.new_game();
                }
                PanelEvent::ClosePanel => {
                    if let Some(panel) = self.state.ui.focused_side_panel() {
                        self.close_side_panel(panel);
                    }
                }
                PanelEvent::SetStatusMessage { message, is_error } => {
                    if is_error {
                        self.state.set_error(message);
                    } else {
                        self.state.set_info(message);
                    }
                }
                PanelEvent::ClearStatus => {
                    self.state.clear_status();
                }
            }
        }
    }

    /// Save state and stop the event loop.
    pub fn quit(&mut self) {
        self.save_state();
        wordsquad_logger::info("Application quit requested");
        self.state.quit();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use wordsquad_config::Config;
    use wordsquad_core::SidePanel;
    use wordsquad_state::FocusTarget;

    /// Build an app around a fresh in-memory game, skipping config and
    /// state files on disk. The terminal is wide enough for the full
    /// layout unless a test resizes it.
    pub(super) fn test_app() -> App {
        let mut config = Config::default();
        config.game.daily_double = false;
        let theme = wordsquad_theme::Theme::get_by_name(&config.general.theme);
        let mut state = AppState::with_config_and_theme(config.clone(), theme);
        let mut game = Game::new(&config).expect("game should build from defaults");
        state.player_emoji = game.register_player(&config.general.player_emoji);
        let panels = PanelRegistry::new(config.chat.max_message_len);
        let mut app = App {
            state,
            game,
            controller: VisibilityController::new(),
            panels,
            event_handler: EventHandler::new(Duration::from_millis(
                wordsquad_config::constants::EVENT_HANDLER_INTERVAL_MS,
            )),
            hotkey_processor: DefaultHotkeyProcessor::new(),
            state_path: std::env::temp_dir().join("wordsquad-test-state.toml"),
        };
        app.state.update_terminal_size(200, 50);
        app.sync_panels();
        app.refresh_visibility();
        app
    }

    #[test]
    fn test_main_area_excludes_header_and_status() {
        let app = test_app();
        let area = app.main_area();
        assert_eq!(area, Rect::new(0, 1, 200, 48));
    }

    #[test]
    fn test_panel_event_sets_status() {
        let mut app = test_app();
        app.process_panel_events(vec![wordsquad_core::PanelEvent::SetStatusMessage {
            message: "hello".into(),
            is_error: false,
        }]);
        assert_eq!(
            app.state.ui.status_message,
            Some(("hello".to_string(), false))
        );

        app.process_panel_events(vec![wordsquad_core::PanelEvent::ClearStatus]);
        assert!(app.state.ui.status_message.is_none());
    }

    #[test]
    fn test_panel_event_quit() {
        let mut app = test_app();
        app.process_panel_events(vec![wordsquad_core::PanelEvent::Quit]);
        assert!(app.state.should_quit);
        let _ = std::fs::remove_file(&app.state_path);
    }

    #[test]
    fn test_shrink_to_medium_collapses_to_one_panel() {
        let mut app = test_app();
        let area = app.main_area();

        // Open chat and info in the full layout.
        app.controller
            .toggle_panel(SidePanel::Chat, app.state.layout_info.mode, area);
        app.controller
            .toggle_panel(SidePanel::Info, app.state.layout_info.mode, area);
        app.state.ui.focus = FocusTarget::Side(SidePanel::Chat);

        app.state.update_terminal_size(80, 24);
        app.handle_resize();

        assert!(app.controller.is_visible(SidePanel::Chat));
        assert!(!app.controller.is_visible(SidePanel::Info));
        assert_eq!(app.state.ui.focus, FocusTarget::Side(SidePanel::Chat));
    }

    #[test]
    fn test_shrink_to_compact_returns_focus_to_board() {
        let mut app = test_app();
        let area = app.main_area();
        app.controller
            .toggle_panel(SidePanel::Info, app.state.layout_info.mode, area);
        app.state.ui.focus = FocusTarget::Side(SidePanel::Info);

        app.state.update_terminal_size(40, 20);
        app.handle_resize();

        assert_eq!(app.state.ui.focus, FocusTarget::Board);
    }
}
