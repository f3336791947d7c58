//! Main keyboard event handling for the application.
//!
//! Dispatches key events to global hotkeys, focus movement, or the
//! focused panel.

use anyhow::Result;
use crossterm::event::{KeyCode, KeyEvent};

use wordsquad_core::{Panel, SidePanel};
use wordsquad_logger as logger;
use wordsquad_state::FocusTarget;

use super::App;
use crate::hotkeys::{translate_hotkey, HotkeyProcessor};

impl App {
    /// Handle keyboard event
    pub(super) fn handle_key_event(&mut self, key: KeyEvent) -> Result<()> {
        // Translate Cyrillic to Latin for hotkeys
        let key = translate_hotkey(key);

        // Log key event for debugging
        logger::debug(format!(
            "Key event: code={:?}, modifiers={:?}",
            key.code, key.modifiers
        ));

        // Clear status message on any key press
        if self.state.ui.status_message.is_some() {
            self.state.clear_status();
        }

        // Handle global hotkeys
        if let Some(action) = self.hotkey_processor.process_hotkey(&key) {
            self.execute_hotkey(action);
            return Ok(());
        }

        // Tab cycles focus between the board and the visible panels
        if key.code == KeyCode::Tab && key.modifiers.is_empty() {
            self.focus_next();
            return Ok(());
        }

        // Escape closes the focused side panel unless the panel
        // consumes the key itself, e.g. to clear a typed chat line
        if let FocusTarget::Side(panel) = self.state.ui.focus {
            let captures = self
                .panels
                .side(panel)
                .map(|p| p.captures_escape())
                .unwrap_or(false);
            if self.hotkey_processor.should_escape_close(&key, captures) {
                self.close_side_panel(panel);
                return Ok(());
            }
        }

        // Pass event to the focused panel and collect results
        let events = match self.state.ui.focus {
            FocusTarget::Board => self.panels.board.handle_key(key),
            FocusTarget::Side(panel) => self
                .panels
                .side_mut(panel)
                .map(|p| p.handle_key(key))
                .unwrap_or_default(),
        };

        self.process_panel_events(events);

        Ok(())
    }

    /// Move focus to the next drawn target, board first.
    pub(super) fn focus_next(&mut self) {
        let visible: Vec<SidePanel> = SidePanel::ALL
            .into_iter()
            .filter(|panel| {
                self.controller.is_visible(*panel) && self.controller.panel_rect(*panel).area() > 0
            })
            .collect();

        self.state.ui.focus = match self.state.ui.focus {
            FocusTarget::Board => match visible.first() {
                Some(panel) => FocusTarget::Side(*panel),
                None => FocusTarget::Board,
            },
            FocusTarget::Side(current) => match visible.iter().position(|p| *p == current) {
                Some(idx) if idx + 1 < visible.len() => FocusTarget::Side(visible[idx + 1]),
                _ => FocusTarget::Board,
            },
        };
    }

    /// Close a side panel through its own toggle so the manual flags
    /// stay consistent with what the player sees.
    pub(crate) fn close_side_panel(&mut self, panel: SidePanel) {
        match panel {
            SidePanel::History => self.toggle_history_panel(),
            SidePanel::Definition => self.toggle_definition_panel(),
            _ => self.toggle_side_panel(panel),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::super::tests::test_app;
    use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
    use wordsquad_core::SidePanel;
    use wordsquad_state::FocusTarget;

    fn plain(code: KeyCode) -> KeyEvent {
        KeyEvent::new(code, KeyModifiers::empty())
    }

    fn alt(c: char) -> KeyEvent {
        KeyEvent::new(KeyCode::Char(c), KeyModifiers::ALT)
    }

    #[test]
    fn test_alt_hotkey_opens_info_and_focuses_it() {
        let mut app = test_app();
        app.handle_key_event(alt('i')).unwrap();
        assert!(app.controller.is_visible(SidePanel::Info));
        assert_eq!(app.state.ui.focus, FocusTarget::Side(SidePanel::Info));
    }

    #[test]
    fn test_tab_cycles_board_and_visible_panels() {
        let mut app = test_app();
        app.handle_key_event(alt('i')).unwrap();
        app.handle_key_event(alt('c')).unwrap();
        // Focus followed the last opened panel; Tab walks the cycle
        // board -> chat -> info -> board.
        app.state.ui.focus = FocusTarget::Board;

        app.handle_key_event(plain(KeyCode::Tab)).unwrap();
        assert_eq!(app.state.ui.focus, FocusTarget::Side(SidePanel::Chat));
        app.handle_key_event(plain(KeyCode::Tab)).unwrap();
        assert_eq!(app.state.ui.focus, FocusTarget::Side(SidePanel::Info));
        app.handle_key_event(plain(KeyCode::Tab)).unwrap();
        assert_eq!(app.state.ui.focus, FocusTarget::Board);
    }

    #[test]
    fn test_tab_with_no_panels_keeps_board_focus() {
        let mut app = test_app();
        app.handle_key_event(plain(KeyCode::Tab)).unwrap();
        assert_eq!(app.state.ui.focus, FocusTarget::Board);
    }

    #[test]
    fn test_escape_closes_focused_panel() {
        let mut app = test_app();
        app.handle_key_event(alt('i')).unwrap();
        assert_eq!(app.state.ui.focus, FocusTarget::Side(SidePanel::Info));

        app.handle_key_event(plain(KeyCode::Esc)).unwrap();
        assert!(!app.controller.is_visible(SidePanel::Info));
        assert_eq!(app.state.ui.focus, FocusTarget::Board);
    }

    #[test]
    fn test_escape_clears_chat_input_before_closing() {
        let mut app = test_app();
        app.handle_key_event(alt('c')).unwrap();
        app.handle_key_event(plain(KeyCode::Char('h'))).unwrap();
        app.handle_key_event(plain(KeyCode::Char('i'))).unwrap();
        assert_eq!(app.panels.chat_mut().unwrap().input_text(), "hi");

        // First escape is consumed by the input, second closes.
        app.handle_key_event(plain(KeyCode::Esc)).unwrap();
        assert!(app.controller.is_visible(SidePanel::Chat));
        assert_eq!(app.panels.chat_mut().unwrap().input_text(), "");

        app.handle_key_event(plain(KeyCode::Esc)).unwrap();
        assert!(!app.controller.is_visible(SidePanel::Chat));
    }

    #[test]
    fn test_typing_reaches_board() {
        let mut app = test_app();
        for c in "crane".chars() {
            app.handle_key_event(plain(KeyCode::Char(c))).unwrap();
        }
        assert_eq!(app.panels.board.typed(), "crane");
    }

    #[test]
    fn test_any_key_clears_status() {
        let mut app = test_app();
        app.state.set_error("bad".to_string());
        app.handle_key_event(plain(KeyCode::Char('x'))).unwrap();
        assert!(app.state.ui.status_message.is_none());
    }

    #[test]
    fn test_translated_hotkey_toggles_panel() {
        let mut app = test_app();
        // Alt+р maps to Alt+h on a Cyrillic layout.
        app.handle_key_event(KeyEvent::new(KeyCode::Char('р'), KeyModifiers::ALT))
            .unwrap();
        assert!(app.controller.is_visible(SidePanel::History));
    }
}
