//! Game operations triggered from panels and hotkeys, and the glue
//! that pushes game state back into the panels and the visibility
//! controller.

use wordsquad_game::{format_half_points, GuessRejection};
use wordsquad_layout::PanelContent;
use wordsquad_logger as logger;
use wordsquad_panels::ScoreRow;
use wordsquad_state::FocusTarget;
use wordsquad_theme::Theme;

use super::App;

/// Content presence answered straight from the game session.
pub(super) struct GameContent<'a> {
    pub game: &'a wordsquad_game::Game,
}

impl PanelContent for GameContent<'_> {
    fn has_history_content(&self) -> bool {
        !self.game.past_games().is_empty()
    }

    fn has_definition_content(&self) -> bool {
        self.game
            .last_definition()
            .is_some_and(|(_, text)| !text.trim().is_empty())
    }
}

impl App {
    /// Submit a typed word as a guess and report the outcome in the
    /// status bar.
    pub(crate) fn submit_guess(&mut self, word: &str) {
        let outcome = match self.game.submit_guess(&self.state.player_emoji, word) {
            Ok(outcome) => outcome,
            Err(rejection) => {
                let message = match &rejection {
                    GuessRejection::GameOver {
                        close_call: Some(cc),
                    } => format!(
                        "So close! {} beat you by {:.1}s.",
                        cc.winner,
                        cc.delta_ms as f64 / 1000.0
                    ),
                    _ => rejection.message(),
                };
                self.state.set_error(message);
                return;
            }
        };

        self.panels.board.clear_typed();
        let guess = word.trim().to_uppercase();
        let points = format_half_points(outcome.points);

        if outcome.won {
            let target = self.game.state().target_word.to_uppercase();
            self.state
                .set_info(format!("{}! Solved for {} points.", guess, points));
            self.game.announce(&format!(
                "{} solved {} for {} points!",
                self.state.player_emoji, target, points
            ));
        } else if outcome.over {
            let target = self.game.state().target_word.to_uppercase();
            self.state
                .set_info(format!("Out of rows. The word was {}.", target));
            self.game.announce(&format!("The word was {}.", target));
        } else if outcome.daily_double.is_some() {
            self.state
                .set_info("Daily double! Press 1-5 to pick a column.".to_string());
            self.game
                .announce(&format!("{} hit the daily double!", self.state.player_emoji));
        } else {
            self.state.set_info(format!("{}: {} points.", guess, points));
        }

        logger::info(format!("Guess {} scored {} points", guess, points));
        self.save_state();
        self.sync_panels();
        self.refresh_visibility();
    }

    /// Redeem a pending daily double hint at the given column.
    pub(crate) fn select_hint(&mut self, col: usize) {
        match self.game.select_hint(&self.state.player_emoji, col) {
            Ok(reveal) => {
                self.state.set_info(format!(
                    "Hint: column {} is {}.",
                    reveal.col + 1,
                    reveal.letter.to_ascii_uppercase()
                ));
                self.save_state();
                self.sync_panels();
            }
            Err(rejection) => self.state.set_error(rejection.message()),
        }
    }

    /// Send a chat line typed in the chat panel. The input is only
    /// cleared when the game accepts the message, so a rate-limited
    /// line survives for a retry.
    pub(crate) fn send_chat(&mut self, text: &str) {
        match self.game.send_chat(&self.state.player_emoji, text) {
            Ok(()) => {
                if let Some(chat) = self.panels.chat_mut() {
                    chat.clear_input();
                }
                self.save_state();
                self.sync_panels();
                self.refresh_visibility();
            }
            Err(rejection) => self.state.set_error(rejection.message()),
        }
    }

    /// Archive the finished round and deal a new word.
    pub(crate) fn new_game(&mut self) {
        match self.game.reset() {
            Ok(()) => {
                self.game.announce("New round started.");
                self.state.set_info("New round started.".to_string());
                logger::info("New round started");
                self.save_state();
                self.sync_panels();
                self.refresh_visibility();
            }
            Err(e) => {
                self.state
                    .set_error(format!("Could not start a new round: {}", e));
                logger::error(format!("Failed to reset game: {}", e));
            }
        }
    }

    /// Flip hard mode for the session and persist the choice.
    pub(crate) fn toggle_hard_mode(&mut self) {
        let on = !self.game.hard_mode();
        self.game.set_hard_mode(on);
        let label = if on { "on" } else { "off" };
        self.game.announce(&format!("Hard mode is now {}.", label));
        self.state.set_info(format!("Hard mode {}.", label));

        self.state.config.game.hard_mode = on;
        if let Err(e) = self.state.config.save() {
            logger::warn(format!("Failed to save config: {}", e));
        }
        self.save_state();
        self.sync_panels();
    }

    /// Switch to the next theme in the rotation and persist it.
    pub(crate) fn cycle_theme(&mut self) {
        let next = Theme::next_theme_name(self.state.theme.name);
        self.state.set_theme(next);
        if let Err(e) = self.state.config.save() {
            logger::warn(format!("Failed to save config: {}", e));
        }
        self.state.set_info(format!("Theme: {}", next));
    }

    /// Write the current session snapshot to disk. Failures are
    /// logged and never interrupt play.
    pub(crate) fn save_state(&mut self) {
        let snapshot = self.game.snapshot();
        if let Err(e) = wordsquad_game::save_to(&self.state_path, &snapshot) {
            logger::warn(format!("Failed to auto-save game state: {}", e));
        }
    }

    /// Push current game state into every panel.
    pub(crate) fn sync_panels(&mut self) {
        let scores: Vec<ScoreRow> = self
            .game
            .leaderboard()
            .sorted()
            .into_iter()
            .map(|(emoji, stats)| ScoreRow {
                emoji: emoji.to_string(),
                half_points: stats.score,
            })
            .collect();

        let game = &self.game;
        let panels = &mut self.panels;

        panels.board.sync(game, &self.state.player_emoji);
        if let Some(history) = panels.history_mut() {
            history.set_games(game.past_games());
        }
        if let Some(definition) = panels.definition_mut() {
            match game.last_definition() {
                Some((word, text)) => definition.set_definition(word, text),
                None => definition.set_definition("", ""),
            }
        }
        if let Some(chat) = panels.chat_mut() {
            chat.set_messages(game.chat().to_vec());
        }
        if let Some(info) = panels.info_mut() {
            info.sync(
                scores,
                &self.state.player_emoji,
                game.hard_mode(),
                self.state.config.game.daily_double,
            );
        }
    }

    /// Re-derive content-driven visibility and keep focus off any
    /// panel the pass hid or zeroed out.
    pub(crate) fn refresh_visibility(&mut self) {
        let area = self.main_area();
        let content = GameContent { game: &self.game };
        self.controller.update_panel_visibility(area, &content);

        if let Some(panel) = self.state.ui.focused_side_panel() {
            if !self.controller.is_visible(panel) || self.controller.panel_rect(panel).area() == 0 {
                self.state.ui.focus = FocusTarget::Board;
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::super::tests::test_app;
    use wordsquad_core::{Panel, SidePanel};

    #[test]
    fn test_rejected_guess_sets_error() {
        let mut app = test_app();
        app.submit_guess("zzzzz");
        assert_eq!(
            app.state.ui.status_message,
            Some(("Not a valid 5-letter word.".to_string(), true))
        );
        assert!(app.game.state().guesses.is_empty());
    }

    #[test]
    fn test_accepted_guess_lands_on_board() {
        let mut app = test_app();
        for c in "crane".chars() {
            app.panels
                .board
                .handle_key(crossterm::event::KeyEvent::new(
                    crossterm::event::KeyCode::Char(c),
                    crossterm::event::KeyModifiers::empty(),
                ));
        }
        app.submit_guess("crane");

        assert_eq!(app.game.state().guesses.len(), 1);
        assert_eq!(app.panels.board.typed(), "");
        let (_, is_error) = app.state.ui.status_message.clone().unwrap();
        assert!(!is_error);
        let _ = std::fs::remove_file(&app.state_path);
    }

    #[test]
    fn test_chat_message_appends_and_clears_input() {
        let mut app = test_app();
        app.send_chat("hello there");
        assert_eq!(app.game.chat().len(), 1);

        let messages = app.game.chat().to_vec();
        assert_eq!(messages[0].text, "hello there");
        assert!(!messages[0].system);
        let _ = std::fs::remove_file(&app.state_path);
    }

    #[test]
    fn test_empty_chat_rejected() {
        let mut app = test_app();
        app.send_chat("   ");
        assert_eq!(
            app.state.ui.status_message,
            Some(("Empty message.".to_string(), true))
        );
        assert!(app.game.chat().is_empty());
    }

    #[test]
    fn test_new_game_announces_in_chat() {
        let mut app = test_app();
        app.new_game();

        let messages = app.game.chat().to_vec();
        assert!(messages.iter().any(|m| m.system && m.text == "New round started."));
        assert_eq!(
            app.state.ui.status_message,
            Some(("New round started.".to_string(), false))
        );
        let _ = std::fs::remove_file(&app.state_path);
    }

    #[test]
    fn test_toggle_hard_mode_updates_game_and_config() {
        let mut app = test_app();
        assert!(!app.game.hard_mode());

        app.toggle_hard_mode();
        assert!(app.game.hard_mode());
        assert!(app.state.config.game.hard_mode);
        assert_eq!(
            app.state.ui.status_message,
            Some(("Hard mode on.".to_string(), false))
        );
        let _ = std::fs::remove_file(&app.state_path);
    }

    #[test]
    fn test_cycle_theme_rotates() {
        let mut app = test_app();
        let before = app.state.theme.name;
        app.cycle_theme();
        assert_ne!(app.state.theme.name, before);
    }

    #[test]
    fn test_sync_panels_fills_info_scores() {
        let mut app = test_app();
        app.sync_panels();
        // The local player is registered at startup, so the
        // leaderboard is never empty.
        assert!(!app.game.leaderboard().is_empty());
    }

    #[test]
    fn test_fresh_game_hides_content_panels() {
        let mut app = test_app();
        app.refresh_visibility();
        assert!(!app.controller.is_visible(SidePanel::History));
        assert!(!app.controller.is_visible(SidePanel::Definition));
    }

    #[test]
    fn test_selected_hint_without_daily_double_is_rejected() {
        let mut app = test_app();
        app.select_hint(2);
        assert_eq!(
            app.state.ui.status_message,
            Some(("No hint available.".to_string(), true))
        );
    }
}
