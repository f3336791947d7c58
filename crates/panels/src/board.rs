//! Game board panel: tile grid, typed input row, and round status.

use std::any::Any;

use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use ratatui::{
    buffer::Buffer,
    layout::{Alignment, Rect},
    prelude::Widget,
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::Paragraph,
};

use wordsquad_core::{Panel, PanelEvent, RenderContext};
use wordsquad_game::{Game, GuessRow, LetterResult, MAX_ROWS, WORD_LENGTH};

/// The shared board. Letters type into the pending row; Enter submits.
pub struct BoardPanel {
    /// Letters typed so far for the pending guess
    typed: String,
    rows: Vec<GuessRow>,
    over: bool,
    winner: Option<String>,
    revealed_word: Option<String>,
    /// Cells revealed by redeemed hints, (row, col, letter)
    hint_cells: Vec<(usize, usize, char)>,
    /// Daily double tile, shown once the local player has hit it
    dd_marker: Option<(usize, usize)>,
    /// Local player holds an unredeemed hint
    hint_pending: bool,
}

impl BoardPanel {
    pub fn new() -> Self {
        Self {
            typed: String::new(),
            rows: Vec::new(),
            over: false,
            winner: None,
            revealed_word: None,
            hint_cells: Vec::new(),
            dd_marker: None,
            hint_pending: false,
        }
    }

    /// Pull the board's display state from the game.
    pub fn sync(&mut self, game: &Game, my_emoji: &str) {
        let state = game.state();
        self.rows = state.guesses.clone();
        self.over = state.is_over;
        self.winner = state.winner.clone();
        self.revealed_word = if state.is_over {
            Some(state.target_word.clone())
        } else {
            None
        };
        self.hint_cells = state
            .hint_cells
            .iter()
            .map(|(&(row, col), &letter)| (row, col, letter))
            .collect();
        self.dd_marker = if game.daily_double().hit_by(my_emoji) {
            game.daily_double().tile()
        } else {
            None
        };
        self.hint_pending = game.has_pending_hint(my_emoji);
        if self.over {
            self.typed.clear();
        }
    }

    /// Drop the typed letters (called after an accepted guess).
    pub fn clear_typed(&mut self) {
        self.typed.clear();
    }

    pub fn typed(&self) -> &str {
        &self.typed
    }

    fn hint_letter(&self, row: usize, col: usize) -> Option<char> {
        self.hint_cells
            .iter()
            .find(|&&(r, c, _)| r == row && c == col)
            .map(|&(_, _, letter)| letter)
    }

    fn tile_line(&self, row: usize, ctx: &RenderContext) -> Line<'static> {
        let theme = ctx.theme;
        let mut spans = Vec::with_capacity(WORD_LENGTH * 2);

        for col in 0..WORD_LENGTH {
            if col > 0 {
                spans.push(Span::raw(" "));
            }

            let span = if let Some(guess) = self.rows.get(row) {
                let letter = guess.word.chars().nth(col).unwrap_or(' ');
                let text = format!(" {} ", letter.to_ascii_uppercase());
                let bg = if self.dd_marker == Some((row, col)) {
                    theme.warning
                } else {
                    match guess.result[col] {
                        LetterResult::Correct => theme.tile_correct,
                        LetterResult::Present => theme.tile_present,
                        LetterResult::Absent => theme.tile_absent,
                    }
                };
                Span::styled(
                    text,
                    Style::default()
                        .fg(theme.bg)
                        .bg(bg)
                        .add_modifier(Modifier::BOLD),
                )
            } else if row == self.rows.len() && !self.over {
                // Pending input row
                match self.typed.chars().nth(col) {
                    Some(letter) => Span::styled(
                        format!(" {} ", letter.to_ascii_uppercase()),
                        Style::default()
                            .fg(theme.fg)
                            .bg(theme.accented_bg)
                            .add_modifier(Modifier::BOLD),
                    ),
                    None => Span::styled(" _ ", Style::default().fg(theme.disabled)),
                }
            } else if let Some(letter) = self.hint_letter(row, col) {
                Span::styled(
                    format!(" {} ", letter.to_ascii_uppercase()),
                    Style::default()
                        .fg(theme.disabled)
                        .add_modifier(Modifier::ITALIC),
                )
            } else {
                Span::styled(" · ", Style::default().fg(theme.disabled))
            };
            spans.push(span);
        }

        Line::from(spans)
    }

    fn status_lines(&self, ctx: &RenderContext) -> Vec<Line<'static>> {
        let theme = ctx.theme;
        let mut lines = Vec::new();

        if self.over {
            let text = match (&self.winner, &self.revealed_word) {
                (Some(winner), Some(word)) => {
                    format!("{} solved {}!", winner, word.to_uppercase())
                }
                (None, Some(word)) => format!("Out of rows. It was {}.", word.to_uppercase()),
                _ => String::new(),
            };
            if !text.is_empty() {
                lines.push(Line::from(Span::styled(
                    text,
                    Style::default()
                        .fg(theme.accented_fg)
                        .add_modifier(Modifier::BOLD),
                )));
            }
            lines.push(Line::from(Span::styled(
                "Alt+N starts the next round",
                Style::default().fg(theme.disabled),
            )));
        } else if self.hint_pending {
            lines.push(Line::from(Span::styled(
                "Hint ready: press 1-5 to reveal that column",
                Style::default()
                    .fg(theme.warning)
                    .add_modifier(Modifier::BOLD),
            )));
        }

        lines
    }
}

impl Panel for BoardPanel {
    fn name(&self) -> &'static str {
        "board"
    }

    fn title(&self) -> String {
        "Board".to_string()
    }

    fn render(&mut self, area: Rect, buf: &mut Buffer, ctx: &RenderContext) {
        let mut lines = Vec::new();

        for row in 0..MAX_ROWS {
            if row > 0 {
                lines.push(Line::default());
            }
            lines.push(self.tile_line(row, ctx));
        }

        let status = self.status_lines(ctx);
        if !status.is_empty() {
            lines.push(Line::default());
            lines.extend(status);
        }

        // Center the grid vertically when there is room
        let content_height = lines.len() as u16;
        let mut target = area;
        if area.height > content_height {
            let top = (area.height - content_height) / 2;
            target = Rect::new(area.x, area.y + top, area.width, area.height - top);
        }

        Paragraph::new(lines)
            .alignment(Alignment::Center)
            .render(target, buf);
    }

    fn handle_key(&mut self, key: KeyEvent) -> Vec<PanelEvent> {
        if key
            .modifiers
            .intersects(KeyModifiers::CONTROL | KeyModifiers::ALT)
        {
            return vec![];
        }

        match key.code {
            KeyCode::Char(c) if ('1'..='5').contains(&c) && self.hint_pending => {
                vec![PanelEvent::SelectHintColumn(c as usize - '1' as usize)]
            }
            KeyCode::Char(c) if c.is_ascii_alphabetic() => {
                if !self.over && self.typed.chars().count() < WORD_LENGTH {
                    self.typed.push(c.to_ascii_lowercase());
                    return vec![PanelEvent::NeedsRedraw];
                }
                vec![]
            }
            KeyCode::Backspace => {
                if self.typed.pop().is_some() {
                    return vec![PanelEvent::NeedsRedraw];
                }
                vec![]
            }
            KeyCode::Enter => {
                if self.over {
                    return vec![PanelEvent::SetStatusMessage {
                        message: "Round is over. Alt+N starts a new one.".to_string(),
                        is_error: false,
                    }];
                }
                if self.typed.chars().count() < WORD_LENGTH {
                    return vec![PanelEvent::SetStatusMessage {
                        message: "Not enough letters.".to_string(),
                        is_error: true,
                    }];
                }
                vec![PanelEvent::SubmitGuess(self.typed.clone())]
            }
            _ => vec![],
        }
    }

    fn as_any(&self) -> &dyn Any {
        self
    }

    fn as_any_mut(&mut self) -> &mut dyn Any {
        self
    }
}

impl Default for BoardPanel {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crossterm::event::KeyEvent;

    fn key(code: KeyCode) -> KeyEvent {
        KeyEvent::new(code, KeyModifiers::NONE)
    }

    fn type_word(panel: &mut BoardPanel, word: &str) {
        for c in word.chars() {
            panel.handle_key(key(KeyCode::Char(c)));
        }
    }

    #[test]
    fn test_typing_caps_at_word_length() {
        let mut panel = BoardPanel::new();
        type_word(&mut panel, "cranes");
        assert_eq!(panel.typed(), "crane");
    }

    #[test]
    fn test_uppercase_input_lowercased() {
        let mut panel = BoardPanel::new();
        panel.handle_key(KeyEvent::new(KeyCode::Char('A'), KeyModifiers::SHIFT));
        assert_eq!(panel.typed(), "a");
    }

    #[test]
    fn test_enter_submits_full_word() {
        let mut panel = BoardPanel::new();
        type_word(&mut panel, "crane");
        let events = panel.handle_key(key(KeyCode::Enter));
        assert!(matches!(
            events.as_slice(),
            [PanelEvent::SubmitGuess(word)] if word == "crane"
        ));
    }

    #[test]
    fn test_enter_on_short_word_reports_error() {
        let mut panel = BoardPanel::new();
        type_word(&mut panel, "cat");
        let events = panel.handle_key(key(KeyCode::Enter));
        assert!(matches!(
            events.as_slice(),
            [PanelEvent::SetStatusMessage { is_error: true, .. }]
        ));
    }

    #[test]
    fn test_backspace_removes_letter() {
        let mut panel = BoardPanel::new();
        type_word(&mut panel, "cr");
        panel.handle_key(key(KeyCode::Backspace));
        assert_eq!(panel.typed(), "c");
    }

    #[test]
    fn test_digits_pick_hint_column_only_when_pending() {
        let mut panel = BoardPanel::new();
        assert!(panel.handle_key(key(KeyCode::Char('3'))).is_empty());

        panel.hint_pending = true;
        let events = panel.handle_key(key(KeyCode::Char('3')));
        assert!(matches!(
            events.as_slice(),
            [PanelEvent::SelectHintColumn(2)]
        ));
        assert!(panel.handle_key(key(KeyCode::Char('0'))).is_empty());
        assert!(panel.handle_key(key(KeyCode::Char('9'))).is_empty());
    }

    #[test]
    fn test_no_typing_after_game_over() {
        let mut panel = BoardPanel::new();
        panel.over = true;
        type_word(&mut panel, "crane");
        assert_eq!(panel.typed(), "");
    }

    #[test]
    fn test_alt_modified_keys_ignored() {
        let mut panel = BoardPanel::new();
        panel.handle_key(KeyEvent::new(KeyCode::Char('h'), KeyModifiers::ALT));
        assert_eq!(panel.typed(), "");
    }
}
