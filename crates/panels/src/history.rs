//! History panel: archived games, newest first.

use std::any::Any;

use crossterm::event::{KeyCode, KeyEvent};
use ratatui::{
    buffer::Buffer,
    layout::Rect,
    prelude::Widget,
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::Paragraph,
};

use wordsquad_core::{Panel, PanelEvent, RenderContext};
use wordsquad_game::{LetterResult, PastGame};

pub struct HistoryPanel {
    games: Vec<PastGame>,
    scroll_offset: usize,
}

impl HistoryPanel {
    pub fn new() -> Self {
        Self {
            games: Vec::new(),
            scroll_offset: 0,
        }
    }

    /// Replace the archived games shown by the panel.
    pub fn set_games(&mut self, games: &[PastGame]) {
        self.games = games.to_vec();
    }

    fn build_lines(&self, ctx: &RenderContext) -> Vec<Line<'static>> {
        let theme = ctx.theme;
        let mut lines = Vec::new();

        if self.games.is_empty() {
            lines.push(Line::from(Span::styled(
                "No games yet.",
                Style::default().fg(theme.disabled),
            )));
            return lines;
        }

        for game in self.games.iter().rev() {
            if !lines.is_empty() {
                lines.push(Line::default());
            }

            let (mark, mark_style) = if game.solved {
                ("✓", Style::default().fg(theme.success))
            } else {
                ("✗", Style::default().fg(theme.error))
            };
            lines.push(Line::from(vec![
                Span::styled(
                    game.word.to_uppercase(),
                    Style::default()
                        .fg(theme.fg)
                        .add_modifier(Modifier::BOLD),
                ),
                Span::raw(" "),
                Span::styled(mark.to_string(), mark_style),
                Span::styled(
                    format!("  {} guesses", game.guesses.len()),
                    Style::default().fg(theme.disabled),
                ),
            ]));

            for guess in &game.guesses {
                let mut spans = vec![Span::raw("  ")];
                for (i, result) in guess.result.iter().enumerate() {
                    if i > 0 {
                        spans.push(Span::raw(" "));
                    }
                    let color = match result {
                        LetterResult::Correct => theme.tile_correct,
                        LetterResult::Present => theme.tile_present,
                        LetterResult::Absent => theme.tile_absent,
                    };
                    spans.push(Span::styled("■", Style::default().fg(color)));
                }
                spans.push(Span::styled(
                    format!("  {}", guess.player),
                    Style::default().fg(theme.disabled),
                ));
                lines.push(Line::from(spans));
            }
        }

        lines
    }
}

impl Panel for HistoryPanel {
    fn name(&self) -> &'static str {
        "history"
    }

    fn title(&self) -> String {
        if self.games.is_empty() {
            "History".to_string()
        } else {
            format!("History ({})", self.games.len())
        }
    }

    fn render(&mut self, area: Rect, buf: &mut Buffer, ctx: &RenderContext) {
        let lines = self.build_lines(ctx);

        let max_offset = lines.len().saturating_sub(area.height as usize);
        if self.scroll_offset > max_offset {
            self.scroll_offset = max_offset;
        }

        let visible: Vec<Line> = lines
            .into_iter()
            .skip(self.scroll_offset)
            .take(area.height as usize)
            .collect();
        Paragraph::new(visible).render(area, buf);
    }

    fn handle_key(&mut self, key: KeyEvent) -> Vec<PanelEvent> {
        match key.code {
            KeyCode::Up | KeyCode::Char('k') => {
                self.scroll_offset = self.scroll_offset.saturating_sub(1);
            }
            KeyCode::Down | KeyCode::Char('j') => {
                self.scroll_offset = self.scroll_offset.saturating_add(1);
            }
            KeyCode::PageUp => {
                self.scroll_offset = self.scroll_offset.saturating_sub(10);
            }
            KeyCode::PageDown => {
                self.scroll_offset = self.scroll_offset.saturating_add(10);
            }
            KeyCode::Home | KeyCode::Char('g') => {
                self.scroll_offset = 0;
            }
            KeyCode::End | KeyCode::Char('G') => {
                // Clamped to the last page on the next render
                self.scroll_offset = usize::MAX;
            }
            _ => return vec![],
        }
        vec![PanelEvent::NeedsRedraw]
    }

    fn focus_first(&mut self) {
        self.scroll_offset = 0;
    }

    fn as_any(&self) -> &dyn Any {
        self
    }

    fn as_any_mut(&mut self) -> &mut dyn Any {
        self
    }
}

impl Default for HistoryPanel {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crossterm::event::KeyModifiers;
    use wordsquad_game::{result_for_guess, GuessRow};

    fn past_game(word: &str, solved: bool) -> PastGame {
        PastGame {
            word: word.to_string(),
            solved,
            guesses: vec![GuessRow {
                word: "slate".to_string(),
                result: result_for_guess("slate", word),
                player: "🐶".to_string(),
                points: 0,
                ts_ms: 0,
            }],
        }
    }

    #[test]
    fn test_title_shows_game_count() {
        let mut panel = HistoryPanel::new();
        assert_eq!(panel.title(), "History");

        panel.set_games(&[past_game("crane", true), past_game("toast", false)]);
        assert_eq!(panel.title(), "History (2)");
    }

    #[test]
    fn test_scroll_keys() {
        let mut panel = HistoryPanel::new();
        panel.handle_key(KeyEvent::new(KeyCode::Down, KeyModifiers::NONE));
        panel.handle_key(KeyEvent::new(KeyCode::Down, KeyModifiers::NONE));
        assert_eq!(panel.scroll_offset, 2);

        panel.handle_key(KeyEvent::new(KeyCode::Up, KeyModifiers::NONE));
        assert_eq!(panel.scroll_offset, 1);

        panel.handle_key(KeyEvent::new(KeyCode::Home, KeyModifiers::NONE));
        assert_eq!(panel.scroll_offset, 0);
    }

    #[test]
    fn test_focus_first_resets_scroll() {
        let mut panel = HistoryPanel::new();
        panel.scroll_offset = 7;
        panel.focus_first();
        assert_eq!(panel.scroll_offset, 0);
    }
}
