//! Info panel: how to play, current rules, and the leaderboard.

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
use unicode_width::UnicodeWidthStr;

use wordsquad_core::{Panel, PanelEvent, RenderContext};
use wordsquad_game::format_half_points;

const RULES: &str = include_str!("../assets/rules.txt");

/// One leaderboard row: player emoji and score in half-point units.
#[derive(Debug, Clone, PartialEq)]
pub struct ScoreRow {
    pub emoji: String,
    pub half_points: i32,
}

pub struct InfoPanel {
    scores: Vec<ScoreRow>,
    my_emoji: String,
    hard_mode: bool,
    daily_double: bool,
    scroll_offset: usize,
}

impl InfoPanel {
    pub fn new() -> Self {
        Self {
            scores: Vec::new(),
            my_emoji: String::new(),
            hard_mode: false,
            daily_double: false,
            scroll_offset: 0,
        }
    }

    /// Refresh the leaderboard and rule flags.
    pub fn sync(
        &mut self,
        scores: Vec<ScoreRow>,
        my_emoji: &str,
        hard_mode: bool,
        daily_double: bool,
    ) {
        self.scores = scores;
        self.my_emoji = my_emoji.to_string();
        self.hard_mode = hard_mode;
        self.daily_double = daily_double;
    }

    fn build_lines(&self, ctx: &RenderContext) -> Vec<Line<'static>> {
        let theme = ctx.theme;
        let mut lines = Vec::new();

        lines.push(Line::from(Span::styled(
            "How to play",
            Style::default()
                .fg(theme.accented_fg)
                .add_modifier(Modifier::BOLD),
        )));
        for rule_line in RULES.lines() {
            lines.push(Line::from(Span::styled(
                rule_line.to_string(),
                Style::default().fg(theme.fg),
            )));
        }

        let on_off = |on: bool| if on { "on" } else { "off" };
        lines.push(Line::default());
        lines.push(Line::from(Span::styled(
            format!(
                "Hard mode: {}   Daily double: {}",
                on_off(self.hard_mode),
                on_off(self.daily_double)
            ),
            Style::default().fg(theme.disabled),
        )));

        lines.push(Line::default());
        lines.push(Line::from(Span::styled(
            "Players",
            Style::default()
                .fg(theme.accented_fg)
                .add_modifier(Modifier::BOLD),
        )));

        if self.scores.is_empty() {
            lines.push(Line::from(Span::styled(
                "Nobody has played yet.",
                Style::default().fg(theme.disabled),
            )));
            return lines;
        }

        let emoji_width = self
            .scores
            .iter()
            .map(|row| row.emoji.width())
            .max()
            .unwrap_or(0);

        for (rank, row) in self.scores.iter().enumerate() {
            let is_me = row.emoji == self.my_emoji;
            let marker = if is_me { "→" } else { " " };
            let pad = emoji_width.saturating_sub(row.emoji.width());
            let text = format!(
                "{} {:>2}. {}{}  {}",
                marker,
                rank + 1,
                row.emoji,
                " ".repeat(pad),
                format_half_points(row.half_points)
            );
            let style = if is_me {
                Style::default()
                    .fg(theme.selected_fg)
                    .bg(theme.selected_bg)
                    .add_modifier(Modifier::BOLD)
            } else {
                Style::default().fg(theme.fg)
            };
            lines.push(Line::from(Span::styled(text, style)));
        }

        lines
    }
}

impl Panel for InfoPanel {
    fn name(&self) -> &'static str {
        "info"
    }

    fn title(&self) -> String {
        "Info".to_string()
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
            KeyCode::Home => {
                self.scroll_offset = 0;
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

impl Default for InfoPanel {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_sync_replaces_scores() {
        let mut panel = InfoPanel::new();
        panel.sync(
            vec![
                ScoreRow {
                    emoji: "🦊".to_string(),
                    half_points: 20,
                },
                ScoreRow {
                    emoji: "🐶".to_string(),
                    half_points: 7,
                },
            ],
            "🐶",
            true,
            false,
        );
        assert_eq!(panel.scores.len(), 2);
        assert!(panel.hard_mode);
        assert!(!panel.daily_double);
        assert_eq!(panel.my_emoji, "🐶");
    }

    #[test]
    fn test_rules_text_embedded() {
        assert!(RULES.contains("six rows"));
        assert!(RULES.contains("daily double"));
    }
}
