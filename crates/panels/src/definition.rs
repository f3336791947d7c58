//! Definition panel: the last solved word and its dictionary entry.

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

use crate::wrap::wrap_text;

pub struct DefinitionPanel {
    word: String,
    text: String,
    scroll_offset: usize,
}

impl DefinitionPanel {
    pub fn new() -> Self {
        Self {
            word: String::new(),
            text: String::new(),
            scroll_offset: 0,
        }
    }

    /// Replace the displayed definition.
    pub fn set_definition(&mut self, word: &str, text: &str) {
        if self.word != word {
            self.scroll_offset = 0;
        }
        self.word = word.to_string();
        self.text = text.to_string();
    }

    pub fn is_blank(&self) -> bool {
        self.text.trim().is_empty()
    }
}

impl Panel for DefinitionPanel {
    fn name(&self) -> &'static str {
        "definition"
    }

    fn title(&self) -> String {
        if self.word.is_empty() {
            "Definition".to_string()
        } else {
            format!("Definition · {}", self.word.to_uppercase())
        }
    }

    fn render(&mut self, area: Rect, buf: &mut Buffer, ctx: &RenderContext) {
        let theme = ctx.theme;
        let mut lines: Vec<Line> = Vec::new();

        if self.is_blank() {
            lines.push(Line::from(Span::styled(
                "Solve a round to see the word's definition here.",
                Style::default().fg(theme.disabled),
            )));
        } else {
            lines.push(Line::from(Span::styled(
                self.word.to_uppercase(),
                Style::default()
                    .fg(theme.accented_fg)
                    .add_modifier(Modifier::BOLD),
            )));
            lines.push(Line::default());
            for text_line in wrap_text(&self.text, area.width.max(1) as usize) {
                lines.push(Line::from(Span::styled(
                    text_line,
                    Style::default().fg(theme.fg),
                )));
            }
        }

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

impl Default for DefinitionPanel {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_blank_until_definition_set() {
        let mut panel = DefinitionPanel::new();
        assert!(panel.is_blank());
        assert_eq!(panel.title(), "Definition");

        panel.set_definition("crane", "A large wading bird.");
        assert!(!panel.is_blank());
        assert_eq!(panel.title(), "Definition · CRANE");
    }

    #[test]
    fn test_whitespace_definition_is_blank() {
        let mut panel = DefinitionPanel::new();
        panel.set_definition("crane", "   ");
        assert!(panel.is_blank());
    }

    #[test]
    fn test_new_word_resets_scroll() {
        let mut panel = DefinitionPanel::new();
        panel.set_definition("crane", "A large wading bird.");
        panel.scroll_offset = 4;

        panel.set_definition("crane", "A large wading bird, updated.");
        assert_eq!(panel.scroll_offset, 4);

        panel.set_definition("toast", "Sliced bread browned by heat.");
        assert_eq!(panel.scroll_offset, 0);
    }
}
