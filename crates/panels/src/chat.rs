//! Chat panel: message history plus a single-line composer.

use std::any::Any;

use chrono::{DateTime, Local};
use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
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
use wordsquad_game::ChatMessage;

use crate::input::TextInput;
use crate::wrap::wrap_text;

fn format_ts(ts_ms: u64) -> String {
    DateTime::from_timestamp_millis(ts_ms as i64)
        .map(|dt| dt.with_timezone(&Local).format("%H:%M").to_string())
        .unwrap_or_default()
}

pub struct ChatPanel {
    messages: Vec<ChatMessage>,
    input: TextInput,
    /// Lines scrolled back from the newest message
    scroll_back: usize,
    max_message_len: usize,
}

impl ChatPanel {
    pub fn new(max_message_len: usize) -> Self {
        Self {
            messages: Vec::new(),
            input: TextInput::new(),
            scroll_back: 0,
            max_message_len,
        }
    }

    /// Replace the displayed messages. New arrivals snap the view back
    /// to the newest message.
    pub fn set_messages(&mut self, messages: Vec<ChatMessage>) {
        if messages.len() != self.messages.len() {
            self.scroll_back = 0;
        }
        self.messages = messages;
    }

    /// Drop the composer text (called after an accepted send).
    pub fn clear_input(&mut self) {
        self.input.clear();
    }

    pub fn input_text(&self) -> &str {
        self.input.text()
    }

    fn message_lines(&self, width: usize, ctx: &RenderContext) -> Vec<Line<'static>> {
        let theme = ctx.theme;
        let mut lines = Vec::new();

        if self.messages.is_empty() {
            lines.push(Line::from(Span::styled(
                "Say hi!",
                Style::default().fg(theme.disabled),
            )));
            return lines;
        }

        for message in &self.messages {
            if message.system {
                let text = format!("* {}", message.text);
                for (i, wrapped) in wrap_text(&text, width).into_iter().enumerate() {
                    let wrapped = if i == 0 {
                        wrapped
                    } else {
                        format!("  {}", wrapped)
                    };
                    lines.push(Line::from(Span::styled(
                        wrapped,
                        Style::default()
                            .fg(theme.accented_fg)
                            .add_modifier(Modifier::ITALIC),
                    )));
                }
                continue;
            }

            let stamp = format!("[{}] ", format_ts(message.ts_ms));
            let name = format!("{}: ", message.emoji);
            let indent = stamp.width();
            let body_width = width.saturating_sub(indent + name.width()).max(8);

            for (i, wrapped) in wrap_text(&message.text, body_width).into_iter().enumerate() {
                if i == 0 {
                    lines.push(Line::from(vec![
                        Span::styled(stamp.clone(), Style::default().fg(theme.disabled)),
                        Span::styled(
                            name.clone(),
                            Style::default()
                                .fg(theme.accented_fg)
                                .add_modifier(Modifier::BOLD),
                        ),
                        Span::styled(wrapped, Style::default().fg(theme.fg)),
                    ]));
                } else {
                    lines.push(Line::from(vec![
                        Span::raw(" ".repeat(indent)),
                        Span::styled(wrapped, Style::default().fg(theme.fg)),
                    ]));
                }
            }
        }

        lines
    }

    fn composer_line(&self, ctx: &RenderContext) -> Line<'static> {
        let theme = ctx.theme;
        let mut spans = vec![Span::styled("❯ ", Style::default().fg(theme.accented_fg))];

        if ctx.is_focused {
            spans.push(Span::styled(
                self.input.text_before_cursor().to_string(),
                Style::default().fg(theme.fg),
            ));
            let mut after = self.input.text_after_cursor().chars();
            let cursor_char = after.next().unwrap_or(' ');
            spans.push(Span::styled(
                cursor_char.to_string(),
                Style::default().add_modifier(Modifier::REVERSED),
            ));
            spans.push(Span::styled(
                after.as_str().to_string(),
                Style::default().fg(theme.fg),
            ));
        } else {
            spans.push(Span::styled(
                self.input.text().to_string(),
                Style::default().fg(theme.disabled),
            ));
        }

        Line::from(spans)
    }

    fn separator_line(&self, width: usize, ctx: &RenderContext) -> Line<'static> {
        let theme = ctx.theme;
        let typed = self.input.text().chars().count();

        if typed == 0 {
            return Line::from(Span::styled(
                "─".repeat(width),
                Style::default().fg(theme.disabled),
            ));
        }

        let counter = format!(" {}/{} ", typed, self.max_message_len);
        let bar = width.saturating_sub(counter.width());
        let counter_style = if typed > self.max_message_len {
            Style::default().fg(theme.error).add_modifier(Modifier::BOLD)
        } else {
            Style::default().fg(theme.disabled)
        };
        Line::from(vec![
            Span::styled("─".repeat(bar), Style::default().fg(theme.disabled)),
            Span::styled(counter, counter_style),
        ])
    }
}

impl Panel for ChatPanel {
    fn name(&self) -> &'static str {
        "chat"
    }

    fn title(&self) -> String {
        "Chat".to_string()
    }

    fn render(&mut self, area: Rect, buf: &mut Buffer, ctx: &RenderContext) {
        if area.height < 3 {
            Paragraph::new(vec![self.composer_line(ctx)]).render(area, buf);
            return;
        }

        let width = area.width.max(1) as usize;
        let history_height = (area.height - 2) as usize;
        let all = self.message_lines(width, ctx);

        let max_back = all.len().saturating_sub(history_height);
        if self.scroll_back > max_back {
            self.scroll_back = max_back;
        }
        let end = all.len() - self.scroll_back;
        let start = end.saturating_sub(history_height);

        let mut lines: Vec<Line> = all[start..end].to_vec();
        // Bottom-align short histories so the composer stays put
        while lines.len() < history_height {
            lines.insert(0, Line::default());
        }
        lines.push(self.separator_line(width, ctx));
        lines.push(self.composer_line(ctx));

        Paragraph::new(lines).render(area, buf);
    }

    fn handle_key(&mut self, key: KeyEvent) -> Vec<PanelEvent> {
        if key
            .modifiers
            .intersects(KeyModifiers::CONTROL | KeyModifiers::ALT)
        {
            return vec![];
        }

        match key.code {
            KeyCode::Enter => {
                if self.input.text().trim().is_empty() {
                    return vec![];
                }
                vec![PanelEvent::SendChat(self.input.text().to_string())]
            }
            KeyCode::Esc => {
                if !self.input.is_empty() {
                    self.input.clear();
                    return vec![PanelEvent::NeedsRedraw];
                }
                vec![]
            }
            KeyCode::Char(c) => {
                self.input.insert(c);
                vec![PanelEvent::NeedsRedraw]
            }
            KeyCode::Backspace => {
                if self.input.backspace() {
                    return vec![PanelEvent::NeedsRedraw];
                }
                vec![]
            }
            KeyCode::Delete => {
                if self.input.delete() {
                    return vec![PanelEvent::NeedsRedraw];
                }
                vec![]
            }
            KeyCode::Left => {
                self.input.move_left();
                vec![PanelEvent::NeedsRedraw]
            }
            KeyCode::Right => {
                self.input.move_right();
                vec![PanelEvent::NeedsRedraw]
            }
            KeyCode::Home => {
                self.input.move_home();
                vec![PanelEvent::NeedsRedraw]
            }
            KeyCode::End => {
                self.input.move_end();
                vec![PanelEvent::NeedsRedraw]
            }
            KeyCode::Up => {
                self.scroll_back = self.scroll_back.saturating_add(1);
                vec![PanelEvent::NeedsRedraw]
            }
            KeyCode::Down => {
                self.scroll_back = self.scroll_back.saturating_sub(1);
                vec![PanelEvent::NeedsRedraw]
            }
            KeyCode::PageUp => {
                self.scroll_back = self.scroll_back.saturating_add(5);
                vec![PanelEvent::NeedsRedraw]
            }
            KeyCode::PageDown => {
                self.scroll_back = self.scroll_back.saturating_sub(5);
                vec![PanelEvent::NeedsRedraw]
            }
            _ => vec![],
        }
    }

    fn focus_first(&mut self) {
        self.scroll_back = 0;
        self.input.move_end();
    }

    fn captures_escape(&self) -> bool {
        !self.input.is_empty()
    }

    fn as_any(&self) -> &dyn Any {
        self
    }

    fn as_any_mut(&mut self) -> &mut dyn Any {
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn key(code: KeyCode) -> KeyEvent {
        KeyEvent::new(code, KeyModifiers::NONE)
    }

    fn type_text(panel: &mut ChatPanel, text: &str) {
        for c in text.chars() {
            panel.handle_key(key(KeyCode::Char(c)));
        }
    }

    #[test]
    fn test_enter_sends_typed_text() {
        let mut panel = ChatPanel::new(280);
        type_text(&mut panel, "hello");
        let events = panel.handle_key(key(KeyCode::Enter));
        assert!(matches!(
            events.as_slice(),
            [PanelEvent::SendChat(text)] if text == "hello"
        ));
        // Input stays until the app confirms the send went through
        assert_eq!(panel.input_text(), "hello");
    }

    #[test]
    fn test_enter_on_blank_input_does_nothing() {
        let mut panel = ChatPanel::new(280);
        type_text(&mut panel, "   ");
        assert!(panel.handle_key(key(KeyCode::Enter)).is_empty());
    }

    #[test]
    fn test_escape_clears_input_when_nonempty() {
        let mut panel = ChatPanel::new(280);
        assert!(!panel.captures_escape());

        type_text(&mut panel, "oops");
        assert!(panel.captures_escape());

        panel.handle_key(key(KeyCode::Esc));
        assert_eq!(panel.input_text(), "");
        assert!(!panel.captures_escape());
    }

    #[test]
    fn test_new_messages_reset_scrollback() {
        let mut panel = ChatPanel::new(280);
        panel.scroll_back = 10;
        panel.set_messages(vec![ChatMessage {
            emoji: "🐶".to_string(),
            text: "hi".to_string(),
            ts_ms: 0,
            system: false,
        }]);
        assert_eq!(panel.scroll_back, 0);
    }

    #[test]
    fn test_clear_input_after_send() {
        let mut panel = ChatPanel::new(280);
        type_text(&mut panel, "hello");
        panel.clear_input();
        assert_eq!(panel.input_text(), "");
    }
}
