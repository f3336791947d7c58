//! Side panel chrome: border, title, and a cleared interior.

use ratatui::{
    buffer::Buffer,
    layout::Rect,
    style::{Modifier, Style},
    text::Span,
    widgets::{Block, Borders, Widget},
};

use wordsquad_core::{Panel, RenderContext};
use wordsquad_theme::Theme;

/// Render one side panel with a full border and its dynamic title.
pub fn render_side_panel(
    panel: &mut dyn Panel,
    area: Rect,
    buf: &mut Buffer,
    is_focused: bool,
    theme: &'static Theme,
    terminal: (u16, u16),
) {
    if area.height == 0 || area.width == 0 {
        return;
    }

    let style = if is_focused {
        Style::default()
            .fg(theme.accented_fg)
            .add_modifier(Modifier::BOLD)
    } else {
        Style::default().fg(theme.disabled)
    };

    // Panels overlay the board in narrow layouts; start every cell
    // from a clean slate so nothing bleeds through
    let clear_style = Style::default().bg(theme.bg);
    for y in area.top()..area.bottom() {
        for x in area.left()..area.right() {
            buf[(x, y)].reset();
            buf[(x, y)].set_style(clear_style);
        }
    }

    let title_text = format!(" {} ", panel.title());
    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(style)
        .title(Span::styled(title_text, style));

    let inner = block.inner(area);
    block.render(area, buf);

    let ctx = RenderContext {
        theme,
        is_focused,
        terminal_width: terminal.0,
        terminal_height: terminal.1,
    };
    panel.render(inner, buf, &ctx);
}
