//! Status bar at the bottom of the screen.

use ratatui::{
    buffer::Buffer,
    layout::Rect,
    style::{Modifier, Style},
    text::Span,
};
use unicode_width::UnicodeWidthStr;

use wordsquad_game::format_half_points;
use wordsquad_theme::Theme;

/// Status bar rendering parameters (extracted from AppState to avoid
/// handing the whole state to the renderer)
pub struct StatusBarParams<'a> {
    pub theme: &'static Theme,
    /// Status message (message, is_error)
    pub status_message: Option<&'a (String, bool)>,
    pub focused_title: String,
    pub mode_label: &'a str,
    /// Local player's score in half-point units, if registered
    pub score_half_points: Option<i32>,
    pub hard_mode: bool,
    pub terminal_width: u16,
    pub terminal_height: u16,
}

/// Render the status bar into its single line.
pub fn render(buf: &mut Buffer, area: Rect, params: &StatusBarParams<'_>) {
    if area.height == 0 {
        return;
    }

    // Fill entire line with background color from theme
    let theme = params.theme;
    for x in area.left()..area.right() {
        buf[(x, area.top())]
            .set_char(' ')
            .set_style(Style::default().bg(theme.accented_bg));
    }

    let spans = status_spans(params, area.width);

    let y = area.top();
    let mut x = area.left();
    for span in spans {
        if x >= area.right() {
            break;
        }
        let remaining = (area.right() - x) as usize;
        buf.set_stringn(x, y, span.content.as_ref(), remaining, span.style);
        x = x.saturating_add(span.width() as u16);
    }
}

fn status_spans<'a>(params: &'a StatusBarParams<'a>, total_width: u16) -> Vec<Span<'a>> {
    let theme = params.theme;

    // If there's an ERROR message, show it with priority
    if let Some((message, is_error)) = params.status_message {
        if *is_error {
            let msg_style = Style::default()
                .fg(theme.error)
                .bg(theme.accented_bg)
                .add_modifier(Modifier::BOLD);
            return vec![Span::styled(format!(" {} ", message), msg_style)];
        }
    }

    let base_style = Style::default().fg(theme.disabled).bg(theme.accented_bg);
    let highlight_style = Style::default()
        .fg(theme.accented_fg)
        .bg(theme.accented_bg)
        .add_modifier(Modifier::BOLD);

    let mut spans = vec![];
    spans.push(Span::styled(" ", base_style));
    spans.push(Span::styled(params.focused_title.as_str(), highlight_style));

    if let Some((message, _)) = params.status_message {
        spans.push(Span::styled(" | ", base_style));
        spans.push(Span::styled(
            message.as_str(),
            Style::default().fg(theme.fg).bg(theme.accented_bg),
        ));
    }

    // Right side: score, hard-mode marker, layout mode, dimensions
    let mut right = vec![];
    if let Some(score) = params.score_half_points {
        right.push(Span::styled(
            format!("{} pts", format_half_points(score)),
            highlight_style,
        ));
        right.push(Span::styled(" | ", base_style));
    }
    if params.hard_mode {
        right.push(Span::styled(
            "hard",
            Style::default().fg(theme.warning).bg(theme.accented_bg),
        ));
        right.push(Span::styled(" | ", base_style));
    }
    right.push(Span::styled(
        format!(
            "{} {}x{} ",
            params.mode_label, params.terminal_width, params.terminal_height
        ),
        base_style,
    ));

    // Pad the middle so the right cluster lands on the right edge
    let used: usize = spans
        .iter()
        .chain(right.iter())
        .map(|s| s.content.as_ref().width())
        .sum();
    let remaining = (total_width as usize).saturating_sub(used);
    if remaining > 0 {
        spans.push(Span::styled(" ".repeat(remaining), base_style));
    }
    spans.extend(right);

    spans
}
