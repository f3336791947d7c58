//! Frame composition: header, board, side panels, status bar.
//!
//! Geometry comes from the visibility controller; this module only
//! draws what the controller says is visible, clamped to the frame.

mod chrome;
mod status_bar;

use ratatui::{
    buffer::Buffer,
    layout::Rect,
    style::{Modifier, Style},
    text::Span,
    Frame,
};

use wordsquad_app::{AppState, PanelRegistry};
use wordsquad_core::{Panel, RenderContext, SidePanel};
use wordsquad_game::Game;
use wordsquad_layout::VisibilityController;
use wordsquad_state::{FocusTarget, LayoutMode};
use wordsquad_theme::Theme;

use status_bar::StatusBarParams;

/// Draw one frame.
pub fn render(
    frame: &mut Frame<'_>,
    state: &mut AppState,
    panels: &mut PanelRegistry,
    controller: &VisibilityController,
    game: &Game,
) {
    let area = frame.area();
    if area.width < 10 || area.height < 3 {
        return;
    }
    let buf = frame.buffer_mut();

    let base = Style::default().bg(state.theme.bg).fg(state.theme.fg);
    for y in area.top()..area.bottom() {
        for x in area.left()..area.right() {
            buf[(x, y)].reset();
            buf[(x, y)].set_style(base);
        }
    }

    let header = Rect::new(area.x, area.y, area.width, 1);
    let main = Rect::new(area.x, area.y + 1, area.width, area.height - 2);
    let status = Rect::new(area.x, area.bottom() - 1, area.width, 1);

    render_header(buf, header, state.theme);
    render_board(buf, main, state, panels, controller);
    render_side_panels(buf, main, state, panels, controller);

    let focused_title = match state.ui.focus {
        FocusTarget::Board => "Board".to_string(),
        FocusTarget::Side(panel) => panels
            .side(panel)
            .map(|p| p.title())
            .unwrap_or_else(|| "Board".to_string()),
    };
    let params = StatusBarParams {
        theme: state.theme,
        status_message: state.ui.status_message.as_ref(),
        focused_title,
        mode_label: state.layout_info.mode.label(),
        score_half_points: game.leaderboard().score(&state.player_emoji),
        hard_mode: game.hard_mode(),
        terminal_width: state.terminal.width,
        terminal_height: state.terminal.height,
    };
    status_bar::render(buf, status, &params);
}

/// Title and hotkey hints on the top line.
fn render_header(buf: &mut Buffer, area: Rect, theme: &Theme) {
    if area.height == 0 {
        return;
    }
    let bg = Style::default().bg(theme.accented_bg);
    for x in area.left()..area.right() {
        buf[(x, area.top())].set_char(' ').set_style(bg);
    }

    let title_style = Style::default()
        .fg(theme.accented_fg)
        .bg(theme.accented_bg)
        .add_modifier(Modifier::BOLD);
    let key_style = Style::default().fg(theme.accented_fg).bg(theme.accented_bg);
    let label_style = Style::default().fg(theme.disabled).bg(theme.accented_bg);

    let mut spans = vec![Span::styled(" WordSquad ", title_style)];
    for (key, label) in [
        ("Alt+H", "History"),
        ("Alt+D", "Definition"),
        ("Alt+C", "Chat"),
        ("Alt+I", "Info"),
        ("Alt+N", "New"),
        ("Alt+M", "Hard"),
        ("Alt+T", "Theme"),
        ("Alt+Q", "Quit"),
    ] {
        spans.push(Span::styled(format!("  {}", key), key_style));
        spans.push(Span::styled(format!(" {}", label), label_style));
    }

    let mut x = area.left();
    let y = area.top();
    for span in spans {
        if x >= area.right() {
            break;
        }
        let remaining = (area.right() - x) as usize;
        buf.set_stringn(x, y, span.content.as_ref(), remaining, span.style);
        x = x.saturating_add(span.width() as u16);
    }
}

/// The board draws in the strip the full-layout side columns leave
/// free; in narrow layouts it gets the whole main area and panels
/// overlay it.
fn render_board(
    buf: &mut Buffer,
    main: Rect,
    state: &mut AppState,
    panels: &mut PanelRegistry,
    controller: &VisibilityController,
) {
    let rect = board_rect(main, state.layout_info.mode, controller);
    if rect.area() == 0 {
        return;
    }
    let ctx = RenderContext {
        theme: state.theme,
        is_focused: state.ui.focus == FocusTarget::Board,
        terminal_width: state.terminal.width,
        terminal_height: state.terminal.height,
    };
    panels.board.render(rect, buf, &ctx);
}

fn board_rect(main: Rect, mode: LayoutMode, controller: &VisibilityController) -> Rect {
    if mode != LayoutMode::Full {
        return main;
    }
    let mut left = main.left();
    let mut right = main.right();

    let history = controller.panel_rect(SidePanel::History);
    if controller.is_visible(SidePanel::History) && history.area() > 0 {
        left = left.max(history.right());
    }
    for panel in [SidePanel::Definition, SidePanel::Chat] {
        let rect = controller.panel_rect(panel);
        if controller.is_visible(panel) && rect.area() > 0 {
            right = right.min(rect.left());
        }
    }

    if right <= left {
        return main;
    }
    Rect::new(left, main.y, right - left, main.height)
}

/// Draw every visible side panel over the board, history and the
/// right column first, the centered info overlay last.
fn render_side_panels(
    buf: &mut Buffer,
    main: Rect,
    state: &mut AppState,
    panels: &mut PanelRegistry,
    controller: &VisibilityController,
) {
    for panel in SidePanel::ALL {
        if !controller.is_visible(panel) {
            continue;
        }
        let rect = controller.panel_rect(panel).intersection(main);
        if rect.area() == 0 {
            continue;
        }
        let is_focused = state.ui.focus == FocusTarget::Side(panel);
        if let Some(side) = panels.side_mut(panel) {
            chrome::render_side_panel(
                side,
                rect,
                buf,
                is_focused,
                state.theme,
                (state.terminal.width, state.terminal.height),
            );
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use ratatui::{backend::TestBackend, Terminal};
    use wordsquad_config::Config;

    fn fixtures(width: u16, height: u16) -> (AppState, PanelRegistry, VisibilityController, Game) {
        let mut config = Config::default();
        config.game.daily_double = false;
        let theme = Theme::get_by_name(&config.general.theme);
        let mut state = AppState::with_config_and_theme(config.clone(), theme);
        state.update_terminal_size(width, height);
        let mut game = Game::new(&config).expect("fresh game");
        state.player_emoji = game.register_player(&config.general.player_emoji);
        let panels = PanelRegistry::new(config.chat.max_message_len);
        (state, panels, VisibilityController::new(), game)
    }

    fn draw(width: u16, height: u16, open: &[SidePanel]) {
        let (mut state, mut panels, mut controller, game) = fixtures(width, height);
        let main = Rect::new(0, 1, width, height.saturating_sub(2));
        for panel in open {
            controller.toggle_panel(*panel, state.layout_info.mode, main);
        }
        let backend = TestBackend::new(width, height);
        let mut terminal = Terminal::new(backend).expect("test backend");
        terminal
            .draw(|frame| render(frame, &mut state, &mut panels, &controller, &game))
            .expect("draw");
    }

    #[test]
    fn test_render_full_layout_with_all_panels() {
        draw(
            200,
            50,
            &[
                SidePanel::History,
                SidePanel::Definition,
                SidePanel::Chat,
                SidePanel::Info,
            ],
        );
    }

    #[test]
    fn test_render_medium_overlay() {
        draw(80, 24, &[SidePanel::Chat]);
    }

    #[test]
    fn test_render_compact_skips_zero_rect_panels() {
        draw(40, 12, &[SidePanel::Info]);
    }

    #[test]
    fn test_render_tiny_frame_is_noop() {
        draw(8, 2, &[]);
    }

    #[test]
    fn test_render_error_status() {
        let (mut state, mut panels, controller, game) = fixtures(100, 30);
        state.set_error("Not a valid 5-letter word.".to_string());
        let backend = TestBackend::new(100, 30);
        let mut terminal = Terminal::new(backend).expect("test backend");
        terminal
            .draw(|frame| render(frame, &mut state, &mut panels, &controller, &game))
            .expect("draw");
    }
}
