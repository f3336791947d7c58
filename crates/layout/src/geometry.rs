//! Rect computation for the side panels.
//!
//! Full mode places panels beside the board; medium mode overlays
//! them on the right edge. All results are clamped to the given area,
//! and a zero-area rect means the panel is not drawn.

use ratatui::layout::Rect;

use wordsquad_config::constants::{
    CHAT_PANEL_WIDTH, DEFINITION_PANEL_WIDTH, HISTORY_PANEL_WIDTH, INFO_PANEL_WIDTH,
    OVERLAY_PANEL_WIDTH,
};
use wordsquad_core::SidePanel;

/// Where each side panel currently draws.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct PanelRects {
    pub history: Rect,
    pub definition: Rect,
    pub chat: Rect,
    pub info: Rect,
}

impl PanelRects {
    pub fn get(&self, panel: SidePanel) -> Rect {
        match panel {
            SidePanel::History => self.history,
            SidePanel::Definition => self.definition,
            SidePanel::Chat => self.chat,
            SidePanel::Info => self.info,
        }
    }

    pub(crate) fn set(&mut self, panel: SidePanel, rect: Rect) {
        match panel {
            SidePanel::History => self.history = rect,
            SidePanel::Definition => self.definition = rect,
            SidePanel::Chat => self.chat = rect,
            SidePanel::Info => self.info = rect,
        }
    }
}

/// History hugs the left edge at full height.
pub fn history_rect(area: Rect) -> Rect {
    let width = HISTORY_PANEL_WIDTH.min(area.width);
    Rect::new(area.x, area.y, width, area.height).intersection(area)
}

/// Definition occupies the top of the right column.
pub fn definition_rect(area: Rect) -> Rect {
    let width = DEFINITION_PANEL_WIDTH.min(area.width);
    let x = area.right().saturating_sub(width);
    Rect::new(x, area.y, width, area.height / 2).intersection(area)
}

/// Chat fills the right column, or only its lower half when the
/// definition panel sits above it.
pub fn chat_rect(area: Rect, below_definition: bool) -> Rect {
    let width = CHAT_PANEL_WIDTH.min(area.width);
    let x = area.right().saturating_sub(width);
    let rect = if below_definition {
        let top = area.height / 2;
        Rect::new(
            x,
            area.y.saturating_add(top),
            width,
            area.height.saturating_sub(top),
        )
    } else {
        Rect::new(x, area.y, width, area.height)
    };
    rect.intersection(area)
}

/// Info is a centered overlay in every mode.
pub fn info_rect(area: Rect) -> Rect {
    let width = INFO_PANEL_WIDTH.min(area.width);
    let height = area.height.min(30);
    let x = area.x + (area.width - width) / 2;
    let y = area.y + (area.height - height) / 2;
    Rect::new(x, y, width, height).intersection(area)
}

/// Medium mode overlay along the right edge.
pub fn overlay_rect(area: Rect) -> Rect {
    let width = OVERLAY_PANEL_WIDTH.min(area.width);
    let x = area.right().saturating_sub(width);
    Rect::new(x, area.y, width, area.height).intersection(area)
}
