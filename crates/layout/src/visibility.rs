//! Side panel visibility: content-driven, manual overrides, and both.
//!
//! The controller decides which of the four side panels (history,
//! definition, chat, info) are shown, from three inputs: terminal
//! width, content presence, and the player's explicit toggles. In
//! full layouts history and definition track their content; in medium
//! layouts at most one panel is visible at a time. Geometry is
//! recomputed after every visibility change so rendering always
//! observes current rects.

use ratatui::layout::Rect;

use wordsquad_config::constants::SIDE_PANEL_MIN_WIDTH;
use wordsquad_core::SidePanel;
use wordsquad_state::{LayoutInfo, LayoutMode};

use crate::geometry::{self, PanelRects};

/// Whether a side panel currently draws.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum PanelVisibility {
    #[default]
    Hidden,
    Visible,
}

impl PanelVisibility {
    pub fn is_visible(self) -> bool {
        matches!(self, PanelVisibility::Visible)
    }

    fn flipped(self) -> Self {
        match self {
            PanelVisibility::Hidden => PanelVisibility::Visible,
            PanelVisibility::Visible => PanelVisibility::Hidden,
        }
    }

    fn from_bool(visible: bool) -> Self {
        if visible {
            PanelVisibility::Visible
        } else {
            PanelVisibility::Hidden
        }
    }
}

/// The player's explicit open/closed requests, one flag per
/// closable panel. Distinct from derived visibility: a false flag
/// does not hide a panel that has content.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ManualToggles {
    pub history: bool,
    pub definition: bool,
    pub chat: bool,
}

/// Content presence, answered by the game layer.
pub trait PanelContent {
    /// True iff the history list has at least one entry.
    fn has_history_content(&self) -> bool;
    /// True iff the displayable definition text is non-empty after
    /// trimming whitespace.
    fn has_definition_content(&self) -> bool;
}

/// Decides and positions the four side panels.
pub struct VisibilityController {
    history: PanelVisibility,
    definition: PanelVisibility,
    chat: PanelVisibility,
    info: PanelVisibility,
    manual: ManualToggles,
    rects: PanelRects,
}

impl VisibilityController {
    /// All panels hidden, all manual flags false.
    pub fn new() -> Self {
        Self {
            history: PanelVisibility::default(),
            definition: PanelVisibility::default(),
            chat: PanelVisibility::default(),
            info: PanelVisibility::default(),
            manual: ManualToggles::default(),
            rects: PanelRects::default(),
        }
    }

    pub fn visibility(&self, panel: SidePanel) -> PanelVisibility {
        match panel {
            SidePanel::History => self.history,
            SidePanel::Definition => self.definition,
            SidePanel::Chat => self.chat,
            SidePanel::Info => self.info,
        }
    }

    pub fn is_visible(&self, panel: SidePanel) -> bool {
        self.visibility(panel).is_visible()
    }

    fn set_visibility(&mut self, panel: SidePanel, visibility: PanelVisibility) {
        match panel {
            SidePanel::History => self.history = visibility,
            SidePanel::Definition => self.definition = visibility,
            SidePanel::Chat => self.chat = visibility,
            SidePanel::Info => self.info = visibility,
        }
    }

    /// Where `panel` should draw. Zero area means "do not draw".
    pub fn panel_rect(&self, panel: SidePanel) -> Rect {
        self.rects.get(panel)
    }

    /// Live view of the manual toggle flags.
    pub fn manual_toggles(&self) -> &ManualToggles {
        &self.manual
    }

    /// Set a manual flag by its string key. Unknown keys (including
    /// "info", which has no flag) are ignored without effect.
    pub fn set_manual_toggle(&mut self, key: &str, value: bool) {
        match key {
            "history" => self.manual.history = value,
            "definition" => self.manual.definition = value,
            "chat" => self.manual.chat = value,
            _ => {}
        }
    }

    /// Re-derive history and definition visibility from content and
    /// manual flags.
    ///
    /// Only effective when the area is wider than
    /// [`SIDE_PANEL_MIN_WIDTH`]; at or below it, nothing changes
    /// (narrow layouts are driven by explicit toggles alone). Chat
    /// and info are never touched here. Positioning always follows
    /// the visibility updates, in panel-then-chat order.
    pub fn update_panel_visibility(&mut self, area: Rect, content: &dyn PanelContent) {
        if area.width <= SIDE_PANEL_MIN_WIDTH {
            return;
        }

        self.history = PanelVisibility::from_bool(
            content.has_history_content() || self.manual.history,
        );
        self.definition = PanelVisibility::from_bool(
            content.has_definition_content() || self.manual.definition,
        );

        self.position_side_panels(area);
        self.update_chat_panel_position(area);
    }

    /// Flip one panel.
    ///
    /// In medium mode every other panel is hidden first, so at most
    /// one stays visible. Positioning always reruns; the chat
    /// position reruns only for definition and chat (toggling history
    /// or info leaves chat where it was).
    pub fn toggle_panel(&mut self, panel: SidePanel, mode: LayoutMode, area: Rect) {
        if mode == LayoutMode::Medium {
            for other in SidePanel::ALL {
                if other != panel {
                    self.set_visibility(other, PanelVisibility::Hidden);
                }
            }
        }
        self.set_visibility(panel, self.visibility(panel).flipped());

        self.position_side_panels(area);
        if matches!(panel, SidePanel::Definition | SidePanel::Chat) {
            self.update_chat_panel_position(area);
        }
    }

    /// Toggle the history panel, recording the intent as a manual
    /// flag. Returns whether the panel is now visible so the caller
    /// can move focus into it.
    pub fn toggle_history(&mut self, mode: LayoutMode, area: Rect) -> bool {
        self.manual.history = !self.is_visible(SidePanel::History);
        self.toggle_panel(SidePanel::History, mode, area);
        self.is_visible(SidePanel::History)
    }

    /// Toggle the definition panel, recording the intent as a manual
    /// flag. Returns whether the panel is now visible.
    pub fn toggle_definition(&mut self, mode: LayoutMode, area: Rect) -> bool {
        self.manual.definition = !self.is_visible(SidePanel::Definition);
        self.toggle_panel(SidePanel::Definition, mode, area);
        self.is_visible(SidePanel::Definition)
    }

    /// Recompute rects for the visible panels, chat excepted (chat is
    /// placed solely by [`Self::update_chat_panel_position`]).
    pub fn position_side_panels(&mut self, area: Rect) {
        let mode = LayoutInfo::calculate(area.width).mode;

        for panel in [SidePanel::History, SidePanel::Definition, SidePanel::Info] {
            let rect = if !self.is_visible(panel) {
                Rect::default()
            } else {
                match (mode, panel) {
                    (LayoutMode::Compact, _) => Rect::default(),
                    (_, SidePanel::Info) => geometry::info_rect(area),
                    (LayoutMode::Medium, _) => geometry::overlay_rect(area),
                    (LayoutMode::Full, SidePanel::History) => geometry::history_rect(area),
                    (LayoutMode::Full, SidePanel::Definition) => geometry::definition_rect(area),
                    (LayoutMode::Full, SidePanel::Chat) => Rect::default(),
                }
            };
            self.rects.set(panel, rect);
        }
    }

    /// Recompute the chat rect: the full right column, or its lower
    /// half when the definition panel occupies the top.
    pub fn update_chat_panel_position(&mut self, area: Rect) {
        let mode = LayoutInfo::calculate(area.width).mode;
        let rect = if !self.is_visible(SidePanel::Chat) {
            Rect::default()
        } else {
            match mode {
                LayoutMode::Compact => Rect::default(),
                LayoutMode::Medium => geometry::overlay_rect(area),
                LayoutMode::Full => {
                    geometry::chat_rect(area, self.is_visible(SidePanel::Definition))
                }
            }
        };
        self.rects.set(SidePanel::Chat, rect);
    }
}

impl Default for VisibilityController {
    fn default() -> Self {
        Self::new()
    }
}
