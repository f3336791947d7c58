//! Global hotkey execution: panel toggles, new game, hard mode,
//! theme cycling and quit.

use wordsquad_core::SidePanel;
use wordsquad_state::FocusTarget;

use super::App;
use crate::hotkeys::HotkeyAction;

impl App {
    /// Apply a matched global hotkey.
    pub(super) fn execute_hotkey(&mut self, action: HotkeyAction) {
        match action {
            HotkeyAction::ToggleHistory => self.toggle_history_panel(),
            HotkeyAction::ToggleDefinition => self.toggle_definition_panel(),
            HotkeyAction::ToggleChat => self.toggle_side_panel(SidePanel::Chat),
            HotkeyAction::ToggleInfo => self.toggle_side_panel(SidePanel::Info),
            HotkeyAction::NewGame => self.new_game(),
            HotkeyAction::ToggleHardMode => self.toggle_hard_mode(),
            HotkeyAction::CycleTheme => self.cycle_theme(),
            HotkeyAction::RequestQuit => self.quit(),
        }
    }

    /// Toggle the history panel. The controller records the request
    /// as a manual flag so a later visibility pass cannot revert it.
    pub(crate) fn toggle_history_panel(&mut self) {
        let mode = self.state.layout_info.mode;
        let area = self.main_area();
        let now_visible = self.controller.toggle_history(mode, area);
        self.after_toggle(SidePanel::History, now_visible);
    }

    /// Toggle the definition panel, recording the manual flag.
    pub(crate) fn toggle_definition_panel(&mut self) {
        let mode = self.state.layout_info.mode;
        let area = self.main_area();
        let now_visible = self.controller.toggle_definition(mode, area);
        self.after_toggle(SidePanel::Definition, now_visible);
    }

    /// Toggle chat or info. Chat records its manual flag through the
    /// string key; info has no flag and follows toggles alone.
    pub(crate) fn toggle_side_panel(&mut self, panel: SidePanel) {
        let mode = self.state.layout_info.mode;
        let area = self.main_area();
        self.controller.toggle_panel(panel, mode, area);
        let now_visible = self.controller.is_visible(panel);
        if panel == SidePanel::Chat {
            self.controller.set_manual_toggle(panel.key(), now_visible);
        }
        self.after_toggle(panel, now_visible);
    }

    /// Focus follows a panel that just opened. After a close, focus
    /// may not stay on a hidden panel; a medium-mode toggle can hide
    /// the previously focused panel as well.
    fn after_toggle(&mut self, panel: SidePanel, now_visible: bool) {
        if now_visible {
            self.state.ui.focus = FocusTarget::Side(panel);
            if let Some(p) = self.panels.side_mut(panel) {
                p.focus_first();
            }
            return;
        }
        if let Some(focused) = self.state.ui.focused_side_panel() {
            if !self.controller.is_visible(focused) {
                self.state.ui.focus = FocusTarget::Board;
            }
        }
    }
}
