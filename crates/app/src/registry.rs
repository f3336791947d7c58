//! Panel registry: the board plus the four side panels.
//!
//! Side panels are stored as trait objects keyed by `SidePanel` so
//! key dispatch and rendering stay generic, while concrete accessors
//! let the app push game state into each panel.

use wordsquad_core::{Panel, SidePanel};
use wordsquad_panels::{BoardPanel, ChatPanel, DefinitionPanel, HistoryPanel, InfoPanel};

pub struct PanelRegistry {
    /// The board is always present and always focusable
    pub board: BoardPanel,
    side: Vec<(SidePanel, Box<dyn Panel>)>,
}

impl PanelRegistry {
    pub fn new(max_message_len: usize) -> Self {
        let side: Vec<(SidePanel, Box<dyn Panel>)> = vec![
            (SidePanel::History, Box::new(HistoryPanel::new())),
            (SidePanel::Definition, Box::new(DefinitionPanel::new())),
            (SidePanel::Chat, Box::new(ChatPanel::new(max_message_len))),
            (SidePanel::Info, Box::new(InfoPanel::new())),
        ];
        Self {
            board: BoardPanel::new(),
            side,
        }
    }

    /// Side panel as a trait object.
    pub fn side(&self, panel: SidePanel) -> Option<&dyn Panel> {
        self.side
            .iter()
            .find(|(id, _)| *id == panel)
            .map(|(_, p)| p.as_ref())
    }

    /// Mutable side panel as a trait object.
    pub fn side_mut(&mut self, panel: SidePanel) -> Option<&mut dyn Panel> {
        self.side
            .iter_mut()
            .find(|(id, _)| *id == panel)
            .map(|(_, p)| p.as_mut())
    }

    /// Side panels with their identifiers, in display order.
    pub fn side_panels_mut(&mut self) -> impl Iterator<Item = (SidePanel, &mut dyn Panel)> + '_ {
        self.side.iter_mut().map(|(id, p)| (*id, p.as_mut()))
    }

    pub fn history_mut(&mut self) -> Option<&mut HistoryPanel> {
        self.side_mut(SidePanel::History)
            .and_then(|p| p.as_any_mut().downcast_mut::<HistoryPanel>())
    }

    pub fn definition_mut(&mut self) -> Option<&mut DefinitionPanel> {
        self.side_mut(SidePanel::Definition)
            .and_then(|p| p.as_any_mut().downcast_mut::<DefinitionPanel>())
    }

    pub fn chat_mut(&mut self) -> Option<&mut ChatPanel> {
        self.side_mut(SidePanel::Chat)
            .and_then(|p| p.as_any_mut().downcast_mut::<ChatPanel>())
    }

    pub fn info_mut(&mut self) -> Option<&mut InfoPanel> {
        self.side_mut(SidePanel::Info)
            .and_then(|p| p.as_any_mut().downcast_mut::<InfoPanel>())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_all_side_panels_registered() {
        let mut registry = PanelRegistry::new(280);
        for panel in SidePanel::ALL {
            assert!(registry.side(panel).is_some());
            assert!(registry.side_mut(panel).is_some());
        }
        assert_eq!(registry.side_panels_mut().count(), 4);
    }

    #[test]
    fn test_side_panel_names() {
        let registry = PanelRegistry::new(280);
        assert_eq!(registry.side(SidePanel::History).unwrap().name(), "history");
        assert_eq!(
            registry.side(SidePanel::Definition).unwrap().name(),
            "definition"
        );
        assert_eq!(registry.side(SidePanel::Chat).unwrap().name(), "chat");
        assert_eq!(registry.side(SidePanel::Info).unwrap().name(), "info");
    }

    #[test]
    fn test_downcast_accessors() {
        let mut registry = PanelRegistry::new(280);
        assert!(registry.history_mut().is_some());
        assert!(registry.definition_mut().is_some());
        assert!(registry.chat_mut().is_some());
        assert!(registry.info_mut().is_some());
    }

    #[test]
    fn test_downcast_reaches_concrete_state() {
        let mut registry = PanelRegistry::new(280);
        if let Some(definition) = registry.definition_mut() {
            definition.set_definition("crane", "A large wading bird.");
        }
        let title = registry.side(SidePanel::Definition).unwrap().title();
        assert!(title.contains("CRANE"));
    }
}
