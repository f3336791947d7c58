//! Side panel identifiers shared across crates.

use std::str::FromStr;

/// The four auxiliary panels surrounding the game board.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SidePanel {
    /// Archived past games, left of the board
    History,
    /// Definition of the solved word, top right
    Definition,
    /// Player chat, bottom right
    Chat,
    /// Rules and leaderboard overlay
    Info,
}

impl SidePanel {
    /// All side panels in display order.
    pub const ALL: [SidePanel; 4] = [
        SidePanel::History,
        SidePanel::Definition,
        SidePanel::Chat,
        SidePanel::Info,
    ];

    /// Stable lowercase identifier used in config and toggle keys.
    pub fn key(self) -> &'static str {
        match self {
            SidePanel::History => "history",
            SidePanel::Definition => "definition",
            SidePanel::Chat => "chat",
            SidePanel::Info => "info",
        }
    }
}

impl FromStr for SidePanel {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "history" => Ok(SidePanel::History),
            "definition" => Ok(SidePanel::Definition),
            "chat" => Ok(SidePanel::Chat),
            "info" => Ok(SidePanel::Info),
            _ => Err(format!("Unknown side panel: {}", s)),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_key_round_trip() {
        for panel in SidePanel::ALL {
            assert_eq!(panel.key().parse::<SidePanel>().unwrap(), panel);
        }
    }

    #[test]
    fn test_unknown_key_rejected() {
        assert!("board".parse::<SidePanel>().is_err());
        assert!("".parse::<SidePanel>().is_err());
    }
}
