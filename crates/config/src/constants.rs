//! Application constants

// ===== UI and layout constants =====

/// Minimum terminal width for the full side-by-side layout.
/// At or below this width the automatic side panel logic is inactive.
pub const SIDE_PANEL_MIN_WIDTH: u16 = 155;

/// Minimum terminal width for medium (overlay) mode
pub const MEDIUM_MIN_WIDTH: u16 = 48;

/// History panel width in full layout
pub const HISTORY_PANEL_WIDTH: u16 = 38;

/// Definition panel width in full layout
pub const DEFINITION_PANEL_WIDTH: u16 = 40;

/// Chat panel width in full layout
pub const CHAT_PANEL_WIDTH: u16 = 40;

/// Info overlay width
pub const INFO_PANEL_WIDTH: u16 = 46;

/// Overlay panel width in medium mode
pub const OVERLAY_PANEL_WIDTH: u16 = 42;

// ===== Performance constants =====

/// Maximum number of log entries
pub const MAX_LOG_ENTRIES: usize = 1000;

/// Event update interval in milliseconds (42ms = ~24 FPS)
pub const EVENT_HANDLER_INTERVAL_MS: u64 = 42;

/// Maximum chat messages kept in memory and on disk
pub const MAX_CHAT_MESSAGES: usize = 200;

/// Maximum archived games kept in history
pub const MAX_PAST_GAMES: usize = 100;
