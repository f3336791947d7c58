//! Global hotkey processing.
//!
//! This module provides:
//! - `KeyBinding` type for hotkey mappings
//! - `HotkeyProcessor` trait for checking global hotkeys
//! - Default hotkey processor implementation
//! - Keyboard layout translation so Alt hotkeys fire on non-Latin layouts
//!
//! The processor converts keyboard events into `HotkeyAction`s, which
//! the app executes. This separation enables isolated unit testing
//! without full app context.

use std::collections::HashMap;

use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

// ============================================================================
// Keyboard layout translation
// ============================================================================

// ЙЦУКЕН and QWERTY rows aligned by physical key position,
// top row then home row then bottom row.
const CYRILLIC_LOWER: &str = "йцукенгшщзхъфывапролджэячсмитьбю";
const LATIN_LOWER: &str = "qwertyuiop[]asdfghjkl;'zxcvbnm,.";
const CYRILLIC_UPPER: &str = "ЙЦУКЕНГШЩЗХЪФЫВАПРОЛДЖЭЯЧСМИТЬБЮ";
const LATIN_UPPER: &str = "QWERTYUIOP{}ASDFGHJKL:\"ZXCVBNM<>";

/// Latin character on the same physical key as a Cyrillic one.
///
/// Characters outside the mapping come back unchanged.
pub fn layout_to_latin(ch: char) -> char {
    let lookup = |cyrillic: &str, latin: &str| {
        cyrillic
            .chars()
            .position(|c| c == ch)
            .and_then(|i| latin.chars().nth(i))
    };
    lookup(CYRILLIC_LOWER, LATIN_LOWER)
        .or_else(|| lookup(CYRILLIC_UPPER, LATIN_UPPER))
        .unwrap_or(ch)
}

/// Translate KeyEvent for hotkeys.
///
/// Applies the layout translation only when Ctrl or Alt is held,
/// so regular text input is unaffected.
pub fn translate_hotkey(key: KeyEvent) -> KeyEvent {
    if key
        .modifiers
        .intersects(KeyModifiers::CONTROL | KeyModifiers::ALT)
    {
        if let KeyCode::Char(ch) = key.code {
            let translated = layout_to_latin(ch);
            if translated != ch {
                return KeyEvent::new(KeyCode::Char(translated), key.modifiers);
            }
        }
    }
    key
}

// ============================================================================
// Key Binding Types
// ============================================================================

/// A key binding specification.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct KeyBinding {
    /// The key code (e.g., Char('h'), Esc)
    pub code: KeyCode,
    /// Required modifiers (e.g., ALT)
    pub modifiers: KeyModifiers,
}

impl KeyBinding {
    /// Create a new key binding.
    pub fn new(code: KeyCode, modifiers: KeyModifiers) -> Self {
        Self { code, modifiers }
    }

    /// Create an Alt+key binding.
    pub fn alt(code: KeyCode) -> Self {
        Self::new(code, KeyModifiers::ALT)
    }

    /// Create a key binding without modifiers.
    pub fn plain(code: KeyCode) -> Self {
        Self::new(code, KeyModifiers::NONE)
    }

    /// Check if a key event matches this binding.
    pub fn matches(&self, key: &KeyEvent) -> bool {
        self.code == key.code && key.modifiers.contains(self.modifiers)
    }
}

impl From<KeyEvent> for KeyBinding {
    fn from(event: KeyEvent) -> Self {
        Self {
            code: event.code,
            modifiers: event.modifiers,
        }
    }
}

// ============================================================================
// Hotkey Action Enum
// ============================================================================

/// Actions that can be triggered by global hotkeys.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HotkeyAction {
    // === Side panels ===
    /// Toggle the history panel
    ToggleHistory,
    /// Toggle the definition panel
    ToggleDefinition,
    /// Toggle the chat panel
    ToggleChat,
    /// Toggle the info overlay
    ToggleInfo,

    // === Game ===
    /// Archive the finished round and start a new one
    NewGame,
    /// Flip the hard mode rule
    ToggleHardMode,

    // === Application ===
    /// Switch to the next theme
    CycleTheme,
    /// Quit the application
    RequestQuit,
}

// ============================================================================
// Hotkey Processor Trait
// ============================================================================

/// Trait for processing global hotkeys.
///
/// Implementations check if a key event is a global hotkey and
/// return the corresponding action if so.
pub trait HotkeyProcessor {
    /// Check if key is a global hotkey.
    ///
    /// Returns the action if the key matches a hotkey binding,
    /// or None if it should be passed to the focused panel.
    fn process_hotkey(&self, key: &KeyEvent) -> Option<HotkeyAction>;

    /// Check if Escape should close the focused panel.
    ///
    /// Returns true if Escape is not captured by the focused panel
    /// and should return focus to the board.
    fn should_escape_close(&self, key: &KeyEvent, panel_captures_escape: bool) -> bool {
        key.code == KeyCode::Esc && key.modifiers.is_empty() && !panel_captures_escape
    }
}

// ============================================================================
// Default Hotkey Processor
// ============================================================================

/// Default hotkey processor with standard key bindings.
///
/// Uses Alt+key combinations for all hotkeys.
#[derive(Debug, Clone)]
pub struct DefaultHotkeyProcessor {
    bindings: HashMap<KeyBinding, HotkeyAction>,
}

impl Default for DefaultHotkeyProcessor {
    fn default() -> Self {
        Self::new()
    }
}

impl DefaultHotkeyProcessor {
    /// Create a new processor with default bindings.
    pub fn new() -> Self {
        let mut bindings = HashMap::new();

        // Side panel toggles
        bindings.insert(
            KeyBinding::alt(KeyCode::Char('h')),
            HotkeyAction::ToggleHistory,
        );
        bindings.insert(
            KeyBinding::alt(KeyCode::Char('H')),
            HotkeyAction::ToggleHistory,
        );
        bindings.insert(
            KeyBinding::alt(KeyCode::Char('d')),
            HotkeyAction::ToggleDefinition,
        );
        bindings.insert(
            KeyBinding::alt(KeyCode::Char('D')),
            HotkeyAction::ToggleDefinition,
        );
        bindings.insert(
            KeyBinding::alt(KeyCode::Char('c')),
            HotkeyAction::ToggleChat,
        );
        bindings.insert(
            KeyBinding::alt(KeyCode::Char('C')),
            HotkeyAction::ToggleChat,
        );
        bindings.insert(
            KeyBinding::alt(KeyCode::Char('i')),
            HotkeyAction::ToggleInfo,
        );
        bindings.insert(
            KeyBinding::alt(KeyCode::Char('I')),
            HotkeyAction::ToggleInfo,
        );

        // Game
        bindings.insert(KeyBinding::alt(KeyCode::Char('n')), HotkeyAction::NewGame);
        bindings.insert(KeyBinding::alt(KeyCode::Char('N')), HotkeyAction::NewGame);
        bindings.insert(
            KeyBinding::alt(KeyCode::Char('m')),
            HotkeyAction::ToggleHardMode,
        );
        bindings.insert(
            KeyBinding::alt(KeyCode::Char('M')),
            HotkeyAction::ToggleHardMode,
        );

        // Application
        bindings.insert(
            KeyBinding::alt(KeyCode::Char('t')),
            HotkeyAction::CycleTheme,
        );
        bindings.insert(
            KeyBinding::alt(KeyCode::Char('T')),
            HotkeyAction::CycleTheme,
        );
        bindings.insert(
            KeyBinding::alt(KeyCode::Char('q')),
            HotkeyAction::RequestQuit,
        );
        bindings.insert(
            KeyBinding::alt(KeyCode::Char('Q')),
            HotkeyAction::RequestQuit,
        );

        Self { bindings }
    }

    /// Add or replace a hotkey binding.
    pub fn bind(&mut self, key: KeyBinding, action: HotkeyAction) {
        self.bindings.insert(key, action);
    }

    /// Remove a hotkey binding.
    pub fn unbind(&mut self, key: &KeyBinding) {
        self.bindings.remove(key);
    }

    /// Get all current bindings.
    pub fn bindings(&self) -> &HashMap<KeyBinding, HotkeyAction> {
        &self.bindings
    }
}

impl HotkeyProcessor for DefaultHotkeyProcessor {
    fn process_hotkey(&self, key: &KeyEvent) -> Option<HotkeyAction> {
        // Only process Alt+key combinations
        if !key.modifiers.contains(KeyModifiers::ALT) {
            return None;
        }

        let binding = KeyBinding::from(*key);
        self.bindings.get(&binding).copied()
    }
}

// ============================================================================
// Tests
// ============================================================================
