//! Panel trait definition for wordsquad panels.
//!
//! Panels are decoupled from application state and communicate
//! through events.

use std::any::Any;

use crossterm::event::KeyEvent;
use ratatui::{buffer::Buffer, layout::Rect};
use wordsquad_theme::Theme;

use crate::PanelEvent;

/// Render context passed to panels during rendering.
///
/// Contains all information a panel needs for rendering
/// without requiring access to the full application state.
pub struct RenderContext<'a> {
    /// Current theme
    pub theme: &'a Theme,
    /// Whether this panel is currently focused
    pub is_focused: bool,
    /// Terminal width
    pub terminal_width: u16,
    /// Terminal height
    pub terminal_height: u16,
}

/// Trait for all wordsquad panels.
///
/// Panels communicate with the application through `PanelEvent`s
/// instead of directly modifying application state.
pub trait Panel: Any {
    /// Unique name for panel identification.
    fn name(&self) -> &'static str;

    /// Dynamic title for display in the panel header.
    fn title(&self) -> String;

    /// Render the panel to the buffer.
    fn render(&mut self, area: Rect, buf: &mut Buffer, ctx: &RenderContext);

    /// Handle keyboard input.
    ///
    /// Returns a list of events to be processed by the application.
    fn handle_key(&mut self, key: KeyEvent) -> Vec<PanelEvent>;

    /// Periodic tick for background updates.
    fn tick(&mut self) -> Vec<PanelEvent> {
        vec![]
    }

    /// Move the panel cursor to its first interactive element.
    ///
    /// Called when focus enters the panel after it becomes visible.
    fn focus_first(&mut self) {}

    /// Check if panel captures Escape key.
    ///
    /// Returns true if panel handles Escape internally
    /// (e.g., to clear a partially typed input).
    fn captures_escape(&self) -> bool {
        false
    }

    /// Downcast to concrete type (immutable).
    fn as_any(&self) -> &dyn Any;

    /// Downcast to concrete type (mutable).
    fn as_any_mut(&mut self) -> &mut dyn Any;
}
