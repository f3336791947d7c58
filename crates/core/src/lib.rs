//! Core types and traits for wordsquad panels.
//!
//! This crate provides the foundational abstractions for building panels
//! without coupling them to the application state.

pub mod event;
pub mod panel;
mod side_panel;

pub use event::{Event, EventHandler, PanelEvent};
pub use panel::{Panel, RenderContext};
pub use side_panel::SidePanel;

// Re-export theme for convenience
pub use wordsquad_theme::Theme;
