//! Side panel visibility and geometry for wordsquad.
//!
//! [`VisibilityController`] owns the show/hide state of the four side
//! panels and the rects they draw into. The app layer calls
//! [`VisibilityController::update_panel_visibility`] after resizes and
//! game events, and the toggle methods from hotkeys; rendering reads
//! back [`VisibilityController::panel_rect`].

pub mod geometry;
pub mod visibility;

pub use geometry::PanelRects;
pub use visibility::{ManualToggles, PanelContent, PanelVisibility, VisibilityController};
