//! Application orchestrator for wordsquad.
//!
//! This crate ties the game session to the panels and provides:
//! - `App` struct - the main application and event loop
//! - `AppState` - global application state
//! - `PanelRegistry` - the board plus the four side panels
//! - Hotkey bindings with keyboard-layout translation
//!
//! # Architecture
//!
//! ```text
//! ┌────────────────────────────────────────────────────────┐
//! │                    wordsquad (bin)                     │
//! │  main.rs - entry point, terminal setup, rendering      │
//! └────────────────────────────────────────────────────────┘
//!                            │
//!                            ▼
//! ┌────────────────────────────────────────────────────────┐
//! │                wordsquad-app (this crate)              │
//! │  App, AppState, PanelRegistry, hotkeys, event loop     │
//! └────────────────────────────────────────────────────────┘
//!        │              │               │
//!        ▼              ▼               ▼
//! ┌───────────┐  ┌────────────┐  ┌────────────┐
//! │   game    │  │   layout   │  │   panels   │
//! └───────────┘  └────────────┘  └────────────┘
//! ```

// Internal modules
pub mod app;
pub mod hotkeys;
pub mod registry;
pub mod state;

// Re-export main types for convenience
pub use app::App;
pub use registry::PanelRegistry;
pub use state::AppState;
