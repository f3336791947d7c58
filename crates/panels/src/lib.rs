//! The five wordsquad panels: board, history, definition, chat, info.
//!
//! Each panel implements [`wordsquad_core::Panel`] and talks to the
//! application through `PanelEvent`s. The app pushes game state into
//! panels through their `sync`/`set_*` methods after every mutation.

pub mod board;
pub mod chat;
pub mod definition;
pub mod history;
pub mod info;
pub mod input;
pub mod wrap;

pub use board::BoardPanel;
pub use chat::ChatPanel;
pub use definition::DefinitionPanel;
pub use history::HistoryPanel;
pub use info::{InfoPanel, ScoreRow};
pub use input::TextInput;
pub use wrap::wrap_text;
