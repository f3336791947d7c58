//! Event types for the wordsquad application.
//!
//! This module provides:
//! - `Event` - Application-level events (keyboard, resize, tick)
//! - `EventHandler` - Polling for terminal events
//! - `PanelEvent` - Events emitted by panels to communicate with the application

use std::time::Duration;

use anyhow::Result;
use crossterm::event::{self, Event as CrosstermEvent, KeyEvent, KeyEventKind};

/// Application event
#[derive(Debug, Clone)]
pub enum Event {
    /// Keyboard event
    Key(KeyEvent),
    /// Terminal resize event
    Resize(u16, u16),
    /// Tick event (for animations and periodic updates)
    Tick,
    /// Terminal focus lost event
    FocusLost,
    /// Terminal focus gained event
    FocusGained,
}

/// Event handler for polling terminal events
pub struct EventHandler {
    tick_rate: Duration,
}

impl EventHandler {
    /// Create new event handler with specified tick rate
    pub fn new(tick_rate: Duration) -> Self {
        Self { tick_rate }
    }

    /// Wait for next event
    pub fn next(&self) -> Result<Event> {
        if event::poll(self.tick_rate)? {
            match event::read()? {
                // With kitty keyboard protocol, we receive Press, Release, and Repeat events.
                // Only handle Press events to avoid duplicate actions.
                CrosstermEvent::Key(key) if key.kind == KeyEventKind::Press => Ok(Event::Key(key)),
                CrosstermEvent::Key(_) => Ok(Event::Tick), // Ignore Release and Repeat
                CrosstermEvent::Resize(width, height) => Ok(Event::Resize(width, height)),
                CrosstermEvent::FocusLost => Ok(Event::FocusLost),
                CrosstermEvent::FocusGained => Ok(Event::FocusGained),
                _ => Ok(Event::Tick),
            }
        } else {
            Ok(Event::Tick)
        }
    }
}

/// Events emitted by panels to communicate with the application.
#[derive(Debug, Clone)]
pub enum PanelEvent {
    /// Request a UI redraw
    NeedsRedraw,

    /// Request application quit
    Quit,

    /// Submit the typed word as a guess
    SubmitGuess(String),

    /// Redeem a pending daily double hint at the given column
    SelectHintColumn(usize),

    /// Send a chat message from the local player
    SendChat(String),

    /// Archive the finished game and start a new one
    NewGame,

    /// Close the panel that emitted the event
    ClosePanel,

    /// Set status bar message
    SetStatusMessage { message: String, is_error: bool },

    /// Clear status bar message
    ClearStatus,
}
