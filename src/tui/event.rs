//! Event handling for the TUI.

use std::time::Duration;

use crossterm::event::{self, Event as CrosstermEvent, KeyCode, KeyEvent, KeyModifiers};
use tokio::sync::mpsc;

use crate::session::Transition;
use crate::storage::Storage;

use super::app::TuiApp;

/// Application events.
#[derive(Debug)]
pub enum Event {
    /// Terminal tick (for toast expiry and animation progress).
    Tick,
    /// Keyboard event.
    Key(KeyEvent),
    /// Terminal resize.
    Resize(u16, u16),
    /// A transition's fixed duration elapsed.
    TransitionDone(Transition),
}

/// Event handler that reads terminal events in a separate task.
pub struct EventHandler {
    /// Sender to main loop.
    tx: mpsc::UnboundedSender<Event>,
    /// Receiver in main loop.
    rx: mpsc::UnboundedReceiver<Event>,
}

impl EventHandler {
    /// Create a new event handler.
    pub fn new() -> Self {
        let (tx, rx) = mpsc::unbounded_channel();
        Self { tx, rx }
    }

    /// Get the sender for spawning the event loop (the animator shares it).
    pub fn sender(&self) -> mpsc::UnboundedSender<Event> {
        self.tx.clone()
    }

    /// Receive the next event.
    pub async fn next(&mut self) -> Option<Event> {
        self.rx.recv().await
    }

    /// Spawn the event reading task.
    pub fn spawn_reader(tx: mpsc::UnboundedSender<Event>, tick_rate: Duration) {
        tokio::spawn(async move {
            loop {
                // Poll for events with timeout
                if event::poll(tick_rate).unwrap_or(false) {
                    match event::read() {
                        Ok(CrosstermEvent::Key(key)) => {
                            if tx.send(Event::Key(key)).is_err() {
                                break;
                            }
                        }
                        Ok(CrosstermEvent::Resize(w, h)) => {
                            if tx.send(Event::Resize(w, h)).is_err() {
                                break;
                            }
                        }
                        _ => {}
                    }
                } else {
                    // Send tick on timeout
                    if tx.send(Event::Tick).is_err() {
                        break;
                    }
                }
            }
        });
    }
}

impl Default for EventHandler {
    fn default() -> Self {
        Self::new()
    }
}

/// Result of handling a key event.
#[derive(Debug, PartialEq, Eq)]
pub enum KeyAction {
    /// No action needed.
    None,
    /// Quit the application.
    Quit,
}

/// Handle a key event and update app state.
///
/// Decode, clear, and copy are chords so plain typing (including Enter for
/// newlines in a wrapped paste) always goes into the input buffer. The
/// session ignores actions that are invalid for its current phase.
pub fn handle_key_event<S: Storage>(app: &mut TuiApp<S>, key: KeyEvent) -> KeyAction {
    match key.code {
        // Quit on Ctrl+C or Ctrl+Q
        KeyCode::Char('c') | KeyCode::Char('q') if key.modifiers.contains(KeyModifiers::CONTROL) => {
            app.should_quit = true;
            KeyAction::Quit
        }

        // Escape also quits
        KeyCode::Esc => {
            app.should_quit = true;
            KeyAction::Quit
        }

        // Ctrl+D decodes the input
        KeyCode::Char('d') if key.modifiers.contains(KeyModifiers::CONTROL) => {
            app.decode();
            KeyAction::None
        }

        // Ctrl+R clears the output and starts over
        KeyCode::Char('r') if key.modifiers.contains(KeyModifiers::CONTROL) => {
            app.clear();
            KeyAction::None
        }

        // Ctrl+Y copies the output to the clipboard
        KeyCode::Char('y') if key.modifiers.contains(KeyModifiers::CONTROL) => {
            app.copy();
            KeyAction::None
        }

        // Enter inserts a newline into the input
        KeyCode::Enter => {
            app.session.enter_char('\n');
            KeyAction::None
        }

        // Backspace deletes character before cursor
        KeyCode::Backspace => {
            app.session.delete_char();
            KeyAction::None
        }

        // Delete removes character after cursor
        KeyCode::Delete => {
            app.session.delete_char_forward();
            KeyAction::None
        }

        // Arrow keys for cursor movement
        KeyCode::Left => {
            app.session.move_cursor_left();
            KeyAction::None
        }
        KeyCode::Right => {
            app.session.move_cursor_right();
            KeyAction::None
        }

        // Home/End for cursor
        KeyCode::Home => {
            app.session.move_cursor_home();
            KeyAction::None
        }
        KeyCode::End => {
            app.session.move_cursor_end();
            KeyAction::None
        }

        // Regular character input
        KeyCode::Char(c) => {
            app.session.enter_char(c);
            KeyAction::None
        }

        _ => KeyAction::None,
    }
}
