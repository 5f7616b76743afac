//! Terminal user interface for the interactive decoder.
//!
//! This module provides the ratatui front end: terminal setup/teardown, the
//! event pump, key handling, and rendering.

mod app;
pub mod event;
mod ui;

pub use app::{TickAnimator, Toast, ToastKind, ToastNotifier, TuiApp};
pub use event::{handle_key_event, Event, EventHandler, KeyAction};
pub use ui::render;

use std::io;

use crossterm::{
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use ratatui::{backend::CrosstermBackend, Terminal};
use thiserror::Error;

/// Errors from terminal setup and teardown.
#[derive(Error, Debug)]
pub enum TuiError {
    /// The terminal could not be configured or restored.
    #[error("Terminal error: {0}")]
    Terminal(String),
}

/// Initialize the terminal for TUI mode.
pub fn init_terminal() -> Result<Terminal<CrosstermBackend<io::Stdout>>, TuiError> {
    enable_raw_mode().map_err(|e| TuiError::Terminal(format!("Failed to enable raw mode: {}", e)))?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen)
        .map_err(|e| TuiError::Terminal(format!("Failed to enter alternate screen: {}", e)))?;
    let backend = CrosstermBackend::new(stdout);
    Terminal::new(backend)
        .map_err(|e| TuiError::Terminal(format!("Failed to create terminal: {}", e)))
}

/// Restore the terminal to normal mode.
pub fn restore_terminal(terminal: &mut Terminal<CrosstermBackend<io::Stdout>>) -> Result<(), TuiError> {
    disable_raw_mode().map_err(|e| TuiError::Terminal(format!("Failed to disable raw mode: {}", e)))?;
    execute!(terminal.backend_mut(), LeaveAlternateScreen)
        .map_err(|e| TuiError::Terminal(format!("Failed to leave alternate screen: {}", e)))?;
    terminal
        .show_cursor()
        .map_err(|e| TuiError::Terminal(format!("Failed to show cursor: {}", e)))?;
    Ok(())
}
