//! Command module - Strategy pattern for CLI commands.
//!
//! Each command is a separate module implementing the `CommandExecutor`
//! trait. The interactive TUI is itself a command so the default invocation
//! and `debase tui` share one code path.

mod decode;
mod reset;
mod tui;

pub use decode::DecodeCommand;
pub use reset::ResetCommand;
pub use tui::TuiCommand;

use anyhow::Result;

/// Trait for command execution - Strategy pattern.
///
/// Each command struct holds its parsed arguments and implements
/// this trait to define its execution logic.
pub trait CommandExecutor {
    /// Executes the command with its parsed arguments.
    fn execute(&self) -> Result<()>;
}
