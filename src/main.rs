//! Debase - decode Base64 text in the terminal.
//!
//! Running `debase` with no arguments opens the interactive decoder; the
//! subcommands cover scripted use.

use anyhow::Result;
use clap::{Parser, Subcommand};

mod commands;

use commands::{CommandExecutor, DecodeCommand, ResetCommand, TuiCommand};

/// Decode Base64 text in the terminal.
///
/// Paste or type Base64, decode it, copy the result, clear to start over.
/// The last input/output pair is saved and restored on the next run.
#[derive(Parser)]
#[command(name = "debase")]
#[command(version)]
#[command(about = "Decode Base64 text in the terminal")]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// Decode Base64 from an argument, a file, or stdin
    Decode(DecodeCommand),

    /// Clear the saved input/output pair
    Reset(ResetCommand),

    /// Open the interactive decoder (the default)
    Tui(TuiCommand),
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    match cli.command {
        Some(Commands::Decode(cmd)) => cmd.execute(),
        Some(Commands::Reset(cmd)) => cmd.execute(),
        Some(Commands::Tui(cmd)) => cmd.execute(),
        None => TuiCommand::default().execute(),
    }
}
