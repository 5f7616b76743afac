//! Decode command - one-shot decoding for scripts and pipes.

use std::fs;
use std::io::{self, Read};
use std::path::PathBuf;

use anyhow::{bail, Context, Result};
use clap::Args;

use debase::decode;

use super::CommandExecutor;

/// Decode Base64 text to stdout.
///
/// The input can be provided as:
/// - Direct text: --code "aGVsbG8="
/// - A text file: --code-file message.b64
/// - Stdin (when neither flag is given)
#[derive(Args, Debug)]
pub struct DecodeCommand {
    /// The Base64 text (direct)
    #[arg(long, conflicts_with = "code_file")]
    pub code: Option<String>,

    /// Read the Base64 text from a file
    #[arg(long)]
    pub code_file: Option<PathBuf>,
}

impl CommandExecutor for DecodeCommand {
    fn execute(&self) -> Result<()> {
        let raw = self.read_input()?;
        if raw.trim().is_empty() {
            bail!("No input provided");
        }
        let text = decode(&raw).context("Input is not valid Base64")?;
        println!("{}", text);
        Ok(())
    }
}

impl DecodeCommand {
    fn read_input(&self) -> Result<String> {
        if let Some(code) = &self.code {
            return Ok(code.clone());
        }
        if let Some(path) = &self.code_file {
            return fs::read_to_string(path)
                .with_context(|| format!("Failed to read {}", path.display()));
        }
        let mut buffer = String::new();
        io::stdin()
            .read_to_string(&mut buffer)
            .context("Failed to read stdin")?;
        Ok(buffer)
    }
}
