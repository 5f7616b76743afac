//! System clipboard via the OSC 52 escape sequence.
//!
//! OSC 52 lets a terminal program set the system clipboard without any
//! platform clipboard library; it is supported by most modern terminals
//! (iTerm2, Alacritty, Kitty, WezTerm, Windows Terminal). Terminals that do
//! not support it silently drop the sequence, which matches the best-effort
//! contract of [`Clipboard`].

use std::io::{self, Write};

use base64::{engine::general_purpose::STANDARD as BASE64, Engine};

use crate::session::Clipboard;

/// Clipboard writer that emits an OSC 52 sequence on stdout.
#[derive(Debug, Default)]
pub struct Osc52Clipboard;

impl Osc52Clipboard {
    /// Build and return the escape sequence for the given content.
    fn sequence(content: &str) -> String {
        format!("\x1b]52;c;{}\x07", BASE64.encode(content))
    }

    fn emit(content: &str) -> io::Result<()> {
        let mut stdout = io::stdout().lock();
        stdout.write_all(Self::sequence(content).as_bytes())?;
        stdout.flush()
    }
}

impl Clipboard for Osc52Clipboard {
    fn write_text(&mut self, content: &str) {
        // Best-effort: a failed write is indistinguishable from a terminal
        // that ignores OSC 52, so neither is surfaced.
        let _ = Self::emit(content);
    }
}
