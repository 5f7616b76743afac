//! # Debase - decode Base64 text in the terminal
//!
//! Debase is a small interactive decoder: paste or type Base64 text, decode
//! it to plain text, copy the result to the system clipboard, and clear it to
//! start over. The last input/output pair survives restarts.
//!
//! ## Overview
//!
//! The heart of the crate is the [`Session`] state machine. It owns the input
//! buffer, the decoded output, and the locked flag, and it reacts to exactly
//! three user actions: decode, clear, and copy. Everything visual is pushed
//! out through small collaborator traits:
//!
//! - [`Notifier`]: transient success/error messages (toasts in the TUI)
//! - [`Animator`]: named reveal/hide transitions with deferred completion
//! - [`Clipboard`]: best-effort system clipboard writes
//!
//! Persistence goes through the [`Storage`] trait so tests can swap the
//! file-backed store for an in-memory one.
//!
//! ## Example Usage
//!
//! ```rust
//! use debase::{Animator, MemoryStorage, Notifier, Phase, Session, Transition};
//!
//! struct Silent;
//! impl Notifier for Silent {
//!     fn success(&mut self, _message: &str) {}
//!     fn error(&mut self, _message: &str) {}
//! }
//!
//! struct NoAnim;
//! impl Animator for NoAnim {
//!     fn play(&mut self, _transition: Transition) {}
//! }
//!
//! let mut session = Session::new(MemoryStorage::new());
//! session.set_input("aGVsbG8=");
//! session.decode(&mut Silent, &mut NoAnim);
//!
//! assert_eq!(session.output(), "hello");
//! assert_eq!(session.phase(), Phase::Showing);
//! assert!(session.is_locked());
//! ```
//!
//! ## Modules
//!
//! - [`decode`]: Base64-to-text decoding with error classification
//! - [`session`]: the decode/clear/copy interaction state machine
//! - [`storage`]: persistence of the last input/output pair
//! - [`clipboard`]: OSC 52 system clipboard writer
//! - [`config`]: TOML configuration (tick rate, animation timing)
//! - [`tui`]: ratatui front end

pub mod clipboard;
pub mod config;
pub mod decode;
pub mod session;
pub mod storage;
pub mod tui;

pub use decode::{decode, DecodeError};
pub use session::{Animator, Clipboard, Notifier, Phase, Session, Transition};
pub use storage::{FileStorage, MemoryStorage, PersistedPair, Storage};
