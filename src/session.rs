//! The decode/clear/copy interaction state machine.
//!
//! A [`Session`] owns the input buffer, the decoded output, and the locked
//! flag, and drives the storage, notifier, animator, and clipboard
//! collaborators in response to the three user actions. The invariant it
//! maintains everywhere: `locked` is true exactly when the output is
//! non-empty.
//!
//! The one asynchronous boundary is the clear action: state is wiped only
//! after the animator's hide transition finishes, and the completion comes
//! back in through [`Session::transition_complete`] as an explicit event.
//! While that completion is pending, every other action is ignored so the
//! invariant cannot break mid-transition.

use crate::decode::{self, DecodeError};
use crate::storage::{PersistedPair, Storage};

/// Success message after decoding.
pub const MSG_DECODED: &str = "Decoded successfully";

/// Error message for malformed input.
pub const MSG_DECODE_FAILED: &str = "Something went wrong";

/// Success message after copying.
pub const MSG_COPIED: &str = "Copied to clipboard";

/// Named visual transitions the session asks the animator to play.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Transition {
    /// The output area appears and the input locks.
    RevealOutput,
    /// The output area disappears; completion triggers the deferred clear.
    HideOutput,
    /// The (now empty) input area reappears after a clear.
    RevealInput,
}

/// Transient success/error messages shown to the user.
pub trait Notifier {
    /// Show a success message.
    fn success(&mut self, message: &str);

    /// Show an error message.
    fn error(&mut self, message: &str);
}

/// Plays named transitions. `play` is fire-and-forget; the caller delivers
/// the completion back to the session via [`Session::transition_complete`].
pub trait Animator {
    /// Start playing a transition.
    fn play(&mut self, transition: Transition);
}

/// Best-effort system clipboard. Failures are not surfaced.
pub trait Clipboard {
    /// Write text to the clipboard.
    fn write_text(&mut self, content: &str);
}

/// Where the session is in the decode lifecycle.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Phase {
    /// The input is editable and can be decoded.
    Editing,
    /// Output is shown, the input is locked; copy and clear are available.
    Showing,
}

/// The interaction state machine.
pub struct Session<S: Storage> {
    storage: S,
    input: String,
    cursor: usize,
    output: String,
    locked: bool,
    phase: Phase,
    clear_pending: bool,
}

impl<S: Storage> Session<S> {
    /// Create an empty session in the editing phase.
    pub fn new(storage: S) -> Self {
        Self {
            storage,
            input: String::new(),
            cursor: 0,
            output: String::new(),
            locked: false,
            phase: Phase::Editing,
            clear_pending: false,
        }
    }

    /// Seed the session from storage.
    ///
    /// If the saved pair has output, the session starts directly in
    /// [`Phase::Showing`] and the reveal transition plays immediately, so a
    /// restart with saved output renders revealed without an editing flash.
    pub fn restore(&mut self, animator: &mut dyn Animator) {
        let Some(pair) = self.storage.load() else {
            return;
        };
        self.input = pair.input;
        self.cursor = self.input.chars().count();
        if !pair.output.is_empty() {
            self.output = pair.output;
            self.locked = true;
            self.phase = Phase::Showing;
            animator.play(Transition::RevealOutput);
        }
    }

    /// The current input text.
    pub fn input(&self) -> &str {
        &self.input
    }

    /// The decoded output text (empty means "no output").
    pub fn output(&self) -> &str {
        &self.output
    }

    /// Cursor position in the input, in characters.
    pub fn cursor(&self) -> usize {
        self.cursor
    }

    /// Whether the input is locked because output has been produced.
    pub fn is_locked(&self) -> bool {
        self.locked
    }

    /// The current lifecycle phase.
    pub fn phase(&self) -> Phase {
        self.phase
    }

    /// Whether a clear transition's completion is still pending.
    pub fn is_clear_pending(&self) -> bool {
        self.clear_pending
    }

    /// Whether the input currently accepts edits.
    pub fn is_editable(&self) -> bool {
        !self.locked && !self.clear_pending
    }

    /// The storage adapter, for inspecting what was persisted.
    pub fn storage(&self) -> &S {
        &self.storage
    }

    /// Decode the current input.
    ///
    /// Effective only while editing. Whitespace-only input is a silent no-op.
    /// On success the output is set, the input locks, the reveal transition
    /// plays, and the pair is persisted. On failure only an error
    /// notification is issued - no state changes, nothing is written.
    pub fn decode(&mut self, notifier: &mut dyn Notifier, animator: &mut dyn Animator) {
        if self.phase != Phase::Editing || self.clear_pending {
            return;
        }
        if self.input.trim().is_empty() {
            return;
        }
        match decode::decode(&self.input) {
            Ok(text) => {
                self.output = text;
                self.locked = true;
                self.phase = Phase::Showing;
                notifier.success(MSG_DECODED);
                animator.play(Transition::RevealOutput);
                self.persist();
            }
            Err(DecodeError::InvalidEncoding) => {
                notifier.error(MSG_DECODE_FAILED);
            }
        }
    }

    /// Start clearing the session.
    ///
    /// Effective only while showing. Plays the hide transition and defers the
    /// actual wipe until its completion arrives via
    /// [`Session::transition_complete`].
    pub fn clear(&mut self, animator: &mut dyn Animator) {
        if self.phase != Phase::Showing || self.clear_pending {
            return;
        }
        self.clear_pending = true;
        animator.play(Transition::HideOutput);
    }

    /// Copy the output to the clipboard.
    ///
    /// Effective only while showing. No state change, no storage write.
    pub fn copy(&mut self, clipboard: &mut dyn Clipboard, notifier: &mut dyn Notifier) {
        if self.phase != Phase::Showing || self.clear_pending {
            return;
        }
        clipboard.write_text(&self.output);
        notifier.success(MSG_COPIED);
    }

    /// Deliver an animator completion back into the state machine.
    ///
    /// Only the hide-output completion of a pending clear does anything:
    /// it wipes input, output, and the locked flag, returns to editing,
    /// reveals the empty input area, and persists the empty pair. Any other
    /// completion is informational.
    pub fn transition_complete(&mut self, transition: Transition, animator: &mut dyn Animator) {
        if transition != Transition::HideOutput || !self.clear_pending {
            return;
        }
        self.input.clear();
        self.cursor = 0;
        self.output.clear();
        self.locked = false;
        self.phase = Phase::Editing;
        self.clear_pending = false;
        animator.play(Transition::RevealInput);
        self.persist();
    }

    /// Replace the input wholesale (paste, tests). Ignored while locked.
    pub fn set_input(&mut self, text: impl Into<String>) {
        if !self.is_editable() {
            return;
        }
        self.input = text.into();
        self.cursor = self.input.chars().count();
    }

    /// Insert a character at the cursor. Ignored while locked.
    pub fn enter_char(&mut self, c: char) {
        if !self.is_editable() {
            return;
        }
        let index = self.byte_index();
        self.input.insert(index, c);
        self.move_cursor_right();
    }

    /// Delete the character before the cursor. Ignored while locked.
    pub fn delete_char(&mut self) {
        if !self.is_editable() || self.cursor == 0 {
            return;
        }

        let current_index = self.cursor;
        let before = self.input.chars().take(current_index - 1);
        let after = self.input.chars().skip(current_index);
        self.input = before.chain(after).collect();
        self.move_cursor_left();
    }

    /// Delete the character after the cursor. Ignored while locked.
    pub fn delete_char_forward(&mut self) {
        if !self.is_editable() || self.cursor >= self.input.chars().count() {
            return;
        }

        let current_index = self.cursor;
        let before = self.input.chars().take(current_index);
        let after = self.input.chars().skip(current_index + 1);
        self.input = before.chain(after).collect();
    }

    /// Move the cursor left.
    pub fn move_cursor_left(&mut self) {
        if !self.is_editable() {
            return;
        }
        self.cursor = self.clamp_cursor(self.cursor.saturating_sub(1));
    }

    /// Move the cursor right.
    pub fn move_cursor_right(&mut self) {
        if !self.is_editable() {
            return;
        }
        self.cursor = self.clamp_cursor(self.cursor.saturating_add(1));
    }

    /// Move the cursor to the start of the input.
    pub fn move_cursor_home(&mut self) {
        if !self.is_editable() {
            return;
        }
        self.cursor = 0;
    }

    /// Move the cursor to the end of the input.
    pub fn move_cursor_end(&mut self) {
        if !self.is_editable() {
            return;
        }
        self.cursor = self.input.chars().count();
    }

    fn clamp_cursor(&self, new_cursor: usize) -> usize {
        new_cursor.clamp(0, self.input.chars().count())
    }

    fn byte_index(&self) -> usize {
        self.input
            .char_indices()
            .map(|(i, _)| i)
            .nth(self.cursor)
            .unwrap_or(self.input.len())
    }

    fn persist(&mut self) {
        let pair = PersistedPair {
            input: self.input.clone(),
            output: self.output.clone(),
        };
        self.storage.save(&pair);
    }
}
