//! Integration tests for the debase interaction lifecycle.
//!
//! The session is exercised end to end with recording fakes in place of the
//! TUI collaborators, and with both the in-memory and the file-backed store.
//! The standing invariant checked throughout: the input is locked exactly
//! when output exists.

use debase::session::{MSG_COPIED, MSG_DECODED, MSG_DECODE_FAILED};
use debase::storage::{FileStorage, MemoryStorage, PersistedPair, Storage};
use debase::{Animator, Clipboard, Notifier, Phase, Session, Transition};
use tempfile::TempDir;

/// Notifier that records every message it is asked to show.
#[derive(Default)]
struct RecordingNotifier {
    successes: Vec<String>,
    errors: Vec<String>,
}

impl Notifier for RecordingNotifier {
    fn success(&mut self, message: &str) {
        self.successes.push(message.to_string());
    }

    fn error(&mut self, message: &str) {
        self.errors.push(message.to_string());
    }
}

/// Animator that records every transition it is asked to play.
#[derive(Default)]
struct RecordingAnimator {
    played: Vec<Transition>,
}

impl Animator for RecordingAnimator {
    fn play(&mut self, transition: Transition) {
        self.played.push(transition);
    }
}

/// Clipboard that records every write.
#[derive(Default)]
struct RecordingClipboard {
    copied: Vec<String>,
}

impl Clipboard for RecordingClipboard {
    fn write_text(&mut self, content: &str) {
        self.copied.push(content.to_string());
    }
}

fn locked_matches_output<S: Storage>(session: &Session<S>) -> bool {
    session.is_locked() == !session.output().is_empty()
}

/// Decoding valid input locks the session, reveals the output, and persists.
#[test]
fn test_decode_success_lifecycle() {
    let mut session = Session::new(MemoryStorage::new());
    let mut notifier = RecordingNotifier::default();
    let mut animator = RecordingAnimator::default();

    session.set_input("aGVsbG8=");
    session.decode(&mut notifier, &mut animator);

    assert_eq!(session.output(), "hello");
    assert!(session.is_locked());
    assert_eq!(session.phase(), Phase::Showing);
    assert!(locked_matches_output(&session));

    assert_eq!(notifier.successes, vec![MSG_DECODED.to_string()]);
    assert!(notifier.errors.is_empty());
    assert_eq!(animator.played, vec![Transition::RevealOutput]);

    let saved = session.storage().saved().unwrap();
    assert_eq!(saved.input, "aGVsbG8=");
    assert_eq!(saved.output, "hello");
}

/// Invalid input produces an error toast and nothing else.
#[test]
fn test_invalid_input_is_rejected() {
    let mut session = Session::new(MemoryStorage::new());
    let mut notifier = RecordingNotifier::default();
    let mut animator = RecordingAnimator::default();

    session.set_input("not-valid-base64!!");
    session.decode(&mut notifier, &mut animator);

    assert_eq!(session.phase(), Phase::Editing);
    assert_eq!(session.output(), "");
    assert!(!session.is_locked());
    assert_eq!(session.input(), "not-valid-base64!!");
    assert!(locked_matches_output(&session));

    assert_eq!(notifier.errors, vec![MSG_DECODE_FAILED.to_string()]);
    assert!(notifier.successes.is_empty());
    assert!(animator.played.is_empty());
    assert!(session.storage().saved().is_none());
}

/// Empty and whitespace-only input is a silent no-op.
#[test]
fn test_empty_input_decode_is_silent() {
    for input in ["", "   ", " \n\t "] {
        let mut session = Session::new(MemoryStorage::new());
        let mut notifier = RecordingNotifier::default();
        let mut animator = RecordingAnimator::default();

        session.set_input(input);
        session.decode(&mut notifier, &mut animator);

        assert_eq!(session.phase(), Phase::Editing);
        assert!(notifier.successes.is_empty());
        assert!(notifier.errors.is_empty());
        assert!(animator.played.is_empty());
        assert!(session.storage().saved().is_none());
    }
}

/// A second decode while showing is ignored.
#[test]
fn test_decode_ignored_while_showing() {
    let mut session = Session::new(MemoryStorage::new());
    let mut notifier = RecordingNotifier::default();
    let mut animator = RecordingAnimator::default();

    session.set_input("aGVsbG8=");
    session.decode(&mut notifier, &mut animator);
    session.decode(&mut notifier, &mut animator);

    assert_eq!(notifier.successes.len(), 1);
    assert_eq!(animator.played.len(), 1);
}

/// Clear wipes everything, but only after the hide transition completes.
#[test]
fn test_clear_defers_until_transition_completes() {
    let mut session = Session::new(MemoryStorage::new());
    let mut notifier = RecordingNotifier::default();
    let mut animator = RecordingAnimator::default();

    session.set_input("aGVsbG8=");
    session.decode(&mut notifier, &mut animator);
    session.clear(&mut animator);

    // Still showing until the completion arrives.
    assert!(session.is_clear_pending());
    assert_eq!(session.phase(), Phase::Showing);
    assert_eq!(session.output(), "hello");
    assert!(session.is_locked());
    assert_eq!(
        animator.played,
        vec![Transition::RevealOutput, Transition::HideOutput]
    );

    session.transition_complete(Transition::HideOutput, &mut animator);

    assert!(!session.is_clear_pending());
    assert_eq!(session.phase(), Phase::Editing);
    assert_eq!(session.input(), "");
    assert_eq!(session.output(), "");
    assert!(!session.is_locked());
    assert!(locked_matches_output(&session));
    assert_eq!(
        animator.played,
        vec![
            Transition::RevealOutput,
            Transition::HideOutput,
            Transition::RevealInput,
        ]
    );

    // The persisted pair is cleared too.
    assert_eq!(session.storage().saved(), Some(&PersistedPair::default()));
}

/// Every action is ignored while a clear transition is in flight.
#[test]
fn test_actions_ignored_while_clear_is_pending() {
    let mut session = Session::new(MemoryStorage::new());
    let mut notifier = RecordingNotifier::default();
    let mut animator = RecordingAnimator::default();
    let mut clipboard = RecordingClipboard::default();

    session.set_input("aGVsbG8=");
    session.decode(&mut notifier, &mut animator);
    session.clear(&mut animator);

    session.decode(&mut notifier, &mut animator);
    session.clear(&mut animator);
    session.copy(&mut clipboard, &mut notifier);
    session.enter_char('x');

    assert_eq!(notifier.successes.len(), 1); // only the original decode
    assert!(clipboard.copied.is_empty());
    assert_eq!(animator.played.len(), 2); // reveal + hide, nothing more
    assert!(locked_matches_output(&session));
}

/// Clear does nothing while editing.
#[test]
fn test_clear_ignored_in_editing() {
    let mut session = Session::new(MemoryStorage::new());
    let mut animator = RecordingAnimator::default();

    session.set_input("aGVsbG8=");
    session.clear(&mut animator);

    assert!(!session.is_clear_pending());
    assert!(animator.played.is_empty());
}

/// Copy writes the output to the clipboard and changes no state.
#[test]
fn test_copy_has_no_side_effects_on_state() {
    let mut session = Session::new(MemoryStorage::new());
    let mut notifier = RecordingNotifier::default();
    let mut animator = RecordingAnimator::default();
    let mut clipboard = RecordingClipboard::default();

    session.set_input("aGVsbG8=");
    session.decode(&mut notifier, &mut animator);
    let saved_before = session.storage().saved().cloned();

    session.copy(&mut clipboard, &mut notifier);

    assert_eq!(clipboard.copied, vec!["hello".to_string()]);
    assert_eq!(notifier.successes.last().unwrap(), MSG_COPIED);
    assert_eq!(session.input(), "aGVsbG8=");
    assert_eq!(session.output(), "hello");
    assert!(session.is_locked());
    assert_eq!(session.phase(), Phase::Showing);
    assert_eq!(session.storage().saved().cloned(), saved_before);
}

/// Copy does nothing while editing.
#[test]
fn test_copy_ignored_in_editing() {
    let mut session = Session::new(MemoryStorage::new());
    let mut notifier = RecordingNotifier::default();
    let mut clipboard = RecordingClipboard::default();

    session.copy(&mut clipboard, &mut notifier);

    assert!(clipboard.copied.is_empty());
    assert!(notifier.successes.is_empty());
}

/// Completions for transitions other than a pending hide are informational.
#[test]
fn test_unrelated_transition_completion_is_ignored() {
    let mut session = Session::new(MemoryStorage::new());
    let mut notifier = RecordingNotifier::default();
    let mut animator = RecordingAnimator::default();

    session.set_input("aGVsbG8=");
    session.decode(&mut notifier, &mut animator);

    session.transition_complete(Transition::RevealOutput, &mut animator);
    session.transition_complete(Transition::HideOutput, &mut animator);

    assert_eq!(session.phase(), Phase::Showing);
    assert_eq!(session.output(), "hello");
    assert!(session.is_locked());
}

/// A fresh session seeded from the same store reproduces the decoded state.
#[test]
fn test_persistence_round_trip() {
    let tmp = TempDir::new().unwrap();
    let dir = tmp.path().join("debase");

    let mut session = Session::new(FileStorage::new(&dir));
    let mut notifier = RecordingNotifier::default();
    let mut animator = RecordingAnimator::default();
    session.set_input("aGVsbG8=");
    session.decode(&mut notifier, &mut animator);
    drop(session);

    let mut restored = Session::new(FileStorage::new(&dir));
    let mut animator = RecordingAnimator::default();
    restored.restore(&mut animator);

    assert_eq!(restored.input(), "aGVsbG8=");
    assert_eq!(restored.output(), "hello");
    assert!(restored.is_locked());
    assert_eq!(restored.phase(), Phase::Showing);
    assert!(locked_matches_output(&restored));
    // The reveal plays immediately so there is no editing flash.
    assert_eq!(animator.played, vec![Transition::RevealOutput]);
}

/// Clearing persists the empty pair, so a restart starts fresh.
#[test]
fn test_persistence_after_clear() {
    let tmp = TempDir::new().unwrap();
    let dir = tmp.path().join("debase");

    let mut session = Session::new(FileStorage::new(&dir));
    let mut notifier = RecordingNotifier::default();
    let mut animator = RecordingAnimator::default();
    session.set_input("aGVsbG8=");
    session.decode(&mut notifier, &mut animator);
    session.clear(&mut animator);
    session.transition_complete(Transition::HideOutput, &mut animator);
    drop(session);

    let mut restored = Session::new(FileStorage::new(&dir));
    let mut animator = RecordingAnimator::default();
    restored.restore(&mut animator);

    assert_eq!(restored.input(), "");
    assert_eq!(restored.output(), "");
    assert!(!restored.is_locked());
    assert_eq!(restored.phase(), Phase::Editing);
    assert!(animator.played.is_empty());
}

/// Restoring from an empty store leaves the session untouched.
#[test]
fn test_restore_without_saved_data() {
    let tmp = TempDir::new().unwrap();

    let mut session = Session::new(FileStorage::new(tmp.path().join("nothing-here")));
    let mut animator = RecordingAnimator::default();
    session.restore(&mut animator);

    assert_eq!(session.input(), "");
    assert_eq!(session.phase(), Phase::Editing);
    assert!(animator.played.is_empty());
}
