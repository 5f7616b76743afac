//! Application state for the TUI.
//!
//! [`TuiApp`] bundles the [`Session`] with concrete collaborators: a toast
//! queue for notifications, a timer-backed animator, and the OSC 52
//! clipboard. The collaborators are separate fields so the session can
//! borrow them independently during an action.

use std::time::{Duration, Instant};

use tokio::sync::mpsc;

use crate::clipboard::Osc52Clipboard;
use crate::config::AppConfig;
use crate::session::{Animator, Notifier, Session, Transition};
use crate::storage::Storage;

use super::event::Event;

/// Kind of toast message.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ToastKind {
    /// A success notification (green).
    Success,
    /// An error notification (red).
    Error,
}

/// A transient on-screen message.
#[derive(Debug, Clone)]
pub struct Toast {
    /// Success or error.
    pub kind: ToastKind,
    /// The message text.
    pub text: String,
    /// When the toast should disappear.
    pub expires_at: Instant,
}

/// Notifier that queues toasts for rendering.
#[derive(Debug)]
pub struct ToastNotifier {
    toasts: Vec<Toast>,
    ttl: Duration,
}

impl ToastNotifier {
    /// Create a notifier whose toasts live for `ttl`.
    pub fn new(ttl: Duration) -> Self {
        Self {
            toasts: Vec::new(),
            ttl,
        }
    }

    /// Currently visible toasts, oldest first.
    pub fn toasts(&self) -> &[Toast] {
        &self.toasts
    }

    /// Drop expired toasts.
    pub fn prune(&mut self, now: Instant) {
        self.toasts.retain(|t| t.expires_at > now);
    }

    fn push(&mut self, kind: ToastKind, text: &str) {
        self.toasts.push(Toast {
            kind,
            text: text.to_string(),
            expires_at: Instant::now() + self.ttl,
        });
    }
}

impl Notifier for ToastNotifier {
    fn success(&mut self, message: &str) {
        self.push(ToastKind::Success, message);
    }

    fn error(&mut self, message: &str) {
        self.push(ToastKind::Error, message);
    }
}

/// Animator that schedules completion events on the main loop.
///
/// `play` records the active transition (so rendering can fade) and spawns a
/// timer that sends [`Event::TransitionDone`] back through the event channel
/// once the fixed duration elapses. Transitions always run to completion.
#[derive(Debug)]
pub struct TickAnimator {
    tx: mpsc::UnboundedSender<Event>,
    duration: Duration,
    active: Option<(Transition, Instant)>,
}

impl TickAnimator {
    /// Create an animator with a fixed transition duration.
    pub fn new(tx: mpsc::UnboundedSender<Event>, duration: Duration) -> Self {
        Self {
            tx,
            duration,
            active: None,
        }
    }

    /// The active transition and its elapsed fraction in `0.0..=1.0`.
    pub fn progress(&self, now: Instant) -> Option<(Transition, f64)> {
        let (transition, started) = self.active?;
        let elapsed = now.saturating_duration_since(started).as_secs_f64();
        let fraction = (elapsed / self.duration.as_secs_f64().max(f64::EPSILON)).min(1.0);
        Some((transition, fraction))
    }

    /// Mark a transition as finished. Called when its completion event is
    /// taken off the channel.
    pub fn finish(&mut self, transition: Transition) {
        if matches!(self.active, Some((active, _)) if active == transition) {
            self.active = None;
        }
    }
}

impl Animator for TickAnimator {
    fn play(&mut self, transition: Transition) {
        self.active = Some((transition, Instant::now()));
        let tx = self.tx.clone();
        let duration = self.duration;
        tokio::spawn(async move {
            tokio::time::sleep(duration).await;
            let _ = tx.send(Event::TransitionDone(transition));
        });
    }
}

/// Application state for the decoder TUI.
pub struct TuiApp<S: Storage> {
    /// The interaction state machine.
    pub session: Session<S>,
    /// Toast queue.
    pub notifier: ToastNotifier,
    /// Transition timer.
    pub animator: TickAnimator,
    /// OSC 52 clipboard writer.
    pub clipboard: Osc52Clipboard,
    /// Whether the app should quit.
    pub should_quit: bool,
}

impl<S: Storage> TuiApp<S> {
    /// Create the app and seed the session from storage.
    ///
    /// Must run inside a tokio runtime: restoring a saved output plays the
    /// reveal transition, which schedules its completion timer.
    pub fn new(storage: S, config: &AppConfig, tx: mpsc::UnboundedSender<Event>) -> Self {
        let mut animator = TickAnimator::new(tx, config.transition());
        let mut session = Session::new(storage);
        session.restore(&mut animator);
        Self {
            session,
            notifier: ToastNotifier::new(config.toast()),
            animator,
            clipboard: Osc52Clipboard,
            should_quit: false,
        }
    }

    /// Periodic housekeeping on each tick.
    pub fn on_tick(&mut self) {
        self.notifier.prune(Instant::now());
    }

    /// Route an animator completion into the session.
    pub fn on_transition_done(&mut self, transition: Transition) {
        self.animator.finish(transition);
        self.session
            .transition_complete(transition, &mut self.animator);
    }

    /// Decode the current input.
    pub fn decode(&mut self) {
        self.session.decode(&mut self.notifier, &mut self.animator);
    }

    /// Clear the decoded output (deferred until the hide transition ends).
    pub fn clear(&mut self) {
        self.session.clear(&mut self.animator);
    }

    /// Copy the decoded output to the clipboard.
    pub fn copy(&mut self) {
        self.session.copy(&mut self.clipboard, &mut self.notifier);
    }
}
