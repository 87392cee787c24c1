// src/task/signal.rs

//! One-shot completion signalling.

use tracing::trace;

use crate::task::CompletionObserver;

/// An observer list with a fired flag, delivering a zero-argument
/// completion notification exactly once.
///
/// Every built-in task type owns one of these and delegates its
/// `on_complete` registration to [`subscribe`](CompletionSignal::subscribe).
/// The contract it enforces:
///
/// - [`fire`](CompletionSignal::fire) invokes every registered observer
///   exactly once; a second `fire` is a no-op.
/// - Observers registered after the signal has fired are invoked
///   immediately, so a late subscriber still sees exactly one call.
///
/// The owning task is responsible for only firing *after* its own done
/// flag has been set, so that observers which re-inspect the task see it
/// completed.
#[derive(Default)]
pub struct CompletionSignal {
    observers: Vec<CompletionObserver>,
    fired: bool,
}

impl CompletionSignal {
    pub fn new() -> Self {
        Self::default()
    }

    /// Register an observer.
    ///
    /// If the signal has already fired, the observer runs right away.
    pub fn subscribe(&mut self, observer: CompletionObserver) {
        if self.fired {
            trace!("late subscription on fired signal; invoking immediately");
            observer();
            return;
        }
        self.observers.push(observer);
    }

    /// Fire the signal, draining and invoking all observers.
    ///
    /// Idempotent: only the first call delivers notifications.
    pub fn fire(&mut self) {
        if self.fired {
            return;
        }
        // Flag first, so a re-entrant fire from inside an observer is a
        // no-op rather than a double delivery.
        self.fired = true;
        trace!(observers = self.observers.len(), "completion signal firing");
        for observer in self.observers.drain(..) {
            observer();
        }
    }

    pub fn has_fired(&self) -> bool {
        self.fired
    }
}

impl std::fmt::Debug for CompletionSignal {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("CompletionSignal")
            .field("observers", &self.observers.len())
            .field("fired", &self.fired)
            .finish()
    }
}
