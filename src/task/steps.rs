// src/task/steps.rs

//! Adapter for iterator-shaped workloads.

use tracing::trace;

use crate::errors::{Result, TickrunError};
use crate::task::{CompletionObserver, CompletionSignal, Task};

/// Wraps a finite lazy sequence of suspension points as a [`Task`].
///
/// The element payload is ignored; each produced element only means "not
/// done yet", and exhausting the sequence means done. This is how a
/// workload written as a plain iterator (or generator-style state
/// machine) joins a task tree without knowing anything about it.
///
/// A single adapter must only ever be driven from one call site; it is
/// not thread-safe and does not need to be.
pub struct StepsTask<I> {
    steps: I,
    done: bool,
    signal: CompletionSignal,
}

impl<I: Iterator> StepsTask<I> {
    pub fn new(steps: impl IntoIterator<IntoIter = I>) -> Self {
        Self {
            steps: steps.into_iter(),
            done: false,
            signal: CompletionSignal::new(),
        }
    }
}

impl<I: Iterator> Task for StepsTask<I> {
    fn step(&mut self) -> Result<()> {
        if self.done {
            return Err(TickrunError::SteppedAfterDone);
        }
        match self.steps.next() {
            Some(_) => {
                trace!("steps task yielded; still pending");
            }
            None => {
                self.done = true;
                self.signal.fire();
            }
        }
        Ok(())
    }

    fn is_done(&self) -> bool {
        self.done
    }

    fn on_complete(&mut self, observer: CompletionObserver) {
        self.signal.subscribe(observer);
    }
}
