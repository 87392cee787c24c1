// src/compose/serial.rs

//! Sequential composition.

use tracing::debug;

use crate::errors::{Result, TickrunError};
use crate::task::{CompletionObserver, CompletionSignal, Task};

/// An ordered group of tasks, driven one at a time in insertion order.
///
/// The next child starts only after the previous one has signalled
/// completion, and it starts *within the same tick*: when a child
/// finishes during a `step`, the cursor advances and the next child is
/// stepped before the call returns, so chains of quickly-finishing
/// children do not pay an idle tick per transition.
///
/// Ordering guarantees, for children `[c1, .., cn]`:
///
/// - `ci`'s completion notification fires strictly before `ci+1` is
///   first driven, and strictly before `ci+1`'s notification.
/// - The group's own notification fires strictly after `cn`'s.
///
/// A group with no children completes on its first step without driving
/// anything.
#[derive(Default)]
pub struct SerialGroup {
    children: Vec<Box<dyn Task>>,
    cursor: usize,
    started: bool,
    done: bool,
    signal: CompletionSignal,
}

impl SerialGroup {
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a child task.
    ///
    /// # Panics
    ///
    /// Panics if the group has already been stepped. The tree is mutable
    /// while it is being built and frozen once scheduling begins;
    /// appending mid-run would corrupt the cursor invariant, so it fails
    /// loudly instead.
    pub fn add(&mut self, task: impl Task + 'static) {
        self.add_boxed(Box::new(task));
    }

    /// Append an already-boxed child task. Same rules as [`add`](Self::add).
    pub fn add_boxed(&mut self, task: Box<dyn Task>) {
        assert!(
            !self.started,
            "SerialGroup::add called after scheduling began"
        );
        self.children.push(task);
    }

    pub fn len(&self) -> usize {
        self.children.len()
    }

    pub fn is_empty(&self) -> bool {
        self.children.is_empty()
    }
}

impl Task for SerialGroup {
    fn step(&mut self) -> Result<()> {
        if self.done {
            return Err(TickrunError::SteppedAfterDone);
        }
        self.started = true;

        // The child at the cursor is never already done: the cursor
        // advances past a child in the same call that completes it.
        while let Some(child) = self.children.get_mut(self.cursor) {
            child.step()?;
            if !child.is_done() {
                return Ok(());
            }
            debug!(
                finished = self.cursor,
                total = self.children.len(),
                "serial child finished; advancing cursor"
            );
            self.cursor += 1;
        }

        self.done = true;
        debug!(children = self.children.len(), "serial group complete");
        self.signal.fire();
        Ok(())
    }

    fn is_done(&self) -> bool {
        self.done
    }

    fn on_complete(&mut self, observer: CompletionObserver) {
        self.signal.subscribe(observer);
    }
}
