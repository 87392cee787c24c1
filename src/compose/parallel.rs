// src/compose/parallel.rs

//! Concurrent composition.

use tracing::debug;

use crate::errors::{Result, TickrunError};
use crate::task::{CompletionObserver, CompletionSignal, Task};

/// A group of tasks all advanced within the same tick.
///
/// "Parallel" is a scheduling topology, not thread parallelism: on every
/// `step`, each not-yet-done child is stepped exactly once, in insertion
/// order, on the calling thread. All children are therefore started in
/// the tick the group is first driven, including when earlier siblings
/// complete synchronously during that tick.
///
/// No ordering is imposed between sibling completions. The group
/// completes on the tick its slowest child finishes, and its own
/// notification fires strictly after every child's. A group with no
/// children completes on its first step without driving anything.
#[derive(Default)]
pub struct ParallelGroup {
    children: Vec<Box<dyn Task>>,
    remaining: usize,
    started: bool,
    done: bool,
    signal: CompletionSignal,
}

impl ParallelGroup {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a child task to the membership set.
    ///
    /// # Panics
    ///
    /// Panics if the group has already been stepped; the membership is
    /// frozen once scheduling begins, so mid-run mutation fails loudly
    /// rather than corrupting the remaining-count.
    pub fn add(&mut self, task: impl Task + 'static) {
        self.add_boxed(Box::new(task));
    }

    /// Add an already-boxed child task. Same rules as [`add`](Self::add).
    pub fn add_boxed(&mut self, task: Box<dyn Task>) {
        assert!(
            !self.started,
            "ParallelGroup::add called after scheduling began"
        );
        self.children.push(task);
        self.remaining += 1;
    }

    pub fn len(&self) -> usize {
        self.children.len()
    }

    pub fn is_empty(&self) -> bool {
        self.children.is_empty()
    }
}

impl Task for ParallelGroup {
    fn step(&mut self) -> Result<()> {
        if self.done {
            return Err(TickrunError::SteppedAfterDone);
        }
        self.started = true;

        for child in &mut self.children {
            if child.is_done() {
                continue;
            }
            child.step()?;
            if child.is_done() {
                self.remaining -= 1;
                debug!(remaining = self.remaining, "parallel child finished");
            }
        }

        if self.remaining == 0 {
            self.done = true;
            debug!(children = self.children.len(), "parallel group complete");
            self.signal.fire();
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
