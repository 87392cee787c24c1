// src/runner/mod.rs

//! Driving task trees to completion.
//!
//! The runner owns no per-task state beyond its list of scheduled
//! roots; all progress lives inside the tasks themselves. It offers two
//! modes over the identical stepping protocol:
//!
//! - blocking: [`TaskRunner::run_to_completion`] loops over a borrowed
//!   root until it is done;
//! - externally ticked: [`TaskRunner::schedule`] hands a root over, and
//!   the embedding application calls [`TaskRunner::tick`] once per cycle
//!   of whatever driver it has (a frame loop, a timer, a plain loop).
//!
//! Because `schedule` takes ownership and `run_to_completion` borrows
//! exclusively, the same tree can never be driven through both modes at
//! once.

use tracing::{debug, warn};

use crate::errors::Result;
use crate::task::Task;

/// Drives tasks by repeatedly invoking their stepping protocol.
#[derive(Default)]
pub struct TaskRunner {
    active: Vec<Box<dyn Task>>,
}

impl TaskRunner {
    pub fn new() -> Self {
        Self::default()
    }

    /// Drive `task` until it reports done, blocking the calling thread.
    ///
    /// Returns only after the task's completion notification has fired
    /// (it fires inside the final step). An error from any step anywhere
    /// in the tree unwinds out of this call; the tree is then abandoned.
    pub fn run_to_completion<T: Task + ?Sized>(&mut self, task: &mut T) -> Result<()> {
        let mut ticks: u64 = 0;
        while !task.is_done() {
            task.step()?;
            ticks += 1;
        }
        debug!(ticks, "blocking run complete");
        Ok(())
    }

    /// Register a root task to be advanced by subsequent [`tick`](Self::tick)s.
    ///
    /// A task that already reports done is refused, since stepping it
    /// again would be a contract violation.
    pub fn schedule(&mut self, task: Box<dyn Task>) {
        if task.is_done() {
            warn!("refusing to schedule an already-completed task");
            return;
        }
        self.active.push(task);
        debug!(active = self.active.len(), "root task scheduled");
    }

    /// Advance every scheduled root by one step, retiring the ones that
    /// completed.
    ///
    /// On error the failing tree and everything not yet retired stay in
    /// the active list, but the whole runner should be considered
    /// poisoned: the core attempts no recovery (see crate docs).
    pub fn tick(&mut self) -> Result<()> {
        // Scheduled roots are never done outside this call, so stepping
        // each one unconditionally is safe.
        for task in &mut self.active {
            task.step()?;
        }
        let before = self.active.len();
        self.active.retain(|task| !task.is_done());
        if self.active.len() != before {
            debug!(
                finished = before - self.active.len(),
                active = self.active.len(),
                "tick retired completed roots"
            );
        }
        Ok(())
    }

    /// Whether no scheduled roots remain.
    pub fn is_idle(&self) -> bool {
        self.active.is_empty()
    }

    /// Number of scheduled roots still in flight.
    pub fn active_count(&self) -> usize {
        self.active.len()
    }

    /// Tick until every scheduled root has completed.
    ///
    /// The blocking counterpart of externally driven ticking, for
    /// callers that scheduled several roots and have nothing else to do.
    pub fn run_until_idle(&mut self) -> Result<()> {
        while !self.is_idle() {
            self.tick()?;
        }
        Ok(())
    }
}
