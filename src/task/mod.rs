// src/task/mod.rs

//! The task capability: the contract every schedulable unit satisfies.
//!
//! - [`Task`] is the trait that primitives, adapters and groups all
//!   implement; everything above it (groups, runner) is written against
//!   trait objects, so workload origin never leaks into composition.
//! - [`signal`] provides the one-shot completion notification that task
//!   implementations delegate to.
//! - [`steps`] adapts iterator-shaped workloads into the capability.

pub mod signal;
pub mod steps;

pub use signal::CompletionSignal;
pub use steps::StepsTask;

use crate::errors::Result;

/// A zero-argument callback invoked exactly once when a task completes.
pub type CompletionObserver = Box<dyn FnOnce()>;

/// A unit of work that can be driven to completion one step at a time.
///
/// The lifecycle is `pending -> running -> done`, advanced only by
/// [`step`](Task::step) calls from a single driving call site (a parent
/// group, or the [`TaskRunner`](crate::TaskRunner)). Implementations are
/// single-use: a task never leaves the done state, and a fresh execution
/// needs a fresh instance.
///
/// Contract:
///
/// - `step` performs one increment of progress and returns. It must not
///   block waiting for anything external; a conceptually time-spanning
///   activity reports "not done yet" and expects to be stepped again on
///   a later tick.
/// - `is_done` may be observed at any point and becomes true exactly
///   once. On the step where it flips, the implementation must fire its
///   completion notification *after* setting the flag, so observers that
///   re-inspect the task see it completed.
/// - `on_complete` observers registered before completion are all
///   invoked exactly once. Registering after completion invokes the
///   observer immediately (see [`CompletionSignal::subscribe`]).
/// - Stepping a task whose `is_done` is already true is a caller bug.
///   The built-in implementations return
///   [`TickrunError::SteppedAfterDone`](crate::TickrunError::SteppedAfterDone).
/// - Errors from `step` propagate unmodified to whatever drove the step;
///   a task that has failed is abandoned, not retried.
pub trait Task {
    /// Drive the task forward by one step.
    fn step(&mut self) -> Result<()>;

    /// Whether the task has completed.
    fn is_done(&self) -> bool;

    /// Register an observer for the one-shot completion notification.
    fn on_complete(&mut self, observer: CompletionObserver);
}
