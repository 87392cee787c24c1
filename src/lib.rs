// src/lib.rs

//! `tickrun` — cooperative task composition and stepping.
//!
//! A small algebra for building workflows out of primitive units of
//! work. Units implement the [`Task`] capability (step / done flag /
//! one-shot completion notification); [`SerialGroup`] runs them one
//! after another, [`ParallelGroup`] advances them together within each
//! tick, and groups nest freely since they are tasks themselves.
//! [`StepsTask`] adapts iterator-shaped workloads into the same
//! capability, and [`TaskRunner`] drives a finished tree to completion,
//! either blocking or one tick at a time under an external driver.
//!
//! Everything is single-threaded and non-preemptive: "parallel" means
//! several tasks advanced within the same tick of one control thread.
//! There is no cancellation, no prioritization and no timing; a
//! workload that never reports done stalls its tree, and an error from
//! a workload's step unwinds out of the driving call with the tree
//! abandoned as-is.
//!
//! ```
//! use tickrun::{SerialGroup, StepsTask, Task, TaskRunner};
//!
//! let mut group = SerialGroup::new();
//! group.add(StepsTask::new(std::iter::repeat_n((), 3)));
//! group.add(StepsTask::new(std::iter::repeat_n((), 2)));
//! group.on_complete(Box::new(|| println!("all done")));
//!
//! let mut runner = TaskRunner::new();
//! runner.run_to_completion(&mut group).unwrap();
//! assert!(group.is_done());
//! ```

pub mod compose;
pub mod errors;
pub mod logging;
pub mod runner;
pub mod task;

pub use compose::{ParallelGroup, SerialGroup};
pub use errors::{Result, TickrunError};
pub use runner::TaskRunner;
pub use task::{CompletionObserver, CompletionSignal, StepsTask, Task};
