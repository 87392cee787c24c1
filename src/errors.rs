// src/errors.rs

//! Crate-wide error types.

use thiserror::Error;

#[derive(Error, Debug)]
pub enum TickrunError {
    /// A task was driven again after it had already reported completion.
    ///
    /// Tasks are single-use: once `is_done()` returns true, further
    /// `step()` calls are a caller bug rather than a recoverable
    /// condition, and groups refuse them loudly.
    #[error("task was stepped after it already completed")]
    SteppedAfterDone,

    /// A failure raised from inside a workload's own step logic.
    ///
    /// The core never catches or translates these; they unwind through
    /// every enclosing group and out of the runner call that drove the
    /// step.
    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

pub type Result<T> = std::result::Result<T, TickrunError>;
