// src/compose/mod.rs

//! Task composition.
//!
//! - [`serial`] runs children one after another, in insertion order.
//! - [`parallel`] advances all children within the same tick.
//!
//! Both groups are themselves [`Task`](crate::Task)s, so trees nest to
//! any depth and the runner never needs to know their shape.

pub mod parallel;
pub mod serial;

pub use parallel::ParallelGroup;
pub use serial::SerialGroup;
