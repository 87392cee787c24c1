// src/logging.rs

//! Logging setup for `tickrun` using `tracing` + `tracing-subscriber`.
//!
//! Priority for determining the log filter:
//! 1. `TICKRUN_LOG` environment variable (e.g. "info", "tickrun=debug")
//! 2. default to `info`
//!
//! Logs are sent to STDERR so that the embedding application keeps
//! stdout to itself.

use anyhow::Result;
use tracing_subscriber::{EnvFilter, fmt};

/// Initialise the global logging subscriber.
///
/// Safe to call once at startup. Calling it twice panics, which is why
/// the library never calls it on its own; the embedding application
/// decides whether it wants a subscriber at all.
pub fn init_logging() -> Result<()> {
    let filter = std::env::var("TICKRUN_LOG")
        .ok()
        .map(EnvFilter::new)
        .unwrap_or_else(|| EnvFilter::new("info"));

    fmt()
        .with_env_filter(filter)
        .with_target(true)
        .with_thread_ids(false)
        .with_thread_names(false)
        .with_writer(std::io::stderr)
        .init();

    Ok(())
}
