pub mod fakes;
pub mod recorder;

use std::sync::Once;
use tracing_subscriber::{EnvFilter, fmt};

static INIT: Once = Once::new();

/// Initialise tracing for tests.
///
/// - Uses `with_test_writer()`, so logs are captured per-test.
/// - The Rust test harness only prints captured output for **failing**
///   tests (unless you run with `-- --nocapture`).
///
/// Enable levels with e.g.:
/// `RUST_LOG=debug cargo test`
pub fn init_tracing() {
    INIT.call_once(|| {
        let filter =
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));

        fmt()
            .with_env_filter(filter)
            .with_test_writer() // print only for failing tests unless --nocapture
            .with_target(true)
            .init();
    });
}

/// Tick a runner until it goes idle, returning the number of ticks.
///
/// Panics if a step fails or the run does not terminate within a
/// generous bound, so a stalled tree fails the test instead of hanging
/// it.
pub fn ticks_to_idle(runner: &mut tickrun::TaskRunner) -> usize {
    let mut ticks = 0;
    while !runner.is_idle() {
        runner.tick().expect("tick failed");
        ticks += 1;
        assert!(ticks < 10_000, "task tree did not complete; stalled?");
    }
    ticks
}
