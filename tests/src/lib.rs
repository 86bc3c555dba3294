//! Known-answer suites and shared helpers for the gmalg integration tests

pub mod suites;

use tracing_subscriber::EnvFilter;

/// Route `tracing` output through the test harness
///
/// Honors `RUST_LOG`. Safe to call from every test; only the first call
/// installs the subscriber.
pub fn init_tracing() {
    let _ = tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_test_writer()
        .try_init();
}
