//! Tracing/logging setup shared by the grillhouse crates.
//!
//! The domain crates stay free of subscriber wiring; composing applications
//! and test binaries call into here instead.

use tracing_subscriber::EnvFilter;

/// Initialize process-wide logging: JSON lines with timestamps, filtered via
/// `RUST_LOG` with an `info` default.
///
/// Safe to call multiple times (subsequent calls are no-ops).
pub fn init() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));

    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .json()
        .with_timer(tracing_subscriber::fmt::time::SystemTime)
        .with_target(false)
        .try_init();

    tracing::debug!("grillhouse telemetry initialized");
}

/// Initialize compact, human-readable logging for test runs.
///
/// Output goes to the libtest-captured writer and the default filter is
/// `debug`. Safe to call from every test; only the first call installs a
/// subscriber.
pub fn init_for_tests() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("debug"));

    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .compact()
        .with_test_writer()
        .try_init();
}
