//! Tracing/logging initialization.

use tracing_subscriber::EnvFilter;

/// Filter used when `RUST_LOG` is unset or invalid.
const DEFAULT_FILTER: &str = "info";

/// Filter used by test runs: the core reports combinator transitions at
/// `trace` and contract violations at `error`.
const DEFAULT_TEST_FILTER: &str = "debug,result_or_error_core=trace";

fn env_filter(default: &str) -> EnvFilter {
    EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default))
}

/// Initialize tracing/logging for the process.
///
/// Safe to call multiple times (subsequent calls are no-ops).
pub fn init() {
    // JSON logs + timestamps, configurable via RUST_LOG.
    let installed = tracing_subscriber::fmt()
        .with_env_filter(env_filter(DEFAULT_FILTER))
        .json()
        .with_timer(tracing_subscriber::fmt::time::SystemTime)
        .with_target(false)
        .try_init()
        .is_ok();

    if installed {
        ::tracing::debug!(filter = DEFAULT_FILTER, "json tracing subscriber installed");
    }
}

/// Initialize a compact subscriber writing through the test harness.
///
/// Safe to call multiple times (subsequent calls are no-ops).
pub fn init_for_tests() {
    let _ = tracing_subscriber::fmt()
        .with_env_filter(env_filter(DEFAULT_TEST_FILTER))
        .compact()
        .with_test_writer()
        .try_init();
}
