//! Tracing/logging setup shared by the workspace's tests, benches and any
//! application embedding `result-or-error-core`.
//!
//! The core library only emits `tracing` events; installing a subscriber is the
//! embedding process's decision.

/// Initialize process-wide observability (tracing/logging).
///
/// This is safe to call multiple times; subsequent calls become no-ops.
pub fn init() {
    tracing::init();
}

/// Initialize a compact, test-friendly subscriber.
///
/// Output goes through the libtest writer so it is captured per test and shown
/// with `--nocapture`. Safe to call from every test.
pub fn init_for_tests() {
    tracing::init_for_tests();
}

/// Tracing configuration (filters, layers).
pub mod tracing;
