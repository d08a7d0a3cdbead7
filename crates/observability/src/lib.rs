//! Process-wide logging setup shared by farmwise binaries.
//!
//! Library crates only emit `tracing` events; installing a subscriber is the
//! host's job and happens once, here.

/// Initialize process-wide observability (tracing/logging).
///
/// Safe to call multiple times; later calls are no-ops.
pub fn init() {
    tracing::init();
}

/// Subscriber configuration (filter, JSON formatting).
pub mod tracing;
