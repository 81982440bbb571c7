//! Helpers shared by the factories.

use std::sync::atomic::{AtomicU64, Ordering};

static SEQUENCE: AtomicU64 = AtomicU64::new(1);

/// Returns a number no other factory call in this test binary has returned,
/// for building unique titles, addresses, and paths.
pub fn next_id() -> u64 {
    SEQUENCE.fetch_add(1, Ordering::Relaxed)
}
