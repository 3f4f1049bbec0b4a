//! Process-local monotonic counter.

use std::sync::atomic::{AtomicU64, Ordering};

/// A single integer incremented under arbitrary concurrency.
///
/// Every `increment_and_get` is one atomic read-modify-write, so N concurrent
/// callers starting from `v` observe exactly `{v+1, ..., v+N}`: no value is
/// handed out twice and none is skipped.
///
/// There is no global instance; owners share it through `Arc<Counter>`.
#[derive(Debug, Default)]
pub struct Counter {
    value: AtomicU64,
}

impl Counter {
    /// New counter starting at zero.
    pub fn new() -> Self {
        Self {
            value: AtomicU64::new(0),
        }
    }

    /// Add one and return the new value.
    pub fn increment_and_get(&self) -> u64 {
        // fetch_add returns the previous value; wraps at u64::MAX.
        self.value.fetch_add(1, Ordering::AcqRel).wrapping_add(1)
    }

    /// Current value. Sees every increment that completed before the call.
    pub fn get(&self) -> u64 {
        self.value.load(Ordering::Acquire)
    }
}
