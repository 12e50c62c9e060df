//! Shared counter owned by the application context.

use tracing::debug;

/// Process-lifetime counter, visible to every handler through the `App`.
///
/// There is no hidden global: the counter lives in the application context
/// and is only touched synchronously inside handler dispatch. No reset and
/// no decrement path exist.
#[derive(Debug, Default)]
pub struct Counter {
    value: i64,
}

impl Counter {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Add `delta` and return the new value.
    pub fn add(&mut self, delta: i64) -> i64 {
        self.value = self.value.saturating_add(delta);
        debug!(delta, value = self.value, "counter incremented");
        self.value
    }

    #[must_use]
    pub fn value(&self) -> i64 {
        self.value
    }
}
