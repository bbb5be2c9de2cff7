use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::Arc;

/// Latest-wins guard for in-flight resolution passes. Passes are not
/// cancelled when the cart changes; instead each pass takes a token at
/// start and only the pass holding the newest token may apply its results.
#[derive(Debug, Clone, Default)]
pub struct PassTracker {
    latest: Arc<AtomicU64>,
}

impl PassTracker {
    pub fn new() -> Self {
        Self::default()
    }

    /// Starts a new pass, invalidating every earlier one.
    pub fn begin(&self) -> u64 {
        self.latest.fetch_add(1, Ordering::Relaxed) + 1
    }

    /// True while `token` belongs to the most recently started pass.
    pub fn is_current(&self, token: u64) -> bool {
        self.latest.load(Ordering::Relaxed) == token
    }
}
