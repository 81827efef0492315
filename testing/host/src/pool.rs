use serde::Serialize;
use std::sync::atomic::{AtomicU64, Ordering};

///
/// ValuePool
///
/// Resource accounting shared by every value a host context creates.
/// `live` counts values not yet recycled.
///

#[derive(Debug, Default)]
pub struct ValuePool {
    live: AtomicU64,
    tracked: AtomicU64,
    recycled: AtomicU64,
}

impl ValuePool {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    pub(crate) fn acquire(&self) {
        self.live.fetch_add(1, Ordering::Relaxed);
    }

    pub(crate) fn release(&self) {
        self.live.fetch_sub(1, Ordering::Relaxed);
        self.recycled.fetch_add(1, Ordering::Relaxed);
    }

    pub(crate) fn track(&self) {
        self.tracked.fetch_add(1, Ordering::Relaxed);
    }

    /// Point-in-time counters.
    #[must_use]
    pub fn stats(&self) -> PoolStats {
        PoolStats {
            live: self.live.load(Ordering::Relaxed),
            tracked: self.tracked.load(Ordering::Relaxed),
            recycled: self.recycled.load(Ordering::Relaxed),
        }
    }
}

///
/// PoolStats
///

#[derive(Clone, Copy, Debug, Default, Eq, PartialEq, Serialize)]
pub struct PoolStats {
    pub live: u64,
    pub tracked: u64,
    pub recycled: u64,
}
