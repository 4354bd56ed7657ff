//! Observability hook for the mapping engine.
//!
//! The mapper reports cache activity and resolution outcomes through this
//! trait instead of writing to any particular output. Hosts plug in a
//! metrics or tracing backend; tests plug in [`CountingObserver`].

use std::sync::atomic::{AtomicU64, Ordering};

use crate::types::ResolutionStrategy;

/// Receives engine events as they happen.
///
/// All methods have no-op defaults so implementors only override what
/// they care about. Implementations must be cheap and non-blocking —
/// the engine calls these inline on every mapping.
pub trait MappingObserver: Send + Sync {
    /// A mapping was served from the memoization cache.
    fn cache_hit(&self, _key: &str) {}

    /// A mapping was not cached and had to be resolved.
    fn cache_miss(&self, _key: &str) {}

    /// A mapping was resolved; reports which strategy produced it.
    fn resolution(&self, _strategy: ResolutionStrategy, _role: &str) {}
}

/// Observer that ignores every event.
#[derive(Debug, Clone, Copy, Default)]
pub struct NoopObserver;

impl MappingObserver for NoopObserver {}

/// Observer that counts events, for tests and simple metrics.
#[derive(Debug, Default)]
pub struct CountingObserver {
    /// Number of cache hits observed.
    pub hits: AtomicU64,
    /// Number of cache misses observed.
    pub misses: AtomicU64,
    /// Number of resolutions observed.
    pub resolutions: AtomicU64,
}

impl CountingObserver {
    /// Create a new counting observer with all counters at zero.
    pub fn new() -> Self {
        Self::default()
    }

    /// Snapshot of (hits, misses, resolutions).
    pub fn counts(&self) -> (u64, u64, u64) {
        (
            self.hits.load(Ordering::Relaxed),
            self.misses.load(Ordering::Relaxed),
            self.resolutions.load(Ordering::Relaxed),
        )
    }
}

impl MappingObserver for CountingObserver {
    fn cache_hit(&self, _key: &str) {
        self.hits.fetch_add(1, Ordering::Relaxed);
    }

    fn cache_miss(&self, _key: &str) {
        self.misses.fetch_add(1, Ordering::Relaxed);
    }

    fn resolution(&self, _strategy: ResolutionStrategy, _role: &str) {
        self.resolutions.fetch_add(1, Ordering::Relaxed);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_counting_observer() {
        let obs = CountingObserver::new();
        obs.cache_miss("k");
        obs.resolution(ResolutionStrategy::Basic, "GUEST");
        obs.cache_hit("k");
        obs.cache_hit("k");
        assert_eq!(obs.counts(), (2, 1, 1));
    }
}
