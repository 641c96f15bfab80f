use serde::Serialize;
use std::sync::atomic::{AtomicU64, Ordering};

/// Point-in-time snapshot of cache counters.
///
/// Fresh and stale-served lookups count as hits; expired or absent lookups
/// count as misses. `size` is the number of keys currently populated.
/// Serializable so callers can expose it on their own observability surface.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct CacheStats {
    pub hits: u64,
    pub misses: u64,
    pub size: usize,
}

/// Internal hit/miss counters. Reset only by an explicit cache clear.
#[derive(Default)]
pub(crate) struct StatsCounters {
    hits: AtomicU64,
    misses: AtomicU64,
}

impl StatsCounters {
    pub(crate) fn record_hit(&self) {
        self.hits.fetch_add(1, Ordering::Relaxed);
    }

    pub(crate) fn record_miss(&self) {
        self.misses.fetch_add(1, Ordering::Relaxed);
    }

    pub(crate) fn reset(&self) {
        self.hits.store(0, Ordering::Relaxed);
        self.misses.store(0, Ordering::Relaxed);
    }

    pub(crate) fn snapshot(&self, size: usize) -> CacheStats {
        CacheStats {
            hits: self.hits.load(Ordering::Relaxed),
            misses: self.misses.load(Ordering::Relaxed),
            size,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_counters_accumulate() {
        let counters = StatsCounters::default();
        counters.record_hit();
        counters.record_hit();
        counters.record_miss();

        let stats = counters.snapshot(3);
        assert_eq!(stats.hits, 2);
        assert_eq!(stats.misses, 1);
        assert_eq!(stats.size, 3);
    }

    #[test]
    fn test_reset_zeroes_counters() {
        let counters = StatsCounters::default();
        counters.record_hit();
        counters.record_miss();
        counters.reset();

        assert_eq!(counters.snapshot(0), CacheStats::default());
    }

    #[test]
    fn test_snapshot_serializes() {
        let stats = CacheStats {
            hits: 5,
            misses: 2,
            size: 3,
        };
        let json = serde_json::to_string(&stats).unwrap();
        assert_eq!(json, r#"{"hits":5,"misses":2,"size":3}"#);
    }
}
