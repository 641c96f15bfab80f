use crate::utils::now_ms;

/// A cache entry containing a value and the timing data needed to classify it.
#[derive(Debug, Clone)]
pub struct CacheEntry<V> {
    /// The cached value.
    pub value: V,

    /// Unix timestamp in milliseconds of the last successful fetch.
    /// Never in the future.
    pub fetched_at: i64,

    /// Duration in milliseconds during which the entry is considered fresh.
    pub ttl_ms: i64,

    /// Additional duration in milliseconds during which a stale entry may
    /// still be served while a background refresh runs.
    pub stale_while_revalidate_ms: i64,
}

/// Classification of a cache entry's age against its configured windows.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Freshness {
    /// Within the TTL window; serve directly, no refetch.
    Fresh,
    /// Past the TTL but within the stale window; servable, triggers a
    /// background refresh.
    Stale,
    /// Past both windows; must not be served without a new fetch.
    Expired,
}

impl<V> CacheEntry<V> {
    /// Create an entry stamped with the current time.
    pub fn new(value: V, ttl_ms: i64, stale_while_revalidate_ms: i64) -> Self {
        CacheEntry {
            value,
            fetched_at: now_ms(),
            ttl_ms,
            stale_while_revalidate_ms,
        }
    }

    /// Classify this entry's age at `now_ms`.
    ///
    /// Boundaries resolve to the fresher state: an entry aged exactly
    /// `ttl_ms` is still `Fresh`, and one aged exactly
    /// `ttl_ms + stale_while_revalidate_ms` is still `Stale`.
    pub fn freshness(&self, now_ms: i64) -> Freshness {
        let age = now_ms - self.fetched_at;
        if age <= self.ttl_ms {
            Freshness::Fresh
        } else if age <= self.ttl_ms.saturating_add(self.stale_while_revalidate_ms) {
            Freshness::Stale
        } else {
            Freshness::Expired
        }
    }

    /// Check if the entry is still fresh (not yet stale).
    pub fn is_fresh(&self, now_ms: i64) -> bool {
        self.freshness(now_ms) == Freshness::Fresh
    }

    /// Check if the entry is stale but still usable.
    pub fn is_stale(&self, now_ms: i64) -> bool {
        self.freshness(now_ms) == Freshness::Stale
    }

    /// Check if the entry has expired and should not be used.
    pub fn is_expired(&self, now_ms: i64) -> bool {
        self.freshness(now_ms) == Freshness::Expired
    }
}
