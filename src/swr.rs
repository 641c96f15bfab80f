use std::future::Future;
use std::sync::Arc;

use crate::builder::SwrCacheBuilder;
use crate::config::SwrConfig;
use crate::entry::Freshness;
use crate::error::CacheError;
use crate::inflight::{InflightRegistry, SharedFetch};
use crate::stats::{CacheStats, StatsCounters};
use crate::store::EntryStore;
use crate::utils::now_ms;

/// Hook invoked when a background revalidation fails.
///
/// Background failures are never surfaced to the caller that already
/// received the stale value; implement this to observe them anyway.
///
/// # Example
///
/// ```ignore
/// use std::sync::Mutex;
/// use swr_engine::{CacheError, RevalidationHook};
///
/// struct BufferedHook {
///     failures: Mutex<Vec<String>>,
/// }
///
/// impl RevalidationHook for BufferedHook {
///     fn on_revalidation_error(&self, key: &str, error: &CacheError) {
///         self.failures.lock().unwrap().push(format!("{key}: {error}"));
///     }
/// }
/// ```
pub trait RevalidationHook: Send + Sync {
    /// Called from the background revalidation task with the failed key.
    ///
    /// Runs in the revalidation hot path; implementations should be fast
    /// (e.g. buffer or log and return).
    fn on_revalidation_error(&self, key: &str, error: &CacheError);
}

/// Cache context with stale-while-revalidate support.
///
/// `SwrCache` owns the entry store, the in-flight fetch registry, and the
/// hit/miss counters. It is constructed once per process (or per test) and
/// cloned cheaply wherever lookups happen; clones share the same state.
///
/// Lookups go through [`swr`](Self::swr):
/// - a fresh value is returned immediately,
/// - a stale value is returned immediately and revalidated in the background,
/// - a missing or expired value blocks on the fetch.
///
/// Concurrent callers for the same key coalesce onto a single fetch.
///
/// # Example
///
/// ```ignore
/// use swr_engine::{SwrCache, SwrConfig};
///
/// #[tokio::main]
/// async fn main() {
///     let cache: SwrCache<String> = SwrCache::new();
///     let config = SwrConfig::new("user:123", 60_000, 300_000);
///
///     let user = cache
///         .swr(&config, || async {
///             // Load from database
///             Ok::<_, std::io::Error>("User data".to_string())
///         })
///         .await
///         .unwrap();
/// }
/// ```
pub struct SwrCache<V>
where
    V: Clone + Send + Sync,
{
    store: Arc<EntryStore<V>>,
    inflight: Arc<InflightRegistry<V>>,
    stats: Arc<StatsCounters>,
    hook: Option<Arc<dyn RevalidationHook>>,
}

impl<V> Clone for SwrCache<V>
where
    V: Clone + Send + Sync,
{
    fn clone(&self) -> Self {
        SwrCache {
            store: Arc::clone(&self.store),
            inflight: Arc::clone(&self.inflight),
            stats: Arc::clone(&self.stats),
            hook: self.hook.clone(),
        }
    }
}

impl<V> Default for SwrCache<V>
where
    V: Clone + Send + Sync + 'static,
{
    fn default() -> Self {
        Self::new()
    }
}

impl<V> SwrCache<V>
where
    V: Clone + Send + Sync + 'static,
{
    /// Create an unbounded cache with no failure hook.
    ///
    /// Use [`SwrCacheBuilder`] to configure a capacity bound or a
    /// revalidation failure hook.
    pub fn new() -> Self {
        SwrCacheBuilder::new().build()
    }

    pub(crate) fn from_parts(
        max_entries: Option<usize>,
        hook: Option<Arc<dyn RevalidationHook>>,
    ) -> Self {
        SwrCache {
            store: Arc::new(EntryStore::new(max_entries)),
            inflight: Arc::new(InflightRegistry::new()),
            stats: Arc::new(StatsCounters::default()),
            hook,
        }
    }

    /// Stale-while-revalidate: get the cached value or fetch it.
    ///
    /// Behavior by the entry's state at call time:
    /// - **Fresh**: return the cached value; `fetch` is never invoked.
    /// - **Stale**: return the cached value immediately; if no fetch for the
    ///   key is in flight, run `fetch` on a background task and update the
    ///   entry on success. Background failures leave the entry unchanged and
    ///   are reported via `tracing` and the [`RevalidationHook`].
    /// - **Expired or missing**: await the fetch (joining one already in
    ///   flight), store the result, and return it. A failure propagates to
    ///   the caller untransformed and writes nothing, so the next call
    ///   retries.
    ///
    /// Across any number of concurrent callers, `fetch` runs at most once
    /// per outstanding revalidation for a given key.
    ///
    /// Invalid configuration (empty key, negative durations) fails before
    /// any fetch is attempted. The cache applies no timeout of its own;
    /// give `fetch` one if the origin can hang.
    pub async fn swr<F, Fut, E>(&self, config: &SwrConfig, fetch: F) -> Result<V, CacheError>
    where
        F: FnOnce() -> Fut + Send + 'static,
        Fut: Future<Output = Result<V, E>> + Send + 'static,
        E: std::error::Error + Send + Sync + 'static,
    {
        config.validate()?;

        let now = now_ms();
        let state = self
            .store
            .get(&config.key)
            .await
            .map(|entry| (entry.freshness(now), entry));

        match state {
            Some((Freshness::Fresh, entry)) => {
                self.stats.record_hit();
                Ok(entry.value)
            }
            Some((Freshness::Stale, entry)) => {
                self.stats.record_hit();
                let refresh = self.refresh_future(config, fetch);
                let (shared, created) = self.inflight.join_or_start(&config.key, refresh).await;
                if created {
                    self.spawn_revalidation(config.key.clone(), shared);
                }
                Ok(entry.value)
            }
            Some((Freshness::Expired, _)) | None => {
                self.stats.record_miss();
                let refresh = self.refresh_future(config, fetch);
                let (shared, _created) = self.inflight.join_or_start(&config.key, refresh).await;
                shared.await
            }
        }
    }

    /// Drop a single entry so the next lookup for `key` fetches again.
    pub async fn invalidate(&self, key: &str) {
        self.store.remove(key).await;
    }

    /// Drop all entries and pending fetches, and reset the counters to zero.
    pub async fn clear(&self) {
        self.store.clear().await;
        self.inflight.clear().await;
        self.stats.reset();
    }

    /// Snapshot the cumulative hit/miss counters and current entry count.
    pub async fn stats(&self) -> CacheStats {
        self.stats.snapshot(self.store.len().await)
    }

    /// Build the fetch-and-store future registered with the in-flight
    /// registry. On success it writes the entry (stamping `fetched_at` and
    /// this call's timing windows) before the waiters resolve; on failure it
    /// writes nothing.
    fn refresh_future<F, Fut, E>(
        &self,
        config: &SwrConfig,
        fetch: F,
    ) -> impl Future<Output = Result<V, CacheError>> + Send + use<V, F, Fut, E>
    where
        F: FnOnce() -> Fut + Send + 'static,
        Fut: Future<Output = Result<V, E>> + Send + 'static,
        E: std::error::Error + Send + Sync + 'static,
    {
        let store = Arc::clone(&self.store);
        let key = config.key.clone();
        let ttl_ms = config.ttl_ms;
        let stale_while_revalidate_ms = config.stale_while_revalidate_ms;

        async move {
            let value = fetch().await.map_err(CacheError::fetch)?;
            store
                .insert(&key, value.clone(), ttl_ms, stale_while_revalidate_ms)
                .await;
            Ok(value)
        }
    }

    /// Drive a newly registered fetch to completion off the caller's path.
    fn spawn_revalidation(&self, key: String, shared: SharedFetch<V>) {
        let hook = self.hook.clone();

        tokio::spawn(async move {
            match shared.await {
                Ok(_) => {
                    tracing::debug!(key = %key, "background revalidation refreshed entry");
                }
                Err(error) => {
                    tracing::warn!(key = %key, error = %error, "background revalidation failed");
                    if let Some(hook) = hook {
                        hook.on_revalidation_error(&key, &error);
                    }
                }
            }
        });
    }
}
