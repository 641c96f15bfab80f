use futures::FutureExt;
use futures::future::{BoxFuture, Shared};
use std::collections::HashMap;
use std::future::Future;
use std::sync::Arc;
use tokio::sync::Mutex;

use crate::error::CacheError;

/// A single shared fetch that every coalesced caller awaits.
///
/// All waiters observe the same eventual value or failure.
pub(crate) type SharedFetch<V> = Shared<BoxFuture<'static, Result<V, CacheError>>>;

/// Registry of pending fetches, keyed by cache key.
///
/// The registry is what enforces the coalescing guarantee: at most one
/// pending fetch exists per key at any instant. The check-and-insert in
/// [`join_or_start`](Self::join_or_start) happens under a single mutex lock,
/// so no two callers can both observe "absent" and both register a fetch.
pub(crate) struct InflightRegistry<V>
where
    V: Clone,
{
    pending: Arc<Mutex<HashMap<String, SharedFetch<V>>>>,
}

impl<V> InflightRegistry<V>
where
    V: Clone + Send + Sync + 'static,
{
    pub(crate) fn new() -> Self {
        InflightRegistry {
            pending: Arc::new(Mutex::new(HashMap::new())),
        }
    }

    /// Join the pending fetch for `key`, or register `fetch` as the new one.
    ///
    /// Returns the shared handle and whether this call created it. The
    /// registered future removes its own registry entry when it settles,
    /// success or failure, before resolving the waiters; `fetch` is dropped
    /// unpolled when an existing handle is joined.
    pub(crate) async fn join_or_start<F>(&self, key: &str, fetch: F) -> (SharedFetch<V>, bool)
    where
        F: Future<Output = Result<V, CacheError>> + Send + 'static,
    {
        let mut pending = self.pending.lock().await;

        if let Some(existing) = pending.get(key) {
            return (existing.clone(), false);
        }

        let pending_map = Arc::clone(&self.pending);
        let owned_key = key.to_string();
        let shared = async move {
            let result = fetch.await;
            pending_map.lock().await.remove(&owned_key);
            result
        }
        .boxed()
        .shared();

        pending.insert(key.to_string(), shared.clone());
        (shared, true)
    }

    pub(crate) async fn contains(&self, key: &str) -> bool {
        self.pending.lock().await.contains_key(key)
    }

    pub(crate) async fn clear(&self) {
        self.pending.lock().await.clear();
    }
}
