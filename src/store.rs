use std::collections::HashMap;
use tokio::sync::RwLock;

use crate::entry::CacheEntry;

/// Thread-safe in-memory entry store using HashMap with RwLock.
///
/// Owned exclusively by the cache; callers interact with it only through
/// [`SwrCache`](crate::SwrCache). Reads clone the entry out so the lock is
/// never held across a caller's await point.
pub(crate) struct EntryStore<V>
where
    V: Clone + Send + Sync,
{
    entries: RwLock<HashMap<String, CacheEntry<V>>>,
    max_entries: Option<usize>,
}

impl<V> EntryStore<V>
where
    V: Clone + Send + Sync,
{
    /// Create a new store, optionally bounded to `max_entries` keys.
    pub(crate) fn new(max_entries: Option<usize>) -> Self {
        EntryStore {
            entries: RwLock::new(HashMap::new()),
            max_entries,
        }
    }

    pub(crate) async fn get(&self, key: &str) -> Option<CacheEntry<V>> {
        let entries = self.entries.read().await;
        entries.get(key).cloned()
    }

    /// Insert or overwrite the entry for `key`, stamping `fetched_at` to now.
    ///
    /// If the store is bounded and inserting a new key would exceed the
    /// bound, entries with the oldest `fetched_at` are evicted first.
    pub(crate) async fn insert(&self, key: &str, value: V, ttl_ms: i64, stale_while_revalidate_ms: i64) {
        let mut entries = self.entries.write().await;

        if let Some(max) = self.max_entries
            && !entries.contains_key(key)
        {
            while entries.len() >= max {
                let Some(oldest) = entries
                    .iter()
                    .min_by_key(|(_, entry)| entry.fetched_at)
                    .map(|(k, _)| k.clone())
                else {
                    break;
                };
                entries.remove(&oldest);
            }
        }

        entries.insert(
            key.to_string(),
            CacheEntry::new(value, ttl_ms, stale_while_revalidate_ms),
        );
    }

    pub(crate) async fn remove(&self, key: &str) {
        let mut entries = self.entries.write().await;
        entries.remove(key);
    }

    pub(crate) async fn clear(&self) {
        let mut entries = self.entries.write().await;
        entries.clear();
    }

    pub(crate) async fn len(&self) -> usize {
        let entries = self.entries.read().await;
        entries.len()
    }
}
