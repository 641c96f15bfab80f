//! Builder API for configuring cache instances.

use std::sync::Arc;

use crate::swr::{RevalidationHook, SwrCache};

/// Builder for [`SwrCache`] instances.
///
/// The default cache is unbounded and has no failure hook; use the builder
/// when either needs configuring.
///
/// # Example
///
/// ```ignore
/// use swr_engine::{SwrCache, SwrCacheBuilder};
///
/// let cache: SwrCache<String> = SwrCacheBuilder::new()
///     .max_entries(10_000)
///     .build();
/// ```
#[derive(Default)]
pub struct SwrCacheBuilder {
    max_entries: Option<usize>,
    hook: Option<Arc<dyn RevalidationHook>>,
}

impl SwrCacheBuilder {
    /// Create a new builder.
    pub fn new() -> Self {
        Self::default()
    }

    /// Bound the entry store to `max` keys.
    ///
    /// When an insertion would exceed the bound, the entry with the oldest
    /// fetch timestamp is evicted first.
    pub fn max_entries(mut self, max: usize) -> Self {
        self.max_entries = Some(max);
        self
    }

    /// Install a hook observing background revalidation failures.
    pub fn on_revalidation_error(mut self, hook: Arc<dyn RevalidationHook>) -> Self {
        self.hook = Some(hook);
        self
    }

    /// Build the cache.
    pub fn build<V>(self) -> SwrCache<V>
    where
        V: Clone + Send + Sync + 'static,
    {
        SwrCache::from_parts(self.max_entries, self.hook)
    }
}
