use std::sync::Arc;

/// Error type for cache operations.
///
/// `CacheError` is `Clone` so a single fetch failure can be fanned out to
/// every caller coalesced onto the same pending fetch.
#[derive(Debug, Clone, thiserror::Error)]
pub enum CacheError {
    /// The supplied configuration is invalid. Raised before any fetch runs.
    #[error("invalid cache config for key '{key}': {reason}")]
    Config { key: String, reason: String },

    /// The caller's fetch function failed. The original error is preserved
    /// untransformed; `Display` and `source` delegate to it.
    #[error(transparent)]
    Fetch(Arc<dyn std::error::Error + Send + Sync + 'static>),
}

impl CacheError {
    /// Create a new configuration error.
    pub fn config(key: impl Into<String>, reason: impl Into<String>) -> Self {
        CacheError::Config {
            key: key.into(),
            reason: reason.into(),
        }
    }

    /// Wrap a fetch failure, keeping the caller's error as the source.
    pub fn fetch<E>(error: E) -> Self
    where
        E: std::error::Error + Send + Sync + 'static,
    {
        CacheError::Fetch(Arc::new(error))
    }
}
