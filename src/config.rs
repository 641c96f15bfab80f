use serde::{Deserialize, Serialize};

use crate::error::CacheError;

/// Per-call configuration for a stale-while-revalidate lookup.
///
/// The timing fields are durations, not deadlines: `ttl_ms` is how long a
/// value counts as fresh after its fetch, and `stale_while_revalidate_ms` is
/// the extra window during which a stale value may still be served while a
/// background refresh runs. Both may vary between calls for the same key;
/// the values in effect when an entry is written are the ones that classify
/// it afterwards.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SwrConfig {
    /// Cache key. Must be non-empty.
    pub key: String,

    /// Fresh-window duration in milliseconds. Must be non-negative.
    pub ttl_ms: i64,

    /// Stale-window duration in milliseconds. Must be non-negative.
    pub stale_while_revalidate_ms: i64,
}

impl SwrConfig {
    /// Create a new configuration.
    pub fn new(key: impl Into<String>, ttl_ms: i64, stale_while_revalidate_ms: i64) -> Self {
        SwrConfig {
            key: key.into(),
            ttl_ms,
            stale_while_revalidate_ms,
        }
    }

    /// Validate the configuration.
    ///
    /// Invalid values fail fast with [`CacheError::Config`]; they are never
    /// silently coerced.
    pub fn validate(&self) -> Result<(), CacheError> {
        if self.key.is_empty() {
            return Err(CacheError::config(&self.key, "key must not be empty"));
        }
        if self.ttl_ms < 0 {
            return Err(CacheError::config(&self.key, "ttl_ms must be non-negative"));
        }
        if self.stale_while_revalidate_ms < 0 {
            return Err(CacheError::config(
                &self.key,
                "stale_while_revalidate_ms must be non-negative",
            ));
        }
        Ok(())
    }
}

/// Named timing bundles for common volatility classes.
///
/// Presets are pure data: `preset.config(key)` yields an ordinary
/// [`SwrConfig`] that the cache treats identically to an inline one.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum Preset {
    /// Rapidly-changing data: 2s fresh, 2s stale window.
    HighVolatility,
    /// Typical API responses: 1min fresh, 2min stale window.
    Moderate,
    /// Slow-moving data: 5min fresh, 5min stale window.
    LowVolatility,
}

impl Preset {
    /// Build the configuration for `key` from this preset.
    pub fn config(self, key: impl Into<String>) -> SwrConfig {
        let (ttl_ms, stale_while_revalidate_ms) = match self {
            Preset::HighVolatility => (2_000, 2_000),
            Preset::Moderate => (60_000, 120_000),
            Preset::LowVolatility => (300_000, 300_000),
        };
        SwrConfig::new(key, ttl_ms, stale_while_revalidate_ms)
    }
}
