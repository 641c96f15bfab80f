//! swr-engine - A stale-while-revalidate (SWR) caching engine for Rust
//!
//! This library sits in front of expensive or rate-limited fetches (API
//! calls, database aggregations, third-party providers) and provides:
//! - Time-windowed freshness (fresh / stale / expired)
//! - Background revalidation of stale entries
//! - Per-key deduplication of concurrent fetches
//! - Hit/miss/size statistics
//!
//! # Example
//!
//! ```ignore
//! use swr_engine::{Preset, SwrCache, SwrConfig};
//!
//! #[tokio::main]
//! async fn main() {
//!     let cache: SwrCache<String> = SwrCache::new();
//!
//!     // Inline config: 1 minute fresh, 5 minutes stale window
//!     let config = SwrConfig::new("user:123", 60_000, 300_000);
//!     let user = cache
//!         .swr(&config, || async {
//!             // Load from database
//!             Ok::<_, std::io::Error>("User data".to_string())
//!         })
//!         .await
//!         .unwrap();
//!
//!     // Or pick a named preset
//!     let config = Preset::HighVolatility.config("prices:btc");
//!     let price = cache
//!         .swr(&config, || async {
//!             Ok::<_, std::io::Error>("42000".to_string())
//!         })
//!         .await
//!         .unwrap();
//!
//!     println!("{:?}", cache.stats().await);
//! }
//! ```
//!
//! A fresh value is returned without touching the origin. A stale value is
//! returned immediately while a single background task revalidates it; the
//! callers that received stale data never see a revalidation failure. An
//! expired or missing value blocks on the fetch, and concurrent callers for
//! the same key all await one shared fetch.
//!
//! The cache spawns background tasks and must run inside a tokio runtime.

mod builder;
mod config;
mod entry;
mod error;
mod inflight;
mod stats;
mod store;
mod swr;
mod utils;

// Re-export public API
pub use builder::SwrCacheBuilder;
pub use config::{Preset, SwrConfig};
pub use entry::{CacheEntry, Freshness};
pub use error::CacheError;
pub use stats::CacheStats;
pub use swr::{RevalidationHook, SwrCache};
