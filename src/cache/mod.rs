//! Cache Module
//!
//! The key/value capability sitting in front of the property store, with an
//! in-process backend (TTL + LRU) and a Redis backend.

mod entry;
mod local;
mod redis;
mod stats;


use async_trait::async_trait;
use serde::Serialize;

use crate::error::Result;

// Re-export public types
pub use self::redis::RedisCache;
pub use entry::CacheEntry;
pub use local::{LocalCache, LocalCacheStore};
pub use stats::CacheCounters;

// == Public Constants ==
/// Key under which the full property snapshot is cached
pub const ALL_PROPERTIES_KEY: &str = "all_properties";

/// Lifetime of the snapshot, in seconds
pub const ALL_PROPERTIES_TTL: u64 = 3600;

// == Cache Info ==
/// Lifetime keyspace counters reported by a cache backend.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct CacheInfo {
    pub keyspace_hits: u64,
    pub keyspace_misses: u64,
}

// == Property Cache ==
/// Key/value store with get, set-with-ttl and counter introspection.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait PropertyCache: Send + Sync {
    /// Returns the live value for `key`, `None` when absent or expired.
    async fn get(&self, key: &str) -> Result<Option<String>>;

    /// Stores `value` under `key` for `ttl_seconds`.
    async fn set(&self, key: &str, value: String, ttl_seconds: u64) -> Result<()>;

    /// Reads the backend's cumulative hit/miss counters.
    async fn info(&self) -> Result<CacheInfo>;
}
