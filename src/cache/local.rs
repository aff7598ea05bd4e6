//! In-Process Cache Backend
//!
//! HashMap storage with TTL expiration and least-recently-used eviction,
//! shared behind an async RwLock.

use std::collections::HashMap;
use std::sync::Arc;

use async_trait::async_trait;
use tokio::sync::RwLock;
use tracing::debug;

use crate::cache::{CacheCounters, CacheEntry, CacheInfo, PropertyCache};
use crate::error::Result;

// == Local Cache Store ==
/// Synchronous cache engine. Wrapped by [`LocalCache`] for shared use.
#[derive(Debug)]
pub struct LocalCacheStore {
    /// Key-value storage
    entries: HashMap<String, CacheEntry>,
    /// Keyspace counters
    counters: CacheCounters,
    /// Maximum number of entries allowed
    max_entries: usize,
    /// Monotonic access clock for LRU ordering
    tick: u64,
}

impl LocalCacheStore {
    /// Creates an empty store holding at most `max_entries` keys.
    pub fn new(max_entries: usize) -> Self {
        Self {
            entries: HashMap::new(),
            counters: CacheCounters::new(),
            max_entries: max_entries.max(1),
            tick: 0,
        }
    }

    fn next_tick(&mut self) -> u64 {
        self.tick += 1;
        self.tick
    }

    // == Set ==
    /// Stores a value, replacing any previous one and resetting its TTL.
    ///
    /// When a new key arrives at capacity the least recently used entry is
    /// evicted first.
    pub fn set(&mut self, key: &str, value: String, ttl_seconds: u64) {
        if !self.entries.contains_key(key) && self.entries.len() >= self.max_entries {
            self.evict_least_recent();
        }

        let tick = self.next_tick();
        self.entries
            .insert(key.to_string(), CacheEntry::new(value, ttl_seconds, tick));
    }

    fn evict_least_recent(&mut self) {
        let oldest = self
            .entries
            .iter()
            .min_by_key(|(_, entry)| entry.last_access)
            .map(|(key, _)| key.clone());

        if let Some(key) = oldest {
            self.entries.remove(&key);
            self.counters.record_eviction();
            debug!(key = %key, "evicted least recently used entry");
        }
    }

    // == Get ==
    /// Returns the live value for `key`.
    ///
    /// Expired entries are removed and counted as misses.
    pub fn get(&mut self, key: &str) -> Option<String> {
        let expired = match self.entries.get(key) {
            Some(entry) => entry.is_expired(),
            None => {
                self.counters.record_miss();
                return None;
            }
        };

        if expired {
            self.entries.remove(key);
            self.counters.record_miss();
            return None;
        }

        let tick = self.next_tick();
        self.counters.record_hit();
        self.entries.get_mut(key).map(|entry| {
            entry.touch(tick);
            entry.value.clone()
        })
    }

    // == Cleanup Expired ==
    /// Removes every expired entry, returning how many were dropped.
    pub fn cleanup_expired(&mut self) -> usize {
        let before = self.entries.len();
        self.entries.retain(|_, entry| !entry.is_expired());
        before - self.entries.len()
    }

    pub fn counters(&self) -> &CacheCounters {
        &self.counters
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

// == Local Cache ==
/// Thread-safe handle to a [`LocalCacheStore`].
#[derive(Debug, Clone)]
pub struct LocalCache {
    store: Arc<RwLock<LocalCacheStore>>,
}

impl LocalCache {
    pub fn new(max_entries: usize) -> Self {
        Self {
            store: Arc::new(RwLock::new(LocalCacheStore::new(max_entries))),
        }
    }

    /// Shared store, used by the background sweeper.
    pub fn store(&self) -> Arc<RwLock<LocalCacheStore>> {
        self.store.clone()
    }
}

#[async_trait]
impl PropertyCache for LocalCache {
    async fn get(&self, key: &str) -> Result<Option<String>> {
        // Write lock: lookups update recency and counters
        Ok(self.store.write().await.get(key))
    }

    async fn set(&self, key: &str, value: String, ttl_seconds: u64) -> Result<()> {
        self.store.write().await.set(key, value, ttl_seconds);
        Ok(())
    }

    async fn info(&self) -> Result<CacheInfo> {
        Ok(self.store.read().await.counters().info())
    }
}
