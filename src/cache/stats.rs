//! Cache Counters Module
//!
//! Cumulative keyspace counters for the in-process cache, reported through
//! the same `CacheInfo` shape a Redis `INFO` call yields.

use crate::cache::CacheInfo;

// == Cache Counters ==
#[derive(Debug, Clone, Default)]
pub struct CacheCounters {
    /// Lookups that found a live entry
    pub hits: u64,
    /// Lookups that found nothing or an expired entry
    pub misses: u64,
    /// Entries dropped to make room
    pub evictions: u64,
}

impl CacheCounters {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn record_hit(&mut self) {
        self.hits += 1;
    }

    pub fn record_miss(&mut self) {
        self.misses += 1;
    }

    pub fn record_eviction(&mut self) {
        self.evictions += 1;
    }

    // == Info ==
    /// Snapshot of the lifetime hit/miss counters.
    pub fn info(&self) -> CacheInfo {
        CacheInfo {
            keyspace_hits: self.hits,
            keyspace_misses: self.misses,
        }
    }
}

// == Unit Tests ==
#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_counters_new() {
        let counters = CacheCounters::new();
        assert_eq!(counters.hits, 0);
        assert_eq!(counters.misses, 0);
        assert_eq!(counters.evictions, 0);
    }

    #[test]
    fn test_info_reports_hits_and_misses() {
        let mut counters = CacheCounters::new();
        counters.record_hit();
        counters.record_hit();
        counters.record_miss();
        counters.record_eviction();

        let info = counters.info();
        assert_eq!(info.keyspace_hits, 2);
        assert_eq!(info.keyspace_misses, 1);
    }
}
