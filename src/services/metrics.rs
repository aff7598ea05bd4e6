//! Cache hit/miss probe
//!
//! Diagnostic only: a cache that cannot be reached yields `None`, never an
//! error.

use std::sync::Arc;

use serde::Serialize;
use tracing::{error, info};

use crate::cache::{CacheInfo, PropertyCache};
use crate::statistics::ratio;

// == Cache Metrics ==
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CacheMetrics {
    pub hits: u64,
    pub misses: u64,
    pub total_operations: u64,
    /// hits / (hits + misses), rounded to two decimals
    pub hit_ratio: f64,
}

impl From<CacheInfo> for CacheMetrics {
    fn from(info: CacheInfo) -> Self {
        let total = info.keyspace_hits.saturating_add(info.keyspace_misses);
        Self {
            hits: info.keyspace_hits,
            misses: info.keyspace_misses,
            total_operations: total,
            hit_ratio: ratio(info.keyspace_hits as f64, total as f64),
        }
    }
}

#[derive(Clone)]
pub struct CacheMetricsProbe {
    cache: Arc<dyn PropertyCache>,
}

impl CacheMetricsProbe {
    pub fn new(cache: Arc<dyn PropertyCache>) -> Self {
        Self { cache }
    }

    // == Get Cache Metrics ==
    /// Reads the cache's lifetime counters and derives the hit ratio.
    ///
    /// Returns `None` (and logs) when the cache cannot be queried.
    pub async fn get_redis_cache_metrics(&self) -> Option<CacheMetrics> {
        match self.cache.info().await {
            Ok(cache_info) => {
                let metrics = CacheMetrics::from(cache_info);
                info!(
                    hits = metrics.hits,
                    misses = metrics.misses,
                    total_operations = metrics.total_operations,
                    hit_ratio = metrics.hit_ratio,
                    "cache metrics"
                );
                Some(metrics)
            }
            Err(err) => {
                error!(error = %err, "error getting cache metrics");
                None
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io;
    use std::sync::Mutex;

    use crate::cache::{LocalCache, MockPropertyCache};
    use crate::error::PropertyError;

    #[derive(Clone, Default)]
    struct CapturedLogs(Arc<Mutex<Vec<u8>>>);

    impl io::Write for CapturedLogs {
        fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
            self.0.lock().unwrap().extend_from_slice(buf);
            Ok(buf.len())
        }

        fn flush(&mut self) -> io::Result<()> {
            Ok(())
        }
    }

    impl CapturedLogs {
        fn contents(&self) -> String {
            String::from_utf8_lossy(&self.0.lock().unwrap()).into_owned()
        }
    }

    fn probe_with_info(info: CacheInfo) -> CacheMetricsProbe {
        let mut cache = MockPropertyCache::new();
        cache.expect_info().returning(move || Ok(info));
        CacheMetricsProbe::new(Arc::new(cache))
    }

    #[tokio::test]
    async fn test_metrics_from_counters() {
        let probe = probe_with_info(CacheInfo {
            keyspace_hits: 1,
            keyspace_misses: 2,
        });

        let metrics = probe.get_redis_cache_metrics().await.unwrap();
        assert_eq!(metrics.hits, 1);
        assert_eq!(metrics.misses, 2);
        assert_eq!(metrics.total_operations, 3);
        assert_eq!(metrics.hit_ratio, 0.33);
    }

    #[tokio::test]
    async fn test_metrics_saturate_on_huge_counters() {
        let probe = probe_with_info(CacheInfo {
            keyspace_hits: u64::MAX,
            keyspace_misses: 5,
        });

        let metrics = probe.get_redis_cache_metrics().await.unwrap();
        assert_eq!(metrics.total_operations, u64::MAX);
        assert_eq!(metrics.hit_ratio, 1.0);
    }

    #[tokio::test]
    async fn test_metrics_without_traffic() {
        let probe = probe_with_info(CacheInfo::default());

        let metrics = probe.get_redis_cache_metrics().await.unwrap();
        assert_eq!(metrics.total_operations, 0);
        assert_eq!(metrics.hit_ratio, 0.0);
    }

    #[tokio::test]
    async fn test_unavailable_cache_is_logged_and_absent() {
        let logs = CapturedLogs::default();
        let writer = logs.clone();
        let subscriber = tracing_subscriber::fmt()
            .with_writer(move || writer.clone())
            .with_ansi(false)
            .finish();
        let _guard = tracing::subscriber::set_default(subscriber);

        let mut cache = MockPropertyCache::new();
        cache
            .expect_info()
            .times(1)
            .returning(|| Err(PropertyError::CacheUnavailable("connection refused".into())));
        let probe = CacheMetricsProbe::new(Arc::new(cache));

        assert!(probe.get_redis_cache_metrics().await.is_none());

        let output = logs.contents();
        assert!(output.contains("error getting cache metrics"));
        assert!(output.contains("connection refused"));
    }

    #[tokio::test]
    async fn test_probe_over_local_cache() {
        let cache = LocalCache::new(10);
        cache.set("all_properties", "[]".to_string(), 60).await.unwrap();
        cache.get("all_properties").await.unwrap();
        cache.get("all_properties").await.unwrap();
        cache.get("other").await.unwrap();

        let probe = CacheMetricsProbe::new(Arc::new(cache));
        let metrics = probe.get_redis_cache_metrics().await.unwrap();
        assert_eq!(metrics.hits, 2);
        assert_eq!(metrics.misses, 1);
        assert_eq!(metrics.hit_ratio, 0.67);
    }
}
