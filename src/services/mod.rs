//! Services Module
//!
//! Orchestration over the store and the cache.
//!
//! # Services
//! - `CachedPropertyReader`: cache-aside read of the full property collection
//! - `CacheMetricsProbe`: cache hit/miss counters and hit ratio

mod metrics;
mod reader;

pub use metrics::{CacheMetrics, CacheMetricsProbe};
pub use reader::CachedPropertyReader;
