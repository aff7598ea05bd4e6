//! Cache-aside reader for the full property collection
//!
//! The store stays the source of truth. Writes to the store do not touch the
//! cached snapshot, so a new or changed property can stay invisible to
//! cache-served reads until the snapshot expires.

use std::sync::Arc;

use tracing::{debug, warn};

use crate::cache::{PropertyCache, ALL_PROPERTIES_KEY, ALL_PROPERTIES_TTL};
use crate::error::Result;
use crate::models::Property;
use crate::store::PropertyStore;

#[derive(Clone)]
pub struct CachedPropertyReader {
    store: Arc<dyn PropertyStore>,
    cache: Arc<dyn PropertyCache>,
    ttl_seconds: u64,
}

impl CachedPropertyReader {
    pub fn new(store: Arc<dyn PropertyStore>, cache: Arc<dyn PropertyCache>) -> Self {
        Self::with_ttl(store, cache, ALL_PROPERTIES_TTL)
    }

    pub fn with_ttl(
        store: Arc<dyn PropertyStore>,
        cache: Arc<dyn PropertyCache>,
        ttl_seconds: u64,
    ) -> Self {
        Self {
            store,
            cache,
            ttl_seconds,
        }
    }

    // == Get All Properties ==
    /// Returns the cached snapshot, or loads it from the store and caches it.
    ///
    /// Cache failures degrade to a store read. A failed snapshot write is
    /// logged and the freshly loaded collection is still returned.
    pub async fn get_all_properties(&self) -> Result<Vec<Property>> {
        if let Some(properties) = self.cached_snapshot().await {
            debug!(count = properties.len(), "all_properties cache hit");
            return Ok(properties);
        }

        debug!("all_properties cache miss, loading from store");
        let properties = self.store.list_all().await?;

        match serde_json::to_string(&properties) {
            Ok(snapshot) => {
                if let Err(err) = self
                    .cache
                    .set(ALL_PROPERTIES_KEY, snapshot, self.ttl_seconds)
                    .await
                {
                    warn!(error = %err, "failed to cache all_properties snapshot");
                }
            }
            Err(err) => warn!(error = %err, "failed to encode all_properties snapshot"),
        }

        Ok(properties)
    }

    async fn cached_snapshot(&self) -> Option<Vec<Property>> {
        let raw = match self.cache.get(ALL_PROPERTIES_KEY).await {
            Ok(raw) => raw?,
            Err(err) => {
                warn!(error = %err, "cache read failed, falling back to store");
                return None;
            }
        };

        match serde_json::from_str(&raw) {
            Ok(properties) => Some(properties),
            Err(err) => {
                warn!(error = %err, "discarding undecodable all_properties snapshot");
                None
            }
        }
    }
}
