//! Redis Cache Backend
//!
//! Talks to an external Redis server over a multiplexed tokio connection.

use async_trait::async_trait;
use redis::AsyncCommands;

use crate::cache::{CacheInfo, PropertyCache};
use crate::error::Result;

#[derive(Clone)]
pub struct RedisCache {
    inner: redis::Client,
}

impl RedisCache {
    /// Parses the URL; no connection is made until the first command.
    pub fn open(url: &str) -> Result<Self> {
        Ok(Self {
            inner: redis::Client::open(url)?,
        })
    }

    async fn connection(&self) -> Result<redis::aio::MultiplexedConnection> {
        Ok(self.inner.get_multiplexed_async_connection().await?)
    }
}

#[async_trait]
impl PropertyCache for RedisCache {
    #[tracing::instrument(skip(self))]
    async fn get(&self, key: &str) -> Result<Option<String>> {
        let mut conn = self.connection().await?;
        let value: Option<String> = conn.get(key).await?;
        Ok(value)
    }

    #[tracing::instrument(skip(self, value))]
    async fn set(&self, key: &str, value: String, ttl_seconds: u64) -> Result<()> {
        let mut conn = self.connection().await?;
        conn.set_ex::<_, _, ()>(key, value, ttl_seconds).await?;
        Ok(())
    }

    async fn info(&self) -> Result<CacheInfo> {
        let mut conn = self.connection().await?;
        let info: redis::InfoDict = redis::cmd("INFO").arg("stats").query_async(&mut conn).await?;

        Ok(CacheInfo {
            keyspace_hits: info.get("keyspace_hits").unwrap_or(0),
            keyspace_misses: info.get("keyspace_misses").unwrap_or(0),
        })
    }
}
