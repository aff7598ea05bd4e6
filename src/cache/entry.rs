//! Cache Entry Module
//!
//! A stored value in the in-process cache, with its deadline and recency tick.

use std::time::{Duration, Instant};

// == Cache Entry ==
/// A single cached value with expiration metadata.
#[derive(Debug, Clone)]
pub struct CacheEntry {
    /// The stored value
    pub value: String,
    /// Instant after which the entry is no longer served; `None` when the TTL
    /// reaches past what `Instant` can represent
    pub expires_at: Option<Instant>,
    /// Access tick used to pick the least recently used entry
    pub last_access: u64,
}

impl CacheEntry {
    // == Constructor ==
    /// Creates an entry that expires `ttl_seconds` from now.
    pub fn new(value: String, ttl_seconds: u64, tick: u64) -> Self {
        Self {
            value,
            expires_at: Instant::now().checked_add(Duration::from_secs(ttl_seconds)),
            last_access: tick,
        }
    }

    // == Is Expired ==
    /// An entry is expired once the current time reaches its deadline.
    pub fn is_expired(&self) -> bool {
        self.expires_at
            .is_some_and(|deadline| Instant::now() >= deadline)
    }

    // == Time To Live ==
    /// Remaining lifetime, zero once expired; `None` for an entry without a
    /// deadline.
    pub fn ttl_remaining(&self) -> Option<Duration> {
        self.expires_at
            .map(|deadline| deadline.saturating_duration_since(Instant::now()))
    }

    /// Marks the entry as used at `tick`.
    pub fn touch(&mut self, tick: u64) {
        self.last_access = tick;
    }
}
