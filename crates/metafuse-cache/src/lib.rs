//! Time-bounded response cache for metafuse.
//!
//! Holds raw provider responses and resolved identifiers with a per-entry
//! TTL. Entries past their TTL are treated as absent, never returned stale.

use std::fmt;
use std::time::{Duration, Instant};

use moka::Expiry;
use moka::sync::Cache;

/// Key-value cache with per-entry time-to-live.
///
/// Injected wherever the pipeline touches the network so tests can supply a
/// deterministic fake. Implementations must be safe to share across tasks.
pub trait ResponseCache: fmt::Debug + Send + Sync {
    /// Returns the cached value, or `None` if absent or past its TTL.
    fn get(&self, key: &str) -> Option<String>;

    /// Stores `value` under `key` for at most `ttl`.
    fn set(&self, key: &str, value: String, ttl: Duration);

    /// Drops every entry.
    fn clear(&self);
}

/// A value together with the TTL it was stored with.
#[derive(Debug, Clone)]
struct Entry {
    value: String,
    ttl: Duration,
}

/// Expiry policy reading the TTL stored beside each value.
struct PerEntryTtl;

impl Expiry<String, Entry> for PerEntryTtl {
    fn expire_after_create(
        &self,
        _key: &String,
        entry: &Entry,
        _created_at: Instant,
    ) -> Option<Duration> {
        Some(entry.ttl)
    }
}

/// In-memory [`ResponseCache`] backed by [`moka::sync::Cache`].
///
/// Unbounded by default; use [`MemoryCache::bounded`] to cap the number of
/// entries when memory must stay predictable.
pub struct MemoryCache {
    inner: Cache<String, Entry>,
}

impl fmt::Debug for MemoryCache {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("MemoryCache")
            .field("entries", &self.inner.entry_count())
            .finish()
    }
}

impl MemoryCache {
    /// Creates an unbounded cache.
    #[must_use]
    pub fn new() -> Self {
        Self {
            inner: Cache::builder().expire_after(PerEntryTtl).build(),
        }
    }

    /// Creates a cache evicting least-recently-used entries past `max_entries`.
    #[must_use]
    pub fn bounded(max_entries: u64) -> Self {
        Self {
            inner: Cache::builder()
                .max_capacity(max_entries)
                .expire_after(PerEntryTtl)
                .build(),
        }
    }
}

impl Default for MemoryCache {
    fn default() -> Self {
        Self::new()
    }
}

impl ResponseCache for MemoryCache {
    fn get(&self, key: &str) -> Option<String> {
        self.inner.get(key).map(|entry| entry.value)
    }

    fn set(&self, key: &str, value: String, ttl: Duration) {
        self.inner.insert(String::from(key), Entry { value, ttl });
    }

    fn clear(&self) {
        self.inner.invalidate_all();
    }
}
