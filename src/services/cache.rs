// src/services/cache.rs
// DOCUMENTATION: In-memory memoization of backend payloads and resolved images
// PURPOSE: Avoid repeat network calls when a gallery is re-rendered

use bytes::Bytes;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::sync::Arc;
use std::time::{Duration, Instant};
use tokio::sync::RwLock;

/// Cache entry with expiration
#[derive(Clone, Debug)]
struct CacheEntry<T> {
    data: T,
    expires_at: Instant,
}

impl<T> CacheEntry<T> {
    fn new(data: T, ttl: Duration) -> Self {
        Self {
            data,
            expires_at: Instant::now() + ttl,
        }
    }

    fn is_expired(&self) -> bool {
        Instant::now() > self.expires_at
    }
}

/// TTL cache keyed by request parameters
/// DOCUMENTATION: Entries are only ever inserted or expired, never updated in
/// place, so a single write lock around insert-if-absent is enough.
/// Values are cloned out on every hit, so keep them cheap to clone
/// (`Bytes`, or structs built around it).
pub struct ResponseCache<V = Bytes> {
    store: Arc<RwLock<HashMap<String, CacheEntry<V>>>>,
    default_ttl: Duration,
}

impl ResponseCache {
    /// Key for a `/images` backend call
    pub fn images_key(query: &str, count: u32) -> String {
        format!("images:{}:{}", query.trim(), count)
    }

    /// Key for a `/reddit` backend call
    pub fn posts_key(topic: &str, limit: u32) -> String {
        format!("posts:{}:{}", topic.trim(), limit)
    }

}

impl<V: Clone> ResponseCache<V> {
    /// Create new cache with default TTL
    pub fn new(ttl_seconds: u64) -> Self {
        Self {
            store: Arc::new(RwLock::new(HashMap::new())),
            default_ttl: Duration::from_secs(ttl_seconds),
        }
    }

    /// Get cached value
    pub async fn get(&self, key: &str) -> Option<V> {
        let store = self.store.read().await;

        if let Some(entry) = store.get(key) {
            if !entry.is_expired() {
                log::debug!("Cache HIT for key: {}", key);
                return Some(entry.data.clone());
            } else {
                log::debug!("Cache EXPIRED for key: {}", key);
            }
        } else {
            log::debug!("Cache MISS for key: {}", key);
        }

        None
    }

    /// Insert unless a live entry already exists
    /// DOCUMENTATION: Returns whichever value ends up cached. Expired entries
    /// are replaced.
    pub async fn insert_if_absent(&self, key: String, value: V) -> V {
        let ttl = self.default_ttl;
        let mut store = self.store.write().await;

        if let Some(existing) = store.get(&key) {
            if !existing.is_expired() {
                log::debug!("Cache KEEP for key: {} (already present)", key);
                return existing.data.clone();
            }
        }

        log::debug!("Cache SET for key: {} (TTL: {}s)", key, ttl.as_secs());
        store.insert(key, CacheEntry::new(value.clone(), ttl));
        value
    }

    /// Clear expired entries
    pub async fn cleanup(&self) {
        let mut store = self.store.write().await;
        let before_count = store.len();
        store.retain(|_, entry| !entry.is_expired());
        let after_count = store.len();

        if before_count > after_count {
            log::info!(
                "Cache cleanup: removed {} expired entries ({} remaining)",
                before_count - after_count,
                after_count
            );
        }
    }

    /// Get cache statistics
    pub async fn stats(&self) -> CacheStats {
        let store = self.store.read().await;
        let total = store.len();
        let expired = store.values().filter(|e| e.is_expired()).count();

        CacheStats {
            total_entries: total,
            expired_entries: expired,
            active_entries: total - expired,
        }
    }
}

/// Cache statistics
#[derive(Debug, Serialize, Deserialize)]
pub struct CacheStats {
    pub total_entries: usize,
    pub expired_entries: usize,
    pub active_entries: usize,
}

/// Start background cleanup task
/// DOCUMENTATION: Periodically removes expired entries
pub fn start_cleanup_task<V>(cache: Arc<ResponseCache<V>>, interval_seconds: u64)
where
    V: Clone + Send + Sync + 'static,
{
    tokio::spawn(async move {
        let mut interval = tokio::time::interval(Duration::from_secs(interval_seconds.max(1)));

        loop {
            interval.tick().await;
            cache.cleanup().await;
        }
    });
}
