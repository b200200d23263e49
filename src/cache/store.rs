//! TTL-bounded in-memory store for upstream responses.

use std::future::Future;
use std::time::{SystemTime, UNIX_EPOCH};

use dashmap::DashMap;
use serde_json::Value;
use tracing::debug;

use crate::error::Result;

/// A stored upstream response with its expiry window.
///
/// `expires_at = created_at + max(0, ttl_ms)`. An entry is logically absent
/// once the wall clock reaches `expires_at`, even while it is still
/// physically stored; the next access evicts it.
#[derive(Debug, Clone)]
pub struct CacheEntry {
    /// Cache key (40-char hex digest, see [`super::cache_key`])
    pub key: String,
    /// Opaque upstream response payload
    pub payload: Value,
    /// Insertion time, epoch milliseconds
    pub created_at: i64,
    /// Expiry time, epoch milliseconds
    pub expires_at: i64,
}

/// Keyed TTL store used to memoize upstream fetches.
///
/// Safe for concurrent reads and writes from multiple in-flight requests.
/// Expiry is lazy: expired entries are dropped when next accessed, not by a
/// background sweeper.
#[derive(Debug, Default)]
pub struct TtlCache {
    entries: DashMap<String, CacheEntry>,
}

fn now_ms() -> i64 {
    SystemTime::now().duration_since(UNIX_EPOCH).map(|d| d.as_millis() as i64).unwrap_or(0)
}

impl TtlCache {
    /// Create an empty store.
    pub fn new() -> Self {
        Self { entries: DashMap::new() }
    }

    /// Get the live payload for `key`, evicting it first if expired.
    pub fn get(&self, key: &str) -> Option<Value> {
        let now = now_ms();
        {
            let entry = self.entries.get(key)?;
            if now < entry.expires_at {
                return Some(entry.payload.clone());
            }
        }
        // Expired. A concurrent set may have refreshed the entry since the
        // read above, so only remove if it is still stale.
        self.entries.remove_if(key, |_, entry| now >= entry.expires_at);
        None
    }

    /// Store `payload` under `key` for `ttl_ms` milliseconds.
    ///
    /// A negative TTL is clamped to zero: the entry expires immediately and
    /// is only visible to a `get` issued at or before its creation instant.
    pub fn set(&self, key: &str, payload: Value, ttl_ms: i64) -> CacheEntry {
        let now = now_ms();
        let entry = CacheEntry {
            key: key.to_string(),
            payload,
            created_at: now,
            expires_at: now + ttl_ms.max(0),
        };
        self.entries.insert(key.to_string(), entry.clone());
        entry
    }

    /// Return the live cached payload, or invoke `producer`, store its
    /// result for `ttl_ms`, and return it.
    ///
    /// The store is not locked across the producer future, so concurrent
    /// callers that miss the same key each invoke their own producer and the
    /// later write wins (at-least-once population). Producer errors are
    /// propagated without touching the store.
    pub async fn get_or_populate<F, Fut>(&self, key: &str, ttl_ms: i64, producer: F) -> Result<Value>
    where
        F: FnOnce() -> Fut,
        Fut: Future<Output = Result<Value>>,
    {
        if let Some(payload) = self.get(key) {
            debug!(key, "cache hit");
            return Ok(payload);
        }
        debug!(key, "cache miss");
        let payload = producer().await?;
        self.set(key, payload.clone(), ttl_ms);
        Ok(payload)
    }

    /// Remove `key`. Returns whether an entry (live or expired) was present.
    pub fn delete(&self, key: &str) -> bool {
        self.entries.remove(key).is_some()
    }

    /// Remove every entry.
    pub fn clear(&self) {
        self.entries.clear();
    }

    /// Number of physically stored entries, expired ones included.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Whether the store holds no entries at all.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;
    use std::sync::atomic::{AtomicUsize, Ordering};

    #[test]
    fn set_then_get_returns_the_payload_within_ttl() {
        let cache = TtlCache::new();
        cache.set("k", json!({"laps": [1, 2, 3]}), 1_000);

        assert_eq!(cache.get("k"), Some(json!({"laps": [1, 2, 3]})));
    }

    #[test]
    fn entry_expiry_window_is_created_at_plus_ttl() {
        let cache = TtlCache::new();
        let entry = cache.set("k", json!(1), 60_000);
        assert_eq!(entry.expires_at, entry.created_at + 60_000);
    }

    #[test]
    fn negative_ttl_is_clamped_to_zero() {
        let cache = TtlCache::new();
        let entry = cache.set("k", json!(1), -5_000);

        assert_eq!(entry.expires_at, entry.created_at);
        // now >= expires_at, so the entry is already logically absent
        assert_eq!(cache.get("k"), None);
    }

    #[test]
    fn expired_entries_are_absent_and_evicted_on_access() {
        let cache = TtlCache::new();
        cache.set("k", json!("payload"), 200);
        assert!(cache.get("k").is_some());

        std::thread::sleep(std::time::Duration::from_millis(250));

        assert_eq!(cache.get("k"), None);
        // the failed get physically removed the entry
        assert!(cache.is_empty());
    }

    #[test]
    fn delete_reports_presence() {
        let cache = TtlCache::new();
        cache.set("k", json!(1), 1_000);

        assert!(cache.delete("k"));
        assert!(!cache.delete("k"));
        assert_eq!(cache.get("k"), None);
    }

    #[test]
    fn clear_removes_everything() {
        let cache = TtlCache::new();
        cache.set("a", json!(1), 1_000);
        cache.set("b", json!(2), 1_000);

        cache.clear();
        assert!(cache.is_empty());
    }

    #[tokio::test]
    async fn get_or_populate_invokes_producer_only_on_miss() {
        let cache = TtlCache::new();
        let calls = AtomicUsize::new(0);

        for _ in 0..3 {
            let value = cache
                .get_or_populate("k", 60_000, || async {
                    calls.fetch_add(1, Ordering::SeqCst);
                    Ok(json!([9158]))
                })
                .await
                .unwrap();
            assert_eq!(value, json!([9158]));
        }

        assert_eq!(calls.load(Ordering::SeqCst), 1);
    }

    #[tokio::test]
    async fn get_or_populate_repopulates_after_expiry() {
        let cache = TtlCache::new();
        let calls = AtomicUsize::new(0);
        let produce = || async {
            calls.fetch_add(1, Ordering::SeqCst);
            Ok(json!("fresh"))
        };

        cache.get_or_populate("k", 0, produce).await.unwrap();
        cache.get_or_populate("k", 0, produce).await.unwrap();

        assert_eq!(calls.load(Ordering::SeqCst), 2);
    }

    #[tokio::test]
    async fn producer_errors_leave_the_store_untouched() {
        let cache = TtlCache::new();
        let result = cache
            .get_or_populate("k", 60_000, || async {
                Err(crate::PaddockError::decode("laps", "expected array"))
            })
            .await;

        assert!(result.is_err());
        assert!(cache.is_empty());
    }
}
