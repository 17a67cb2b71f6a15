//! Response cache with LRU eviction
//!
//! Maps a (content, task type) fingerprint to a previously produced response
//! body. Bounded capacity; the least-recently-used entry is evicted when the
//! bound is exceeded. Shared between request paths and the poller behind a
//! single mutex.

use crate::error::Result;
use crate::validator::validate_response;
use serde_json::Value;
use std::collections::HashMap;
use std::future::Future;
use std::sync::Mutex;
use tracing::debug;

/// Cache lookup key: the request fingerprint.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct CacheKey {
    pub content: String,
    pub task_type: String,
}

impl CacheKey {
    pub fn new(content: impl Into<String>, task_type: impl Into<String>) -> Self {
        Self {
            content: content.into(),
            task_type: task_type.into(),
        }
    }
}

#[derive(Debug)]
struct CacheEntry {
    value: String,
    /// Logical access stamp; lowest stamp is the eviction candidate.
    last_accessed: u64,
}

#[derive(Debug, Default)]
struct CacheInner {
    entries: HashMap<CacheKey, CacheEntry>,
    clock: u64,
}

impl CacheInner {
    fn touch(&mut self) -> u64 {
        self.clock += 1;
        self.clock
    }

    fn lru_key(&self) -> Option<CacheKey> {
        self.entries
            .iter()
            .min_by_key(|(_, entry)| entry.last_accessed)
            .map(|(key, _)| key.clone())
    }
}

/// Thread-safe bounded response cache.
#[derive(Debug)]
pub struct ResponseCache {
    inner: Mutex<CacheInner>,
    capacity: usize,
}

impl ResponseCache {
    /// Create a cache holding at most `capacity` entries.
    ///
    /// A zero capacity is clamped to one so `put` always retains the entry
    /// it just stored.
    pub fn new(capacity: usize) -> Self {
        Self {
            inner: Mutex::new(CacheInner::default()),
            capacity: capacity.max(1),
        }
    }

    /// Look up a response; a hit refreshes recency.
    pub fn get(&self, key: &CacheKey) -> Option<String> {
        let mut inner = self.inner.lock().unwrap();
        let stamp = inner.touch();
        let entry = inner.entries.get_mut(key)?;
        entry.last_accessed = stamp;
        Some(entry.value.clone())
    }

    /// Insert or overwrite a response, evicting the least-recently-used
    /// entry when over capacity.
    pub fn put(&self, key: CacheKey, value: impl Into<String>) {
        let mut inner = self.inner.lock().unwrap();

        if !inner.entries.contains_key(&key) && inner.entries.len() >= self.capacity {
            if let Some(lru) = inner.lru_key() {
                inner.entries.remove(&lru);
                debug!(content = %lru.content, task_type = %lru.task_type, "Evicted LRU cache entry");
            }
        }

        let stamp = inner.touch();
        inner.entries.insert(
            key,
            CacheEntry {
                value: value.into(),
                last_accessed: stamp,
            },
        );
    }

    /// Number of live entries.
    pub fn len(&self) -> usize {
        self.inner.lock().unwrap().entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Resolve a request through the cache.
    ///
    /// On a hit the stored response is returned without recomputation. On a
    /// miss the generator is invoked once, its payload validated against the
    /// prediction schema, and the joined generated text stored and returned.
    /// Generator or validation failure propagates; nothing is cached.
    pub async fn resolve<F, Fut>(
        &self,
        content: &str,
        task_type: &str,
        generator: F,
    ) -> Result<String>
    where
        F: FnOnce() -> Fut,
        Fut: Future<Output = Result<Value>>,
    {
        let key = CacheKey::new(content, task_type);

        if let Some(cached) = self.get(&key) {
            debug!(task_type, "Response cache hit");
            return Ok(cached);
        }

        debug!(task_type, "Response cache miss, generating");
        let payload = generator().await?;
        let validated = validate_response(&payload)?;
        let response = validated.joined_text();

        self.put(key, response.clone());
        Ok(response)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::AutodocError;
    use serde_json::json;

    fn key(content: &str) -> CacheKey {
        CacheKey::new(content, "content_generation")
    }

    #[test]
    fn test_put_then_get_returns_stored_value() {
        let cache = ResponseCache::new(10);
        cache.put(key("a"), "response-a");

        assert_eq!(cache.get(&key("a")), Some("response-a".to_string()));
        assert_eq!(cache.get(&key("b")), None);
    }

    #[test]
    fn test_put_overwrites() {
        let cache = ResponseCache::new(10);
        cache.put(key("a"), "v1");
        cache.put(key("a"), "v2");

        assert_eq!(cache.get(&key("a")), Some("v2".to_string()));
        assert_eq!(cache.len(), 1);
    }

    #[test]
    fn test_capacity_overflow_evicts_lru() {
        let cache = ResponseCache::new(2);
        cache.put(key("a"), "va");
        cache.put(key("b"), "vb");

        // Touch "a" so "b" becomes the LRU entry
        assert!(cache.get(&key("a")).is_some());

        cache.put(key("c"), "vc");

        assert_eq!(cache.len(), 2);
        assert_eq!(cache.get(&key("b")), None);
        assert_eq!(cache.get(&key("a")), Some("va".to_string()));
        assert_eq!(cache.get(&key("c")), Some("vc".to_string()));
    }

    #[test]
    fn test_zero_capacity_clamped() {
        let cache = ResponseCache::new(0);
        cache.put(key("a"), "va");
        assert_eq!(cache.get(&key("a")), Some("va".to_string()));
    }

    #[tokio::test]
    async fn test_resolve_miss_generates_and_caches() {
        let cache = ResponseCache::new(10);

        let response = cache
            .resolve("prompt", "content_generation", || async {
                Ok(json!({"predictions": [{"generated_text": "generated"}]}))
            })
            .await
            .unwrap();

        assert_eq!(response, "generated");
        assert_eq!(cache.len(), 1);

        // Second resolve must not invoke the generator
        let response = cache
            .resolve("prompt", "content_generation", || async {
                panic!("generator must not run on a cache hit")
            })
            .await
            .unwrap();
        assert_eq!(response, "generated");
    }

    #[tokio::test]
    async fn test_resolve_generator_failure_caches_nothing() {
        let cache = ResponseCache::new(10);

        let result = cache
            .resolve("prompt", "content_generation", || async {
                Err(AutodocError::Input("boom".to_string()))
            })
            .await;

        assert!(result.is_err());
        assert!(cache.is_empty());
    }

    #[tokio::test]
    async fn test_resolve_invalid_payload_caches_nothing() {
        let cache = ResponseCache::new(10);

        let result = cache
            .resolve("prompt", "content_generation", || async {
                Ok(json!({"predictions": []}))
            })
            .await;

        assert!(matches!(result.unwrap_err(), AutodocError::Schema(_)));
        assert!(cache.is_empty());
    }
}
