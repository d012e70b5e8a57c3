use std::num::NonZeroUsize;
use std::sync::atomic::{AtomicU64, Ordering};
use std::time::{Duration, Instant};

use lru::LruCache;
use parking_lot::Mutex;
use sha2::{Digest, Sha256};

/// TTL'd LRU cache for ranked search results.
///
/// The corpus index is immutable, so identical queries always produce
/// identical results and caching is transparent to callers.
pub struct SearchCache<T> {
    cache: Mutex<LruCache<String, (T, Instant)>>,
    ttl: Duration,
    hits: AtomicU64,
    misses: AtomicU64,
}

#[derive(Debug, Default)]
pub struct CacheStats {
    pub hits: u64,
    pub misses: u64,
    pub size: usize,
    pub hit_rate: f64,
}

impl<T> SearchCache<T> {
    pub fn new(capacity: usize, ttl_secs: u64) -> Self {
        let capacity = NonZeroUsize::new(capacity).unwrap_or(NonZeroUsize::MIN);
        Self {
            cache: Mutex::new(LruCache::new(capacity)),
            ttl: Duration::from_secs(ttl_secs),
            hits: AtomicU64::new(0),
            misses: AtomicU64::new(0),
        }
    }

    pub fn get(&self, key: &str) -> Option<T>
    where
        T: Clone,
    {
        let mut cache = self.cache.lock();
        if let Some((value, stored_at)) = cache.get(key) {
            if stored_at.elapsed() < self.ttl {
                self.hits.fetch_add(1, Ordering::Relaxed);
                return Some(value.clone());
            }
        }
        self.misses.fetch_add(1, Ordering::Relaxed);
        None
    }

    pub fn set(&self, key: &str, value: T) {
        let mut cache = self.cache.lock();
        cache.put(key.to_string(), (value, Instant::now()));
    }

    /// Digest a canonical description of the lookup into a fixed-size key.
    pub fn make_key(canonical: &str) -> String {
        let mut hasher = Sha256::new();
        hasher.update(canonical.as_bytes());
        format!("{:x}", hasher.finalize())
    }

    pub fn stats(&self) -> CacheStats {
        let hits = self.hits.load(Ordering::Relaxed);
        let misses = self.misses.load(Ordering::Relaxed);
        let total = hits + misses;
        let hit_rate = if total > 0 { hits as f64 / total as f64 } else { 0.0 };
        let cache = self.cache.lock();

        CacheStats { hits, misses, size: cache.len(), hit_rate }
    }

    pub fn clear(&self) {
        let mut cache = self.cache.lock();
        cache.clear();
        self.hits.store(0, Ordering::Relaxed);
        self.misses.store(0, Ordering::Relaxed);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_get_after_set() {
        let cache: SearchCache<Vec<String>> = SearchCache::new(8, 60);
        let key = SearchCache::<Vec<String>>::make_key("paneer|veg|20");

        assert!(cache.get(&key).is_none());
        cache.set(&key, vec!["Palak Paneer".to_string()]);
        assert_eq!(cache.get(&key), Some(vec!["Palak Paneer".to_string()]));
    }

    #[test]
    fn test_make_key_is_stable_and_distinct() {
        let a = SearchCache::<()>::make_key("paneer|veg|20");
        let b = SearchCache::<()>::make_key("paneer|veg|20");
        let c = SearchCache::<()>::make_key("paneer|veg|25");
        assert_eq!(a, b);
        assert_ne!(a, c);
    }

    #[test]
    fn test_zero_ttl_expires_immediately() {
        let cache: SearchCache<u32> = SearchCache::new(8, 0);
        cache.set("k", 1);
        assert!(cache.get("k").is_none());
    }

    #[test]
    fn test_stats_and_clear() {
        let cache: SearchCache<u32> = SearchCache::new(8, 60);
        cache.set("k", 1);
        let _ = cache.get("k");
        let _ = cache.get("missing");

        let stats = cache.stats();
        assert_eq!(stats.hits, 1);
        assert_eq!(stats.misses, 1);
        assert_eq!(stats.size, 1);

        cache.clear();
        let stats = cache.stats();
        assert_eq!(stats.size, 0);
        assert_eq!(stats.hits, 0);
    }

    #[test]
    fn test_zero_capacity_is_clamped() {
        let cache: SearchCache<u32> = SearchCache::new(0, 60);
        cache.set("k", 1);
        assert_eq!(cache.get("k"), Some(1));
    }
}
