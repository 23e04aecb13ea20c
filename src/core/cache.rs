//! In-memory LRU cache over storage query results.
//!
//! SQLite is the durable tier; this layer only avoids re-running the same
//! filtered query (and period re-derivation) within one process. Any write
//! to the match table clears it wholesale, which is cheap at this size and
//! removes all staleness reasoning.

use lru::LruCache;
use std::num::NonZeroUsize;
use std::sync::{Arc, LazyLock, Mutex};

use crate::config::PeriodCutoffs;
use crate::storage::models::{MatchFilter, MatchRecord};

const QUERY_CACHE_CAPACITY: usize = 64;

/// Key for a memoized match query: which database it ran against, the
/// filter, and the cutoffs the periods were derived with.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct MatchQueryKey {
    pub db_id: u64,
    pub filter: MatchFilter,
    pub cutoffs: PeriodCutoffs,
}

/// Bounded memory cache, shared across the process.
pub struct MemoryCache<K: std::hash::Hash + Eq, V: Clone> {
    inner: Arc<Mutex<LruCache<K, V>>>,
}

impl<K: std::hash::Hash + Eq, V: Clone> MemoryCache<K, V> {
    pub fn new(capacity: usize) -> Self {
        Self {
            inner: Arc::new(Mutex::new(LruCache::new(
                NonZeroUsize::new(capacity).unwrap(),
            ))),
        }
    }

    pub fn get(&self, key: &K) -> Option<V> {
        let mut cache = self.inner.lock().ok()?;
        cache.get(key).cloned()
    }

    pub fn put(&self, key: K, value: V) {
        if let Ok(mut cache) = self.inner.lock() {
            cache.put(key, value);
        }
    }

    pub fn clear(&self) {
        if let Ok(mut cache) = self.inner.lock() {
            cache.clear();
        }
    }

    /// (live entries, capacity)
    pub fn stats(&self) -> (usize, usize) {
        match self.inner.lock() {
            Ok(cache) => (cache.len(), cache.cap().get()),
            Err(_) => (0, 0),
        }
    }
}

/// Cache manager holding the per-concern caches.
pub struct CacheManager {
    match_queries: MemoryCache<MatchQueryKey, Vec<MatchRecord>>,
}

impl CacheManager {
    pub fn new() -> Self {
        Self {
            match_queries: MemoryCache::new(QUERY_CACHE_CAPACITY),
        }
    }

    pub fn get_matches(&self, key: &MatchQueryKey) -> Option<Vec<MatchRecord>> {
        self.match_queries.get(key)
    }

    pub fn put_matches(&self, key: MatchQueryKey, records: Vec<MatchRecord>) {
        self.match_queries.put(key, records);
    }

    pub fn clear(&self) {
        self.match_queries.clear();
    }

    pub fn stats(&self) -> (usize, usize) {
        self.match_queries.stats()
    }
}

impl Default for CacheManager {
    fn default() -> Self {
        Self::new()
    }
}

pub static GLOBAL_CACHE: LazyLock<CacheManager> = LazyLock::new(CacheManager::new);
