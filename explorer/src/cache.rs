//! Time-bounded results cache for repeated queries.
//!
//! Pure latency optimization: entries expire after the TTL and the map is
//! capped at `max_entries`, evicting the oldest entry first.

use dashmap::DashMap;
use std::sync::atomic::{AtomicU64, Ordering};
use std::time::{Duration, Instant};
use tracing::debug;

use crate::config::CacheConfig;
use crate::result::{LookupKind, LookupResult};

/// Cache key: lookup kind plus the query as given.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct CacheKey {
    pub kind: LookupKind,
    pub query: String,
}

impl CacheKey {
    pub fn new(kind: LookupKind, query: impl Into<String>) -> Self {
        Self {
            kind,
            query: query.into(),
        }
    }
}

struct CacheEntry {
    result: LookupResult,
    cached_at: Instant,
    expires_at: Instant,
}

/// Cache statistics.
#[derive(Debug, Clone, Default)]
pub struct CacheStats {
    /// Live entries (expired ones may still be counted until touched)
    pub entries: usize,
    pub hits: u64,
    pub misses: u64,
    pub evictions: u64,
}

impl CacheStats {
    /// Calculate hit rate as percentage
    pub fn hit_rate(&self) -> f64 {
        let total = self.hits + self.misses;
        if total == 0 {
            0.0
        } else {
            (self.hits as f64 / total as f64) * 100.0
        }
    }
}

/// Thread-safe results cache backed by DashMap.
pub struct ResultCache {
    entries: DashMap<CacheKey, CacheEntry>,
    ttl: Duration,
    max_entries: usize,
    hits: AtomicU64,
    misses: AtomicU64,
    evictions: AtomicU64,
}

impl ResultCache {
    /// Create a cache with an entry lifetime and a size cap.
    pub fn new(ttl: Duration, max_entries: usize) -> Self {
        Self {
            entries: DashMap::new(),
            ttl,
            max_entries: max_entries.max(1),
            hits: AtomicU64::new(0),
            misses: AtomicU64::new(0),
            evictions: AtomicU64::new(0),
        }
    }

    /// Create from configuration.
    pub fn from_config(config: &CacheConfig) -> Self {
        Self::new(config.ttl(), config.max_entries)
    }

    /// Get an unexpired result.
    pub fn get(&self, key: &CacheKey) -> Option<LookupResult> {
        if let Some(entry) = self.entries.get(key) {
            if Instant::now() < entry.expires_at {
                self.hits.fetch_add(1, Ordering::Relaxed);
                debug!(kind = ?key.kind, query = %key.query, "Lookup cache hit");
                return Some(entry.result.clone());
            }
            // Expired
            drop(entry);
            self.entries.remove(key);
        }

        self.misses.fetch_add(1, Ordering::Relaxed);
        None
    }

    /// Store a result, evicting the oldest entry when full.
    pub fn insert(&self, key: CacheKey, result: LookupResult) {
        if !self.entries.contains_key(&key) && self.entries.len() >= self.max_entries {
            self.evict_oldest();
        }

        let now = Instant::now();
        self.entries.insert(
            key,
            CacheEntry {
                result,
                cached_at: now,
                expires_at: now + self.ttl,
            },
        );
    }

    /// Drop every entry.
    pub fn clear(&self) {
        self.entries.clear();
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn stats(&self) -> CacheStats {
        CacheStats {
            entries: self.entries.len(),
            hits: self.hits.load(Ordering::Relaxed),
            misses: self.misses.load(Ordering::Relaxed),
            evictions: self.evictions.load(Ordering::Relaxed),
        }
    }

    fn evict_oldest(&self) {
        let oldest = self
            .entries
            .iter()
            .min_by_key(|e| e.value().cached_at)
            .map(|e| e.key().clone());

        if let Some(key) = oldest {
            self.entries.remove(&key);
            self.evictions.fetch_add(1, Ordering::Relaxed);
            debug!(kind = ?key.kind, query = %key.query, "Lookup cache eviction");
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::result::FallbackReason;
    use university_directory::InstitutionRecord;

    fn live(name: &str) -> LookupResult {
        LookupResult::live(vec![InstitutionRecord::new(name)])
    }

    #[test]
    fn test_hit_and_miss() {
        let cache = ResultCache::new(Duration::from_secs(60), 8);
        let key = CacheKey::new(LookupKind::ByCountry, "Canada");

        assert!(cache.get(&key).is_none());
        cache.insert(key.clone(), live("McGill University"));

        let hit = cache.get(&key).unwrap();
        assert_eq!(hit.records()[0].name, "McGill University");

        let stats = cache.stats();
        assert_eq!(stats.hits, 1);
        assert_eq!(stats.misses, 1);
        assert_eq!(stats.hit_rate(), 50.0);
    }

    #[test]
    fn test_kinds_do_not_collide() {
        let cache = ResultCache::new(Duration::from_secs(60), 8);
        cache.insert(CacheKey::new(LookupKind::ByCountry, "India"), live("Anna University"));

        assert!(cache.get(&CacheKey::new(LookupKind::ByName, "India")).is_none());
    }

    #[test]
    fn test_expired_entries_are_dropped() {
        let cache = ResultCache::new(Duration::ZERO, 8);
        let key = CacheKey::new(LookupKind::ByName, "Oxford");
        cache.insert(key.clone(), LookupResult::miss(FallbackReason::EmptyResult));

        assert!(cache.get(&key).is_none());
        assert!(cache.is_empty());
    }

    #[test]
    fn test_oldest_entry_evicted_when_full() {
        let cache = ResultCache::new(Duration::from_secs(60), 2);
        let first = CacheKey::new(LookupKind::ByCountry, "UK");
        let second = CacheKey::new(LookupKind::ByCountry, "USA");
        let third = CacheKey::new(LookupKind::ByCountry, "Germany");

        cache.insert(first.clone(), live("University of Oxford"));
        std::thread::sleep(Duration::from_millis(2));
        cache.insert(second.clone(), live("UCLA"));
        std::thread::sleep(Duration::from_millis(2));
        cache.insert(third.clone(), live("ETH Zurich"));

        assert_eq!(cache.len(), 2);
        assert!(cache.get(&first).is_none());
        assert!(cache.get(&second).is_some());
        assert!(cache.get(&third).is_some());
        assert_eq!(cache.stats().evictions, 1);
    }
}
