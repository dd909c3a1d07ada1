//! In-memory TTL + LRU result cache.

use std::collections::HashMap;
use std::sync::Arc;
use std::time::{Duration, Instant};

use parking_lot::Mutex;

use super::error::CacheError;
use super::store::ResultStore;
use super::types::CacheEntry;
use crate::analysis::SentimentResult;

#[derive(Default)]
struct CacheTable {
    entries: HashMap<[u8; 32], CacheEntry>,
    tick: u64,
}

/// Bounded in-memory store mapping text keys to previously computed results.
///
/// Both `fetch` and `store` refresh an entry's recency; eviction removes the
/// entry with the oldest recency tick. Expired entries are purged lazily on
/// the access that observes them.
pub struct MemoryCache {
    capacity: usize,
    inner: Mutex<CacheTable>,
}

impl MemoryCache {
    /// Creates a cache holding at most `capacity` entries.
    pub fn new(capacity: usize) -> Self {
        Self {
            capacity,
            inner: Mutex::new(CacheTable::default()),
        }
    }

    /// Returns the number of entries, including any not yet purged expired ones.
    pub fn len(&self) -> usize {
        self.inner.lock().entries.len()
    }

    /// Returns `true` if the cache is empty.
    pub fn is_empty(&self) -> bool {
        self.inner.lock().entries.is_empty()
    }

    /// Removes all entries.
    pub fn clear(&self) {
        self.inner.lock().entries.clear();
    }

    /// Returns `true` if `key` is present, without refreshing its recency.
    pub fn contains_key(&self, key: &[u8; 32]) -> bool {
        self.inner.lock().entries.contains_key(key)
    }
}

impl std::fmt::Debug for MemoryCache {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("MemoryCache")
            .field("capacity", &self.capacity)
            .field("entries", &self.len())
            .finish()
    }
}

impl ResultStore for MemoryCache {
    fn fetch(
        &self,
        key: &[u8; 32],
        now: Instant,
    ) -> Result<Option<Arc<SentimentResult>>, CacheError> {
        let mut table = self.inner.lock();
        table.tick += 1;
        let tick = table.tick;

        let expired = table.entries.get(key).is_some_and(|e| e.is_expired(now));
        if expired {
            table.entries.remove(key);
            return Ok(None);
        }

        match table.entries.get_mut(key) {
            Some(entry) => {
                entry.last_used = tick;
                Ok(Some(Arc::clone(&entry.value)))
            }
            None => Ok(None),
        }
    }

    fn store(
        &self,
        key: [u8; 32],
        value: Arc<SentimentResult>,
        ttl: Duration,
        now: Instant,
    ) -> Result<(), CacheError> {
        let mut table = self.inner.lock();
        table.tick += 1;
        let tick = table.tick;

        if !table.entries.contains_key(&key) && table.entries.len() >= self.capacity {
            let lru = table
                .entries
                .iter()
                .min_by_key(|(_, entry)| entry.last_used)
                .map(|(&k, _)| k);
            if let Some(k) = lru {
                table.entries.remove(&k);
            }
        }

        table
            .entries
            .insert(key, CacheEntry::new(value, ttl, now, tick));
        Ok(())
    }
}
