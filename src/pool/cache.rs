//! LRU cache of recently loaded payloads
//!
//! Keyed by slab offset. The pool is single-threaded by contract, so the
//! interior mutability here is `RefCell`/`Cell`, not locks.

use lru::LruCache;
use std::cell::{Cell, RefCell};
use std::num::NonZeroUsize;

/// Payload cache for repeated loads of the same offset
pub struct PayloadCache {
    cache: RefCell<LruCache<u32, Vec<u8>>>,
    hits: Cell<u64>,
    misses: Cell<u64>,
}

impl PayloadCache {
    /// Create a cache holding up to `capacity` payloads
    pub fn new(capacity: usize) -> Self {
        let capacity = NonZeroUsize::new(capacity).unwrap_or(NonZeroUsize::new(1000).unwrap());
        Self {
            cache: RefCell::new(LruCache::new(capacity)),
            hits: Cell::new(0),
            misses: Cell::new(0),
        }
    }

    /// Cached payload for an offset
    pub fn get(&self, offset: u32) -> Option<Vec<u8>> {
        let mut cache = self.cache.borrow_mut();
        if let Some(payload) = cache.get(&offset) {
            self.hits.set(self.hits.get() + 1);
            Some(payload.clone())
        } else {
            self.misses.set(self.misses.get() + 1);
            None
        }
    }

    /// Cache a payload
    pub fn put(&self, offset: u32, payload: Vec<u8>) {
        self.cache.borrow_mut().put(offset, payload);
    }

    /// Drop a cached payload, if present
    ///
    /// Must be called when an offset is released so a recycled block can
    /// never serve the previous content.
    pub fn remove(&self, offset: u32) {
        self.cache.borrow_mut().pop(&offset);
    }

    /// Clear the cache
    pub fn clear(&self) {
        self.cache.borrow_mut().clear();
    }

    /// Get cache statistics
    pub fn stats(&self) -> CacheStats {
        let hits = self.hits.get();
        let misses = self.misses.get();
        let total = hits + misses;
        let hit_rate = if total > 0 {
            hits as f64 / total as f64
        } else {
            0.0
        };

        let cache = self.cache.borrow();
        CacheStats {
            hits,
            misses,
            hit_rate,
            size: cache.len(),
            capacity: cache.cap().get(),
        }
    }
}

/// Cache statistics
#[derive(Debug, Clone)]
pub struct CacheStats {
    pub hits: u64,
    pub misses: u64,
    pub hit_rate: f64,
    pub size: usize,
    pub capacity: usize,
}
