//! Deduplicating content pool
//!
//! Combines BuddyIndex + slab + FingerprintRegistry + PayloadCache.
//! This is the integration layer that provides the high-level API.

use super::cache::PayloadCache;
use super::fingerprint::{fingerprint, Fingerprint, FingerprintAlgorithm};
use super::frame;
use super::registry::FingerprintRegistry;
use super::source::{HeapSource, SlabSource};
use crate::buddy::BuddyIndex;
use crate::error::{Error, Result};
use tracing::{debug, info, warn};

/// Pool construction knobs
#[derive(Debug, Clone)]
pub struct PoolOptions {
    /// Payload cache capacity (entries)
    pub cache_capacity: usize,
    /// Fingerprint algorithm for content addressing
    pub algorithm: FingerprintAlgorithm,
    /// Compare payload bytes on dedup hits and fail on mismatch
    ///
    /// Off by default; the pool does not promise collision resistance.
    pub verify_on_hit: bool,
}

impl Default for PoolOptions {
    fn default() -> Self {
        Self {
            cache_capacity: 1000,
            algorithm: FingerprintAlgorithm::default(),
            verify_on_hit: false,
        }
    }
}

/// Content-addressed pool over a fixed slab
///
/// Storing a byte sequence fingerprints it, reserves a buddy block on a
/// miss, and writes a length-prefixed frame into the slab. Storing the same
/// bytes again returns the original offset without touching the slab.
pub struct DedupPool {
    index: BuddyIndex,
    slab: Vec<u8>,
    registry: FingerprintRegistry,
    cache: PayloadCache,
    algorithm: FingerprintAlgorithm,
    verify_on_hit: bool,
    dedup_hits: u64,
    dedup_misses: u64,
}

impl DedupPool {
    /// Create a pool over a heap-allocated slab of `size` bytes
    ///
    /// `size` must be a nonzero power of two.
    pub fn new(size: u32) -> Result<Self> {
        Self::with_options(None, size, PoolOptions::default())
    }

    /// Create a pool with a custom slab source and options
    ///
    /// `source` is consulted exactly once for the backing buffer; `None`
    /// selects the built-in heap source.
    pub fn with_options(
        source: Option<&dyn SlabSource>,
        size: u32,
        options: PoolOptions,
    ) -> Result<Self> {
        let index = BuddyIndex::new(size)?;
        let slab = source.unwrap_or(&HeapSource).allocate(size as usize);
        debug_assert_eq!(slab.len(), size as usize);

        info!(
            slab_size = size,
            algorithm = ?options.algorithm,
            "initializing dedup pool"
        );

        Ok(Self {
            index,
            slab,
            registry: FingerprintRegistry::new(),
            cache: PayloadCache::new(options.cache_capacity),
            algorithm: options.algorithm,
            verify_on_hit: options.verify_on_hit,
            dedup_hits: 0,
            dedup_misses: 0,
        })
    }

    /// Store a byte sequence, returning its slab offset
    ///
    /// Identical content stores to the identical offset; only the first
    /// store of a sequence consumes slab space.
    pub fn store(&mut self, payload: &[u8]) -> Result<u32> {
        if payload.is_empty() {
            return Err(Error::EmptyPayload);
        }

        let fp = fingerprint(payload, self.algorithm);
        if let Some(offset) = self.registry.get(fp) {
            if self.verify_on_hit && frame::read(&self.slab, offset)? != payload {
                warn!(fingerprint = %fp, offset, "fingerprint collision on store");
                return Err(Error::FingerprintCollision { fingerprint: fp });
            }
            self.dedup_hits += 1;
            debug!(fingerprint = %fp, offset, "dedup hit");
            return Ok(offset);
        }

        let needed = frame::frame_len(payload)?;
        let offset = self
            .index
            .reserve(needed)
            .ok_or_else(|| Error::OutOfCapacity {
                needed,
                largest_free: self.index.largest_free(),
            })?;

        frame::write(&mut self.slab, offset, payload);
        self.registry.insert(fp, offset);
        self.dedup_misses += 1;

        debug!(
            fingerprint = %fp,
            offset,
            payload_len = payload.len(),
            "stored new value"
        );
        Ok(offset)
    }

    /// Load the payload stored at `offset` (with caching)
    ///
    /// Offsets must come from a successful `store`. Loading an offset whose
    /// value was deleted is a caller error: the bytes may be stale.
    pub fn load(&self, offset: u32) -> Result<Vec<u8>> {
        if let Some(payload) = self.cache.get(offset) {
            return Ok(payload);
        }

        let payload = frame::read(&self.slab, offset)?.to_vec();
        self.cache.put(offset, payload.clone());
        Ok(payload)
    }

    /// Delete the value with this fingerprint
    ///
    /// Releases its block and drops the mapping. Unknown fingerprints
    /// return `false`.
    pub fn delete(&mut self, fingerprint: Fingerprint) -> bool {
        let Some(offset) = self.registry.remove(fingerprint) else {
            return false;
        };

        self.index.release(offset);
        self.cache.remove(offset);
        debug!(fingerprint = %fingerprint, offset, "deleted value");
        true
    }

    /// Fingerprint `payload` with this pool's algorithm
    pub fn fingerprint_of(&self, payload: &[u8]) -> Fingerprint {
        fingerprint(payload, self.algorithm)
    }

    /// Offset of the value with this fingerprint, if stored
    pub fn find(&self, fingerprint: Fingerprint) -> Option<u32> {
        self.registry.get(fingerprint)
    }

    /// Whether a value with this fingerprint is stored
    pub fn contains(&self, fingerprint: Fingerprint) -> bool {
        self.registry.contains(fingerprint)
    }

    /// Number of distinct values stored
    pub fn len(&self) -> usize {
        self.registry.len()
    }

    /// Check if empty
    pub fn is_empty(&self) -> bool {
        self.registry.is_empty()
    }

    /// Slab capacity in bytes
    pub fn slab_size(&self) -> u32 {
        self.index.size()
    }

    /// Largest contiguous free block currently available
    pub fn largest_free(&self) -> u32 {
        self.index.largest_free()
    }

    /// Get pool statistics including dedup and cache metrics
    pub fn stats(&self) -> PoolStats {
        let cache_stats = self.cache.stats();
        PoolStats {
            slab_size: self.index.size(),
            stored_values: self.registry.len(),
            largest_free: self.index.largest_free(),
            outstanding: self.index.outstanding(),
            dedup_hits: self.dedup_hits,
            dedup_misses: self.dedup_misses,
            cache_hits: cache_stats.hits,
            cache_misses: cache_stats.misses,
            cache_hit_rate: cache_stats.hit_rate,
        }
    }
}

/// Pool statistics with dedup and cache metrics
#[derive(Debug, Clone)]
pub struct PoolStats {
    pub slab_size: u32,
    pub stored_values: usize,
    pub largest_free: u32,
    pub outstanding: usize,
    pub dedup_hits: u64,
    pub dedup_misses: u64,
    pub cache_hits: u64,
    pub cache_misses: u64,
    pub cache_hit_rate: f64,
}
