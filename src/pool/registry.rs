//! Fingerprint registry
//!
//! In-memory index of stored content: fingerprint → slab offset. The first
//! mapping for a fingerprint wins; dedup means a live entry is never
//! overwritten, only removed.

use super::fingerprint::Fingerprint;
use std::collections::HashMap;

/// Fingerprint → offset index for the pool's live content
#[derive(Debug, Default)]
pub struct FingerprintRegistry {
    index: HashMap<Fingerprint, u32>,
}

impl FingerprintRegistry {
    /// Create an empty registry
    pub fn new() -> Self {
        Self::default()
    }

    /// Offset stored for a fingerprint
    pub fn get(&self, fingerprint: Fingerprint) -> Option<u32> {
        self.index.get(&fingerprint).copied()
    }

    /// Record a fingerprint → offset mapping
    ///
    /// Returns the already-registered offset when the fingerprint is live,
    /// leaving the existing mapping in place.
    pub fn insert(&mut self, fingerprint: Fingerprint, offset: u32) -> Option<u32> {
        match self.index.entry(fingerprint) {
            std::collections::hash_map::Entry::Occupied(entry) => Some(*entry.get()),
            std::collections::hash_map::Entry::Vacant(entry) => {
                entry.insert(offset);
                None
            }
        }
    }

    /// Drop a mapping, returning its offset
    pub fn remove(&mut self, fingerprint: Fingerprint) -> Option<u32> {
        self.index.remove(&fingerprint)
    }

    /// Whether a fingerprint is live
    pub fn contains(&self, fingerprint: Fingerprint) -> bool {
        self.index.contains_key(&fingerprint)
    }

    /// All live fingerprints
    pub fn fingerprints(&self) -> Vec<Fingerprint> {
        self.index.keys().copied().collect()
    }

    /// Number of live mappings
    pub fn len(&self) -> usize {
        self.index.len()
    }

    /// Check if empty
    pub fn is_empty(&self) -> bool {
        self.index.is_empty()
    }
}
