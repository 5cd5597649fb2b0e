//! Dedup Pool
//!
//! Content-addressed storage over a single fixed slab. Values are
//! fingerprinted, framed, and placed into buddy blocks; storing the same
//! bytes twice yields the same offset without consuming more slab.
//!
//! # Architecture
//!
//! ```text
//! DedupPool
//!   ├─→ BuddyIndex          → which power-of-two blocks are free
//!   ├─→ slab (Vec<u8>)      → [len BE][payload] frames, one per value
//!   ├─→ FingerprintRegistry → fingerprint → offset (dedup map)
//!   └─→ PayloadCache (LRU)  → recently loaded payloads, keyed by offset
//!
//! store(bytes):  fingerprint → registry hit? return offset
//!                            → miss: reserve(len+4), write frame, record
//! load(offset):  cache → slab frame
//! delete(fp):    release block, drop mapping, invalidate cache
//! ```
//!
//! The slab buffer comes from a pluggable [`SlabSource`], consulted exactly
//! once at construction.

pub mod bench;
pub mod cache;
pub mod fingerprint;
pub mod frame;
pub mod registry;
pub mod source;
pub mod store;

pub use cache::{CacheStats, PayloadCache};
pub use fingerprint::{fingerprint, Fingerprint, FingerprintAlgorithm};
pub use registry::FingerprintRegistry;
pub use source::{HeapSource, SlabSource};
pub use store::{DedupPool, PoolOptions, PoolStats};
