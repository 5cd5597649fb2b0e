//! Slab provider seam
//!
//! The pool obtains its backing byte buffer from a `SlabSource` exactly once
//! at construction. The default source allocates on the heap; embedders with
//! their own buffer management plug in here.

/// Supplier of the pool's backing buffer
pub trait SlabSource {
    /// Allocate a zero-initialized buffer of exactly `len` bytes
    ///
    /// Called exactly once per pool, at construction.
    fn allocate(&self, len: usize) -> Vec<u8>;
}

/// Default in-process source backed by the global allocator
#[derive(Debug, Clone, Copy, Default)]
pub struct HeapSource;

impl SlabSource for HeapSource {
    fn allocate(&self, len: usize) -> Vec<u8> {
        vec![0; len]
    }
}
