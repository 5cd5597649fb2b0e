// dedupslab - content-addressed buddy sub-allocator
// Power-of-two slab blocks with a deduplicating content pool on top.

#![warn(rust_2018_idioms)]

pub mod buddy;
pub mod pool;

// Re-exports for convenience
pub use buddy::{round_up_pow2, BuddyIndex};
pub use pool::{
    fingerprint, CacheStats, DedupPool, Fingerprint, FingerprintAlgorithm, HeapSource,
    PoolOptions, PoolStats, SlabSource,
};

/// dedupslab error types
pub mod error {
    use thiserror::Error;

    #[derive(Error, Debug)]
    pub enum Error {
        #[error("invalid slab size {0}: must be a nonzero power of two")]
        InvalidSlabSize(u32),

        #[error("empty payloads cannot be stored")]
        EmptyPayload,

        #[error("payload of {0} bytes does not fit a u32-framed slab")]
        PayloadTooLarge(usize),

        #[error("no free block of {needed} bytes (largest free: {largest_free})")]
        OutOfCapacity { needed: u32, largest_free: u32 },

        #[error("offset {offset} is out of bounds for a {slab_size}-byte slab")]
        OutOfBounds { offset: u32, slab_size: u32 },

        #[error("frame at offset {offset} declares {declared} payload bytes past the slab end")]
        TruncatedFrame { offset: u32, declared: u32 },

        #[error("fingerprint {fingerprint} maps to different content")]
        FingerprintCollision { fingerprint: crate::pool::Fingerprint },
    }

    pub type Result<T> = std::result::Result<T, Error>;
}

/// Version information
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_version_format() {
        // VERSION is a static string, always valid
        let _version: &str = VERSION;
    }
}
