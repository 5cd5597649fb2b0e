//! Benchmarks for `BuddyIndex` and `DedupPool` using Divan.
//!
//! Run with: `cargo bench --bench pool`

use divan::{black_box, Bencher};
use dedupslab::{BuddyIndex, DedupPool};

fn main() {
    divan::main();
}

// =============================================================================
// Construction
// =============================================================================

#[divan::bench_group]
mod construction {
    use super::{BuddyIndex, DedupPool};

    #[divan::bench(args = [1 << 10, 1 << 14, 1 << 18])]
    fn new_buddy_index(size: u32) -> BuddyIndex {
        BuddyIndex::new(size).unwrap()
    }

    #[divan::bench(args = [1 << 10, 1 << 14, 1 << 18])]
    fn new_dedup_pool(size: u32) -> DedupPool {
        DedupPool::new(size).unwrap()
    }
}

// =============================================================================
// Reserve / release
// =============================================================================

#[divan::bench_group]
mod reserve {
    use super::{black_box, Bencher, BuddyIndex};

    /// Fill the index with fixed-size blocks, then drain it.
    #[divan::bench(args = [16u32, 64, 256])]
    fn fill_and_drain(bencher: Bencher, block: u32) {
        bencher
            .with_inputs(|| BuddyIndex::new(1 << 16).unwrap())
            .bench_local_values(|mut index| {
                let mut offsets = Vec::new();
                while let Some(offset) = index.reserve(black_box(block)) {
                    offsets.push(offset);
                }
                for offset in offsets {
                    index.release(offset);
                }
            });
    }

    /// Alternating sizes force splits and coalesces on most operations.
    #[divan::bench]
    fn churn_mixed_sizes(bencher: Bencher) {
        bencher
            .with_inputs(|| BuddyIndex::new(1 << 16).unwrap())
            .bench_local_values(|mut index| {
                for i in 0..512u32 {
                    let size = 1 + (i * 61) % 500;
                    if let Some(offset) = index.reserve(black_box(size)) {
                        if i % 2 == 0 {
                            index.release(offset);
                        }
                    }
                }
            });
    }
}

// =============================================================================
// Store / load
// =============================================================================

#[divan::bench_group]
mod store {
    use super::{black_box, Bencher, DedupPool};

    fn distinct_values(n: usize) -> Vec<Vec<u8>> {
        (0..n)
            .map(|i| format!("benchmark value number {i:06}").into_bytes())
            .collect()
    }

    #[divan::bench]
    fn store_unique(bencher: Bencher) {
        let values = distinct_values(512);
        bencher
            .with_inputs(|| DedupPool::new(1 << 18).unwrap())
            .bench_local_values(|mut pool| {
                for value in &values {
                    pool.store(black_box(value)).unwrap();
                }
            });
    }

    #[divan::bench]
    fn store_duplicate(bencher: Bencher) {
        let values = distinct_values(512);
        bencher
            .with_inputs(|| {
                let mut pool = DedupPool::new(1 << 18).unwrap();
                for value in &values {
                    pool.store(value).unwrap();
                }
                pool
            })
            .bench_local_values(|mut pool| {
                for value in &values {
                    pool.store(black_box(value)).unwrap();
                }
            });
    }

    #[divan::bench]
    fn load_cached(bencher: Bencher) {
        let mut pool = DedupPool::new(1 << 18).unwrap();
        let offsets: Vec<u32> = distinct_values(512)
            .iter()
            .map(|value| pool.store(value).unwrap())
            .collect();

        bencher.bench_local(|| {
            for &offset in &offsets {
                black_box(pool.load(black_box(offset)).unwrap());
            }
        });
    }
}
