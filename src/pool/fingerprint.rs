//! Content fingerprints for dedup lookups

use serde::{Deserialize, Serialize};
use std::fmt;

/// 32-bit fingerprint of a stored byte sequence
///
/// Identical content always yields the same fingerprint; distinct content is
/// assumed (not guaranteed) to differ. The pool does not defend against
/// adversarial collisions.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct Fingerprint(u32);

impl Fingerprint {
    /// Wrap an externally computed 32-bit hash
    pub fn from_raw(raw: u32) -> Self {
        Self(raw)
    }

    /// The raw 32-bit hash value
    pub fn raw(&self) -> u32 {
        self.0
    }
}

impl fmt::Display for Fingerprint {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:#010x}", self.0)
    }
}

/// Fingerprint algorithm
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum FingerprintAlgorithm {
    /// CRC32 (IEEE), table-driven
    #[default]
    Crc32,
    /// FNV-1a, 32-bit
    Fnv1a,
}

/// Fingerprint `data` with the specified algorithm
pub fn fingerprint(data: &[u8], algorithm: FingerprintAlgorithm) -> Fingerprint {
    match algorithm {
        FingerprintAlgorithm::Crc32 => Fingerprint(crc32(data)),
        FingerprintAlgorithm::Fnv1a => Fingerprint(fnv1a(data)),
    }
}

const CRC32_TABLE: [u32; 256] = build_crc32_table();

const fn build_crc32_table() -> [u32; 256] {
    let mut table = [0u32; 256];
    let mut i = 0;
    while i < 256 {
        let mut crc = i as u32;
        let mut bit = 0;
        while bit < 8 {
            crc = if crc & 1 != 0 {
                (crc >> 1) ^ 0xEDB8_8320
            } else {
                crc >> 1
            };
            bit += 1;
        }
        table[i] = crc;
        i += 1;
    }
    table
}

fn crc32(data: &[u8]) -> u32 {
    let mut crc = u32::MAX;
    for &byte in data {
        let idx = ((crc ^ byte as u32) & 0xFF) as usize;
        crc = (crc >> 8) ^ CRC32_TABLE[idx];
    }
    !crc
}

fn fnv1a(data: &[u8]) -> u32 {
    let mut hash: u32 = 0x811C_9DC5;
    for &byte in data {
        hash ^= byte as u32;
        hash = hash.wrapping_mul(0x0100_0193);
    }
    hash
}
