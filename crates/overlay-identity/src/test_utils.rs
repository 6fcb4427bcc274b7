//! Test utilities for the identity layer.
//!
//! Deterministic implementations of the outbound ports.
//! Enable with the `test-utils` feature flag.
//!
//! # Example
//!
//! ```rust
//! use overlay_identity::test_utils::FixedRandomSource;
//! use overlay_identity::RandomSource;
//!
//! let random = FixedRandomSource::new(7);
//! let mut bytes = [0u8; 4];
//! random.fill_bytes(&mut bytes);
//! assert_eq!(bytes, [7, 8, 9, 10]);
//! ```

use std::sync::atomic::{AtomicU64, AtomicU8, Ordering};

use crate::domain::ID_LEN;
use crate::ports::outbound::{ContentHasher, RandomSource};

/// A random source that emits a counting byte sequence.
///
/// Each byte is one more than the previous (wrapping), continuing across calls.
#[derive(Debug, Default)]
pub struct FixedRandomSource {
    next: AtomicU8,
}

impl FixedRandomSource {
    /// Start the sequence at `seed`.
    pub fn new(seed: u8) -> Self {
        Self {
            next: AtomicU8::new(seed),
        }
    }
}

impl RandomSource for FixedRandomSource {
    fn fill_bytes(&self, dest: &mut [u8]) {
        for byte in dest.iter_mut() {
            *byte = self.next.fetch_add(1, Ordering::Relaxed);
        }
    }
}

/// A content hasher that repeats the first content byte and counts its calls.
///
/// Deterministic, and distinct first bytes give distinct identifiers.
#[derive(Debug, Default)]
pub struct CountingHasher {
    calls: AtomicU64,
}

impl CountingHasher {
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of digests computed so far.
    pub fn calls(&self) -> u64 {
        self.calls.load(Ordering::Relaxed)
    }
}

impl ContentHasher for CountingHasher {
    fn digest(&self, content: &[u8]) -> [u8; ID_LEN] {
        self.calls.fetch_add(1, Ordering::Relaxed);
        [content.first().copied().unwrap_or(0); ID_LEN]
    }
}
