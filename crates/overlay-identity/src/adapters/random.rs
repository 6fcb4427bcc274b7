//! Operating system randomness.

use rand::rngs::OsRng;
use rand::RngCore;

use crate::ports::RandomSource;

/// [`RandomSource`] backed by the operating system CSPRNG.
#[derive(Debug, Clone, Copy, Default)]
pub struct OsRandomSource;

impl OsRandomSource {
    pub fn new() -> Self {
        Self
    }
}

impl RandomSource for OsRandomSource {
    fn fill_bytes(&self, dest: &mut [u8]) {
        OsRng.fill_bytes(dest);
    }
}
