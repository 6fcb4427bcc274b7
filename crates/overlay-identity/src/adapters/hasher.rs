//! SHA-1 content digests.

use sha1::{Digest, Sha1};

use crate::domain::ID_LEN;
use crate::ports::ContentHasher;

/// [`ContentHasher`] over SHA-1, whose 160-bit output is exactly one
/// identifier.
#[derive(Debug, Clone, Copy, Default)]
pub struct Sha1ContentHasher;

impl Sha1ContentHasher {
    pub fn new() -> Self {
        Self
    }
}

impl ContentHasher for Sha1ContentHasher {
    fn digest(&self, content: &[u8]) -> [u8; ID_LEN] {
        let mut hasher = Sha1::new();
        hasher.update(content);
        let digest = hasher.finalize();

        let mut out = [0u8; ID_LEN];
        out.copy_from_slice(&digest);
        out
    }
}
