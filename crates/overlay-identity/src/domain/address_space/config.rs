//! Address space configuration.

use serde::{Deserialize, Serialize};

use crate::domain::errors::ConfigError;

/// Ring width used by the overlay unless configured otherwise.
pub const DEFAULT_RING_BITS: u32 = 24;

/// Configuration of the circular address space.
///
/// The ring has `2^ring_bits` points and an identifier is projected onto it by
/// its leading `ring_bits / 8` bytes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct AddressSpaceConfig {
    /// Ring width in bits (8, 16, 24 or 32).
    pub ring_bits: u32,
}

impl Default for AddressSpaceConfig {
    fn default() -> Self {
        Self {
            ring_bits: DEFAULT_RING_BITS,
        }
    }
}

impl AddressSpaceConfig {
    /// Small ring so tests can reach every point.
    pub fn for_testing() -> Self {
        Self { ring_bits: 8 }
    }

    /// Reject ring widths that are not a whole number of identifier bytes.
    pub fn validate(&self) -> Result<(), ConfigError> {
        match self.ring_bits {
            8 | 16 | 24 | 32 => Ok(()),
            other => Err(ConfigError::InvalidValue {
                field: "address_space.ring_bits",
                reason: format!("{other} is not one of 8, 16, 24, 32"),
            }),
        }
    }

    /// Number of leading identifier bytes that form the native address.
    pub fn prefix_len(&self) -> usize {
        (self.ring_bits / 8) as usize
    }
}
