//! # Driven Ports (Outbound SPI)
//!
//! Capabilities the host supplies.

use crate::domain::{Identifier, IdentityConfig, ReliabilityHandle, ID_LEN};

/// 160-bit content digest.
///
/// # Thread Safety
///
/// Implementations must be `Send + Sync`; one hasher serves every caller.
pub trait ContentHasher: Send + Sync {
    /// Digest of `content`.
    fn digest(&self, content: &[u8]) -> [u8; ID_LEN];
}

/// Cryptographically secure random bytes.
pub trait RandomSource: Send + Sync {
    /// Fill `dest` entirely.
    fn fill_bytes(&self, dest: &mut [u8]);
}

/// Per-peer reliability state.
///
/// The registry owns the records; the selector only borrows a handle for the
/// duration of one costing.
pub trait CounterpartyRegistry: Send + Sync {
    /// Handle to `peer`'s record, creating an unobserved one if needed.
    ///
    /// Repeated calls for the same peer must return handles to the same
    /// record.
    fn reliability_record(&self, peer: &Identifier) -> ReliabilityHandle;

    /// Handle to `peer`'s record if one exists. Never creates a record.
    fn find_record(&self, peer: &Identifier) -> Option<ReliabilityHandle>;
}

/// Source of identity-layer configuration.
pub trait ConfigProvider: Send + Sync {
    /// Ring and handicap settings.
    fn get_identity_config(&self) -> IdentityConfig;
}
