//! # Overlay Identity
//!
//! Identity and addressing layer of a peer-to-peer overlay.
//!
//! Every peer, piece of content and nonce is named by a 160-bit identifier,
//! carried on the wire either as 20 raw bytes or as 27 filename-safe base64
//! characters. This crate:
//!
//! - encodes and strictly decodes the text form ([`codec`])
//! - canonicalizes and compares identifiers in either form
//! - places identifiers on a circular address space and measures distance and
//!   direction between them
//! - turns per-peer reliability into a cost ("handicap") for choosing which
//!   peer to send an operation to, and combines several such costs
//!
//! ## Architecture
//!
//! The crate follows Hexagonal Architecture with:
//! - **Domain Layer:** Pure codec, identifier, ring and handicap logic
//! - **Ports Layer:** [`IdentityApi`] inbound; hashing, randomness, reliability
//!   records and configuration outbound
//! - **Service Layer:** [`IdentityService`] wires domain to ports
//! - **Adapters Layer:** SHA-1, OS randomness, in-memory registry, TOML config
//!
//! ## Example
//!
//! ```rust
//! use overlay_identity::{canonicalize, codec, AddressSpace, Identifier};
//!
//! let id = Identifier::from_bytes([0u8; 20]);
//! let text = id.to_text();
//! assert_eq!(text.len(), 27);
//! assert_eq!(canonicalize(&text).unwrap(), id);
//!
//! assert_eq!(codec::encode(&[0, 0, 0]), "AAAA");
//!
//! let space = AddressSpace::default();
//! let near = Identifier::from_bytes([0x10; 20]);
//! assert_eq!(space.distance(&id, &near), 0x10_1010);
//! ```

// =============================================================================
// CORE MODULES
// =============================================================================

pub mod adapters;
pub mod domain;
pub mod ports;
pub mod service;

/// Test utilities (deterministic port implementations).
/// Enable with the `test-utils` feature flag.
#[cfg(any(test, feature = "test-utils"))]
pub mod test_utils;

// =============================================================================
// PUBLIC API RE-EXPORTS
// =============================================================================

// Codec
pub use domain::codec;

// Identifiers
pub use domain::{
    canonicalize, equal, is_text_identifier, is_valid_identifier, require_identifier,
    to_abbreviation, Identifier, ID_LEN, ID_TEXT_LEN,
};

// Address space
pub use domain::{AddressSpace, AddressSpaceConfig, NativeAddress, RingPoint, DEFAULT_RING_BITS};

// Handicaps
pub use domain::{
    Handicap, HandicapConfig, HandicapError, Handicapper, HandicapperChain, OperationKind,
    Outcome, PeerReliability, ReliabilityHandle, ReliabilitySelector,
};

// Display
pub use domain::{is_ambiguous, render_bytes, DEFAULT_RENDER_LIMIT};

// Errors and configuration
pub use domain::{ConfigError, EncodingError, IdentityConfig, IdentityError};

// Ports
pub use ports::{ConfigProvider, ContentHasher, CounterpartyRegistry, IdentityApi, RandomSource};

// Service
pub use service::{IdentityService, ReliabilityHandicapper};

// Adapters
pub use adapters::{
    InMemoryCounterpartyRegistry, OsRandomSource, Sha1ContentHasher, StaticConfigProvider,
    TomlConfigProvider,
};

#[cfg(any(test, feature = "test-utils"))]
pub use test_utils::{CountingHasher, FixedRandomSource};
