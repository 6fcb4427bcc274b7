//! # Adapters
//!
//! Concrete implementations of the outbound ports.
//!
//! ## Adapters Provided
//!
//! - `Sha1ContentHasher` - content digests (`sha1`)
//! - `OsRandomSource` - operating system randomness (`rand::rngs::OsRng`)
//! - `InMemoryCounterpartyRegistry` - per-peer reliability records
//! - `StaticConfigProvider` / `TomlConfigProvider` - configuration sources

/// Configuration providers
pub mod config;
/// Content hashing
pub mod hasher;
/// Secure randomness
pub mod random;
/// Counterparty reliability records
pub mod registry;

pub use config::{StaticConfigProvider, TomlConfigProvider};
pub use hasher::Sha1ContentHasher;
pub use random::OsRandomSource;
pub use registry::InMemoryCounterpartyRegistry;
