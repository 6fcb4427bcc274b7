//! # Ports Layer - Hexagonal Architecture Boundaries
//!
//! - **Driving Ports (Inbound):** the identity API this crate exposes
//! - **Driven Ports (Outbound):** hashing, randomness, per-peer reliability
//!   state and configuration, supplied by the host

pub mod inbound;
pub mod outbound;

pub use inbound::IdentityApi;
pub use outbound::{ConfigProvider, ContentHasher, CounterpartyRegistry, RandomSource};
