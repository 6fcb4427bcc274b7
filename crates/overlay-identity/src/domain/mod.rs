//! Domain Layer - Pure identity logic with no I/O
//!
//! This module contains:
//! - Sixbit codec (filename-safe base64 with strict canonical form)
//! - Identifiers and their canonicalization from binary or text wire form
//! - Circular address space (ring distance and direction)
//! - Reliability-weighted peer handicaps and handicapper chains
//! - Log rendering of raw byte strings

pub mod address_space;
pub mod codec;
pub mod config;
pub mod display;
/// Domain errors (encoding, identity, configuration)
pub mod errors;
pub mod handicap;
pub mod identifier;

pub use address_space::*;
pub use config::IdentityConfig;
pub use display::{is_ambiguous, render_bytes, DEFAULT_RENDER_LIMIT};
pub use errors::*;
pub use handicap::*;
pub use identifier::*;
