//! # Circular Address Space
//!
//! Closeness between identifiers measured on a wraparound ring.
//!
//! An identifier is projected onto the ring by its leading bytes (three by
//! default, giving M = 2^24 points). Distance is the shorter of the two arcs,
//! so it lies in `[0, M/2]`, and `M/2` is only reached by exact antipodes.
//!
//! ## Invariants
//!
//! - `distance(a, a) == 0`
//! - `distance(a, b) == distance(b, a)`
//! - `sign(a, b) == -sign(b, a)` unless the points coincide or are antipodes,
//!   in which case both are `0`

mod config;
mod ring;

pub use config::{AddressSpaceConfig, DEFAULT_RING_BITS};
pub use ring::{AddressSpace, NativeAddress, RingPoint};
