//! Ring arithmetic on native addresses.

use super::config::AddressSpaceConfig;
use crate::domain::errors::{ConfigError, IdentityError};
use crate::domain::identifier::Identifier;

/// Lossy projection of an identifier onto the ring.
///
/// Many identifiers share a native address; equal addresses say nothing about
/// identifier equality.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct NativeAddress(u64);

impl NativeAddress {
    pub fn value(&self) -> u64 {
        self.0
    }
}

/// Anything that can be placed on the ring.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RingPoint {
    /// Already projected; used as-is.
    Native(NativeAddress),
    /// Projected from its leading bytes.
    Id(Identifier),
}

impl From<NativeAddress> for RingPoint {
    fn from(address: NativeAddress) -> Self {
        Self::Native(address)
    }
}

impl From<Identifier> for RingPoint {
    fn from(id: Identifier) -> Self {
        Self::Id(id)
    }
}

impl From<&Identifier> for RingPoint {
    fn from(id: &Identifier) -> Self {
        Self::Id(*id)
    }
}

/// A circular address space of `2^ring_bits` points.
///
/// All operations are pure and O(1).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct AddressSpace {
    prefix_len: usize,
    size: u64,
}

impl Default for AddressSpace {
    fn default() -> Self {
        let config = AddressSpaceConfig::default();
        Self {
            prefix_len: config.prefix_len(),
            size: 1u64 << config.ring_bits,
        }
    }
}

impl AddressSpace {
    /// Build an address space from validated configuration.
    pub fn new(config: &AddressSpaceConfig) -> Result<Self, ConfigError> {
        config.validate()?;
        Ok(Self {
            prefix_len: config.prefix_len(),
            size: 1u64 << config.ring_bits,
        })
    }

    /// Number of points on the ring (M).
    pub fn size(&self) -> u64 {
        self.size
    }

    /// Largest possible distance (M / 2), reached only at exact antipodes.
    pub fn max_distance(&self) -> u64 {
        self.size / 2
    }

    /// Checked constructor for a numeric address.
    pub fn address(&self, value: u64) -> Result<NativeAddress, IdentityError> {
        if value < self.size {
            Ok(NativeAddress(value))
        } else {
            Err(IdentityError::PreconditionViolation(format!(
                "native address {value} outside ring of size {}",
                self.size
            )))
        }
    }

    /// Project a point onto this ring.
    ///
    /// # Panics
    ///
    /// Panics if a [`NativeAddress`] built for a larger ring is passed in.
    pub fn native_address(&self, point: impl Into<RingPoint>) -> NativeAddress {
        match point.into() {
            RingPoint::Native(address) => {
                assert!(
                    address.0 < self.size,
                    "precondition violated: native address {} outside ring of size {}",
                    address.0,
                    self.size
                );
                address
            }
            RingPoint::Id(id) => NativeAddress(
                id.as_bytes()[..self.prefix_len]
                    .iter()
                    .fold(0u64, |acc, &b| (acc << 8) | u64::from(b)),
            ),
        }
    }

    /// Shortest distance around the ring, in `[0, max_distance]`.
    pub fn distance(&self, a: impl Into<RingPoint>, b: impl Into<RingPoint>) -> u64 {
        let a = self.native_address(a).0;
        let b = self.native_address(b).0;
        let direct = a.abs_diff(b);
        direct.min(self.size - direct)
    }

    /// Direction of the shorter arc from `a` to `b`.
    ///
    /// `+1` if it runs in the increasing direction, `-1` if decreasing, `0` if
    /// the points coincide or are exact antipodes.
    pub fn sign(&self, a: impl Into<RingPoint>, b: impl Into<RingPoint>) -> i8 {
        let a = self.native_address(a).0;
        let b = self.native_address(b).0;
        if a == b {
            return 0;
        }
        let dist = self.distance(NativeAddress(a), NativeAddress(b));
        if dist == self.max_distance() {
            return 0;
        }
        if (a + dist) % self.size == b {
            1
        } else {
            -1
        }
    }

    /// Order identifiers by ring distance to `target`, nearest first.
    ///
    /// Stable: equally distant identifiers keep their relative order.
    pub fn sort_by_distance(&self, target: impl Into<RingPoint>, ids: &mut [Identifier]) {
        let target = self.native_address(target);
        ids.sort_by_key(|id| self.distance(target, id));
    }

    /// The identifier nearest to `target`, first one on ties.
    pub fn closest<'a, I>(&self, target: impl Into<RingPoint>, candidates: I) -> Option<Identifier>
    where
        I: IntoIterator<Item = &'a Identifier>,
    {
        let target = self.native_address(target);
        let mut best: Option<(u64, Identifier)> = None;
        for id in candidates {
            let dist = self.distance(target, id);
            if best.map_or(true, |(best_dist, _)| dist < best_dist) {
                best = Some((dist, *id));
            }
        }
        best.map(|(_, id)| id)
    }
}
