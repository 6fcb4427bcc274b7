//! # Driving Ports (Inbound API)
//!
//! What the rest of the overlay node calls to mint, parse, compare, place and
//! rank identifiers.

use crate::domain::{Identifier, IdentityError, OperationKind, RingPoint};

/// Primary API of the identity layer.
///
/// # Example
///
/// ```rust,ignore
/// use overlay_identity::ports::IdentityApi;
///
/// fn nearest<T: IdentityApi>(api: &T, target: &Identifier, peers: &[Identifier]) {
///     for peer in peers {
///         println!("{} at {}", peer.abbrev(), api.distance(peer.into(), target.into()));
///     }
/// }
/// ```
pub trait IdentityApi {
    /// Identifier of `content`: its 160-bit digest.
    ///
    /// Deterministic; distinct content gives distinct identifiers with
    /// overwhelming probability.
    fn make_content_id(&self, content: &[u8]) -> Identifier;

    /// Whether `id` is the content identifier of `content`.
    fn identifies(&self, id: &Identifier, content: &[u8]) -> bool;

    /// Fresh identifier from the secure random source.
    fn make_random_id(&self) -> Identifier;

    /// Parse either wire form.
    ///
    /// # Errors
    ///
    /// See [`crate::domain::canonicalize`].
    fn canonicalize(&self, raw: &[u8]) -> Result<Identifier, IdentityError>;

    /// True for 20 raw bytes or a 27-character complete-hash text.
    fn is_valid_identifier(&self, raw: &[u8]) -> bool;

    /// Identity comparison across wire forms; `false` if either is absent.
    ///
    /// # Panics
    ///
    /// If a present, non-empty argument is not an identifier.
    fn equal(&self, a: Option<&[u8]>, b: Option<&[u8]>) -> bool;

    /// Shorter arc between two ring points.
    fn distance(&self, a: RingPoint, b: RingPoint) -> u64;

    /// `1` if the shortest way from `a` to `b` is increasing, `-1` if
    /// decreasing, `0` if the points coincide or are antipodes.
    fn sign(&self, a: RingPoint, b: RingPoint) -> i8;

    /// Cost of sending an operation of `kind` to `counterparty`; lower is
    /// preferred, zero for the local node.
    fn handicap(&self, counterparty: &Identifier, kind: OperationKind) -> f64;
}
