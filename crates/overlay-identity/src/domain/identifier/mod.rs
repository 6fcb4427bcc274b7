//! # Identifier Canonicalizer
//!
//! Builds, validates and compares identifiers received in either wire form:
//!
//! - **binary**: exactly 20 bytes
//! - **text**: exactly 27 filename-safe characters whose last symbol has its
//!   two padding bits clear
//!
//! Representation is decided by length alone. A 20-byte value made entirely of
//! printable characters is still binary; see [`crate::domain::display`] for the
//! log-side heuristic that flags those.
//!
//! Content and random identifiers need a hash or randomness capability and are
//! built by [`crate::service::IdentityService`].

mod id;

pub use id::{Identifier, ID_LEN, ID_TEXT_LEN};

use crate::domain::codec;
use crate::domain::errors::IdentityError;

/// Convert either wire form into an [`Identifier`].
///
/// # Errors
///
/// Returns [`IdentityError::BadFormat`] unless the input is 20 bytes or a
/// 27-character complete-hash text.
pub fn canonicalize<T: AsRef<[u8]> + ?Sized>(raw: &T) -> Result<Identifier, IdentityError> {
    let raw = raw.as_ref();
    let mut bytes = [0u8; ID_LEN];
    match raw.len() {
        ID_LEN => bytes.copy_from_slice(raw),
        ID_TEXT_LEN => {
            if !codec::is_complete_hash_text(raw) {
                return Err(IdentityError::BadFormat { len: raw.len() });
            }
            let decoded = codec::decode(raw)?;
            if decoded.len() != ID_LEN {
                return Err(IdentityError::BadFormat { len: raw.len() });
            }
            bytes.copy_from_slice(&decoded);
        }
        len => return Err(IdentityError::BadFormat { len }),
    }
    Ok(Identifier::from_bytes(bytes))
}

/// True for 20 raw bytes or a 27-character complete-hash text.
#[inline]
pub fn is_valid_identifier<T: AsRef<[u8]> + ?Sized>(raw: &T) -> bool {
    let raw = raw.as_ref();
    raw.len() == ID_LEN || is_text_identifier(raw)
}

/// True only for the 27-character text form.
#[inline]
pub fn is_text_identifier<T: AsRef<[u8]> + ?Sized>(raw: &T) -> bool {
    codec::is_complete_hash_text(raw)
}

/// Check that `raw` is an identifier in either wire form.
///
/// # Errors
///
/// Returns [`IdentityError::PreconditionViolation`] naming `what` otherwise.
pub fn require_identifier<T: AsRef<[u8]> + ?Sized>(
    raw: &T,
    what: &str,
) -> Result<(), IdentityError> {
    let raw = raw.as_ref();
    if is_valid_identifier(raw) {
        Ok(())
    } else {
        Err(IdentityError::PreconditionViolation(format!(
            "`{what}` must be an identifier, got {} bytes",
            raw.len()
        )))
    }
}

/// Whether two wire-form identifiers name the same thing.
///
/// Returns `false` if either side is absent or empty. Same-length inputs are
/// compared directly (each form is canonical, so equal values have equal
/// encodings); otherwise both are canonicalized to binary first.
///
/// # Panics
///
/// Panics if a present, non-empty argument is not a valid identifier. That is
/// a caller bug, not a wire condition: wire input must go through
/// [`canonicalize`] first.
pub fn equal<A, B>(a: Option<&A>, b: Option<&B>) -> bool
where
    A: AsRef<[u8]> + ?Sized,
    B: AsRef<[u8]> + ?Sized,
{
    let (Some(a), Some(b)) = (a.map(AsRef::as_ref), b.map(AsRef::as_ref)) else {
        return false;
    };
    if a.is_empty() || b.is_empty() {
        return false;
    }
    if let Err(err) = require_identifier(a, "a").and(require_identifier(b, "b")) {
        panic!("{err}");
    }

    if a.len() == b.len() {
        return a == b;
    }
    match (canonicalize(a), canonicalize(b)) {
        (Ok(a), Ok(b)) => a == b,
        _ => false,
    }
}

/// Display-only abbreviation of a wire-form identifier.
///
/// Text form keeps its first four characters; binary form encodes its first
/// three bytes, which gives the same four characters.
///
/// # Errors
///
/// Returns [`IdentityError::PreconditionViolation`] if `raw` is not an
/// identifier.
pub fn to_abbreviation<T: AsRef<[u8]> + ?Sized>(raw: &T) -> Result<String, IdentityError> {
    let raw = raw.as_ref();
    require_identifier(raw, "id")?;
    if raw.len() == ID_TEXT_LEN {
        // the text form is pure ASCII once validated
        Ok(format!("<{}>", String::from_utf8_lossy(&raw[..4])))
    } else {
        Ok(format!("<{}>", codec::encode(&raw[..3])))
    }
}

#[cfg(test)]
mod tests;
