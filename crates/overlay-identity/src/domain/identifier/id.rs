//! The `Identifier` value type.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Deserializer, Serialize, Serializer};

use crate::domain::codec;
use crate::domain::errors::IdentityError;

/// Length of the binary form.
pub const ID_LEN: usize = 20;

/// Length of the text form.
pub const ID_TEXT_LEN: usize = codec::COMPLETE_HASH_TEXT_LEN;

/// A 160-bit identifier for a peer, a piece of content, or a nonce.
///
/// Always held in binary form. The text form is produced by [`Identifier::to_text`]
/// and parsed back by [`super::canonicalize`] or [`FromStr`], so a value of this
/// type can never be a text form mistaken for binary.
///
/// `Debug` prints the abbreviation; `Display` prints the full text form.
#[derive(Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Identifier([u8; ID_LEN]);

impl Identifier {
    /// Wrap a raw 20-byte value.
    pub const fn from_bytes(bytes: [u8; ID_LEN]) -> Self {
        Self(bytes)
    }

    /// Binary form.
    pub const fn as_bytes(&self) -> &[u8; ID_LEN] {
        &self.0
    }

    /// Consume into the binary form.
    pub const fn into_bytes(self) -> [u8; ID_LEN] {
        self.0
    }

    /// Text form: 27 filename-safe characters.
    pub fn to_text(&self) -> String {
        codec::encode(&self.0)
    }

    /// Display-only abbreviation (`<` + first three bytes encoded + `>`).
    ///
    /// Many identifiers share an abbreviation; never use it for lookup.
    pub fn abbrev(&self) -> String {
        format!("<{}>", codec::encode(&self.0[..3]))
    }
}

impl AsRef<[u8]> for Identifier {
    fn as_ref(&self) -> &[u8] {
        &self.0
    }
}

impl From<[u8; ID_LEN]> for Identifier {
    fn from(bytes: [u8; ID_LEN]) -> Self {
        Self(bytes)
    }
}

impl TryFrom<&[u8]> for Identifier {
    type Error = IdentityError;

    /// Canonicalizes either wire form.
    fn try_from(raw: &[u8]) -> Result<Self, Self::Error> {
        super::canonicalize(raw)
    }
}

impl FromStr for Identifier {
    type Err = IdentityError;

    /// Parses the text form only; a 20-character string is not accepted here
    /// even though 20 raw bytes would be a binary identifier.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        if s.len() != ID_TEXT_LEN {
            return Err(IdentityError::BadFormat { len: s.len() });
        }
        super::canonicalize(s)
    }
}

impl fmt::Display for Identifier {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.to_text())
    }
}

impl fmt::Debug for Identifier {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Identifier{}", self.abbrev())
    }
}

impl Serialize for Identifier {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(&self.to_text())
    }
}

impl<'de> Deserialize<'de> for Identifier {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let text = String::deserialize(deserializer)?;
        text.parse().map_err(serde::de::Error::custom)
    }
}
