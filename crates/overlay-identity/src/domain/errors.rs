//! Domain errors for identifiers and the address space.

use thiserror::Error;

/// Malformed sixbit text.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum EncodingError {
    /// The empty string encodes nothing and is never accepted.
    #[error("empty string is not a valid encoded value")]
    Empty,

    #[error("invalid character {character:?} at position {position}")]
    InvalidCharacter { position: usize, character: char },

    /// `len % 4 == 1` cannot be produced by any byte string.
    #[error("invalid encoded length: {len}")]
    InvalidLength { len: usize },

    /// The last symbol has padding bits set; decoding would not round-trip.
    #[error("non-canonical trailing symbol {symbol:?} for length {len}")]
    NonCanonicalTrailingSymbol { symbol: char, len: usize },

    #[error("base64 decode failed: {0}")]
    Base64(#[from] base64::DecodeError),
}

/// Errors surfaced by identifier construction and validation.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum IdentityError {
    /// Neither 20 raw bytes nor a 27-character complete-hash text.
    #[error("not an identifier: {len} bytes is neither binary nor text form")]
    BadFormat { len: usize },

    #[error("malformed identifier text: {0}")]
    Encoding(#[from] EncodingError),

    /// A caller handed over a value that should already have been validated.
    #[error("precondition violated: {0}")]
    PreconditionViolation(String),
}

/// Invalid or unreadable configuration.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ConfigError {
    #[error("invalid value for `{field}`: {reason}")]
    InvalidValue { field: &'static str, reason: String },

    #[error("failed to read config file {path}: {error}")]
    Io { path: String, error: String },

    #[error("failed to parse config: {0}")]
    Parse(String),
}
