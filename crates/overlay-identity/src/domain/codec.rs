//! # Identifier Codec
//!
//! Filename-safe sixbit text encoding for byte strings.
//!
//! The alphabet is standard base64 with `+` replaced by `-` and `/` by `_`.
//! Padding (`=`) and line breaks are never emitted, so the encoded length is
//! the bare base64 expansion of the input length.
//!
//! ## Canonical form
//!
//! A text is canonical only if decoding it and encoding the result gives the
//! same text back. That rules out:
//!
//! - the empty string
//! - characters outside the alphabet
//! - lengths with `len % 4 == 1` (no byte count encodes to that)
//! - a last symbol whose padding bits are not zero
//!
//! The legal last symbols for each length class are derived from the number of
//! padding bits (see [`padding_bits`]) rather than listed by hand.

use base64::engine::general_purpose::{STANDARD, URL_SAFE_NO_PAD};
use base64::Engine as _;

use crate::domain::errors::EncodingError;

/// Input block size: one line of RFC 2045 base64 (76 output characters).
pub const BLOCK_LEN: usize = 57;

/// Length of the text form of a complete 160-bit hash.
pub const COMPLETE_HASH_TEXT_LEN: usize = 27;

/// Encode `bytes` into canonical sixbit text.
///
/// Total for every input; the empty input encodes to the empty string.
pub fn encode(bytes: &[u8]) -> String {
    let mut out = String::with_capacity(encoded_len(bytes.len()));
    for block in bytes.chunks(BLOCK_LEN) {
        URL_SAFE_NO_PAD.encode_string(block, &mut out);
    }
    out
}

/// Decode canonical sixbit text back into bytes.
///
/// Inverts [`encode`] for every non-empty input; `encode(&[])` gives `""`,
/// which is rejected here.
///
/// # Errors
///
/// Returns [`EncodingError`] if the input is empty, contains a character
/// outside the alphabet, has an impossible length, or is not in canonical
/// form.
pub fn decode<T: AsRef<[u8]> + ?Sized>(text: &T) -> Result<Vec<u8>, EncodingError> {
    let text = text.as_ref();
    validate(text)?;

    let pad = match text.len() % 4 {
        2 => 2,
        3 => 1,
        _ => 0,
    };
    let mut standard = Vec::with_capacity(text.len() + pad);
    standard.extend(text.iter().map(|&b| match b {
        b'-' => b'+',
        b'_' => b'/',
        other => other,
    }));
    standard.extend(std::iter::repeat(b'=').take(pad));

    Ok(STANDARD.decode(&standard)?)
}

/// True if `text` is a non-empty canonical sixbit encoding of some byte string.
pub fn is_canonical_text<T: AsRef<[u8]> + ?Sized>(text: &T) -> bool {
    validate(text.as_ref()).is_ok()
}

/// True if `text` is the canonical encoding of exactly 20 bytes.
///
/// Stricter than [`is_canonical_text`]: a 27-character text is always a
/// 20-byte encoding, but only when its last symbol has its two padding bits
/// clear.
pub fn is_complete_hash_text<T: AsRef<[u8]> + ?Sized>(text: &T) -> bool {
    let text = text.as_ref();
    text.len() == COMPLETE_HASH_TEXT_LEN && validate(text).is_ok()
}

/// Length of the encoding of `byte_len` bytes.
pub const fn encoded_len(byte_len: usize) -> usize {
    let tail = match byte_len % 3 {
        0 => 0,
        1 => 2,
        _ => 3,
    };
    byte_len / 3 * 4 + tail
}

/// Number of bytes a text of `text_len` characters decodes to, or `None` for
/// the impossible length class.
pub const fn decoded_len(text_len: usize) -> Option<usize> {
    let tail = match text_len % 4 {
        0 => 0,
        2 => 1,
        3 => 2,
        _ => return None,
    };
    Some(text_len / 4 * 3 + tail)
}

/// Number of low-order bits of the last symbol that carry no data for a text
/// of `text_len` characters, or `None` for the impossible length class.
///
/// `text_len * 6` bits are available but only whole bytes are encoded, so the
/// remainder modulo 8 must be zero padding.
pub const fn padding_bits(text_len: usize) -> Option<u32> {
    match text_len % 4 {
        1 => None,
        _ => Some(((text_len * 6) % 8) as u32),
    }
}

/// Symbols that may legally end a text of `text_len` characters.
pub fn trailing_symbols(text_len: usize) -> Vec<char> {
    let Some(bits) = padding_bits(text_len) else {
        return Vec::new();
    };
    let mask = (1u8 << bits) - 1;
    (0u8..64)
        .filter(|value| value & mask == 0)
        .map(|value| symbol_for(value) as char)
        .collect()
}

/// Value of one alphabet symbol.
#[inline]
const fn symbol_value(b: u8) -> Option<u8> {
    match b {
        b'A'..=b'Z' => Some(b - b'A'),
        b'a'..=b'z' => Some(b - b'a' + 26),
        b'0'..=b'9' => Some(b - b'0' + 52),
        b'-' => Some(62),
        b'_' => Some(63),
        _ => None,
    }
}

#[inline]
const fn symbol_for(value: u8) -> u8 {
    match value {
        0..=25 => b'A' + value,
        26..=51 => b'a' + (value - 26),
        52..=61 => b'0' + (value - 52),
        62 => b'-',
        _ => b'_',
    }
}

fn validate(text: &[u8]) -> Result<(), EncodingError> {
    if text.is_empty() {
        return Err(EncodingError::Empty);
    }

    let mut last = 0u8;
    for (position, &byte) in text.iter().enumerate() {
        last = symbol_value(byte).ok_or(EncodingError::InvalidCharacter {
            position,
            character: byte as char,
        })?;
    }

    let bits = padding_bits(text.len()).ok_or(EncodingError::InvalidLength { len: text.len() })?;
    let mask = (1u8 << bits) - 1;
    if last & mask != 0 {
        return Err(EncodingError::NonCanonicalTrailingSymbol {
            symbol: text[text.len() - 1] as char,
            len: text.len(),
        });
    }

    Ok(())
}
