//! Log-friendly rendering of raw byte strings.
//!
//! Only affects what ends up in log lines. Whether a value is an identifier is
//! decided by [`crate::domain::identifier::canonicalize`] alone.

use crate::domain::codec;
use crate::domain::identifier::{self, ID_LEN};

/// Default cap on rendered characters for values that are not identifiers.
pub const DEFAULT_RENDER_LIMIT: usize = 64;

/// Render `bytes` for a log line.
///
/// - 20 bytes: the identifier abbreviation, unless every byte is printable
///   ASCII; such a value may be plain text that happens to be 20 bytes long,
///   so it renders quoted and tagged `(ambiguous)`.
/// - 27-byte complete-hash text: the identifier abbreviation.
/// - Anything else: escaped, quoted, and cut to `limit` characters with a
///   trailing `...`.
pub fn render_bytes(bytes: &[u8], limit: usize) -> String {
    if is_ambiguous(bytes) {
        return format!("{:?} (ambiguous)", String::from_utf8_lossy(bytes));
    }
    if bytes.len() == ID_LEN || codec::is_complete_hash_text(bytes) {
        if let Ok(abbrev) = identifier::to_abbreviation(bytes) {
            return abbrev;
        }
    }

    let escaped: String = bytes.escape_ascii().to_string();
    if escaped.chars().count() <= limit {
        format!("\"{escaped}\"")
    } else {
        let cut: String = escaped.chars().take(limit).collect();
        format!("\"{cut}...\"")
    }
}

/// Whether a 20-byte value looks like text rather than a digest.
pub fn is_ambiguous(bytes: &[u8]) -> bool {
    bytes.len() == ID_LEN && bytes.iter().all(is_printable)
}

fn is_printable(byte: &u8) -> bool {
    matches!(byte, b' '..=b'~')
}
