//! Tests for identifier canonicalization and comparison

use super::*;
use crate::domain::codec;

fn make_id(byte: u8) -> Identifier {
    let mut bytes = [0u8; ID_LEN];
    bytes[0] = byte;
    bytes[19] = byte.wrapping_mul(7);
    Identifier::from_bytes(bytes)
}

// =============================================================================
// TEST GROUP 1: Canonicalization
// =============================================================================

#[test]
fn test_binary_form_is_returned_unchanged() {
    let id = make_id(42);
    assert_eq!(canonicalize(id.as_bytes()).unwrap(), id);
}

#[test]
fn test_text_form_decodes_to_binary() {
    let id = make_id(42);
    let text = id.to_text();
    assert_eq!(text.len(), ID_TEXT_LEN);
    assert_eq!(canonicalize(&text).unwrap(), id);
}

#[test]
fn test_printable_twenty_bytes_are_binary() {
    let id = canonicalize("credit limit reached").unwrap();
    assert_eq!(id.as_bytes(), b"credit limit reached");
}

#[test]
fn test_wrong_lengths_are_bad_format() {
    assert_eq!(canonicalize(&[0u8; 19]), Err(IdentityError::BadFormat { len: 19 }));
    assert_eq!(canonicalize(&[0u8; 21]), Err(IdentityError::BadFormat { len: 21 }));
    assert_eq!(canonicalize(""), Err(IdentityError::BadFormat { len: 0 }));
}

#[test]
fn test_malformed_text_is_bad_format() {
    // 'B' as the 27th symbol leaves a padding bit set
    let text = format!("{}B", "A".repeat(26));
    assert_eq!(canonicalize(&text), Err(IdentityError::BadFormat { len: 27 }));

    let text = format!("{}*", "A".repeat(26));
    assert_eq!(canonicalize(&text), Err(IdentityError::BadFormat { len: 27 }));

    let text = format!("{}=", "A".repeat(26));
    assert_eq!(canonicalize(&text), Err(IdentityError::BadFormat { len: 27 }));
    assert_eq!(text.parse::<Identifier>(), Err(IdentityError::BadFormat { len: 27 }));
}

// =============================================================================
// TEST GROUP 2: Validation
// =============================================================================

#[test]
fn test_is_valid_identifier() {
    let id = make_id(1);
    assert!(is_valid_identifier(id.as_bytes()));
    assert!(is_valid_identifier(&id.to_text()));
    assert!(!is_valid_identifier(&[0u8; 3]));
    assert!(!is_valid_identifier(&format!("{}B", "A".repeat(26))));
}

#[test]
fn test_complete_hash_grammar_is_stricter_than_general() {
    // canonical as a general encoding only when the length class allows it
    let general = format!("{}B", "A".repeat(27));
    assert_eq!(general.len(), 28);
    assert!(codec::is_canonical_text(&general));
    assert!(!is_valid_identifier(&general));
}

#[test]
fn test_text_identifier_detection() {
    let id = make_id(9);
    assert!(is_text_identifier(&id.to_text()));
    assert!(!is_text_identifier(id.as_bytes()));
}

// =============================================================================
// TEST GROUP 3: Equality
// =============================================================================

#[test]
fn test_equal_across_forms() {
    let id = make_id(5);
    let text = id.to_text();

    assert!(equal(Some(id.as_bytes()), Some(&text)));
    assert!(equal(Some(&text), Some(id.as_bytes())));
    assert!(equal(Some(&text), Some(&text)));
    assert!(equal(Some(id.as_bytes()), Some(id.as_bytes())));
}

#[test]
fn test_unequal_across_forms() {
    let a = make_id(5);
    let b = make_id(6);
    assert!(!equal(Some(a.as_bytes()), Some(&b.to_text())));
    assert!(!equal(Some(&a.to_text()), Some(&b.to_text())));
}

#[test]
fn test_equal_with_absent_or_empty_is_false() {
    let id = make_id(5);
    assert!(!equal(None::<&[u8]>, Some(id.as_bytes())));
    assert!(!equal(Some(id.as_bytes()), None::<&[u8]>));
    assert!(!equal(None::<&[u8]>, None::<&[u8]>));
    assert!(!equal(Some(""), Some(id.as_bytes())));
}

#[test]
#[should_panic(expected = "precondition violated")]
fn test_equal_with_invalid_identifier_panics() {
    let id = make_id(5);
    equal(Some("not an id"), Some(id.as_bytes()));
}

// =============================================================================
// TEST GROUP 4: Abbreviation and formatting
// =============================================================================

#[test]
fn test_abbreviation_agrees_across_forms() {
    let id = make_id(200);
    let from_binary = to_abbreviation(id.as_bytes()).unwrap();
    let from_text = to_abbreviation(&id.to_text()).unwrap();
    assert_eq!(from_binary, from_text);
    assert_eq!(from_binary.len(), 6);
    assert_eq!(from_binary, id.abbrev());
    assert!(from_binary.starts_with('<') && from_binary.ends_with('>'));
}

#[test]
fn test_abbreviation_rejects_non_identifier() {
    assert!(matches!(
        to_abbreviation("short"),
        Err(IdentityError::PreconditionViolation(_))
    ));
}

#[test]
fn test_zero_identifier_text() {
    let id = Identifier::from_bytes([0u8; ID_LEN]);
    assert_eq!(id.to_text(), "A".repeat(27));
    assert_eq!(id.abbrev(), "<AAAA>");
    assert_eq!(format!("{id:?}"), "Identifier<AAAA>");
}

#[test]
fn test_from_str_requires_text_form() {
    let id = make_id(77);
    assert_eq!(id.to_text().parse::<Identifier>().unwrap(), id);
    assert_eq!(
        "credit limit reached".parse::<Identifier>(),
        Err(IdentityError::BadFormat { len: 20 })
    );
}

#[test]
fn test_try_from_slice() {
    let id = make_id(3);
    let text = id.to_text();
    assert_eq!(Identifier::try_from(text.as_bytes()).unwrap(), id);
    assert_eq!(Identifier::try_from(&id.as_bytes()[..]).unwrap(), id);
}

#[test]
fn test_serde_uses_text_form() {
    let id = make_id(11);
    let json = serde_json::to_string(&id).unwrap();
    assert_eq!(json, format!("\"{}\"", id.to_text()));
    let back: Identifier = serde_json::from_str(&json).unwrap();
    assert_eq!(back, id);
    assert!(serde_json::from_str::<Identifier>("\"AAAA\"").is_err());
}
