//! Tests for global_id module

use super::*;
use crate::error::Error;
use base64::engine::general_purpose::STANDARD;
use base64::Engine as _;
use pretty_assertions::assert_eq;
use test_case::test_case;

// ============================================================================
// Encoding Tests
// ============================================================================

#[test_case("Kek", "1337", "Kek:1337" ; "kek")]
#[test_case("Lol", "420", "Lol:420" ; "lol")]
#[test_case("Bur", "69", "Bur:69" ; "bur")]
fn test_to_global_id_payload(type_name: &str, id: &str, payload: &str) {
    let global = to_global_id(type_name, id);
    let decoded = STANDARD.decode(&global).unwrap();
    assert_eq!(String::from_utf8(decoded).unwrap(), payload);
}

#[test]
fn test_to_global_id_uses_padded_standard_alphabet() {
    assert_eq!(to_global_id("User", "42"), "VXNlcjo0Mg==");
    assert_eq!(to_global_id("Lol", "420"), "TG9sOjQyMA==");
    assert_eq!(to_global_id("Bur", "69"), "QnVyOjY5");
}

// ============================================================================
// Decoding Tests
// ============================================================================

#[test_case("Kek", "1337" ; "kek")]
#[test_case("Lol", "420" ; "lol")]
#[test_case("User", "42" ; "user")]
#[test_case("Post", "01HZX3K9" ; "ulid like id")]
#[test_case("", "" ; "empty parts")]
fn test_round_trip(type_name: &str, id: &str) {
    let decoded = from_global_id(&to_global_id(type_name, id)).unwrap();
    assert_eq!(decoded, GlobalId::new(type_name, id));
}

#[test]
fn test_from_global_id_multiple_delimiters() {
    let global = STANDARD.encode("Lol:Kek:Bur");
    assert_eq!(from_global_id(&global), None);
}

#[test]
fn test_from_global_id_without_delimiter() {
    let global = STANDARD.encode("NoDelimiter");
    assert_eq!(from_global_id(&global), None);
}

#[test_case("XXXXXaGVsbG8=" ; "stray padding")]
#[test_case("not base64!" ; "invalid characters")]
#[test_case("VXNlcjo0Mg" ; "missing padding")]
fn test_from_global_id_corrupt_input(global: &str) {
    assert_eq!(from_global_id(global), None);
}

#[test]
fn test_from_global_id_non_utf8() {
    let global = STANDARD.encode([0xff, 0xfe, b':', b'A']);
    assert_eq!(from_global_id(&global), None);
}

#[test]
fn test_delimiter_in_local_id_does_not_round_trip() {
    // "A:B:C" holds two delimiters, so the id is rejected rather than split
    let global = to_global_id("A", "B:C");
    assert_eq!(global, "QTpCOkM=");
    assert_eq!(from_global_id(&global), None);
}

// ============================================================================
// GlobalId Tests
// ============================================================================

#[test]
fn test_global_id_encode_and_display() {
    let id = GlobalId::new("User", "42");
    assert_eq!(id.encode(), "VXNlcjo0Mg==");
    assert_eq!(id.to_string(), "VXNlcjo0Mg==");
}

#[test]
fn test_global_id_from_str() {
    let id: GlobalId = "VXNlcjo0Mg==".parse().unwrap();
    assert_eq!(id.type_name, "User");
    assert_eq!(id.id, "42");

    let err = "garbage".parse::<GlobalId>().unwrap_err();
    assert!(matches!(err, Error::InvalidGlobalId { ref global_id } if global_id == "garbage"));
}

#[test]
fn test_global_id_serde_field_names() {
    let id = GlobalId::new("User", "42");
    let json = serde_json::to_value(&id).unwrap();
    assert_eq!(json, serde_json::json!({"type": "User", "id": "42"}));

    let back: GlobalId = serde_json::from_value(json).unwrap();
    assert_eq!(back, id);
}

