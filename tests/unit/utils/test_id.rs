use baokim_client::constants::TOKEN_ID_ALPHABET;
use baokim_client::utils::id::{get_token_id, random_string};
use std::collections::HashSet;

#[test]
fn test_random_string_length() {
    assert_eq!(random_string(32).len(), 32);
    assert!(random_string(0).is_empty());
}

#[test]
fn test_random_string_contains_valid_chars() {
    for c in random_string(500).chars() {
        assert!(TOKEN_ID_ALPHABET.contains(c), "Invalid character: {}", c);
    }
}

#[test]
fn test_token_id_is_base64_of_32_chars() {
    let id = get_token_id();
    // 32 bytes -> 44 base64 characters with one padding character
    assert_eq!(id.len(), 44);
    assert!(id.ends_with('='));
}

#[test]
fn test_token_id_uniqueness() {
    let mut ids = HashSet::new();
    for _ in 0..1000 {
        assert!(ids.insert(get_token_id()), "Duplicate token id generated");
    }
}
