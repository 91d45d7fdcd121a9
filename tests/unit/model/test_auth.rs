use baokim_client::model::auth::{
    AuthToken, TokenClaims, TokenStatus, decode_claims, empty_payload, sign_claims, verify_token,
};
use jsonwebtoken::Algorithm;
use serde_json::json;

#[test]
fn test_claims_shape_on_the_wire() {
    let claims = TokenClaims::issued_at(1_700_000_000, "merchant-key", 60, json!({"id": 9}));
    let value = serde_json::to_value(&claims).unwrap();
    let object = value.as_object().unwrap();

    let mut keys: Vec<&str> = object.keys().map(String::as_str).collect();
    keys.sort_unstable();
    assert_eq!(keys, ["exp", "form_params", "iat", "iss", "jti", "nbf"]);
    assert_eq!(value["iat"], json!(1_700_000_000));
    assert_eq!(value["nbf"], json!(1_700_000_000));
    assert_eq!(value["exp"], json!(1_700_000_060));
    assert_eq!(value["form_params"], json!({"id": 9}));
}

#[test]
fn test_signed_token_has_three_segments() {
    let claims = TokenClaims::new("key", 60, empty_payload());
    let token = sign_claims(&claims, "secret", Algorithm::HS256).unwrap();
    assert_eq!(token.as_str().split('.').count(), 3);
    assert_eq!(token.to_string(), token.as_str());
}

#[test]
fn test_garbage_token_is_invalid() {
    let token = AuthToken::new("not-a-jwt");
    let status = verify_token(&token, "secret", Algorithm::HS256, "key", &empty_payload());
    assert!(matches!(status, TokenStatus::Invalid(_)));
    assert!(decode_claims(&token, "secret", Algorithm::HS256, "key").is_err());
}

#[test]
fn test_same_second_mints_still_differ() {
    let a = TokenClaims::issued_at(1_700_000_000, "key", 60, empty_payload());
    let b = TokenClaims::issued_at(1_700_000_000, "key", 60, empty_payload());
    let token_a = sign_claims(&a, "secret", Algorithm::HS256).unwrap();
    let token_b = sign_claims(&b, "secret", Algorithm::HS256).unwrap();
    assert_ne!(token_a, token_b);
}
