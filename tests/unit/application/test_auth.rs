use baokim_client::application::auth::TokenManager;
use baokim_client::application::config::{Config, ConfigOverrides};
use baokim_client::error::AppError;
use baokim_client::model::auth::{AuthToken, decode_claims};
use jsonwebtoken::Algorithm;
use serde_json::json;
use std::time::Duration;

#[tokio::test]
async fn test_token_is_reused_without_side_effect() {
    let manager = TokenManager::new(Config::with_credentials("key", "secret"));
    let first = manager.get_token(None, None).await.unwrap();
    for _ in 0..5 {
        assert_eq!(manager.get_token(None, None).await.unwrap(), first);
    }
    assert_eq!(manager.current_token().await, Some(first));
}

#[tokio::test]
async fn test_expired_token_is_replaced() {
    let manager = TokenManager::new(Config::with_credentials("key", "secret").with_token_expire(1));
    let first = manager.get_token(None, None).await.unwrap();

    tokio::time::sleep(Duration::from_millis(2100)).await;

    let second = manager.get_token(None, None).await.unwrap();
    assert_ne!(first, second);
    let claims = decode_claims(&second, "secret", Algorithm::HS256, "key").unwrap();
    assert_eq!(claims.exp - claims.nbf, 1);
}

#[tokio::test]
async fn test_api_key_override_changes_issuer() {
    let manager = TokenManager::new(Config::with_credentials("key", "secret"));
    let first = manager.get_token(None, None).await.unwrap();

    let overrides = ConfigOverrides::new().with_api_key("other-key");
    let second = manager.get_token(Some(&overrides), None).await.unwrap();
    assert_ne!(first, second);

    let claims = decode_claims(&second, "secret", Algorithm::HS256, "other-key").unwrap();
    assert_eq!(claims.iss, "other-key");
}

#[tokio::test]
async fn test_token_expire_override_applies_to_next_mint() {
    let manager = TokenManager::new(Config::with_credentials("key", "secret"));
    let overrides = ConfigOverrides::new().with_token_expire(900);
    let token = manager
        .get_token(Some(&overrides), Some(&json!({"id": 1})))
        .await
        .unwrap();
    let claims = decode_claims(&token, "secret", Algorithm::HS256, "key").unwrap();
    assert_eq!(claims.exp - claims.iat, 900);
    assert_eq!(manager.config().await.token.expire_secs, 900);
}

#[tokio::test]
async fn test_missing_secret_is_configuration_error() {
    let mut config = Config::default();
    config.credentials.api_key = Some("key".to_string());
    let manager = TokenManager::new(config);

    match manager.get_token(None, None).await {
        Err(AppError::Configuration(msg)) => assert!(msg.contains("api_secret")),
        other => panic!("expected configuration error, got {other:?}"),
    }
}

#[test]
fn test_get_token_blocking() {
    let manager = TokenManager::new(Config::with_credentials("key", "secret"));
    let token = tokio_test::block_on(manager.get_token(None, None)).unwrap();
    assert!(!token.as_str().is_empty());
}

#[tokio::test]
async fn test_configured_algorithm_signs_token() {
    let manager =
        TokenManager::new(Config::with_credentials("key", "secret").with_algorithm("HS384"));
    let token = manager.get_token(None, None).await.unwrap();

    let raw = token.clone().into_inner();
    assert_eq!(raw.split('.').count(), 3);
    let claims = decode_claims(&AuthToken::new(raw), "secret", Algorithm::HS384, "key").unwrap();
    assert_eq!(claims.iss, "key");
    assert!(decode_claims(&token, "secret", Algorithm::HS256, "key").is_err());
}

#[tokio::test]
async fn test_short_window_token_is_reminted_on_every_call() {
    let manager = TokenManager::new(Config::with_credentials("key", "secret").with_token_expire(2));
    let first = manager.get_token(None, None).await.unwrap();
    let second = manager.get_token(None, None).await.unwrap();
    assert_ne!(first, second);
}
