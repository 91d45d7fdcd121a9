use baokim_client::application::config::{Config, Environment};
use std::env;

#[test]
fn test_config_from_environment() {
    unsafe {
        env::set_var("BAOKIM_API_KEY", "env-key");
        env::set_var("BAOKIM_API_SECRET", "env-secret");
        env::set_var("BAOKIM_TOKEN_EXPIRE", "120");
        env::set_var("BAOKIM_ENCODE_ALG", "HS384");
        env::set_var("BAOKIM_IS_DEV", "1");
        env::set_var("BAOKIM_SANDBOX_URL", "http://localhost:9999/payment/");
        env::set_var("BAOKIM_REST_TIMEOUT", "5");
    }

    let config = Config::new();

    unsafe {
        for var in [
            "BAOKIM_API_KEY",
            "BAOKIM_API_SECRET",
            "BAOKIM_TOKEN_EXPIRE",
            "BAOKIM_ENCODE_ALG",
            "BAOKIM_IS_DEV",
            "BAOKIM_SANDBOX_URL",
            "BAOKIM_REST_TIMEOUT",
        ] {
            env::remove_var(var);
        }
    }

    assert_eq!(config.credentials().unwrap(), ("env-key", "env-secret"));
    assert_eq!(config.token.expire_secs, 120);
    assert_eq!(config.token.algorithm, "HS384");
    assert_eq!(config.environment, Environment::Sandbox);
    assert_eq!(config.base_url(), "http://localhost:9999/payment/");
    assert_eq!(config.rest_api.timeout, 5);
    assert_eq!(config.rest_api.production_url, "https://api.baokim.vn/payment/");
}

#[test]
fn test_config_serialization_skips_secret() {
    let config = Config::with_credentials("key", "secret");
    let value = serde_json::to_value(&config).unwrap();
    assert_eq!(value["credentials"]["api_key"], "key");
    assert!(value["credentials"].get("api_secret").is_none());
    assert_eq!(value["environment"], "production");
}
