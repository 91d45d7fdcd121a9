use crate::constants::{
    DEFAULT_ENCODE_ALG, DEFAULT_REQUEST_TIMEOUT_SECS, DEFAULT_TOKEN_EXPIRE_SECS,
    PRODUCTION_BASE_URL, SANDBOX_BASE_URL,
};
use crate::error::AppError;
use crate::utils::config::{get_env_flag, get_env_or_default, get_env_or_none};
use dotenv::dotenv;
use pretty_simple_display::{DebugPretty, DisplaySimple};
use serde::{Deserialize, Serialize};
use tracing::{debug, warn};

#[derive(DebugPretty, DisplaySimple, Serialize, Deserialize, Clone, Default, PartialEq, Eq)]
/// API credentials issued by Baokim
///
/// The secret never leaves the process through `Debug`, `Display` or serialization.
pub struct Credentials {
    /// API key, used as the token issuer
    pub api_key: Option<String>,
    /// API secret, used as the HMAC signing key
    #[serde(skip_serializing, default)]
    pub api_secret: Option<String>,
}

/// Gateway environment
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Environment {
    /// Sandbox (`is_dev = true`)
    Sandbox,
    /// Production
    #[default]
    Production,
}

impl Environment {
    /// Maps the `is_dev` flag to an environment
    #[must_use]
    pub fn from_is_dev(is_dev: bool) -> Self {
        if is_dev {
            Environment::Sandbox
        } else {
            Environment::Production
        }
    }

    /// True for the sandbox environment
    #[must_use]
    pub fn is_dev(&self) -> bool {
        matches!(self, Environment::Sandbox)
    }
}

#[derive(DebugPretty, DisplaySimple, Serialize, Deserialize, Clone, PartialEq, Eq)]
/// Settings of the signed token attached to every call
pub struct TokenConfig {
    /// Validity window in seconds (`exp - nbf`)
    pub expire_secs: u64,
    /// Signing algorithm name (`HS256`, `HS384` or `HS512`)
    pub algorithm: String,
}

impl Default for TokenConfig {
    fn default() -> Self {
        Self {
            expire_secs: DEFAULT_TOKEN_EXPIRE_SECS,
            algorithm: DEFAULT_ENCODE_ALG.to_string(),
        }
    }
}

#[derive(DebugPretty, DisplaySimple, Serialize, Deserialize, Clone, PartialEq, Eq)]
/// Configuration for the REST API
pub struct RestApiConfig {
    /// Base URL used when the environment is sandbox
    pub sandbox_url: String,
    /// Base URL used when the environment is production
    pub production_url: String,
    /// Timeout in seconds for REST API requests
    pub timeout: u64,
}

impl Default for RestApiConfig {
    fn default() -> Self {
        Self {
            sandbox_url: SANDBOX_BASE_URL.to_string(),
            production_url: PRODUCTION_BASE_URL.to_string(),
            timeout: DEFAULT_REQUEST_TIMEOUT_SECS,
        }
    }
}

#[derive(DebugPretty, DisplaySimple, Serialize, Deserialize, Clone, Default, PartialEq, Eq)]
/// Main configuration for the Baokim client
pub struct Config {
    /// API credentials
    pub credentials: Credentials,
    /// Token settings
    pub token: TokenConfig,
    /// Target environment
    pub environment: Environment,
    /// REST API configuration
    pub rest_api: RestApiConfig,
}

impl Config {
    /// Builds a configuration from the process environment (and `.env`, if present)
    ///
    /// Missing credentials are logged but not fatal; the token manager refuses to
    /// sign until they are supplied.
    pub fn new() -> Self {
        match dotenv() {
            Ok(_) => debug!("Successfully loaded .env file"),
            Err(e) => debug!("Failed to load .env file: {e}"),
        }

        let api_key: Option<String> = get_env_or_none("BAOKIM_API_KEY");
        let api_secret: Option<String> = get_env_or_none("BAOKIM_API_SECRET");

        if api_key.is_none() {
            warn!("BAOKIM_API_KEY not found in environment variables or .env file");
        }
        if api_secret.is_none() {
            warn!("BAOKIM_API_SECRET not found in environment variables or .env file");
        }

        Config {
            credentials: Credentials {
                api_key,
                api_secret,
            },
            token: TokenConfig {
                expire_secs: get_env_or_default("BAOKIM_TOKEN_EXPIRE", DEFAULT_TOKEN_EXPIRE_SECS),
                algorithm: get_env_or_default(
                    "BAOKIM_ENCODE_ALG",
                    DEFAULT_ENCODE_ALG.to_string(),
                ),
            },
            environment: Environment::from_is_dev(get_env_flag("BAOKIM_IS_DEV", false)),
            rest_api: RestApiConfig {
                sandbox_url: get_env_or_default("BAOKIM_SANDBOX_URL", SANDBOX_BASE_URL.to_string()),
                production_url: get_env_or_default(
                    "BAOKIM_PRODUCTION_URL",
                    PRODUCTION_BASE_URL.to_string(),
                ),
                timeout: get_env_or_default("BAOKIM_REST_TIMEOUT", DEFAULT_REQUEST_TIMEOUT_SECS),
            },
        }
    }

    /// Builds a configuration with default settings and the given credentials
    pub fn with_credentials(api_key: impl Into<String>, api_secret: impl Into<String>) -> Self {
        Self {
            credentials: Credentials {
                api_key: Some(api_key.into()),
                api_secret: Some(api_secret.into()),
            },
            ..Self::default()
        }
    }

    /// Sets the target environment
    #[must_use]
    pub fn with_environment(mut self, environment: Environment) -> Self {
        self.environment = environment;
        self
    }

    /// Sets the token validity window
    #[must_use]
    pub fn with_token_expire(mut self, expire_secs: u64) -> Self {
        self.token.expire_secs = expire_secs;
        self
    }

    /// Sets the signing algorithm name
    #[must_use]
    pub fn with_algorithm(mut self, algorithm: impl Into<String>) -> Self {
        self.token.algorithm = algorithm.into();
        self
    }

    /// Replaces the REST API settings
    #[must_use]
    pub fn with_rest_api(mut self, rest_api: RestApiConfig) -> Self {
        self.rest_api = rest_api;
        self
    }

    /// Base URL of the configured environment
    #[must_use]
    pub fn base_url(&self) -> &str {
        match self.environment {
            Environment::Sandbox => &self.rest_api.sandbox_url,
            Environment::Production => &self.rest_api.production_url,
        }
    }

    /// Returns `(api_key, api_secret)` or a configuration error naming the missing one
    pub fn credentials(&self) -> Result<(&str, &str), AppError> {
        let api_key = self
            .credentials
            .api_key
            .as_deref()
            .filter(|k| !k.is_empty())
            .ok_or_else(|| AppError::Configuration("api_key is not set".to_string()))?;
        let api_secret = self
            .credentials
            .api_secret
            .as_deref()
            .filter(|s| !s.is_empty())
            .ok_or_else(|| AppError::Configuration("api_secret is not set".to_string()))?;
        Ok((api_key, api_secret))
    }

    /// Applies per-call overrides; last write wins
    ///
    /// Empty strings and a zero validity window are ignored.
    pub fn apply_overrides(&mut self, overrides: &ConfigOverrides) {
        if let Some(api_key) = overrides.api_key.as_ref().filter(|k| !k.is_empty()) {
            self.credentials.api_key = Some(api_key.clone());
        }
        if let Some(api_secret) = overrides.api_secret.as_ref().filter(|s| !s.is_empty()) {
            self.credentials.api_secret = Some(api_secret.clone());
        }
        if let Some(expire_secs) = overrides.token_expire.filter(|e| *e > 0) {
            self.token.expire_secs = expire_secs;
        }
        if let Some(algorithm) = overrides.encode_alg.as_ref().filter(|a| !a.is_empty()) {
            self.token.algorithm = algorithm.clone();
        }
        if let Some(is_dev) = overrides.is_dev {
            self.environment = Environment::from_is_dev(is_dev);
        }
    }
}

#[derive(DebugPretty, DisplaySimple, Serialize, Clone, Default, PartialEq, Eq)]
/// Configuration changes applied by [`TokenManager::get_token`](crate::application::auth::TokenManager::get_token)
pub struct ConfigOverrides {
    /// New API key
    pub api_key: Option<String>,
    /// New API secret
    #[serde(skip_serializing)]
    pub api_secret: Option<String>,
    /// New validity window in seconds
    pub token_expire: Option<u64>,
    /// New signing algorithm name
    pub encode_alg: Option<String>,
    /// Switch between sandbox (`true`) and production (`false`)
    pub is_dev: Option<bool>,
}

impl ConfigOverrides {
    /// Empty set of overrides
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Overrides the API key
    #[must_use]
    pub fn with_api_key(mut self, api_key: impl Into<String>) -> Self {
        self.api_key = Some(api_key.into());
        self
    }

    /// Overrides the API secret
    #[must_use]
    pub fn with_api_secret(mut self, api_secret: impl Into<String>) -> Self {
        self.api_secret = Some(api_secret.into());
        self
    }

    /// Overrides the validity window
    #[must_use]
    pub fn with_token_expire(mut self, token_expire: u64) -> Self {
        self.token_expire = Some(token_expire);
        self
    }

    /// Overrides the signing algorithm
    #[must_use]
    pub fn with_encode_alg(mut self, encode_alg: impl Into<String>) -> Self {
        self.encode_alg = Some(encode_alg.into());
        self
    }

    /// Overrides the environment
    #[must_use]
    pub fn with_is_dev(mut self, is_dev: bool) -> Self {
        self.is_dev = Some(is_dev);
        self
    }
}
