/******************************************************************************
   Author: Joaquín Béjar García
   Email: jb@taunais.com
   Date: 19/10/26
******************************************************************************/
use crate::constants::TOKEN_REUSE_MARGIN_SECS;
use crate::error::AppError;
use crate::utils::id::get_token_id;
use chrono::Utc;
use jsonwebtoken::{Algorithm, DecodingKey, EncodingKey, Header, Validation};
use pretty_simple_display::{DebugPretty, DisplaySimple};
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};
use std::fmt;
use std::str::FromStr;

/// Claim set signed into every token
#[derive(DebugPretty, DisplaySimple, Clone, Serialize, Deserialize, PartialEq)]
pub struct TokenClaims {
    /// Issued at (seconds since epoch)
    pub iat: i64,
    /// Unique token id
    pub jti: String,
    /// Issuer, the API key
    pub iss: String,
    /// Not before, equal to `iat`
    pub nbf: i64,
    /// Expiry, `iat + window`
    pub exp: i64,
    /// Copy of the outgoing form payload
    pub form_params: Value,
}

impl TokenClaims {
    /// Builds claims issued now with a fresh token id
    pub fn new(issuer: &str, expire_secs: u64, form_params: Value) -> Self {
        Self::issued_at(Utc::now().timestamp(), issuer, expire_secs, form_params)
    }

    /// Builds claims issued at `issued_at` with a fresh token id
    pub fn issued_at(issued_at: i64, issuer: &str, expire_secs: u64, form_params: Value) -> Self {
        let window = i64::try_from(expire_secs).unwrap_or(i64::MAX);
        Self {
            iat: issued_at,
            jti: get_token_id(),
            iss: issuer.to_string(),
            nbf: issued_at,
            exp: issued_at.saturating_add(window),
            form_params,
        }
    }
}

/// Signed token as sent in the `jwt` query parameter
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct AuthToken(String);

impl AuthToken {
    /// Wraps an already-signed token string
    pub fn new(token: impl Into<String>) -> Self {
        Self(token.into())
    }

    /// Token as string slice
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Consumes the wrapper
    #[must_use]
    pub fn into_inner(self) -> String {
        self.0
    }
}

impl fmt::Display for AuthToken {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl AsRef<str> for AuthToken {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

/// Outcome of checking a held token
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TokenStatus {
    /// Token can be sent as is
    Valid,
    /// Token must be replaced; carries the reason
    Invalid(String),
}

impl TokenStatus {
    /// True for [`TokenStatus::Valid`]
    #[must_use]
    pub fn is_valid(&self) -> bool {
        matches!(self, TokenStatus::Valid)
    }
}

/// Empty form payload embedded by calls without a body
#[must_use]
pub fn empty_payload() -> Value {
    Value::Object(Map::new())
}

/// Resolves an algorithm name, accepting only the HMAC family
pub fn parse_algorithm(name: &str) -> Result<Algorithm, AppError> {
    match Algorithm::from_str(name.trim()) {
        Ok(alg @ (Algorithm::HS256 | Algorithm::HS384 | Algorithm::HS512)) => Ok(alg),
        Ok(_) => Err(AppError::Configuration(format!(
            "unsupported signing algorithm {name}: only HS256, HS384 and HS512 are allowed"
        ))),
        Err(_) => Err(AppError::Configuration(format!(
            "unknown signing algorithm {name}"
        ))),
    }
}

/// Signs `claims` with `secret`
pub fn sign_claims(
    claims: &TokenClaims,
    secret: &str,
    algorithm: Algorithm,
) -> Result<AuthToken, AppError> {
    let header = Header::new(algorithm);
    let key = EncodingKey::from_secret(secret.as_bytes());
    let token = jsonwebtoken::encode(&header, claims, &key)?;
    Ok(AuthToken(token))
}

/// Decodes and validates a token issued by `issuer`
///
/// Checks signature, algorithm, `exp` and `nbf` (no leeway) and the issuer.
pub fn decode_claims(
    token: &AuthToken,
    secret: &str,
    algorithm: Algorithm,
    issuer: &str,
) -> Result<TokenClaims, AppError> {
    let mut validation = Validation::new(algorithm);
    validation.leeway = 0;
    validation.validate_nbf = true;
    validation.set_issuer(&[issuer]);
    validation.set_required_spec_claims(&["exp", "nbf", "iss"]);

    let key = DecodingKey::from_secret(secret.as_bytes());
    let data = jsonwebtoken::decode::<TokenClaims>(token.as_str(), &key, &validation)?;
    Ok(data.claims)
}

/// Decides whether a held token may be reused for a call carrying `payload`
///
/// Besides [`decode_claims`], the token must embed `payload` and have at least
/// [`TOKEN_REUSE_MARGIN_SECS`] left before it expires.
pub fn verify_token(
    token: &AuthToken,
    secret: &str,
    algorithm: Algorithm,
    issuer: &str,
    payload: &Value,
) -> TokenStatus {
    match decode_claims(token, secret, algorithm, issuer) {
        Ok(claims) if claims.exp - Utc::now().timestamp() < TOKEN_REUSE_MARGIN_SECS => {
            TokenStatus::Invalid(format!(
                "token expires within {TOKEN_REUSE_MARGIN_SECS} seconds"
            ))
        }
        Ok(claims) if claims.form_params != *payload => {
            TokenStatus::Invalid("embedded form_params differ from the outgoing payload".to_string())
        }
        Ok(_) => TokenStatus::Valid,
        Err(e) => TokenStatus::Invalid(e.to_string()),
    }
}
