/******************************************************************************
   Author: Joaquín Béjar García
   Email: jb@taunais.com
   Date: 19/10/26
******************************************************************************/

//! Token management for the Baokim API
//!
//! Every request carries a JWT signed with the API secret. The manager:
//! - mints a token lazily on first use
//! - reuses the held token while it still verifies for the call in hand
//! - mints a replacement when verification fails (expiry, secret, key or
//!   algorithm change, different payload)
//!
//! Configuration and the held token sit behind one lock, so the
//! verify-then-mint sequence of concurrent calls cannot interleave.

use crate::application::config::{Config, ConfigOverrides};
use crate::error::AppError;
use crate::model::auth::{
    AuthToken, TokenClaims, TokenStatus, empty_payload, parse_algorithm, sign_claims, verify_token,
};
use serde_json::Value;
use tokio::sync::RwLock;
use tracing::{debug, warn};

struct TokenState {
    config: Config,
    current: Option<AuthToken>,
}

/// Issues and reuses the signed token attached to every request
pub struct TokenManager {
    state: RwLock<TokenState>,
}

impl TokenManager {
    /// Creates a manager holding no token
    pub fn new(config: Config) -> Self {
        Self {
            state: RwLock::new(TokenState {
                config,
                current: None,
            }),
        }
    }

    /// Snapshot of the current configuration
    pub async fn config(&self) -> Config {
        self.state.read().await.config.clone()
    }

    /// Token currently held, if any
    pub async fn current_token(&self) -> Option<AuthToken> {
        self.state.read().await.current.clone()
    }

    /// Always mints a new token embedding `payload` and stores it
    pub async fn mint_token(&self, payload: &Value) -> Result<AuthToken, AppError> {
        let mut state = self.state.write().await;
        Self::mint(&mut state, payload)
    }

    /// Returns a token valid for a call carrying `payload`
    ///
    /// # Arguments
    /// * `overrides` - Configuration changes applied before anything else
    /// * `payload` - Form payload of the call; `None` means an empty form
    ///
    /// # Returns
    /// * `Ok(AuthToken)` - The held token if it still verifies, otherwise a new one
    /// * `Err(AppError::Configuration)` - If the key or secret is missing or the
    ///   algorithm is not supported
    pub async fn get_token(
        &self,
        overrides: Option<&ConfigOverrides>,
        payload: Option<&Value>,
    ) -> Result<AuthToken, AppError> {
        self.get_token_with_config(overrides, payload)
            .await
            .map(|(token, _)| token)
    }

    /// Same as [`get_token`](Self::get_token), also returning the configuration
    /// the token was checked against
    ///
    /// Both are read under the same lock acquisition.
    pub async fn get_token_with_config(
        &self,
        overrides: Option<&ConfigOverrides>,
        payload: Option<&Value>,
    ) -> Result<(AuthToken, Config), AppError> {
        let empty = empty_payload();
        let payload = payload.unwrap_or(&empty);

        let mut state = self.state.write().await;
        if let Some(overrides) = overrides {
            state.config.apply_overrides(overrides);
        }

        let (api_key, api_secret) = state.config.credentials()?;
        let algorithm = parse_algorithm(&state.config.token.algorithm)?;

        let reusable = match &state.current {
            Some(token) => match verify_token(token, api_secret, algorithm, api_key, payload) {
                TokenStatus::Valid => Some(token.clone()),
                TokenStatus::Invalid(reason) => {
                    warn!("Held token rejected ({}), minting a replacement", reason);
                    None
                }
            },
            None => {
                debug!("No token held, minting one");
                None
            }
        };

        let token = match reusable {
            Some(token) => token,
            None => Self::mint(&mut state, payload)?,
        };
        Ok((token, state.config.clone()))
    }

    /// Drops the held token; the next call mints a fresh one
    pub async fn clear(&self) {
        self.state.write().await.current = None;
    }

    fn mint(state: &mut TokenState, payload: &Value) -> Result<AuthToken, AppError> {
        let (api_key, api_secret) = state.config.credentials()?;
        let algorithm = parse_algorithm(&state.config.token.algorithm)?;

        let claims = TokenClaims::new(api_key, state.config.token.expire_secs, payload.clone());
        let token = sign_claims(&claims, api_secret, algorithm)?;
        debug!(
            "Minted token jti={} valid until {} ({:?})",
            claims.jti, claims.exp, algorithm
        );

        state.current = Some(token.clone());
        Ok(token)
    }
}
