/******************************************************************************
   Author: Joaquín Béjar García
   Email: jb@taunais.com
   Date: 19/10/26
******************************************************************************/

use crate::application::auth::TokenManager;
use crate::application::config::Config;
use crate::constants::{JWT_QUERY_PARAM, USER_AGENT};
use crate::error::AppError;
use crate::model::auth::AuthToken;
use crate::model::responses::ErrorResponse;
use reqwest::header::ACCEPT;
use reqwest::{Client, Method, StatusCode};
use serde::Serialize;
use serde_json::Value;
use std::sync::Arc;
use std::time::Duration;
use tracing::{debug, error};

/// HTTP client for the Baokim API with automatic token handling
///
/// Every call obtains a token from the [`TokenManager`] for the payload it is
/// about to send, then hands that token to [`make_http_request`].
pub struct HttpClient {
    auth: Arc<TokenManager>,
    http_client: Client,
}

impl HttpClient {
    /// Creates a new client; no token is minted until the first request
    ///
    /// # Returns
    /// * `Ok(HttpClient)` - Client ready to use
    /// * `Err(AppError::Transport)` - If the underlying HTTP client cannot be built
    pub fn new(config: Config) -> Result<Self, AppError> {
        let http_client = Client::builder().user_agent(USER_AGENT).build()?;
        Ok(Self {
            auth: Arc::new(TokenManager::new(config)),
            http_client,
        })
    }

    /// Makes a GET request with `query` as query string
    pub async fn get<Q>(&self, path: &str, query: Option<&Q>) -> Result<Value, AppError>
    where
        Q: Serialize + ?Sized + Sync,
    {
        let (token, config) = self.auth.get_token_with_config(None, None).await?;
        make_http_request(
            &self.http_client,
            Method::GET,
            &endpoint_url(&config, path),
            &token,
            query,
            None::<&()>,
            Duration::from_secs(config.rest_api.timeout),
        )
        .await
    }

    /// Makes a form-encoded POST request; the form is embedded in the token claims
    pub async fn post_form<F>(&self, path: &str, form: &F) -> Result<Value, AppError>
    where
        F: Serialize + ?Sized + Sync,
    {
        let payload = serde_json::to_value(form)?;
        let (token, config) = self.auth.get_token_with_config(None, Some(&payload)).await?;
        make_http_request(
            &self.http_client,
            Method::POST,
            &endpoint_url(&config, path),
            &token,
            None::<&()>,
            Some(form),
            Duration::from_secs(config.rest_api.timeout),
        )
        .await
    }

    /// Gets the token manager
    pub fn auth(&self) -> &TokenManager {
        &self.auth
    }
}

/// Joins the environment's base URL and an endpoint path
pub fn endpoint_url(config: &Config, path: &str) -> String {
    format!(
        "{}/{}",
        config.base_url().trim_end_matches('/'),
        path.trim_start_matches('/')
    )
}

/// Sends one request and interprets the response
///
/// The token goes in the `jwt` query parameter, `query` is appended to the query
/// string and `form` (if any) is sent form-encoded.
///
/// # Returns
///
/// * `Ok(Value)` - Parsed JSON body of a 200 response
/// * `Err(AppError::Transport)` - No response was obtained
/// * `Err(AppError::Api)` - Any status other than 200
/// * `Err(AppError::Json)` - 200 with a body that is not JSON
pub async fn make_http_request<Q, F>(
    client: &Client,
    method: Method,
    url: &str,
    token: &AuthToken,
    query: Option<&Q>,
    form: Option<&F>,
    timeout: Duration,
) -> Result<Value, AppError>
where
    Q: Serialize + ?Sized,
    F: Serialize + ?Sized,
{
    debug!("{} {}", method, url);

    let mut request = client
        .request(method, url)
        .timeout(timeout)
        .header(ACCEPT, "application/json")
        .query(&[(JWT_QUERY_PARAM, token.as_str())]);

    if let Some(q) = query {
        request = request.query(q);
    }
    if let Some(f) = form {
        request = request.form(f);
    }

    let response = request.send().await.map_err(|e| {
        error!("Request to {} failed: {}", url, e);
        AppError::Transport(e)
    })?;
    let status = response.status();
    debug!("Response status: {}", status);

    let body = response.text().await?;

    if status != StatusCode::OK {
        let (name, message) = ErrorResponse::describe(status, &body);
        error!("Request failed with status {}: {}: {}", status, name, message);
        return Err(AppError::Api {
            status,
            name,
            message,
        });
    }

    Ok(serde_json::from_str(&body)?)
}
