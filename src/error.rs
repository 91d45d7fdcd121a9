/******************************************************************************
   Author: Joaquín Béjar García
   Email: jb@taunais.com
   Date: 19/10/26
******************************************************************************/
use reqwest::StatusCode;
use thiserror::Error;

/// Errors returned by the Baokim client
#[derive(Error, Debug)]
pub enum AppError {
    /// Client configuration is unusable (missing credentials, unsupported algorithm)
    #[error("configuration error: {0}")]
    Configuration(String),

    /// A field the endpoint requires was not supplied
    #[error("missing required field: {0}")]
    MissingField(String),

    /// A supplied value was rejected before sending
    #[error("invalid input: {0}")]
    InvalidInput(String),

    /// The request never produced an HTTP response (connection, TLS, timeout)
    #[error("transport failure: {0}")]
    Transport(#[from] reqwest::Error),

    /// The gateway answered with a non-200 status
    #[error("api error {status}: {name}: {message}")]
    Api {
        /// HTTP status returned by the gateway
        status: StatusCode,
        /// Error name reported in the body
        name: String,
        /// Error message reported in the body
        message: String,
    },

    /// Token signing failed
    #[error("token error: {0}")]
    Token(#[from] jsonwebtoken::errors::Error),

    /// Response body was not valid JSON
    #[error("json error: {0}")]
    Json(#[from] serde_json::Error),
}

impl AppError {
    /// Returns the HTTP status for API errors
    #[must_use]
    pub fn status(&self) -> Option<StatusCode> {
        match self {
            AppError::Api { status, .. } => Some(*status),
            AppError::Transport(e) => e.status(),
            _ => None,
        }
    }

    /// True when the error was raised before any network I/O took place
    #[must_use]
    pub fn is_local(&self) -> bool {
        matches!(
            self,
            AppError::Configuration(_) | AppError::MissingField(_) | AppError::InvalidInput(_)
        )
    }
}

/// Result alias used across the crate
pub type BaokimResult<T> = Result<T, AppError>;
