/******************************************************************************
   Author: Joaquín Béjar García
   Email: jb@taunais.com
   Date: 19/10/26
******************************************************************************/

//! # Baokim Client Prelude
//!
//! Commonly used types and traits in one import.
//!
//! ```rust
//! use baokim_client::prelude::*;
//!
//! let config = Config::with_credentials("api-key", "api-secret");
//! let order = CreateOrderRequest::new("ORDER-1", 50_000, "Invoice", "https://shop.example/ok");
//! assert!(order.validate().is_ok());
//! # let _ = config;
//! ```

// ============================================================================
// CORE CONFIGURATION AND SETUP
// ============================================================================

/// Configuration for the Baokim API client
pub use crate::application::config::{
    Config, ConfigOverrides, Credentials, Environment, RestApiConfig, TokenConfig,
};

/// Library version information
pub use crate::{VERSION, version};

// ============================================================================
// ERROR HANDLING
// ============================================================================

/// Main error type for the library
pub use crate::error::{AppError, BaokimResult};

// ============================================================================
// CLIENT AND AUTHENTICATION
// ============================================================================

/// API client
pub use crate::application::client::Client;

/// Token manager and token model
pub use crate::application::auth::TokenManager;
pub use crate::model::auth::{AuthToken, TokenClaims, TokenStatus};

// ============================================================================
// SERVICES (TRAITS)
// ============================================================================

/// Bank catalogue service
pub use crate::application::interfaces::bank::BankService;

/// Order service
pub use crate::application::interfaces::order::OrderService;

// ============================================================================
// REQUEST MODELS
// ============================================================================

pub use crate::model::requests::{
    BankListRequest, CancelOrderRequest, CreateOrderRequest, Language, OrderDetailRequest,
    OrderListRequest,
};

// ============================================================================
// UTILITIES
// ============================================================================

/// Logging utilities
pub use crate::utils::logger::setup_logger;

/// Global constants
pub use crate::constants::*;

// ============================================================================
// RE-EXPORTS FROM EXTERNAL CRATES
// ============================================================================

pub use async_trait::async_trait;
pub use serde_json::Value;
pub use tracing::{debug, error, info, warn};
