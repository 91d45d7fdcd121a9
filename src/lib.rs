/******************************************************************************
   Author: Joaquín Béjar García
   Email: jb@taunais.com
   Date: 19/10/26
******************************************************************************/

//! # Baokim Client
//!
//! Async client for the Baokim payment gateway REST API.
//!
//! Every call is authenticated with a short-lived HMAC-signed JWT passed as the
//! `jwt` query parameter. The token embeds the outgoing form payload, so the
//! gateway can check the body it receives against the signature. Token
//! issuance, reuse and renewal are handled by the
//! [`TokenManager`](application::auth::TokenManager) owned by the client.
//!
//! ## Available endpoints
//!
//! | Operation | Trait method |
//! |---|---|
//! | Bank list | [`BankService::get_bank_list`](application::interfaces::bank::BankService::get_bank_list) |
//! | Payment methods | [`BankService::get_payment_methods`](application::interfaces::bank::BankService::get_payment_methods) |
//! | Create order | [`OrderService::create_order`](application::interfaces::order::OrderService::create_order) |
//! | Order detail | [`OrderService::get_order_detail`](application::interfaces::order::OrderService::get_order_detail) |
//! | Order list | [`OrderService::get_order_list`](application::interfaces::order::OrderService::get_order_list) |
//! | Cancel order | [`OrderService::cancel_order`](application::interfaces::order::OrderService::cancel_order) |
//!
//! ## Example
//!
//! ```ignore
//! use baokim_client::prelude::*;
//!
//! let config = Config::with_credentials("api-key", "api-secret")
//!     .with_environment(Environment::Sandbox);
//! let client = Client::new(config)?;
//!
//! let order = CreateOrderRequest::new("ORDER-1", 150_000, "Invoice #1", "https://shop.example/ok")
//!     .with_accept_bank(true)
//!     .with_accept_qrpay(false);
//! let body = client.create_order(&order).await?;
//! ```
//!
//! ## Configuration
//!
//! [`Config::new`](application::config::Config::new) reads the following
//! variables (a `.env` file is honoured):
//!
//! | Variable | Default |
//! |---|---|
//! | `BAOKIM_API_KEY` | none |
//! | `BAOKIM_API_SECRET` | none |
//! | `BAOKIM_TOKEN_EXPIRE` | `60` |
//! | `BAOKIM_ENCODE_ALG` | `HS256` |
//! | `BAOKIM_IS_DEV` | `false` |
//! | `BAOKIM_SANDBOX_URL` | `https://sandbox-api.baokim.vn/payment/` |
//! | `BAOKIM_PRODUCTION_URL` | `https://api.baokim.vn/payment/` |
//! | `BAOKIM_REST_TIMEOUT` | `30` |

/// Client, token manager, configuration and service interfaces
pub mod application;
/// Library-wide constants
pub mod constants;
/// Error types
pub mod error;
/// Wire models, token claims and HTTP plumbing
pub mod model;
/// Commonly used re-exports
pub mod prelude;
/// Environment, identifier and logging helpers
pub mod utils;

/// Library version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Returns the library version
#[must_use]
pub fn version() -> &'static str {
    VERSION
}
