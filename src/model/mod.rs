/******************************************************************************
   Author: Joaquín Béjar García
   Email: jb@taunais.com
   Date: 19/10/26
******************************************************************************/
/// Token claims, signing and verification
pub mod auth;
/// HTTP request plumbing
pub mod http;
/// Request models for API calls
pub mod requests;
/// Response models from API calls
pub mod responses;
/// Serde and validation helpers shared by the models
pub mod utils;
