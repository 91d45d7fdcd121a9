/// Module containing environment variable helpers
pub mod config;
/// Module containing token identifier generation
pub mod id;
/// Module containing logging utilities
pub mod logger;

pub use id::*;
pub use logger::*;
