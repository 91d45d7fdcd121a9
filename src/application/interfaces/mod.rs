/// Bank catalogue service interface
pub mod bank;
/// Order service interface
pub mod order;
