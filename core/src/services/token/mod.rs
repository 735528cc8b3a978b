//! Token service module for admin session JWTs
//!
//! Sessions are minted after a successful code verification and carry
//! only the verified identity and a validity window. There is no refresh
//! or revocation flow; an expired session means logging in again.

mod config;
mod service;

pub use config::TokenIssuerConfig;
pub use service::TokenIssuer;
