//! Shared utilities and common types for the Larkspur server
//!
//! This crate provides common functionality used across all server modules:
//! - Configuration types loaded from the environment
//! - Identity validation and masking helpers

pub mod config;
pub mod utils;

// Re-export commonly used items at crate root
pub use config::{
    AppConfig, AuthConfig, ConfigError, DatabaseConfig, Environment, MessengerChannel,
    ServerConfig, VerificationConfig,
};
pub use utils::validation;
