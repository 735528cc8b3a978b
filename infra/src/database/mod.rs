//! Database module - MySQL implementations using SQLx
//!
//! This module provides the database access layer including:
//! - Connection pool management
//! - Repository implementations for the core traits
//! - Embedded database migrations

pub mod connection;
pub mod mysql;

// Re-export commonly used types
pub use connection::DatabasePool;
pub use mysql::{MySqlContactRepository, MySqlVerificationCodeRepository};
