//! # Infrastructure Layer
//!
//! This crate implements the infrastructure layer for the Larkspur backend.
//! It provides the concrete implementations behind the core repository and
//! messenger traits:
//!
//! - **Database**: MySQL repositories using SQLx, plus pool management and
//!   embedded migrations
//! - **Messenger**: outbound verification code delivery via EmailJS or
//!   Twilio WhatsApp, with a logging mock for development

pub mod database;
pub mod messenger;

// Re-export commonly used types
pub use database::{DatabasePool, MySqlContactRepository, MySqlVerificationCodeRepository};
pub use messenger::{EmailJsMessenger, Messenger, MockMessenger, TwilioMessenger};

/// Infrastructure-specific error types
#[derive(Debug, thiserror::Error)]
pub enum InfraError {
    /// Database connection or query error
    #[error("Database error: {0}")]
    Database(#[from] sqlx::Error),

    /// Database migration error
    #[error("Migration error: {0}")]
    Migration(#[from] sqlx::migrate::MigrateError),

    /// HTTP request error for external services
    #[error("HTTP request error: {0}")]
    Http(#[from] reqwest::Error),

    /// Configuration error
    #[error("Configuration error: {0}")]
    Config(String),

    /// Messenger delivery error
    #[error("Messenger error: {0}")]
    Messenger(String),
}
