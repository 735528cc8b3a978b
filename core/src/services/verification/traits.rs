//! Traits for verification code delivery

use async_trait::async_trait;

/// Trait for delivering verification codes to an identity
///
/// Implementations cover a single delivery channel (email, WhatsApp, or a
/// logging mock for development). Errors are returned as plain strings so
/// transport-specific failures stay inside the implementation.
#[async_trait]
pub trait CodeMessenger: Send + Sync {
    /// Deliver a verification code to the given identity
    async fn deliver_code(&self, identity: &str, code: &str) -> Result<(), String>;
}
