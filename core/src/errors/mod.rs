//! Error types for the verification and contact domain
//!
//! One enum covers every failure the services can surface. The transport
//! layer decides status codes from the variant alone; message text stays
//! deliberately generic where detail would help an attacker probe which
//! identities exist or which step of verification failed.

use thiserror::Error;

/// Domain error taxonomy
#[derive(Error, Debug)]
pub enum CoreError {
    /// Malformed identity, code, or payload
    #[error("Invalid input: {message}")]
    InvalidInput { message: String },

    /// The caller may not perform this operation
    ///
    /// Covers both a non-admin identity submitting a code and a failed
    /// bearer-token check; the message never says which.
    #[error("Unauthorized")]
    Unauthorized,

    /// No actionable code: nothing stored, or the stored code has expired
    #[error("Invalid or expired verification code")]
    NotFoundOrExpired,

    /// The submitted code does not match the stored one
    ///
    /// The stored code stays valid; mismatches carry no attempt counter.
    #[error("Invalid verification code")]
    Mismatch,

    /// The outbound messenger failed to deliver
    #[error("Delivery failed: {message}")]
    Delivery { message: String },

    /// Unexpected failure; detail goes to the log, not the wire
    #[error("Internal error: {message}")]
    Internal { message: String },
}

/// Result type alias for domain operations
pub type CoreResult<T> = Result<T, CoreError>;
