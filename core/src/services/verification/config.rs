//! Configuration for the verification service

use crate::domain::entities::verification_code::{DEFAULT_CODE_LENGTH, DEFAULT_CODE_TTL_MINUTES};

/// Configuration for the verification service
#[derive(Debug, Clone)]
pub struct VerificationPolicy {
    /// Number of decimal digits in a generated code
    pub code_length: usize,
    /// Number of minutes before a verification code expires
    pub code_ttl_minutes: i64,
}

impl Default for VerificationPolicy {
    fn default() -> Self {
        Self {
            code_length: DEFAULT_CODE_LENGTH,
            code_ttl_minutes: DEFAULT_CODE_TTL_MINUTES,
        }
    }
}
