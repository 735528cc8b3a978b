//! Verification code policy configuration

use serde::{Deserialize, Serialize};

use super::{var_or, ConfigError};

/// Limits for the configurable code length
pub const MIN_CODE_LENGTH: usize = 4;
pub const MAX_CODE_LENGTH: usize = 10;

/// Verification code policy
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct VerificationConfig {
    /// Number of digits in a generated code
    pub code_length: usize,

    /// Minutes before a code expires
    pub code_ttl_minutes: i64,

    /// Seconds between expired-code sweeps (0 disables the timer)
    pub sweep_interval_secs: u64,
}

impl Default for VerificationConfig {
    fn default() -> Self {
        Self {
            code_length: 6,
            code_ttl_minutes: 15,
            sweep_interval_secs: 3600,
        }
    }
}

impl VerificationConfig {
    /// Create from environment variables, all optional
    pub fn from_env() -> Self {
        Self {
            code_length: var_or("VERIFICATION_CODE_LENGTH", 6),
            code_ttl_minutes: var_or("VERIFICATION_CODE_TTL_MINUTES", 15),
            sweep_interval_secs: var_or("SWEEP_INTERVAL_SECS", 3600),
        }
    }

    /// Code lifetime as a duration
    pub fn code_ttl(&self) -> chrono::Duration {
        chrono::Duration::minutes(self.code_ttl_minutes)
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        if !(MIN_CODE_LENGTH..=MAX_CODE_LENGTH).contains(&self.code_length) {
            return Err(ConfigError::InvalidVar {
                name: "VERIFICATION_CODE_LENGTH",
                message: format!(
                    "must be between {} and {}",
                    MIN_CODE_LENGTH, MAX_CODE_LENGTH
                ),
            });
        }

        if self.code_ttl_minutes <= 0 {
            return Err(ConfigError::InvalidVar {
                name: "VERIFICATION_CODE_TTL_MINUTES",
                message: "must be positive".to_string(),
            });
        }

        Ok(())
    }
}
