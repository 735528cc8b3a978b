//! Configuration for the session token issuer

use crate::domain::entities::session::DEFAULT_SESSION_TTL_HOURS;

/// Configuration for the session token issuer
#[derive(Debug, Clone)]
pub struct TokenIssuerConfig {
    /// JWT signing secret
    pub jwt_secret: String,
    /// Session lifetime in hours
    pub session_ttl_hours: i64,
}

impl Default for TokenIssuerConfig {
    fn default() -> Self {
        Self {
            jwt_secret: "development-secret-please-change-in-production".to_string(),
            session_ttl_hours: DEFAULT_SESSION_TTL_HOURS,
        }
    }
}
