//! Session assertion claims carried by admin bearer tokens.

use chrono::{Duration, Utc};
use serde::{Deserialize, Serialize};

/// Default session lifetime (24 hours)
pub const DEFAULT_SESSION_TTL_HOURS: i64 = 24;

/// Claims embedded in a signed session token
///
/// Deliberately minimal: the subject is the admin identity that passed
/// verification, and `exp` ends the session. There is no refresh flow.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SessionClaims {
    /// Admin identity the session belongs to
    pub sub: String,

    /// Issued-at time (Unix timestamp)
    pub iat: i64,

    /// Expiration time (Unix timestamp)
    pub exp: i64,
}

impl SessionClaims {
    /// Creates claims for an identity with the given lifetime
    pub fn new(identity: impl Into<String>, ttl_hours: i64) -> Self {
        let now = Utc::now();
        let expires_at = now + Duration::hours(ttl_hours);

        Self {
            sub: identity.into(),
            iat: now.timestamp(),
            exp: expires_at.timestamp(),
        }
    }

    /// The identity this session asserts
    pub fn identity(&self) -> &str {
        &self.sub
    }

    /// Checks if the session has expired
    pub fn is_expired(&self) -> bool {
        Utc::now().timestamp() >= self.exp
    }
}
