//! Authentication configuration: session signing and the admin allow-list

use serde::{Deserialize, Serialize};

use super::{required_var, var_or, ConfigError};
use crate::utils::validation::is_valid_identity;

/// Authentication configuration
///
/// The admin set is configuration, never a database table. Membership is an
/// exact string match against `admin_identities`.
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct AuthConfig {
    /// Secret key for signing session tokens (HS256)
    pub jwt_secret: String,

    /// Session lifetime in hours
    pub session_ttl_hours: i64,

    /// Identities allowed to request admin sessions (emails or E.164 phones)
    pub admin_identities: Vec<String>,
}

impl Default for AuthConfig {
    fn default() -> Self {
        Self {
            jwt_secret: String::from("development-secret-change-in-production"),
            session_ttl_hours: default_session_ttl_hours(),
            admin_identities: vec![String::from("admin@example.com")],
        }
    }
}

impl AuthConfig {
    /// Create from environment variables
    ///
    /// `JWT_SECRET` and `ADMIN_IDENTITIES` are required; `ADMIN_IDENTITIES` is
    /// a comma-separated list and must contain at least one entry.
    pub fn from_env() -> Result<Self, ConfigError> {
        let admin_identities: Vec<String> = required_var("ADMIN_IDENTITIES")?
            .split(',')
            .map(|s| s.trim().to_string())
            .filter(|s| !s.is_empty())
            .collect();

        if admin_identities.is_empty() {
            return Err(ConfigError::InvalidVar {
                name: "ADMIN_IDENTITIES",
                message: "no identities after parsing".to_string(),
            });
        }

        Ok(Self {
            jwt_secret: required_var("JWT_SECRET")?,
            session_ttl_hours: var_or("SESSION_TTL_HOURS", default_session_ttl_hours()),
            admin_identities,
        })
    }

    /// Session lifetime as a duration
    pub fn session_ttl(&self) -> chrono::Duration {
        chrono::Duration::hours(self.session_ttl_hours)
    }

    /// Check the allow-list entries look like identities at all
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.admin_identities.is_empty() {
            return Err(ConfigError::MissingVar {
                name: "ADMIN_IDENTITIES",
            });
        }

        for identity in &self.admin_identities {
            if !is_valid_identity(identity) {
                return Err(ConfigError::InvalidVar {
                    name: "ADMIN_IDENTITIES",
                    message: format!("'{}' is neither an email nor an E.164 phone", identity),
                });
            }
        }

        if self.session_ttl_hours <= 0 {
            return Err(ConfigError::InvalidVar {
                name: "SESSION_TTL_HOURS",
                message: "must be positive".to_string(),
            });
        }

        Ok(())
    }
}

fn default_session_ttl_hours() -> i64 {
    24
}
