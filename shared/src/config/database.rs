//! Database configuration module

use serde::{Deserialize, Serialize};

use super::{required_var, var_or, ConfigError};

/// Database configuration for the MySQL pool
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct DatabaseConfig {
    /// Database connection URL
    pub url: String,

    /// Maximum number of connections in the pool
    pub max_connections: u32,

    /// Minimum number of idle connections kept open
    pub min_connections: u32,

    /// Connection timeout in seconds
    pub connect_timeout: u64,

    /// Idle connection timeout in seconds
    pub idle_timeout: u64,

    /// Maximum lifetime of a connection in seconds
    pub max_lifetime: u64,
}

impl Default for DatabaseConfig {
    fn default() -> Self {
        Self {
            url: String::from("mysql://localhost:3306/larkspur"),
            max_connections: 10,
            min_connections: 1,
            connect_timeout: 30,
            idle_timeout: 600,
            max_lifetime: 1800,
        }
    }
}

impl DatabaseConfig {
    /// Create from environment variables
    ///
    /// `DATABASE_URL` is required; pool sizing knobs fall back to defaults.
    pub fn from_env() -> Result<Self, ConfigError> {
        Ok(Self {
            url: required_var("DATABASE_URL")?,
            max_connections: var_or("DATABASE_MAX_CONNECTIONS", 10),
            min_connections: var_or("DATABASE_MIN_CONNECTIONS", 1),
            connect_timeout: var_or("DATABASE_CONNECT_TIMEOUT", 30),
            idle_timeout: var_or("DATABASE_IDLE_TIMEOUT", 600),
            max_lifetime: var_or("DATABASE_MAX_LIFETIME", 1800),
        })
    }

    /// Create a new database configuration with URL
    pub fn new(url: impl Into<String>) -> Self {
        Self {
            url: url.into(),
            ..Default::default()
        }
    }

    /// Set the maximum number of connections
    pub fn with_max_connections(mut self, max: u32) -> Self {
        self.max_connections = max;
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_builder() {
        let config = DatabaseConfig::new("mysql://db:3306/app").with_max_connections(50);
        assert_eq!(config.url, "mysql://db:3306/app");
        assert_eq!(config.max_connections, 50);
        assert_eq!(config.min_connections, 1);
    }
}
