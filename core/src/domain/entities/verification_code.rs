//! Verification code entity for OTP-based admin login.

use chrono::{DateTime, Duration, Utc};
use constant_time_eq::constant_time_eq;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Canonical number of digits in a verification code
pub const DEFAULT_CODE_LENGTH: usize = 6;

/// Default lifetime of a verification code (15 minutes)
pub const DEFAULT_CODE_TTL_MINUTES: i64 = 15;

/// A persisted verification code awaiting submission
///
/// Codes are single use: the row is deleted when a submission matches. A
/// mismatch changes nothing; there is no attempt counter. Re-requesting a
/// code inserts a fresh row without touching older ones, and only the newest
/// row per identity is ever considered actionable.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct VerificationCode {
    /// Unique identifier for the code row
    pub id: Uuid,

    /// Identity the code was issued for (email or E.164 phone, verbatim)
    pub identity: String,

    /// The zero-padded numeric code
    pub code: String,

    /// Timestamp when the code was created
    pub created_at: DateTime<Utc>,

    /// Timestamp when the code expires
    pub expires_at: DateTime<Utc>,
}

impl VerificationCode {
    /// Creates a code row with the default lifetime
    pub fn new(identity: impl Into<String>, code: impl Into<String>) -> Self {
        Self::new_with_ttl(identity, code, DEFAULT_CODE_TTL_MINUTES)
    }

    /// Creates a code row expiring `ttl_minutes` from now
    pub fn new_with_ttl(
        identity: impl Into<String>,
        code: impl Into<String>,
        ttl_minutes: i64,
    ) -> Self {
        let now = Utc::now();

        Self {
            id: Uuid::new_v4(),
            identity: identity.into(),
            code: code.into(),
            created_at: now,
            expires_at: now + Duration::minutes(ttl_minutes),
        }
    }

    /// Checks if the verification code has expired
    ///
    /// A code is expired the instant `expires_at` is reached.
    pub fn is_expired(&self) -> bool {
        Utc::now() >= self.expires_at
    }

    /// Compares a submitted code against the stored one
    ///
    /// The comparison runs in constant time over the code bytes. Length is
    /// configuration, not a secret, so the length check happens first.
    pub fn matches(&self, candidate: &str) -> bool {
        self.code.len() == candidate.len()
            && constant_time_eq(self.code.as_bytes(), candidate.as_bytes())
    }

    /// Time remaining until expiration, zero if already expired
    pub fn time_until_expiration(&self) -> Duration {
        let now = Utc::now();
        if self.expires_at > now {
            self.expires_at - now
        } else {
            Duration::zero()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::thread;
    use std::time::Duration as StdDuration;

    #[test]
    fn test_new_verification_code() {
        let record = VerificationCode::new("admin@example.com", "042517");

        assert_eq!(record.identity, "admin@example.com");
        assert_eq!(record.code, "042517");
        assert!(!record.is_expired());
        assert_eq!(
            record.expires_at,
            record.created_at + Duration::minutes(DEFAULT_CODE_TTL_MINUTES)
        );
    }

    #[test]
    fn test_matches_correct_code() {
        let record = VerificationCode::new("admin@example.com", "042517");
        assert!(record.matches("042517"));
    }

    #[test]
    fn test_matches_rejects_wrong_code() {
        let record = VerificationCode::new("admin@example.com", "042517");
        assert!(!record.matches("000000"));
        assert!(!record.matches("42517")); // same digits, missing zero padding
        assert!(!record.matches(""));
    }

    #[test]
    fn test_is_expired() {
        let record = VerificationCode::new_with_ttl("admin@example.com", "042517", 0);

        thread::sleep(StdDuration::from_millis(10));

        assert!(record.is_expired());
        assert_eq!(record.time_until_expiration(), Duration::zero());
    }

    #[test]
    fn test_custom_ttl() {
        let record = VerificationCode::new_with_ttl("+61412345678", "731044", 10);
        assert_eq!(
            record.expires_at,
            record.created_at + Duration::minutes(10)
        );
    }

    #[test]
    fn test_time_until_expiration() {
        let record = VerificationCode::new("admin@example.com", "042517");

        let remaining = record.time_until_expiration();
        assert!(remaining <= Duration::minutes(DEFAULT_CODE_TTL_MINUTES));
        assert!(remaining > Duration::minutes(DEFAULT_CODE_TTL_MINUTES - 1));
    }

    #[test]
    fn test_serialization() {
        let record = VerificationCode::new("admin@example.com", "042517");

        let json = serde_json::to_string(&record).unwrap();
        let deserialized: VerificationCode = serde_json::from_str(&json).unwrap();

        assert_eq!(record, deserialized);
    }
}
