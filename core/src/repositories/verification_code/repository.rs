//! Verification code repository trait defining the persistence contract.

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use uuid::Uuid;

use crate::domain::entities::VerificationCode;
use crate::errors::CoreResult;

/// Repository trait for verification code persistence
///
/// The store is append-mostly: saving a fresh code for an identity never
/// touches earlier rows, and there is no uniqueness constraint on identity.
/// Which row counts is decided entirely by `find_latest`; stale rows hang
/// around until a deletion or the expiry sweep removes them.
#[async_trait]
pub trait VerificationCodeRepository: Send + Sync {
    /// Insert a new code row
    ///
    /// # Returns
    /// * `Ok(VerificationCode)` - The persisted row
    /// * `Err(CoreError)` - Insert failed
    async fn save(&self, code: VerificationCode) -> CoreResult<VerificationCode>;

    /// Find the newest row for an identity
    ///
    /// Rows are ordered by `created_at` descending; only the first is
    /// returned. Expiry is NOT filtered here; callers re-check it at
    /// comparison time.
    async fn find_latest(&self, identity: &str) -> CoreResult<Option<VerificationCode>>;

    /// Delete a single row by primary key
    async fn delete_by_id(&self, id: Uuid) -> CoreResult<()>;

    /// Delete every row for an identity
    ///
    /// # Returns
    /// * `Ok(u64)` - Number of rows removed (zero is not an error)
    async fn delete_by_identity(&self, identity: &str) -> CoreResult<u64>;

    /// Delete all rows whose `expires_at` is before `now`
    ///
    /// # Returns
    /// * `Ok(u64)` - Number of rows swept
    async fn sweep_expired(&self, now: DateTime<Utc>) -> CoreResult<u64>;
}
