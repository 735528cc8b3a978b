//! Contact repository trait.

use async_trait::async_trait;
use uuid::Uuid;

use crate::domain::entities::Contact;
use crate::errors::CoreResult;

/// Repository trait for contact submission persistence
#[async_trait]
pub trait ContactRepository: Send + Sync {
    /// Insert a new submission
    async fn save(&self, contact: Contact) -> CoreResult<Contact>;

    /// All submissions, newest first
    async fn find_all(&self) -> CoreResult<Vec<Contact>>;

    /// Delete a submission by id
    ///
    /// # Returns
    /// * `Ok(u64)` - Rows removed; deleting a missing id yields zero, not an
    ///   error
    async fn delete_by_id(&self, id: Uuid) -> CoreResult<u64>;
}
