//! Contact submission handling

use std::sync::Arc;

use tracing;
use uuid::Uuid;

use lark_shared::utils::validation::is_valid_email;

use crate::domain::entities::contact::{
    Contact, MESSAGE_MAX_LENGTH, NAME_MAX_LENGTH, NAME_MIN_LENGTH,
};
use crate::errors::{CoreError, CoreResult};
use crate::repositories::ContactRepository;

/// Service for contact form submissions and their admin review
pub struct ContactService<R: ContactRepository> {
    repository: Arc<R>,
}

impl<R: ContactRepository> ContactService<R> {
    /// Create a new contact service
    pub fn new(repository: Arc<R>) -> Self {
        Self { repository }
    }

    /// Record a new contact submission
    ///
    /// Leading and trailing whitespace is stripped before validation. The
    /// message may be empty; name and email are required.
    ///
    /// # Returns
    ///
    /// * `Ok(Contact)` - The stored submission
    /// * `Err(CoreError::InvalidInput)` - A field failed validation
    pub async fn create(&self, name: &str, email: &str, message: &str) -> CoreResult<Contact> {
        let name = name.trim();
        let email = email.trim();
        let message = message.trim();

        let name_len = name.chars().count();
        if name_len < NAME_MIN_LENGTH || name_len > NAME_MAX_LENGTH {
            return Err(CoreError::InvalidInput {
                message: format!(
                    "name must be between {} and {} characters",
                    NAME_MIN_LENGTH, NAME_MAX_LENGTH
                ),
            });
        }
        if !is_valid_email(email) {
            return Err(CoreError::InvalidInput {
                message: "a valid email address is required".to_string(),
            });
        }
        if message.chars().count() > MESSAGE_MAX_LENGTH {
            return Err(CoreError::InvalidInput {
                message: format!("message must be at most {} characters", MESSAGE_MAX_LENGTH),
            });
        }

        let contact = Contact::new(name, email, message);
        let stored = self.repository.save(contact).await?;

        tracing::info!(
            contact_id = %stored.id,
            event = "contact_created",
            "Stored new contact submission"
        );

        Ok(stored)
    }

    /// List all contact submissions, newest first
    pub async fn list(&self) -> CoreResult<Vec<Contact>> {
        self.repository.find_all().await
    }

    /// Delete a contact submission
    ///
    /// Deleting an id that no longer exists succeeds; the dashboard may
    /// race itself across tabs.
    pub async fn delete(&self, id: Uuid) -> CoreResult<()> {
        let deleted = self.repository.delete_by_id(id).await?;
        if deleted == 0 {
            tracing::debug!(contact_id = %id, "Delete targeted a contact that no longer exists");
        } else {
            tracing::info!(
                contact_id = %id,
                event = "contact_deleted",
                "Deleted contact submission"
            );
        }
        Ok(())
    }
}
