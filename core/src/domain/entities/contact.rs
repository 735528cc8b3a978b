//! Contact form submission entity.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Bounds for contact fields
pub const NAME_MIN_LENGTH: usize = 2;
pub const NAME_MAX_LENGTH: usize = 100;
pub const MESSAGE_MAX_LENGTH: usize = 500;

/// A contact form submission
///
/// This is the data the admin dashboard manages: created by the public
/// intake endpoint, listed and deleted behind the session guard.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Contact {
    /// Unique identifier for the submission
    pub id: Uuid,

    /// Sender's name
    pub name: String,

    /// Sender's email address
    pub email: String,

    /// Free-form message body, may be empty
    pub message: String,

    /// Timestamp when the submission arrived
    pub created_at: DateTime<Utc>,
}

impl Contact {
    /// Creates a new submission stamped with the current time
    pub fn new(
        name: impl Into<String>,
        email: impl Into<String>,
        message: impl Into<String>,
    ) -> Self {
        Self {
            id: Uuid::new_v4(),
            name: name.into(),
            email: email.into(),
            message: message.into(),
            created_at: Utc::now(),
        }
    }
}
