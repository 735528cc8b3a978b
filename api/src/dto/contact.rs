use serde::{Deserialize, Serialize};
use validator::Validate;

use lark_core::domain::entities::Contact;

#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct CreateContactRequest {
    /// Sender's name
    #[validate(length(min = 2, max = 100))]
    pub name: String,

    /// Sender's email address
    #[validate(email)]
    pub email: String,

    /// Free-form message, may be omitted entirely
    #[serde(default)]
    #[validate(length(max = 500))]
    pub message: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ContactCreatedResponse {
    pub contact: Contact,
    pub message: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ContactListResponse {
    pub contacts: Vec<Contact>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DeletedResponse {
    pub message: String,
}
