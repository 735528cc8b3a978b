pub mod auth;
pub mod contact;
pub mod error;

pub use auth::{SendVerificationRequest, SendVerificationResponse, VerifyCodeRequest, VerifyCodeResponse};
pub use contact::{ContactCreatedResponse, ContactListResponse, CreateContactRequest, DeletedResponse};
pub use error::ErrorResponse;
