use actix_web::{web, HttpResponse};
use validator::Validate;

use lark_core::repositories::{ContactRepository, VerificationCodeRepository};
use lark_core::services::CodeMessenger;

use crate::app::AppState;
use crate::dto::contact::{ContactCreatedResponse, CreateContactRequest};
use crate::handlers::{error_response, validation_error_response};

/// Handler for POST /api/contacts
///
/// Public contact-form intake; the only unauthenticated write in the API.
/// Field limits are enforced twice, once here on the DTO and again in the
/// service, so a buggy client gets a clean 400 either way.
pub async fn create_contact<R, C, M>(
    state: web::Data<AppState<R, C, M>>,
    request: web::Json<CreateContactRequest>,
) -> HttpResponse
where
    R: VerificationCodeRepository + 'static,
    C: ContactRepository + 'static,
    M: CodeMessenger + 'static,
{
    if let Err(errors) = request.validate() {
        return validation_error_response(&errors);
    }

    match state
        .contacts
        .create(&request.name, &request.email, &request.message)
        .await
    {
        Ok(contact) => HttpResponse::Created().json(ContactCreatedResponse {
            contact,
            message: "Contact created successfully".to_string(),
        }),
        Err(error) => error_response(&error),
    }
}
