use actix_web::{web, HttpResponse};

use lark_core::repositories::{ContactRepository, VerificationCodeRepository};
use lark_core::services::CodeMessenger;
use lark_shared::utils::validation::mask_identity;

use crate::app::AppState;
use crate::dto::contact::ContactListResponse;
use crate::handlers::error_response;
use crate::middleware::VerifiedIdentity;

/// Handler for GET /api/contacts
///
/// Admin-only listing, newest submissions first. The route is wrapped in
/// the session guard; the extractor here just surfaces who asked.
pub async fn list_contacts<R, C, M>(
    state: web::Data<AppState<R, C, M>>,
    admin: VerifiedIdentity,
) -> HttpResponse
where
    R: VerificationCodeRepository + 'static,
    C: ContactRepository + 'static,
    M: CodeMessenger + 'static,
{
    match state.contacts.list().await {
        Ok(contacts) => {
            tracing::debug!(
                admin = %mask_identity(&admin.identity),
                count = contacts.len(),
                "Listed contact submissions"
            );
            HttpResponse::Ok().json(ContactListResponse { contacts })
        }
        Err(error) => error_response(&error),
    }
}
