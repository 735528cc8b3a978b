use actix_web::{web, HttpResponse};
use uuid::Uuid;

use lark_core::repositories::{ContactRepository, VerificationCodeRepository};
use lark_core::services::CodeMessenger;
use lark_shared::utils::validation::mask_identity;

use crate::app::AppState;
use crate::dto::contact::DeletedResponse;
use crate::handlers::error_response;
use crate::middleware::VerifiedIdentity;

/// Handler for DELETE /api/contacts/{id}
///
/// Admin-only. Deleting an id that no longer exists still answers 200;
/// the dashboard may race itself across tabs. A malformed id fails path
/// extraction and answers 400 before this handler runs.
pub async fn delete_contact<R, C, M>(
    state: web::Data<AppState<R, C, M>>,
    path: web::Path<Uuid>,
    admin: VerifiedIdentity,
) -> HttpResponse
where
    R: VerificationCodeRepository + 'static,
    C: ContactRepository + 'static,
    M: CodeMessenger + 'static,
{
    let id = path.into_inner();

    match state.contacts.delete(id).await {
        Ok(()) => {
            tracing::info!(
                admin = %mask_identity(&admin.identity),
                contact_id = %id,
                "Contact submission deleted"
            );
            HttpResponse::Ok().json(DeletedResponse {
                message: "Contact deleted successfully".to_string(),
            })
        }
        Err(error) => error_response(&error),
    }
}
