use actix_web::{web, HttpResponse};
use validator::Validate;

use lark_core::repositories::{ContactRepository, VerificationCodeRepository};
use lark_core::services::CodeMessenger;

use crate::app::AppState;
use crate::dto::auth::{SendVerificationRequest, SendVerificationResponse};
use crate::handlers::{error_response, validation_error_response};

/// Handler for POST /api/send-verification
///
/// Requests a verification code for an identity. The response body is the
/// same generic acknowledgement whether the identity is on the admin
/// allow-list or not, so the endpoint cannot be used to probe which
/// identities exist. Delivery and storage failures still surface as errors;
/// only the admin-or-not distinction is hidden.
pub async fn send_verification<R, C, M>(
    state: web::Data<AppState<R, C, M>>,
    request: web::Json<SendVerificationRequest>,
) -> HttpResponse
where
    R: VerificationCodeRepository + 'static,
    C: ContactRepository + 'static,
    M: CodeMessenger + 'static,
{
    if let Err(errors) = request.validate() {
        return validation_error_response(&errors);
    }

    match state.verification.request_code(&request.identity).await {
        // Sent and Ignored answer identically on purpose.
        Ok(_) => HttpResponse::Ok().json(SendVerificationResponse::ack()),
        Err(error) => error_response(&error),
    }
}
