use actix_web::{web, HttpResponse};
use validator::Validate;

use lark_core::repositories::{ContactRepository, VerificationCodeRepository};
use lark_core::services::CodeMessenger;

use crate::app::AppState;
use crate::dto::auth::{VerifyCodeRequest, VerifyCodeResponse};
use crate::handlers::{error_response, validation_error_response};

/// Handler for POST /api/verify-code
///
/// Exchanges a delivered code for a session token. Status codes are
/// deliberately distinct: 403 for a non-admin identity or a wrong code,
/// 404 when no actionable code exists. The verified identity is echoed in
/// the `X-Verified-Identity` response header for the dashboard.
pub async fn verify_code<R, C, M>(
    state: web::Data<AppState<R, C, M>>,
    request: web::Json<VerifyCodeRequest>,
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
        .verification
        .submit_code(&request.identity, &request.code)
        .await
    {
        Ok(grant) => HttpResponse::Ok()
            .insert_header(("X-Verified-Identity", grant.identity))
            .json(VerifyCodeResponse {
                message: "Verification successful".to_string(),
                token: grant.token,
            }),
        Err(error) => error_response(&error),
    }
}
