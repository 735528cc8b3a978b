//! Mapping from domain errors to HTTP responses
//!
//! Every route funnels its `CoreError` through `error_response` so the
//! status-code policy lives in exactly one place. Internal and delivery
//! detail goes to the log; the wire only ever sees a generic message.

use actix_web::HttpResponse;
use validator::ValidationErrors;

use lark_core::errors::CoreError;

use crate::dto::ErrorResponse;

/// Convert a domain error into the HTTP response the caller sees
///
/// Status mapping:
/// * `InvalidInput` → 400
/// * `Unauthorized` → 403 (the session guard maps its own failures to 401)
/// * `NotFoundOrExpired` → 404
/// * `Mismatch` → 403
/// * `Delivery` → 502
/// * `Internal` → 500
pub fn error_response(error: &CoreError) -> HttpResponse {
    match error {
        CoreError::InvalidInput { .. } => {
            HttpResponse::BadRequest().json(ErrorResponse::new(error.to_string()))
        }
        CoreError::Unauthorized => {
            HttpResponse::Forbidden().json(ErrorResponse::new("Unauthorized"))
        }
        CoreError::NotFoundOrExpired => HttpResponse::NotFound()
            .json(ErrorResponse::new("Invalid or expired verification code")),
        CoreError::Mismatch => {
            HttpResponse::Forbidden().json(ErrorResponse::new("Invalid verification code"))
        }
        CoreError::Delivery { message } => {
            tracing::error!(error = %message, "Verification code delivery failed");
            HttpResponse::BadGateway()
                .json(ErrorResponse::new("Failed to deliver verification code"))
        }
        CoreError::Internal { message } => {
            tracing::error!(error = %message, "Request failed with an internal error");
            HttpResponse::InternalServerError()
                .json(ErrorResponse::new("An internal error occurred"))
        }
    }
}

/// Convert DTO validation failures into a 400 with the offending fields
pub fn validation_error_response(errors: &ValidationErrors) -> HttpResponse {
    let fields: Vec<String> = errors
        .field_errors()
        .keys()
        .map(|field| field.to_string())
        .collect();

    HttpResponse::BadRequest().json(ErrorResponse::new(format!(
        "Invalid request data: {}",
        fields.join(", ")
    )))
}
