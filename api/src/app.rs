//! Application state and factory
//!
//! `AppState` carries the services every handler shares; `create_app`
//! assembles the actix `App` with middleware and routes. Keeping the
//! factory generic over the repository and messenger types lets the
//! integration tests run the real route table against in-memory fakes.

use actix_web::{web, App, HttpResponse};
use std::sync::Arc;
use tracing_actix_web::TracingLogger;

use crate::dto::ErrorResponse;
use crate::middleware::{create_cors, SessionGuard};
use crate::routes::auth::{send_verification, verify_code};
use crate::routes::contacts::{create_contact, delete_contact, list_contacts};
use crate::routes::health::{health, ready};

use lark_core::repositories::{ContactRepository, VerificationCodeRepository};
use lark_core::services::{CodeMessenger, ContactService, TokenIssuer, VerificationService};

/// Application state that holds the shared services
pub struct AppState<R, C, M>
where
    R: VerificationCodeRepository,
    C: ContactRepository,
    M: CodeMessenger,
{
    pub verification: Arc<VerificationService<R, M>>,
    pub contacts: Arc<ContactService<C>>,
    pub tokens: Arc<TokenIssuer>,
}

/// Create and configure the application with all routes and middleware
pub fn create_app<R, C, M>(
    state: web::Data<AppState<R, C, M>>,
) -> App<
    impl actix_web::dev::ServiceFactory<
        actix_web::dev::ServiceRequest,
        Config = (),
        Response = actix_web::dev::ServiceResponse<impl actix_web::body::MessageBody>,
        Error = actix_web::Error,
        InitError = (),
    >,
>
where
    R: VerificationCodeRepository + 'static,
    C: ContactRepository + 'static,
    M: CodeMessenger + 'static,
{
    let cors = create_cors();

    // Route-level guards share the issuer behind the state's Arc.
    let tokens = state.tokens.clone();

    App::new()
        .app_data(state)
        .wrap(TracingLogger::default())
        .wrap(cors)
        .route("/health", web::get().to(health))
        .route("/ready", web::get().to(ready))
        .service(
            web::scope("/api")
                .route("/send-verification", web::post().to(send_verification::<R, C, M>))
                .route("/verify-code", web::post().to(verify_code::<R, C, M>))
                .route("/contacts", web::post().to(create_contact::<R, C, M>))
                .route(
                    "/contacts",
                    web::get()
                        .to(list_contacts::<R, C, M>)
                        .wrap(SessionGuard::new(tokens.clone())),
                )
                .route(
                    "/contacts/{id}",
                    web::delete()
                        .to(delete_contact::<R, C, M>)
                        .wrap(SessionGuard::new(tokens)),
                ),
        )
        .default_service(web::route().to(not_found))
}

/// Default 404 handler
async fn not_found() -> HttpResponse {
    HttpResponse::NotFound().json(ErrorResponse::new("The requested resource was not found"))
}
