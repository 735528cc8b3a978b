//! Session guard middleware for the admin surface.
//!
//! Extracts the bearer token from the Authorization header, verifies it
//! against the token issuer, and injects the verified identity into the
//! request. Every rejection is a 401 with a JSON body; the concrete reason
//! stays in the logs.

use actix_web::{
    body::EitherBody,
    dev::{Service, ServiceRequest, ServiceResponse, Transform},
    error::InternalError,
    http::header::AUTHORIZATION,
    Error, FromRequest, HttpMessage, HttpRequest, HttpResponse,
};
use futures_util::future::LocalBoxFuture;
use std::{
    future::{ready, Ready},
    rc::Rc,
    sync::Arc,
    task::{Context, Poll},
};

use lark_core::services::TokenIssuer;

use crate::dto::ErrorResponse;

/// Identity a verified session token asserts, injected into requests
#[derive(Debug, Clone)]
pub struct VerifiedIdentity {
    /// Admin identity from the token's subject claim
    pub identity: String,
}

/// Session guard middleware factory
///
/// Wrap individual routes with this to require a verified admin session.
pub struct SessionGuard {
    issuer: Arc<TokenIssuer>,
}

impl SessionGuard {
    pub fn new(issuer: Arc<TokenIssuer>) -> Self {
        Self { issuer }
    }
}

impl<S, B> Transform<S, ServiceRequest> for SessionGuard
where
    S: Service<ServiceRequest, Response = ServiceResponse<B>, Error = Error> + 'static,
    S::Future: 'static,
    B: 'static,
{
    type Response = ServiceResponse<EitherBody<B>>;
    type Error = Error;
    type InitError = ();
    type Transform = SessionGuardMiddleware<S>;
    type Future = Ready<Result<Self::Transform, Self::InitError>>;

    fn new_transform(&self, service: S) -> Self::Future {
        ready(Ok(SessionGuardMiddleware {
            service: Rc::new(service),
            issuer: self.issuer.clone(),
        }))
    }
}

/// Session guard middleware service
pub struct SessionGuardMiddleware<S> {
    service: Rc<S>,
    issuer: Arc<TokenIssuer>,
}

impl<S, B> Service<ServiceRequest> for SessionGuardMiddleware<S>
where
    S: Service<ServiceRequest, Response = ServiceResponse<B>, Error = Error> + 'static,
    S::Future: 'static,
    B: 'static,
{
    type Response = ServiceResponse<EitherBody<B>>;
    type Error = Error;
    type Future = LocalBoxFuture<'static, Result<Self::Response, Self::Error>>;

    fn poll_ready(&self, ctx: &mut Context<'_>) -> Poll<Result<(), Self::Error>> {
        self.service.poll_ready(ctx)
    }

    fn call(&self, req: ServiceRequest) -> Self::Future {
        let service = Rc::clone(&self.service);
        let issuer = self.issuer.clone();

        Box::pin(async move {
            if req.headers().get(AUTHORIZATION).is_none() {
                return Ok(reject(req, "Authorization header is required"));
            }

            let token = match extract_bearer_token(&req) {
                Some(token) => token,
                None => {
                    return Ok(reject(
                        req,
                        "Authorization header format must be 'Bearer {token}'",
                    ));
                }
            };

            // The issuer collapses every rejection (bad signature, wrong
            // algorithm, expired, blank subject) into one unauthorized
            // error, so the caller cannot tell which check failed.
            let claims = match issuer.verify(&token) {
                Ok(claims) => claims,
                Err(_) => return Ok(reject(req, "Invalid token")),
            };

            req.extensions_mut().insert(VerifiedIdentity {
                identity: claims.sub,
            });

            service
                .call(req)
                .await
                .map(ServiceResponse::map_into_left_body)
        })
    }
}

/// Answers a request with a 401 instead of calling the inner service
fn reject<B>(req: ServiceRequest, message: &str) -> ServiceResponse<EitherBody<B>> {
    let (request, _) = req.into_parts();
    let response = HttpResponse::Unauthorized()
        .json(ErrorResponse::new(message))
        .map_into_right_body();
    ServiceResponse::new(request, response)
}

/// Extracts the bearer token from the Authorization header
fn extract_bearer_token(req: &ServiceRequest) -> Option<String> {
    req.headers()
        .get(AUTHORIZATION)?
        .to_str()
        .ok()?
        .strip_prefix("Bearer ")
        .filter(|token| !token.is_empty())
        .map(|token| token.to_string())
}

/// Extractor for handlers behind the guard
///
/// Reads the identity the middleware injected. A handler reached without
/// the guard in front answers 401 rather than panicking.
impl FromRequest for VerifiedIdentity {
    type Error = Error;
    type Future = Ready<Result<Self, Self::Error>>;

    fn from_request(req: &HttpRequest, _: &mut actix_web::dev::Payload) -> Self::Future {
        let result = req.extensions().get::<VerifiedIdentity>().cloned().ok_or_else(|| {
            let response =
                HttpResponse::Unauthorized().json(ErrorResponse::new("Authentication required"));
            InternalError::from_response("Authentication required", response).into()
        });

        ready(result)
    }
}
