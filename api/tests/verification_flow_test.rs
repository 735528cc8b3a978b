//! End-to-end tests for the verification routes
//!
//! Each test builds the real app factory against in-memory fakes and
//! drives it over HTTP, covering the request/submit round trip, the
//! enumeration-resistant acknowledgement, single use, expiry, and the
//! status codes each failure maps to.

mod common;

use actix_web::{http::StatusCode, test};
use serde_json::json;

use common::{harness, harness_with, ADMIN};
use lark_api::app::create_app;
use lark_api::dto::auth::GENERIC_ACK;
use lark_core::domain::entities::VerificationCode;

#[actix_rt::test]
async fn send_verification_delivers_code_to_admin() {
    let harness = harness();
    let app = test::init_service(create_app(harness.state.clone())).await;

    let req = test::TestRequest::post()
        .uri("/api/send-verification")
        .set_json(json!({ "identity": ADMIN }))
        .to_request();
    let resp = test::call_service(&app, req).await;

    assert_eq!(resp.status(), StatusCode::OK);
    let body: serde_json::Value = test::read_body_json(resp).await;
    assert_eq!(body["message"], GENERIC_ACK);

    assert_eq!(harness.messenger.delivery_count(), 1);
    assert_eq!(harness.code_repository.row_count(), 1);
    let code = harness.messenger.last_code_for(ADMIN).unwrap();
    assert_eq!(code.len(), 6);
    assert!(code.chars().all(|c| c.is_ascii_digit()));
}

#[actix_rt::test]
async fn send_verification_gives_same_ack_for_unknown_identity() {
    let harness = harness();
    let app = test::init_service(create_app(harness.state.clone())).await;

    let req = test::TestRequest::post()
        .uri("/api/send-verification")
        .set_json(json!({ "identity": "visitor@example.com" }))
        .to_request();
    let resp = test::call_service(&app, req).await;

    // Identical status and body to the admin path; only the side effects
    // differ.
    assert_eq!(resp.status(), StatusCode::OK);
    let body: serde_json::Value = test::read_body_json(resp).await;
    assert_eq!(body["message"], GENERIC_ACK);

    assert_eq!(harness.messenger.delivery_count(), 0);
    assert_eq!(harness.code_repository.row_count(), 0);
}

#[actix_rt::test]
async fn send_verification_rejects_malformed_identity() {
    let harness = harness();
    let app = test::init_service(create_app(harness.state.clone())).await;

    let req = test::TestRequest::post()
        .uri("/api/send-verification")
        .set_json(json!({ "identity": "not an identity" }))
        .to_request();
    let resp = test::call_service(&app, req).await;

    assert_eq!(resp.status(), StatusCode::BAD_REQUEST);
    assert_eq!(harness.messenger.delivery_count(), 0);
}

#[actix_rt::test]
async fn send_verification_maps_delivery_failure_to_502() {
    let harness = harness_with(true, false);
    let app = test::init_service(create_app(harness.state.clone())).await;

    let req = test::TestRequest::post()
        .uri("/api/send-verification")
        .set_json(json!({ "identity": ADMIN }))
        .to_request();
    let resp = test::call_service(&app, req).await;

    assert_eq!(resp.status(), StatusCode::BAD_GATEWAY);
    // The persisted row is not rolled back on delivery failure.
    assert_eq!(harness.code_repository.row_count(), 1);
}

#[actix_rt::test]
async fn send_verification_maps_storage_failure_to_500() {
    let harness = harness_with(false, true);
    let app = test::init_service(create_app(harness.state.clone())).await;

    let req = test::TestRequest::post()
        .uri("/api/send-verification")
        .set_json(json!({ "identity": ADMIN }))
        .to_request();
    let resp = test::call_service(&app, req).await;

    assert_eq!(resp.status(), StatusCode::INTERNAL_SERVER_ERROR);
    assert_eq!(harness.messenger.delivery_count(), 0);
}

#[actix_rt::test]
async fn verify_code_round_trip_issues_working_token() {
    let harness = harness();
    let app = test::init_service(create_app(harness.state.clone())).await;

    let req = test::TestRequest::post()
        .uri("/api/send-verification")
        .set_json(json!({ "identity": ADMIN }))
        .to_request();
    test::call_service(&app, req).await;
    let code = harness.messenger.last_code_for(ADMIN).unwrap();

    let req = test::TestRequest::post()
        .uri("/api/verify-code")
        .set_json(json!({ "identity": ADMIN, "code": code }))
        .to_request();
    let resp = test::call_service(&app, req).await;

    assert_eq!(resp.status(), StatusCode::OK);
    assert_eq!(
        resp.headers().get("X-Verified-Identity").unwrap(),
        ADMIN
    );
    let body: serde_json::Value = test::read_body_json(resp).await;
    assert_eq!(body["message"], "Verification successful");

    // The token is accepted by the issuer and asserts the admin identity.
    let token = body["token"].as_str().unwrap();
    let claims = harness.tokens.verify(token).unwrap();
    assert_eq!(claims.identity(), ADMIN);

    // The code was consumed.
    assert_eq!(harness.code_repository.row_count(), 0);

    // And the token opens the guarded surface.
    let req = test::TestRequest::get()
        .uri("/api/contacts")
        .insert_header(("Authorization", format!("Bearer {}", token)))
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::OK);
}

#[actix_rt::test]
async fn verify_code_is_single_use() {
    let harness = harness();
    let app = test::init_service(create_app(harness.state.clone())).await;

    let req = test::TestRequest::post()
        .uri("/api/send-verification")
        .set_json(json!({ "identity": ADMIN }))
        .to_request();
    test::call_service(&app, req).await;
    let code = harness.messenger.last_code_for(ADMIN).unwrap();

    let req = test::TestRequest::post()
        .uri("/api/verify-code")
        .set_json(json!({ "identity": ADMIN, "code": code.clone() }))
        .to_request();
    let first = test::call_service(&app, req).await;
    assert_eq!(first.status(), StatusCode::OK);

    let req = test::TestRequest::post()
        .uri("/api/verify-code")
        .set_json(json!({ "identity": ADMIN, "code": code }))
        .to_request();
    let second = test::call_service(&app, req).await;
    assert_eq!(second.status(), StatusCode::NOT_FOUND);
}

#[actix_rt::test]
async fn verify_code_rejects_non_admin_with_403() {
    let harness = harness();
    let app = test::init_service(create_app(harness.state.clone())).await;

    let req = test::TestRequest::post()
        .uri("/api/verify-code")
        .set_json(json!({ "identity": "visitor@example.com", "code": "123456" }))
        .to_request();
    let resp = test::call_service(&app, req).await;

    assert_eq!(resp.status(), StatusCode::FORBIDDEN);
    let body: serde_json::Value = test::read_body_json(resp).await;
    assert_eq!(body["error"], "Unauthorized");
}

#[actix_rt::test]
async fn verify_code_without_request_is_404() {
    let harness = harness();
    let app = test::init_service(create_app(harness.state.clone())).await;

    let req = test::TestRequest::post()
        .uri("/api/verify-code")
        .set_json(json!({ "identity": ADMIN, "code": "123456" }))
        .to_request();
    let resp = test::call_service(&app, req).await;

    assert_eq!(resp.status(), StatusCode::NOT_FOUND);
    let body: serde_json::Value = test::read_body_json(resp).await;
    assert_eq!(body["error"], "Invalid or expired verification code");
}

#[actix_rt::test]
async fn verify_code_mismatch_leaves_code_usable() {
    let harness = harness();
    let app = test::init_service(create_app(harness.state.clone())).await;

    let req = test::TestRequest::post()
        .uri("/api/send-verification")
        .set_json(json!({ "identity": ADMIN }))
        .to_request();
    test::call_service(&app, req).await;
    let code = harness.messenger.last_code_for(ADMIN).unwrap();
    let wrong = if code == "000000" { "000001" } else { "000000" };

    let req = test::TestRequest::post()
        .uri("/api/verify-code")
        .set_json(json!({ "identity": ADMIN, "code": wrong }))
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::FORBIDDEN);
    let body: serde_json::Value = test::read_body_json(resp).await;
    assert_eq!(body["error"], "Invalid verification code");

    // No lockout: the stored code still works.
    let req = test::TestRequest::post()
        .uri("/api/verify-code")
        .set_json(json!({ "identity": ADMIN, "code": code }))
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::OK);
}

#[actix_rt::test]
async fn verify_code_rejects_expired_code() {
    let harness = harness();
    let app = test::init_service(create_app(harness.state.clone())).await;

    harness
        .code_repository
        .seed(VerificationCode::new_with_ttl(ADMIN, "314159", 0));
    tokio::time::sleep(std::time::Duration::from_millis(10)).await;

    let req = test::TestRequest::post()
        .uri("/api/verify-code")
        .set_json(json!({ "identity": ADMIN, "code": "314159" }))
        .to_request();
    let resp = test::call_service(&app, req).await;

    assert_eq!(resp.status(), StatusCode::NOT_FOUND);
    // The expired row was cleared opportunistically.
    assert_eq!(harness.code_repository.row_count(), 0);
}

#[actix_rt::test]
async fn verify_code_rejects_missing_fields() {
    let harness = harness();
    let app = test::init_service(create_app(harness.state.clone())).await;

    let req = test::TestRequest::post()
        .uri("/api/verify-code")
        .set_json(json!({ "identity": ADMIN }))
        .to_request();
    let resp = test::call_service(&app, req).await;

    // Body deserialization fails before the handler runs.
    assert_eq!(resp.status(), StatusCode::BAD_REQUEST);
}

#[actix_rt::test]
async fn unknown_route_answers_404_json() {
    let harness = harness();
    let app = test::init_service(create_app(harness.state.clone())).await;

    let req = test::TestRequest::get().uri("/api/nope").to_request();
    let resp = test::call_service(&app, req).await;

    assert_eq!(resp.status(), StatusCode::NOT_FOUND);
    let body: serde_json::Value = test::read_body_json(resp).await;
    assert_eq!(body["error"], "The requested resource was not found");
}
