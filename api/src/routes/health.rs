use actix_web::{web, HttpResponse};

use lark_infra::DatabasePool;

/// Handler for GET /health
///
/// Process liveness only; answers as long as the server is accepting
/// requests.
pub async fn health() -> HttpResponse {
    HttpResponse::Ok().json(serde_json::json!({
        "status": "healthy",
        "service": "larkspur-api",
        "version": env!("CARGO_PKG_VERSION"),
        "timestamp": chrono::Utc::now().to_rfc3339(),
    }))
}

/// Handler for GET /ready
///
/// Readiness includes a database round trip when a pool is registered.
/// Test apps run without a pool; readiness then only proves the process
/// serves requests.
pub async fn ready(pool: Option<web::Data<DatabasePool>>) -> HttpResponse {
    if let Some(pool) = pool {
        match pool.health_check().await {
            Ok(true) => {}
            Ok(false) => {
                tracing::warn!("Readiness probe got an unexpected result from the database");
                return HttpResponse::ServiceUnavailable().json(serde_json::json!({
                    "status": "unavailable",
                }));
            }
            Err(error) => {
                tracing::warn!(error = %error, "Readiness check failed against the database");
                return HttpResponse::ServiceUnavailable().json(serde_json::json!({
                    "status": "unavailable",
                }));
            }
        }
    }

    HttpResponse::Ok().json(serde_json::json!({
        "status": "ready",
    }))
}
