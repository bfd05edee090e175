use actix_web::{HttpResponse, Responder, get, web};
use serde::Serialize;
use tracing::error;

use crate::db::ContentStore;

/// Health check response
#[derive(Serialize)]
struct HealthResponse {
    status: String,
    storage: String,
    backend: &'static str,
    #[serde(skip_serializing_if = "Option::is_none")]
    error: Option<String>,
}

async fn probe(
    store: &dyn ContentStore,
    ok_status: &str,
    failed_status: &str,
) -> HttpResponse {
    match store.ping().await {
        Ok(()) => HttpResponse::Ok().json(HealthResponse {
            status: ok_status.to_string(),
            storage: "connected".to_string(),
            backend: store.backend_tag(),
            error: None,
        }),
        Err(e) => {
            error!("{} check failed: {:?}", ok_status, e);
            HttpResponse::ServiceUnavailable().json(HealthResponse {
                status: failed_status.to_string(),
                storage: "disconnected".to_string(),
                backend: store.backend_tag(),
                error: Some(format!("Storage error: {}", e)),
            })
        }
    }
}

/// Health check endpoint
///
/// General health check including storage connectivity.
/// Use for load balancers and uptime monitors.
#[get("/health")]
async fn health_check(store: web::Data<dyn ContentStore>) -> impl Responder {
    probe(store.get_ref(), "healthy", "unhealthy").await
}

/// Readiness check endpoint
///
/// Returns 503 while the storage backend is unavailable; the process
/// recovers on its own when it returns.
#[get("/ready")]
async fn readiness_check(store: web::Data<dyn ContentStore>) -> impl Responder {
    probe(store.get_ref(), "ready", "not_ready").await
}

/// Liveness check endpoint
///
/// Simple check that the process is alive. Does not check dependencies.
#[get("/live")]
async fn liveness_check(store: web::Data<dyn ContentStore>) -> impl Responder {
    HttpResponse::Ok().json(HealthResponse {
        status: "alive".to_string(),
        storage: "not_checked".to_string(),
        backend: store.backend_tag(),
        error: None,
    })
}

pub fn health_config(config: &mut web::ServiceConfig) {
    config
        .service(health_check)
        .service(readiness_check)
        .service(liveness_check);
}
