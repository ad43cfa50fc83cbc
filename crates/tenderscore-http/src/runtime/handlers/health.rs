//! Health check handler

use axum::response::Json;
use std::sync::OnceLock;
use std::time::Instant;

use crate::runtime::types::HealthResponse;

/// Service name reported by the health endpoint.
pub const SERVICE_NAME: &str = "tenderscore";

// Track service start time for uptime calculation
static START_TIME: OnceLock<Instant> = OnceLock::new();

/// Pin the uptime origin; called when the router is built.
pub(crate) fn mark_started() {
    START_TIME.get_or_init(Instant::now);
}

fn get_uptime_seconds() -> u64 {
    START_TIME.get_or_init(Instant::now).elapsed().as_secs()
}

/// GET /health - Liveness check with version info
#[utoipa::path(
    get,
    path = "/health",
    tag = "health",
    responses(
        (status = 200, description = "Service is healthy", body = HealthResponse)
    )
)]
pub async fn health_check() -> Json<HealthResponse> {
    Json(HealthResponse {
        status: "healthy".to_string(),
        service: SERVICE_NAME.to_string(),
        version: env!("CARGO_PKG_VERSION").to_string(),
        timestamp: chrono::Utc::now(),
        uptime_seconds: get_uptime_seconds(),
    })
}
