//! Handler for the liveness endpoint.

use axum::Json;

use crate::api::dto::health::HealthResponse;

/// Liveness probe.
///
/// # Endpoint
///
/// `GET /healthz` — always `{"status": "ok"}` while the process is serving.
pub async fn healthz_handler() -> Json<HealthResponse> {
    Json(HealthResponse { status: "ok" })
}
