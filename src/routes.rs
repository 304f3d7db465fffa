//! Top-level router configuration combining API, web, and redirect routes.
//!
//! # Route Structure
//!
//! - `GET  /`             - Shorten form plus recent entries (HTML)
//! - `POST /shorten`      - Form submission (HTML)
//! - `GET  /stats/{code}` - Stats page (HTML)
//! - `GET  /healthz`      - Liveness probe
//! - `/api/*`             - JSON API
//! - `/static/*`          - Static assets
//! - `GET  /{code}`       - Short link redirect; the wildcard never shadows
//!   the literal routes above because axum's matcher prefers them

use crate::api;
use crate::api::handlers::{healthz_handler, redirect_handler};
use crate::state::AppState;
use crate::web;
use axum::Router;
use axum::routing::get;
use tower::Layer;
use tower_http::LatencyUnit;
use tower_http::classify::{ServerErrorsAsFailures, SharedClassifier};
use tower_http::normalize_path::{NormalizePath, NormalizePathLayer};
use tower_http::services::ServeDir;
use tower_http::trace::{DefaultMakeSpan, DefaultOnResponse, TraceLayer};
use tracing::Level;

/// Constructs the application router without the outer path-normalization
/// wrapper; integration tests mount this directly.
pub fn router(state: AppState) -> Router {
    Router::new()
        .merge(web::routes::routes())
        .route("/healthz", get(healthz_handler))
        .nest("/api", api::routes::routes())
        .nest_service("/static", ServeDir::new("static"))
        .route("/{code}", get(redirect_handler))
        .with_state(state)
        .layer(trace_layer())
}

/// The full application service with trailing-slash normalization.
pub fn app_router(state: AppState) -> NormalizePath<Router> {
    NormalizePathLayer::trim_trailing_slash().layer(router(state))
}

/// Request/response tracing: an INFO span per request, response status and
/// latency on completion.
fn trace_layer() -> TraceLayer<SharedClassifier<ServerErrorsAsFailures>> {
    TraceLayer::new_for_http()
        .make_span_with(DefaultMakeSpan::new().level(Level::INFO))
        .on_response(
            DefaultOnResponse::new()
                .level(Level::INFO)
                .latency_unit(LatencyUnit::Millis),
        )
}
