//! Web (HTML) route configuration.

use crate::state::AppState;
use crate::web::handlers::{home_handler, shorten_form_handler, stats_page_handler};
use axum::{
    Router,
    routing::{get, post},
};

/// HTML page routes.
///
/// # Endpoints
///
/// - `GET  /`             - Shorten form plus recent entries
/// - `POST /shorten`      - Form submission, re-renders the page
/// - `GET  /stats/{code}` - Stats page for one entry
pub fn routes() -> Router<AppState> {
    Router::new()
        .route("/", get(home_handler))
        .route("/shorten", post(shorten_form_handler))
        .route("/stats/{code}", get(stats_page_handler))
}
