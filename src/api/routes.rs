//! API route configuration.

use crate::api::handlers::{expand_handler, shorten_handler};
use crate::state::AppState;
use axum::{
    Router,
    routing::{get, post},
};

/// JSON API routes, mounted under `/api`.
///
/// # Endpoints
///
/// - `POST /shorten`       - Create a short link
/// - `GET  /expand/{code}` - Look up a link's metadata
pub fn routes() -> Router<AppState> {
    Router::new()
        .route("/shorten", post(shorten_handler))
        .route("/expand/{code}", get(expand_handler))
}
