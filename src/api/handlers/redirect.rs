//! Handler for short link redirects.

use axum::{
    extract::{Path, State},
    http::{StatusCode, header},
    response::IntoResponse,
};

use crate::error::AppError;
use crate::state::AppState;

/// Redirects a short code to its original URL.
///
/// # Endpoint
///
/// `GET /{code}` — registered after all literal routes so it never shadows
/// them.
///
/// Lookup and click accounting are one atomic store operation; if the
/// accounting update fails the redirect is not issued, so the click counter
/// never silently drifts from actual traffic.
///
/// # Errors
///
/// Returns 404 Not Found for an unknown code.
pub async fn redirect_handler(
    State(state): State<AppState>,
    Path(code): Path<String>,
) -> Result<impl IntoResponse, AppError> {
    let target = state.links.follow(&code).await?;

    Ok((StatusCode::FOUND, [(header::LOCATION, target)]))
}
