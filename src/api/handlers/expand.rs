//! Handler for the JSON expand endpoint.

use axum::{
    Json,
    extract::{Path, State},
};

use crate::api::dto::expand::ExpandResponse;
use crate::error::AppError;
use crate::state::AppState;

/// Returns stored metadata for a short code without mutating it.
///
/// # Endpoint
///
/// `GET /api/expand/{code}`
///
/// # Errors
///
/// Returns 404 Not Found for an unknown code.
pub async fn expand_handler(
    State(state): State<AppState>,
    Path(code): Path<String>,
) -> Result<Json<ExpandResponse>, AppError> {
    let entry = state.links.expand(&code).await?;

    Ok(Json(ExpandResponse::from(entry)))
}
