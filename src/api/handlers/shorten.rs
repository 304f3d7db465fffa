//! Handler for the JSON shorten endpoint.

use axum::{Json, extract::State, http::HeaderMap, http::StatusCode};
use validator::Validate;

use crate::api::dto::shorten::{ShortenRequest, ShortenResponse};
use crate::error::AppError;
use crate::state::AppState;
use crate::utils::base_url::resolve_base_url;

/// Creates a shortened URL.
///
/// # Endpoint
///
/// `POST /api/shorten` with body `{"url": "...", "custom_alias": "..."}`
/// (`custom_alias` optional).
///
/// # Response
///
/// 201 Created with `{code, short_url, original_url}`.
///
/// # Errors
///
/// - 400 for an invalid URL or malformed alias
/// - 409 when the alias is already taken
/// - 500 on a generated-code collision (safe to retry)
pub async fn shorten_handler(
    State(state): State<AppState>,
    headers: HeaderMap,
    Json(payload): Json<ShortenRequest>,
) -> Result<(StatusCode, Json<ShortenResponse>), AppError> {
    payload.validate()?;

    let entry = state
        .links
        .shorten(&payload.url, payload.custom_alias.as_deref())
        .await?;

    let base = resolve_base_url(state.base_url.as_deref(), &headers);
    let short_url = state.links.short_url(&base, &entry.code);

    Ok((
        StatusCode::CREATED,
        Json(ShortenResponse {
            code: entry.code,
            short_url,
            original_url: entry.original_url,
        }),
    ))
}
