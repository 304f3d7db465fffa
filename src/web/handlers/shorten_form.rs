//! Form submission handler for the HTML shorten flow.

use axum::{
    extract::{Form, State},
    http::{HeaderMap, StatusCode},
    response::{IntoResponse, Response},
};
use serde::Deserialize;

use crate::error::AppError;
use crate::state::AppState;
use crate::utils::base_url::resolve_base_url;
use crate::web::handlers::home::{IndexTemplate, RecentRow, ShortenOutcome};

/// Fields of the shorten form on the home page.
#[derive(Debug, Deserialize)]
pub struct ShortenForm {
    pub url: String,
    pub custom_alias: Option<String>,
}

/// Handles the shorten form and re-renders the home page with the outcome.
///
/// Runs the same underlying operation as `POST /api/shorten`; only the
/// presentation differs. Errors re-render the page with a banner at the
/// matching status (400 invalid URL, 409 alias taken, 500 collision);
/// success renders the new link at 201.
///
/// # Endpoint
///
/// `POST /shorten` (form-encoded `url`, optional `custom_alias`)
pub async fn shorten_form_handler(
    State(state): State<AppState>,
    headers: HeaderMap,
    Form(form): Form<ShortenForm>,
) -> Result<Response, AppError> {
    // Browsers submit the alias field even when empty.
    let alias = form
        .custom_alias
        .as_deref()
        .map(str::trim)
        .filter(|s| !s.is_empty());

    match state.links.shorten(&form.url, alias).await {
        Ok(entry) => {
            let base = resolve_base_url(state.base_url.as_deref(), &headers);
            let short_url = state.links.short_url(&base, &entry.code);
            let recent = state.links.recent().await?;

            let page = IndexTemplate {
                error: None,
                result: Some(ShortenOutcome {
                    code: entry.code,
                    short_url,
                    original_url: entry.original_url,
                }),
                recent: RecentRow::rows(recent),
            };

            Ok((StatusCode::CREATED, page).into_response())
        }
        Err(err) => {
            let recent = state.links.recent().await.unwrap_or_default();

            let page = IndexTemplate {
                error: Some(err.message().to_string()),
                result: None,
                recent: RecentRow::rows(recent),
            };

            Ok((err.status_code(), page).into_response())
        }
    }
}
