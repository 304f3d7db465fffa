//! Stats page handler.

use askama::Template;
use askama_web::WebTemplate;
use axum::{
    extract::{Path, State},
    http::HeaderMap,
};

use crate::error::AppError;
use crate::state::AppState;
use crate::utils::base_url::resolve_base_url;

/// Template for a single entry's stats page.
///
/// Renders `templates/stats.html`.
#[derive(Template, WebTemplate)]
#[template(path = "stats.html")]
pub struct StatsTemplate {
    pub code: String,
    pub short_url: String,
    pub original_url: String,
    pub clicks: i64,
    pub created_at: String,
    pub last_accessed: Option<String>,
}

/// Renders the stats page for one short code.
///
/// # Endpoint
///
/// `GET /stats/{code}` — 404 if the code is unknown. Read-only.
pub async fn stats_page_handler(
    State(state): State<AppState>,
    headers: HeaderMap,
    Path(code): Path<String>,
) -> Result<StatsTemplate, AppError> {
    let entry = state.links.expand(&code).await?;

    let base = resolve_base_url(state.base_url.as_deref(), &headers);
    let short_url = state.links.short_url(&base, &entry.code);

    Ok(StatsTemplate {
        code: entry.code,
        short_url,
        original_url: entry.original_url,
        clicks: entry.clicks,
        created_at: entry.created_at.format("%Y-%m-%d %H:%M UTC").to_string(),
        last_accessed: entry
            .last_accessed
            .map(|t| t.format("%Y-%m-%d %H:%M UTC").to_string()),
    })
}
