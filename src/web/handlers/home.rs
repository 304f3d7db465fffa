//! Home page handler: shorten form plus recent entries.

use askama::Template;
use askama_web::WebTemplate;
use axum::extract::State;

use crate::domain::entities::ShortUrl;
use crate::error::AppError;
use crate::state::AppState;

/// Template for the home page.
///
/// Renders `templates/index.html` with the shorten form, an optional result
/// or error banner, and the most recent entries.
#[derive(Template, WebTemplate)]
#[template(path = "index.html")]
pub struct IndexTemplate {
    pub error: Option<String>,
    pub result: Option<ShortenOutcome>,
    pub recent: Vec<RecentRow>,
}

/// A freshly created short link, shown in the success banner.
pub struct ShortenOutcome {
    pub code: String,
    pub short_url: String,
    pub original_url: String,
}

/// One row of the recent-entries table.
pub struct RecentRow {
    pub code: String,
    pub original_url: String,
    pub clicks: i64,
    pub created_at: String,
}

impl RecentRow {
    pub fn rows(entries: Vec<ShortUrl>) -> Vec<Self> {
        entries
            .into_iter()
            .map(|e| Self {
                code: e.code,
                original_url: e.original_url,
                clicks: e.clicks,
                created_at: e.created_at.format("%Y-%m-%d %H:%M UTC").to_string(),
            })
            .collect()
    }
}

/// Renders the home page with the 10 most recently created entries.
///
/// # Endpoint
///
/// `GET /`
pub async fn home_handler(State(state): State<AppState>) -> Result<IndexTemplate, AppError> {
    let recent = state.links.recent().await?;

    Ok(IndexTemplate {
        error: None,
        result: None,
        recent: RecentRow::rows(recent),
    })
}
