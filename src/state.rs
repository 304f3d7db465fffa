//! Shared application state.

use std::sync::Arc;

use crate::application::services::LinkService;

/// State injected into all handlers.
#[derive(Clone)]
pub struct AppState {
    pub links: Arc<LinkService>,
    /// Configured base URL override; when `None` the base is inferred from
    /// each request's Host header.
    pub base_url: Option<String>,
}
