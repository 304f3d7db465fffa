//! DTOs for the expand endpoint.

use crate::domain::entities::ShortUrl;
use chrono::{DateTime, Utc};
use serde::Serialize;

/// Metadata for a single short link, returned without mutating it.
#[derive(Debug, Serialize)]
pub struct ExpandResponse {
    pub code: String,
    pub original_url: String,
    pub clicks: i64,
    pub created_at: DateTime<Utc>,
    pub last_accessed: Option<DateTime<Utc>>,
}

impl From<ShortUrl> for ExpandResponse {
    fn from(entry: ShortUrl) -> Self {
        Self {
            code: entry.code,
            original_url: entry.original_url,
            clicks: entry.clicks,
            created_at: entry.created_at,
            last_accessed: entry.last_accessed,
        }
    }
}
