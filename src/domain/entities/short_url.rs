//! ShortUrl entity representing a code-to-URL mapping.

use chrono::{DateTime, Utc};

/// A stored mapping between a short code and its original URL.
///
/// `id` is assigned by the store and never reused; `code` is globally unique.
/// After creation only `clicks` and `last_accessed` change, and only through
/// redirect bookkeeping.
#[derive(Debug, Clone, PartialEq, sqlx::FromRow)]
pub struct ShortUrl {
    pub id: i64,
    pub code: String,
    pub original_url: String,
    pub created_at: DateTime<Utc>,
    pub clicks: i64,
    pub last_accessed: Option<DateTime<Utc>>,
}
