//! SQLite implementation of the short URL repository.

use async_trait::async_trait;
use chrono::Utc;
use serde_json::json;
use sqlx::SqlitePool;
use std::sync::Arc;

use crate::domain::entities::ShortUrl;
use crate::domain::repositories::ShortUrlRepository;
use crate::error::{AppError, is_unique_violation};
use crate::utils::code_generator::CodeGenerator;

const COLUMNS: &str = "id, code, original_url, created_at, clicks, last_accessed";

/// SQLite repository for short URL storage and retrieval.
///
/// All statements use bound parameters; the `code` UNIQUE constraint is the
/// synchronization point for concurrent creations.
pub struct SqliteShortUrlRepository {
    pool: Arc<SqlitePool>,
}

impl SqliteShortUrlRepository {
    pub fn new(pool: Arc<SqlitePool>) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl ShortUrlRepository for SqliteShortUrlRepository {
    async fn create_with_code(
        &self,
        code: &str,
        original_url: &str,
    ) -> Result<ShortUrl, AppError> {
        let sql = format!(
            "INSERT INTO short_urls (code, original_url, created_at, clicks) \
             VALUES (?1, ?2, ?3, 0) RETURNING {COLUMNS}"
        );

        sqlx::query_as::<_, ShortUrl>(&sql)
            .bind(code)
            .bind(original_url)
            .bind(Utc::now())
            .fetch_one(self.pool.as_ref())
            .await
            .map_err(|e| {
                if is_unique_violation(&e) {
                    AppError::conflict("Alias already taken", json!({ "code": code }))
                } else {
                    AppError::from(e)
                }
            })
    }

    async fn create_with_generated_code(
        &self,
        original_url: &str,
        generator: &CodeGenerator,
    ) -> Result<ShortUrl, AppError> {
        let mut tx = self.pool.begin().await?;

        // The final code is a function of the row id, which only exists after
        // the insert. A per-request sentinel keeps the UNIQUE constraint
        // satisfied while the row is transient; the transaction guarantees no
        // client ever reads it.
        let sentinel = format!("_pending_{:016x}", rand::random::<u64>());

        let id: i64 = sqlx::query_scalar(
            "INSERT INTO short_urls (code, original_url, created_at, clicks) \
             VALUES (?1, ?2, ?3, 0) RETURNING id",
        )
        .bind(&sentinel)
        .bind(original_url)
        .bind(Utc::now())
        .fetch_one(&mut *tx)
        .await?;

        let code = generator.encode(id);

        let sql = format!("UPDATE short_urls SET code = ?1 WHERE id = ?2 RETURNING {COLUMNS}");
        let entry = sqlx::query_as::<_, ShortUrl>(&sql)
            .bind(&code)
            .bind(id)
            .fetch_one(&mut *tx)
            .await
            .map_err(|e| {
                if is_unique_violation(&e) {
                    tracing::warn!(id, code, "generated code collided with an existing entry");
                    AppError::internal(
                        "Short code generation collided, please retry",
                        json!({ "code": code }),
                    )
                } else {
                    AppError::from(e)
                }
            })?;

        tx.commit().await?;

        Ok(entry)
    }

    async fn find_by_code(&self, code: &str) -> Result<Option<ShortUrl>, AppError> {
        let sql = format!("SELECT {COLUMNS} FROM short_urls WHERE code = ?1");

        let entry = sqlx::query_as::<_, ShortUrl>(&sql)
            .bind(code)
            .fetch_optional(self.pool.as_ref())
            .await?;

        Ok(entry)
    }

    async fn record_visit(&self, code: &str) -> Result<Option<ShortUrl>, AppError> {
        let sql = format!(
            "UPDATE short_urls SET clicks = clicks + 1, last_accessed = ?1 \
             WHERE code = ?2 RETURNING {COLUMNS}"
        );

        let entry = sqlx::query_as::<_, ShortUrl>(&sql)
            .bind(Utc::now())
            .bind(code)
            .fetch_optional(self.pool.as_ref())
            .await?;

        Ok(entry)
    }

    async fn recent(&self, limit: i64) -> Result<Vec<ShortUrl>, AppError> {
        let sql = format!(
            "SELECT {COLUMNS} FROM short_urls ORDER BY created_at DESC, id DESC LIMIT ?1"
        );

        let entries = sqlx::query_as::<_, ShortUrl>(&sql)
            .bind(limit)
            .fetch_all(self.pool.as_ref())
            .await?;

        Ok(entries)
    }
}
