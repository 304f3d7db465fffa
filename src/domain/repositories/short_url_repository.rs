//! Repository trait for short URL data access.

use crate::domain::entities::ShortUrl;
use crate::error::AppError;
use crate::utils::code_generator::CodeGenerator;
use async_trait::async_trait;

/// Repository interface for short URL storage.
///
/// Uniqueness of `code` is enforced by the store, not by callers; races
/// between concurrent requests choosing the same alias resolve at the
/// UNIQUE constraint.
///
/// # Implementations
///
/// - [`crate::infrastructure::persistence::SqliteShortUrlRepository`]
/// - Test mocks available with `cfg(test)`
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait ShortUrlRepository: Send + Sync {
    /// Inserts a new entry with a caller-chosen code.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Conflict`] if the code is already taken; the
    /// failed insert leaves no partial row behind.
    async fn create_with_code(&self, code: &str, original_url: &str)
    -> Result<ShortUrl, AppError>;

    /// Inserts a new entry whose code is derived from its assigned id.
    ///
    /// Runs the two-phase write (placeholder insert, encode, update) inside
    /// a single transaction, so the placeholder code is never observable and
    /// any failure rolls the whole row back.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Internal`] if the generated code collides with an
    /// existing one (possible only against a custom alias, and expected to be
    /// exceedingly rare).
    async fn create_with_generated_code(
        &self,
        original_url: &str,
        generator: &CodeGenerator,
    ) -> Result<ShortUrl, AppError>;

    /// Looks up an entry by code without mutating it.
    async fn find_by_code(&self, code: &str) -> Result<Option<ShortUrl>, AppError>;

    /// Atomically increments `clicks`, sets `last_accessed`, and returns the
    /// updated entry; `Ok(None)` when the code does not exist.
    async fn record_visit(&self, code: &str) -> Result<Option<ShortUrl>, AppError>;

    /// Returns the most recently created entries, newest first.
    async fn recent(&self, limit: i64) -> Result<Vec<ShortUrl>, AppError>;
}
