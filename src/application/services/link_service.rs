//! Shortening, lookup, and redirect orchestration.
//!
//! Every HTTP surface (HTML form, JSON API, redirect, stats pages) calls
//! through this service, so validation and persistence behave identically
//! regardless of presentation.

use std::sync::Arc;

use crate::domain::entities::ShortUrl;
use crate::domain::repositories::ShortUrlRepository;
use crate::error::AppError;
use crate::utils::code_generator::{CodeGenerator, validate_alias};
use crate::utils::url_guard::ensure_public_http_url;
use serde_json::json;

/// How many entries the home page lists.
const RECENT_LIMIT: i64 = 10;

/// Service for creating, expanding, and following short links.
pub struct LinkService {
    repo: Arc<dyn ShortUrlRepository>,
    generator: CodeGenerator,
}

impl LinkService {
    pub fn new(repo: Arc<dyn ShortUrlRepository>, generator: CodeGenerator) -> Self {
        Self { repo, generator }
    }

    /// Creates a short link for `url`, with a custom alias or a generated code.
    ///
    /// The original URL is stored verbatim; expanding the code later returns
    /// it byte-identical.
    ///
    /// # Errors
    ///
    /// - [`AppError::Validation`] for a non-public URL or malformed alias,
    ///   with no mutation
    /// - [`AppError::Conflict`] when the alias is already taken
    /// - [`AppError::Internal`] when a generated code collides (rare; safe
    ///   to retry since the next attempt gets a fresh id)
    pub async fn shorten(
        &self,
        url: &str,
        custom_alias: Option<&str>,
    ) -> Result<ShortUrl, AppError> {
        ensure_public_http_url(url)
            .map_err(|e| AppError::bad_request(e.to_string(), json!({ "field": "url" })))?;

        match custom_alias {
            Some(alias) => {
                validate_alias(alias)?;
                self.repo.create_with_code(alias, url).await
            }
            None => {
                self.repo
                    .create_with_generated_code(url, &self.generator)
                    .await
            }
        }
    }

    /// Looks up an entry by code without mutating it.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::NotFound`] for an unknown code.
    pub async fn expand(&self, code: &str) -> Result<ShortUrl, AppError> {
        self.repo
            .find_by_code(code)
            .await?
            .ok_or_else(|| AppError::not_found("Short code not found", json!({ "code": code })))
    }

    /// Records a visit and returns the redirect target.
    ///
    /// Click accounting and lookup are one atomic store operation; when the
    /// update fails no redirect target is returned, so clicks are never
    /// silently lost.
    pub async fn follow(&self, code: &str) -> Result<String, AppError> {
        let entry = self
            .repo
            .record_visit(code)
            .await?
            .ok_or_else(|| AppError::not_found("Short code not found", json!({ "code": code })))?;

        Ok(entry.original_url)
    }

    /// The most recently created entries, newest first.
    pub async fn recent(&self) -> Result<Vec<ShortUrl>, AppError> {
        self.repo.recent(RECENT_LIMIT).await
    }

    /// Builds the fully qualified short URL for a code.
    pub fn short_url(&self, base_url: &str, code: &str) -> String {
        format!("{}/{}", base_url.trim_end_matches('/'), code)
    }
}
