//! # linkcut
//!
//! A small URL shortening service built with Axum and SQLite: submit a long
//! URL, get a short code, and redirect visitors while counting clicks.
//!
//! ## Architecture
//!
//! The crate follows a layered structure:
//!
//! - **Domain** ([`domain`]) - The `ShortUrl` entity and repository trait
//! - **Application** ([`application`]) - `LinkService` orchestration
//! - **Infrastructure** ([`infrastructure`]) - SQLite persistence via sqlx
//! - **API** ([`api`]) - JSON endpoints, redirect, and liveness probe
//! - **Web** ([`web`]) - Askama-rendered HTML form and stats pages
//!
//! Both presentation layers call the same service, so the HTML form and the
//! JSON API share one shorten/lookup code path.
//!
//! ## Quick Start
//!
//! ```bash
//! # Optional; everything has a development default
//! export DATABASE_URL="sqlite://shortener.db"
//! export CODE_SALT="some-long-random-secret"
//!
//! cargo run
//! ```
//!
//! ## Configuration
//!
//! Loaded from environment variables into [`config::Config`]; see [`config`]
//! for available options.

pub mod api;
pub mod application;
pub mod domain;
pub mod error;
pub mod infrastructure;
pub mod state;
pub mod utils;
pub mod web;

pub mod config;
pub mod server;

pub mod routes;

pub use error::AppError;
pub use state::AppState;

/// Commonly used types for external consumers.
///
/// Re-exports frequently used types to simplify imports for library users
/// and integration tests.
pub mod prelude {
    pub use crate::application::services::LinkService;
    pub use crate::domain::entities::ShortUrl;
    pub use crate::error::AppError;
    pub use crate::state::AppState;
}
