//! Application configuration loaded from environment variables.
//!
//! Configuration is loaded once at startup into an explicit struct and passed
//! into constructors; nothing reads the environment after boot.
//!
//! ## Variables
//!
//! All optional, with development-friendly defaults:
//!
//! - `DATABASE_URL` - SQLite connection string (default: `sqlite://shortener.db`)
//! - `LISTEN` - Bind address (default: `0.0.0.0:3000`)
//! - `BASE_URL` - Base for constructed short links; when unset the base is
//!   inferred from each request's scheme and Host header
//! - `CODE_SALT` - Secret salt seeding the code generator; changing it
//!   changes every generated code, so set it once and keep it
//! - `RUST_LOG` - Log level (default: `info`)
//! - `LOG_FORMAT` - Log format: `text` or `json` (default: `text`)
//! - `DB_MAX_CONNECTIONS` - Pool size (default: 10)

use anyhow::Result;
use std::env;

/// Development fallback for `CODE_SALT`; the server warns when it is in use.
pub const DEFAULT_CODE_SALT: &str = "dev-secret-salt-change-me";

/// Service configuration loaded from environment variables.
#[derive(Debug, Clone)]
pub struct Config {
    pub database_url: String,
    pub listen_addr: String,
    pub base_url: Option<String>,
    pub code_salt: String,
    pub log_level: String,
    pub log_format: String,
    pub db_max_connections: u32,
}

impl Config {
    /// Loads configuration from environment variables.
    pub fn from_env() -> Result<Self> {
        let database_url =
            env::var("DATABASE_URL").unwrap_or_else(|_| "sqlite://shortener.db".to_string());

        let listen_addr = env::var("LISTEN").unwrap_or_else(|_| "0.0.0.0:3000".to_string());

        let base_url = env::var("BASE_URL")
            .ok()
            .map(|b| b.trim_end_matches('/').to_string())
            .filter(|b| !b.is_empty());

        let code_salt = env::var("CODE_SALT").unwrap_or_else(|_| DEFAULT_CODE_SALT.to_string());

        let log_level = env::var("RUST_LOG").unwrap_or_else(|_| "info".to_string());
        let log_format = env::var("LOG_FORMAT").unwrap_or_else(|_| "text".to_string());

        let db_max_connections = env::var("DB_MAX_CONNECTIONS")
            .ok()
            .and_then(|v| v.parse().ok())
            .unwrap_or(10);

        Ok(Self {
            database_url,
            listen_addr,
            base_url,
            code_salt,
            log_level,
            log_format,
            db_max_connections,
        })
    }
}
