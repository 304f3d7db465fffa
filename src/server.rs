//! HTTP server initialization and runtime setup.
//!
//! Handles the database pool, migrations, service wiring, and the Axum
//! server lifecycle including graceful shutdown.

use crate::application::services::LinkService;
use crate::config::{Config, DEFAULT_CODE_SALT};
use crate::infrastructure::persistence::SqliteShortUrlRepository;
use crate::routes::app_router;
use crate::state::AppState;
use crate::utils::code_generator::CodeGenerator;

use anyhow::Result;
use axum::ServiceExt;
use axum::extract::Request;
use sqlx::sqlite::{SqliteConnectOptions, SqlitePoolOptions};
use std::net::SocketAddr;
use std::str::FromStr;
use std::sync::Arc;

/// Runs the HTTP server with the given configuration.
///
/// Initializes:
/// - SQLite connection pool (creating the database file if missing)
/// - Schema migrations
/// - Link service and shared state
/// - Axum HTTP server with ctrl-c shutdown
///
/// # Errors
///
/// Returns an error if the database cannot be opened or migrated, or the
/// listen address cannot be bound.
pub async fn run(config: Config) -> Result<()> {
    let connect_options =
        SqliteConnectOptions::from_str(&config.database_url)?.create_if_missing(true);

    let pool = SqlitePoolOptions::new()
        .max_connections(config.db_max_connections)
        .connect_with(connect_options)
        .await?;
    tracing::info!("Connected to database");

    sqlx::migrate!("./migrations").run(&pool).await?;

    if config.code_salt == DEFAULT_CODE_SALT {
        tracing::warn!("CODE_SALT is the development default; set a real secret in production");
    }

    let repository = Arc::new(SqliteShortUrlRepository::new(Arc::new(pool)));
    let links = Arc::new(LinkService::new(
        repository,
        CodeGenerator::new(&config.code_salt),
    ));

    let state = AppState {
        links,
        base_url: config.base_url.clone(),
    };

    let app = app_router(state);

    let addr: SocketAddr = config.listen_addr.parse()?;
    let listener = tokio::net::TcpListener::bind(addr).await?;
    tracing::info!("Listening on http://{addr}");

    axum::serve(listener, ServiceExt::<Request>::into_make_service(app))
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    Ok(())
}

async fn shutdown_signal() {
    match tokio::signal::ctrl_c().await {
        Ok(()) => tracing::info!("Shutdown signal received"),
        Err(e) => tracing::error!(error = %e, "Failed to listen for shutdown signal"),
    }
}
