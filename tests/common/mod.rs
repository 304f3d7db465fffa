#![allow(dead_code)]

use axum_test::TestServer;
use chrono::Utc;
use linkcut::application::services::LinkService;
use linkcut::infrastructure::persistence::SqliteShortUrlRepository;
use linkcut::routes::router;
use linkcut::state::AppState;
use linkcut::utils::code_generator::CodeGenerator;
use sqlx::SqlitePool;
use std::sync::Arc;

pub const TEST_BASE_URL: &str = "http://short.test";
pub const TEST_SALT: &str = "test-salt";

pub fn create_test_state(pool: SqlitePool) -> AppState {
    let repository = Arc::new(SqliteShortUrlRepository::new(Arc::new(pool)));
    let links = Arc::new(LinkService::new(repository, CodeGenerator::new(TEST_SALT)));

    AppState {
        links,
        base_url: Some(TEST_BASE_URL.to_string()),
    }
}

pub fn test_server(pool: SqlitePool) -> TestServer {
    TestServer::new(router(create_test_state(pool))).unwrap()
}

pub async fn insert_short_url(pool: &SqlitePool, code: &str, url: &str) {
    sqlx::query("INSERT INTO short_urls (code, original_url, created_at, clicks) VALUES (?1, ?2, ?3, 0)")
        .bind(code)
        .bind(url)
        .bind(Utc::now())
        .execute(pool)
        .await
        .unwrap();
}

pub async fn clicks_for(pool: &SqlitePool, code: &str) -> i64 {
    sqlx::query_scalar("SELECT clicks FROM short_urls WHERE code = ?1")
        .bind(code)
        .fetch_one(pool)
        .await
        .unwrap()
}

pub async fn row_count(pool: &SqlitePool) -> i64 {
    sqlx::query_scalar("SELECT COUNT(*) FROM short_urls")
        .fetch_one(pool)
        .await
        .unwrap()
}
