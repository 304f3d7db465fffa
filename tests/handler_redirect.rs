mod common;

use axum::http::StatusCode;
use chrono::{DateTime, Utc};
use sqlx::SqlitePool;

#[sqlx::test]
async fn test_redirect_issues_302_to_original_url(pool: SqlitePool) {
    common::insert_short_url(&pool, "abc123", "https://example.com/landing").await;
    let server = common::test_server(pool);

    let response = server.get("/abc123").await;

    response.assert_status(StatusCode::FOUND);
    assert_eq!(
        response.headers().get("location").unwrap(),
        "https://example.com/landing"
    );
}

#[sqlx::test]
async fn test_redirect_increments_clicks_by_one(pool: SqlitePool) {
    common::insert_short_url(&pool, "abc123", "https://example.com").await;
    let server = common::test_server(pool.clone());

    server.get("/abc123").await.assert_status(StatusCode::FOUND);
    assert_eq!(common::clicks_for(&pool, "abc123").await, 1);

    server.get("/abc123").await.assert_status(StatusCode::FOUND);
    assert_eq!(common::clicks_for(&pool, "abc123").await, 2);
}

#[sqlx::test]
async fn test_redirect_sets_last_accessed(pool: SqlitePool) {
    common::insert_short_url(&pool, "abc123", "https://example.com").await;
    let server = common::test_server(pool.clone());

    let before = Utc::now();
    server.get("/abc123").await.assert_status(StatusCode::FOUND);

    let last_accessed: Option<DateTime<Utc>> =
        sqlx::query_scalar("SELECT last_accessed FROM short_urls WHERE code = ?1")
            .bind("abc123")
            .fetch_one(&pool)
            .await
            .unwrap();

    assert!(last_accessed.unwrap() >= before);
}

#[sqlx::test]
async fn test_redirect_advances_last_accessed(pool: SqlitePool) {
    common::insert_short_url(&pool, "abc123", "https://example.com").await;
    let server = common::test_server(pool.clone());

    server.get("/abc123").await.assert_status(StatusCode::FOUND);
    let first: Option<DateTime<Utc>> =
        sqlx::query_scalar("SELECT last_accessed FROM short_urls WHERE code = ?1")
            .bind("abc123")
            .fetch_one(&pool)
            .await
            .unwrap();

    server.get("/abc123").await.assert_status(StatusCode::FOUND);
    let second: Option<DateTime<Utc>> =
        sqlx::query_scalar("SELECT last_accessed FROM short_urls WHERE code = ?1")
            .bind("abc123")
            .fetch_one(&pool)
            .await
            .unwrap();

    assert!(second.unwrap() >= first.unwrap());
}

#[sqlx::test]
async fn test_redirect_unknown_code_is_404_and_mutates_nothing(pool: SqlitePool) {
    common::insert_short_url(&pool, "abc123", "https://example.com").await;
    let server = common::test_server(pool.clone());

    let response = server.get("/does-not-exist").await;

    response.assert_status(StatusCode::NOT_FOUND);
    assert_eq!(common::clicks_for(&pool, "abc123").await, 0);
    assert_eq!(common::row_count(&pool).await, 1);
}

#[sqlx::test]
async fn test_redirect_does_not_shadow_literal_routes(pool: SqlitePool) {
    common::insert_short_url(&pool, "abc123", "https://example.com").await;
    let server = common::test_server(pool);

    // `/healthz` must hit the probe, not the redirect wildcard.
    let response = server.get("/healthz").await;
    response.assert_status_ok();
}
