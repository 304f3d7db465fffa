mod common;

use axum::http::StatusCode;
use sqlx::SqlitePool;

#[sqlx::test]
async fn test_home_page_renders_form(pool: SqlitePool) {
    let server = common::test_server(pool);

    let response = server.get("/").await;

    response.assert_status_ok();

    let html = response.text();
    assert!(html.contains("action=\"/shorten\""));
    assert!(html.contains("name=\"url\""));
    assert!(html.contains("name=\"custom_alias\""));
}

#[sqlx::test]
async fn test_home_page_lists_recent_links(pool: SqlitePool) {
    common::insert_short_url(&pool, "abc123", "https://example.com/one").await;
    common::insert_short_url(&pool, "def456", "https://example.com/two").await;
    let server = common::test_server(pool);

    let response = server.get("/").await;

    response.assert_status_ok();

    let html = response.text();
    assert!(html.contains("abc123"));
    assert!(html.contains("def456"));
    assert!(html.contains("https://example.com/one"));
}

#[sqlx::test]
async fn test_shorten_form_success_renders_short_url(pool: SqlitePool) {
    let server = common::test_server(pool.clone());

    let response = server
        .post("/shorten")
        .form(&[("url", "https://example.com/page"), ("custom_alias", "")])
        .await;

    response.assert_status(StatusCode::CREATED);

    let html = response.text();
    assert!(html.contains(common::TEST_BASE_URL));
    assert!(html.contains("https://example.com/page"));

    // Empty alias must fall through to a generated code, not a "" alias.
    assert_eq!(common::row_count(&pool).await, 1);
    let code: String = sqlx::query_scalar("SELECT code FROM short_urls")
        .fetch_one(&pool)
        .await
        .unwrap();
    assert!(code.len() >= 6);
}

#[sqlx::test]
async fn test_shorten_form_with_alias(pool: SqlitePool) {
    let server = common::test_server(pool);

    let response = server
        .post("/shorten")
        .form(&[
            ("url", "https://example.com"),
            ("custom_alias", "promo-2024"),
        ])
        .await;

    response.assert_status(StatusCode::CREATED);
    assert!(response.text().contains("promo-2024"));
}

#[sqlx::test]
async fn test_shorten_form_invalid_url_shows_banner(pool: SqlitePool) {
    let server = common::test_server(pool.clone());

    let response = server.post("/shorten").form(&[("url", "not-a-url")]).await;

    response.assert_status(StatusCode::BAD_REQUEST);
    assert!(response.text().contains("banner-error"));
    assert_eq!(common::row_count(&pool).await, 0);
}

#[sqlx::test]
async fn test_shorten_form_alias_conflict_shows_banner(pool: SqlitePool) {
    common::insert_short_url(&pool, "taken", "https://example.com").await;
    let server = common::test_server(pool);

    let response = server
        .post("/shorten")
        .form(&[("url", "https://other.example.com"), ("custom_alias", "taken")])
        .await;

    response.assert_status(StatusCode::CONFLICT);
    assert!(response.text().contains("banner-error"));
}

#[sqlx::test]
async fn test_stats_page_shows_counts(pool: SqlitePool) {
    common::insert_short_url(&pool, "abc123", "https://example.com/tracked").await;
    let server = common::test_server(pool);

    server.get("/abc123").await.assert_status(StatusCode::FOUND);

    let response = server.get("/stats/abc123").await;

    response.assert_status_ok();

    let html = response.text();
    assert!(html.contains("abc123"));
    assert!(html.contains("https://example.com/tracked"));
    assert!(html.contains(&format!("{}/abc123", common::TEST_BASE_URL)));
}

#[sqlx::test]
async fn test_stats_page_unknown_code_is_404(pool: SqlitePool) {
    let server = common::test_server(pool);

    let response = server.get("/stats/missing").await;

    response.assert_status(StatusCode::NOT_FOUND);
}

#[sqlx::test]
async fn test_static_assets_are_served(pool: SqlitePool) {
    let server = common::test_server(pool.clone());

    server.get("/static/style.css").await.assert_status_ok();
    server.get("/static/app.js").await.assert_status_ok();
}

#[sqlx::test]
async fn test_success_banner_has_copy_button(pool: SqlitePool) {
    let server = common::test_server(pool);

    let response = server
        .post("/shorten")
        .form(&[("url", "https://example.com/page")])
        .await;

    response.assert_status(StatusCode::CREATED);

    let html = response.text();
    assert!(html.contains("copyText('#short-url'"));
    assert!(html.contains("/static/app.js"));
}
