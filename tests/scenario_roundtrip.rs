//! End-to-end pass over the whole surface: shorten a URL through the API,
//! expand it, follow the redirect, and confirm the stats reflect the visit.

mod common;

use axum::http::StatusCode;
use serde_json::json;
use sqlx::SqlitePool;

#[sqlx::test]
async fn test_shorten_expand_redirect_roundtrip(pool: SqlitePool) {
    let server = common::test_server(pool);

    // Shorten.
    let created = server
        .post("/api/shorten")
        .json(&json!({ "url": "https://example.com/article?id=42" }))
        .await;
    created.assert_status(StatusCode::CREATED);

    let body = created.json::<serde_json::Value>();
    let code = body["code"].as_str().unwrap().to_string();
    assert_eq!(
        body["short_url"],
        format!("{}/{code}", common::TEST_BASE_URL)
    );

    // Expand is read-only.
    let expanded = server.get(&format!("/api/expand/{code}")).await;
    expanded.assert_status_ok();
    let expanded = expanded.json::<serde_json::Value>();
    assert_eq!(expanded["original_url"], "https://example.com/article?id=42");
    assert_eq!(expanded["clicks"], 0);

    // Follow the redirect twice.
    for _ in 0..2 {
        let redirect = server.get(&format!("/{code}")).await;
        redirect.assert_status(StatusCode::FOUND);
        assert_eq!(
            redirect.headers().get("location").unwrap(),
            "https://example.com/article?id=42"
        );
    }

    // Stats reflect both visits.
    let expanded = server.get(&format!("/api/expand/{code}")).await;
    let expanded = expanded.json::<serde_json::Value>();
    assert_eq!(expanded["clicks"], 2);
    assert!(expanded["last_accessed"].is_string());

    let stats = server.get(&format!("/stats/{code}")).await;
    stats.assert_status_ok();
    assert!(stats.text().contains(&code));
}
