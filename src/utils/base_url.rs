//! Base URL resolution for constructing short links.

use axum::http::{HeaderMap, header};

/// Resolves the base URL used to build fully qualified short links.
///
/// The configured override (`BASE_URL`) wins when present; otherwise the base
/// is inferred from the request, using `X-Forwarded-Proto` for the scheme
/// (default `http`) and the `Host` header. A trailing slash is stripped so
/// callers can append `/{code}` directly.
pub fn resolve_base_url(configured: Option<&str>, headers: &HeaderMap) -> String {
    if let Some(base) = configured {
        return base.trim_end_matches('/').to_string();
    }

    let scheme = headers
        .get("x-forwarded-proto")
        .and_then(|v| v.to_str().ok())
        .unwrap_or("http");

    let host = headers
        .get(header::HOST)
        .and_then(|v| v.to_str().ok())
        .unwrap_or("localhost:3000");

    format!("{scheme}://{host}")
}
