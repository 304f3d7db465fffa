//! DTO for the liveness endpoint.

use serde::Serialize;

/// Liveness probe response; always reports `ok` while the process serves.
#[derive(Debug, Serialize)]
pub struct HealthResponse {
    pub status: &'static str,
}
