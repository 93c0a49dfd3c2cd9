//! Liveness endpoint.

use axum::Json;
use serde::{Deserialize, Serialize};

/// `/healthz` body.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct HealthResponse {
    /// Always `ok` while the process serves requests.
    pub status: String,
    /// Build identifier.
    pub build: String,
}

pub(crate) async fn healthz() -> Json<HealthResponse> {
    Json(HealthResponse {
        status: "ok".to_string(),
        build: aeas_telemetry::build_sha().to_string(),
    })
}
