//! Health check endpoints for container orchestration.
//!
//! Both probes are constant: they only show that the process can answer HTTP.
//! Neither depends on the injected secrets, so a pod with unsynced secrets is
//! still kept alive and routable.

use axum::Json;
use serde::Serialize;

#[derive(Debug, Serialize)]
pub struct ProbeResponse {
    pub status: &'static str,
}

/// Liveness probe handler.
pub async fn health() -> Json<ProbeResponse> {
    Json(ProbeResponse { status: "healthy" })
}

/// Readiness probe handler.
pub async fn ready() -> Json<ProbeResponse> {
    Json(ProbeResponse { status: "ready" })
}
