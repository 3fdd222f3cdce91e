//! Health check handler

use axum::Json;
use serde::Serialize;

/// Health check response
#[derive(Serialize)]
pub struct HealthResponse {
    /// Service status
    pub status: &'static str,
    /// Server version from Cargo.toml
    pub version: &'static str,
    /// Service name
    pub service: &'static str,
}

/// GET /health - health check endpoint
///
/// Used for monitoring and load balancer health checks.
pub async fn health() -> Json<HealthResponse> {
    Json(HealthResponse {
        status: "healthy",
        version: env!("CARGO_PKG_VERSION"),
        service: "campus-server",
    })
}
