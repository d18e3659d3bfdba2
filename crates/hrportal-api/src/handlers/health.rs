//! Health check handlers.

use axum::Json;
use chrono::Utc;

use crate::dto::response::HealthResponse;

/// GET /health
pub async fn health() -> Json<HealthResponse> {
    Json(HealthResponse {
        status: "OK".to_string(),
        message: "HR portal server is running".to_string(),
        timestamp: Utc::now(),
    })
}

/// GET /api/auth/health
pub async fn auth_health() -> Json<HealthResponse> {
    Json(HealthResponse {
        status: "OK".to_string(),
        message: "Auth routes are working".to_string(),
        timestamp: Utc::now(),
    })
}
