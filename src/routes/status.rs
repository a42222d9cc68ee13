//! Status and liveness route handlers

use axum::{extract::State, Json};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::AppState;

/// Payload returned by `GET /test`.
#[derive(Debug, Serialize, Deserialize)]
pub struct TestResponse {
    pub mensaje: String,
    pub version: String,
    pub timestamp: DateTime<Utc>,
}

/// Payload returned by `GET /health`.
#[derive(Debug, Serialize, Deserialize)]
pub struct HealthResponse {
    pub status: String,
    pub uptime: u64,
}

/// Liveness acknowledgment handler
pub async fn test(State(state): State<AppState>) -> Json<TestResponse> {
    Json(TestResponse {
        mensaje: "API Its Real funcionando ✅".to_string(),
        version: state.version.clone(),
        timestamp: Utc::now(),
    })
}

/// Health check handler
pub async fn health(State(state): State<AppState>) -> Json<HealthResponse> {
    Json(HealthResponse {
        status: "ok".to_string(),
        uptime: state.started_at.elapsed().as_secs(),
    })
}
