//! Request handlers for the Nyumba web gateway
//!
//! HTML page handlers and the passthrough JSON API, grouped by domain.

pub mod properties;
pub mod reviews;
pub mod users;

use axum::{extract::State, Json};
use serde::Serialize;

use crate::state::AppState;

/// Health check response
#[derive(Serialize)]
pub struct HealthResponse {
    pub status: String,
    pub backend: String,
    pub version: String,
}

/// Health check endpoint; degrades when the listings backend is unreachable.
pub async fn health_check(State(state): State<AppState>) -> Json<HealthResponse> {
    let backend = if state.client.probe().await {
        "reachable".to_string()
    } else {
        "unreachable".to_string()
    };

    let status = if backend == "reachable" {
        "healthy"
    } else {
        "degraded"
    };

    Json(HealthResponse {
        status: status.to_string(),
        backend,
        version: env!("CARGO_PKG_VERSION").to_string(),
    })
}
