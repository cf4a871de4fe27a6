//! Liveness / readiness probe

use axum::{extract::State, http::StatusCode, Json};
use claimboard_common::HealthResponse;
use tracing::warn;

use crate::AppState;

pub async fn health(State(state): State<AppState>) -> (StatusCode, Json<HealthResponse>) {
    match state.service.ping().await {
        Ok(()) => (
            StatusCode::OK,
            Json(HealthResponse { status: "ok".to_string() }),
        ),
        Err(e) => {
            warn!(error = %e, "Health check failed");
            (
                StatusCode::SERVICE_UNAVAILABLE,
                Json(HealthResponse { status: "unavailable".to_string() }),
            )
        }
    }
}
