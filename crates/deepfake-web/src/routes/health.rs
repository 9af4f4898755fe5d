//! Liveness route handler.

use axum::{extract::State, Json};
use deepfake_core::analysis::model::HealthResponse;

use crate::state::AppState;

/// GET /health - Liveness probe for the deployment platform.
pub async fn health_check(State(state): State<AppState>) -> Json<HealthResponse> {
    Json(HealthResponse::healthy(state.settings.version.clone()))
}
