//! Analysis route handlers.

use axum::{extract::rejection::JsonRejection, extract::State, Json};
use deepfake_core::analysis::{self, model::{AnalysisRequest, AnalysisResponse}};

use crate::error::ApiError;
use crate::state::AppState;

/// POST /v1/analysis/deepfake - Classify the described media.
pub async fn analyze_media(
    State(state): State<AppState>,
    payload: Result<Json<AnalysisRequest>, JsonRejection>,
) -> Result<Json<AnalysisResponse>, ApiError> {
    let Json(request) = payload?;
    let response = analysis::analyze(state.scorer.as_ref(), &request)?;
    Ok(Json(response))
}
