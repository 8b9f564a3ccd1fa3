//! Axum route handler for the combined report.

use axum::extract::State;

use crate::errors::{ApiJson, AppError};
use crate::report::aggregate::{full_report, FullAnalysisRequest, FullReport};
use crate::state::AppState;

/// POST /full-analysis
pub async fn handle_full_analysis(
    State(state): State<AppState>,
    ApiJson(request): ApiJson<FullAnalysisRequest>,
) -> Result<ApiJson<FullReport>, AppError> {
    Ok(ApiJson(full_report(&state, &request).await))
}
