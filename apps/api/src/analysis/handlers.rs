//! Axum route handlers for job-posting analysis.

use axum::extract::State;
use serde::Deserialize;

use crate::analysis::bulk::{score_batch, BulkReport};
use crate::analysis::scorer::RiskAssessment;
use crate::errors::{ApiJson, AppError};
use crate::state::AppState;

#[derive(Debug, Deserialize)]
pub struct AnalyzeRequest {
    #[serde(default)]
    pub text: String,
}

#[derive(Debug, Deserialize)]
pub struct BulkAnalyzeRequest {
    #[serde(default)]
    pub texts: Vec<String>,
}

/// POST /analyze
pub async fn handle_analyze(
    State(state): State<AppState>,
    ApiJson(request): ApiJson<AnalyzeRequest>,
) -> Result<ApiJson<RiskAssessment>, AppError> {
    if request.text.is_empty() {
        return Err(AppError::Validation("Text is required".to_string()));
    }

    Ok(ApiJson(state.analyzer.analyze(&request.text).await))
}

/// POST /bulk-analyze
pub async fn handle_bulk_analyze(
    ApiJson(request): ApiJson<BulkAnalyzeRequest>,
) -> Result<ApiJson<BulkReport>, AppError> {
    if request.texts.is_empty() {
        return Err(AppError::Validation("No texts provided".to_string()));
    }

    Ok(ApiJson(score_batch(&request.texts)))
}
