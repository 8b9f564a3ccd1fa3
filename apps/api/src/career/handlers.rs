//! Axum route handler for career guidance.

use axum::extract::State;
use serde::Deserialize;

use crate::career::models::CareerGuidance;
use crate::errors::{ApiJson, AppError};
use crate::state::AppState;

#[derive(Debug, Deserialize)]
pub struct CareerRequest {
    #[serde(default)]
    pub skill: String,
}

/// POST /career-guidance
pub async fn handle_career_guidance(
    State(state): State<AppState>,
    ApiJson(request): ApiJson<CareerRequest>,
) -> Result<ApiJson<CareerGuidance>, AppError> {
    if request.skill.trim().is_empty() {
        return Err(AppError::Validation("Skill is required".to_string()));
    }

    Ok(ApiJson(state.advisor.guide(&request.skill).await))
}
