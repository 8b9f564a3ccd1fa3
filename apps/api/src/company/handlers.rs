//! Axum route handler for company verification.

use axum::extract::State;
use serde::Deserialize;

use crate::company::profile::CompanyVerification;
use crate::errors::{ApiJson, AppError};
use crate::state::AppState;

#[derive(Debug, Deserialize)]
pub struct VerifyCompanyRequest {
    #[serde(default)]
    pub company_name: String,
}

/// POST /verify-company
pub async fn handle_verify_company(
    State(state): State<AppState>,
    ApiJson(request): ApiJson<VerifyCompanyRequest>,
) -> Result<ApiJson<CompanyVerification>, AppError> {
    let name = request.company_name.trim();
    if name.is_empty() {
        return Err(AppError::Validation("Company name is required".to_string()));
    }

    Ok(ApiJson(state.resolver.verify(name).await))
}
