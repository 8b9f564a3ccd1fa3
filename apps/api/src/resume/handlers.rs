//! Axum route handler for resume uploads.

use axum::extract::multipart::{Multipart, MultipartRejection};
use axum::extract::State;

use crate::errors::{ApiJson, AppError};
use crate::resume::extract::{pdf_text, ExtractError};
use crate::resume::scorer::ResumeAssessment;
use crate::state::AppState;

const FILE_FIELD: &str = "resume";

/// POST /resume-check
///
/// Expects a multipart form with the PDF in the `resume` field.
pub async fn handle_resume_check(
    State(state): State<AppState>,
    multipart: Result<Multipart, MultipartRejection>,
) -> Result<ApiJson<ResumeAssessment>, AppError> {
    let mut multipart =
        multipart.map_err(|_| AppError::Validation("No file provided".to_string()))?;

    let mut upload = None;
    while let Some(field) = multipart
        .next_field()
        .await
        .map_err(|e| AppError::Validation(format!("Invalid multipart body: {e}")))?
    {
        if field.name() != Some(FILE_FIELD) {
            continue;
        }
        let file_name = field.file_name().unwrap_or_default().to_string();
        let bytes = field
            .bytes()
            .await
            .map_err(|e| AppError::Validation(format!("Invalid multipart body: {e}")))?;
        upload = Some((file_name, bytes));
        break;
    }

    let (file_name, bytes) =
        upload.ok_or_else(|| AppError::Validation("No file provided".to_string()))?;
    if file_name.is_empty() {
        return Err(AppError::Validation("No file selected".to_string()));
    }

    tracing::info!(file = %file_name, size = bytes.len(), "Scoring uploaded resume");

    let text = pdf_text(bytes.to_vec()).await.map_err(document_error)?;
    Ok(ApiJson(state.resume_scorer.score(&text)))
}

fn document_error(err: ExtractError) -> AppError {
    match err {
        ExtractError::Empty => AppError::document(
            "PDF appears to be empty or unreadable",
            "Unable to extract text from PDF",
            "Please ensure the PDF contains readable text",
        ),
        ExtractError::Pdf(detail) | ExtractError::Aborted(detail) => AppError::document(
            format!("Error reading PDF: {detail}"),
            format!("PDF processing error: {detail}"),
            "Please ensure the file is a valid PDF",
        ),
    }
}
