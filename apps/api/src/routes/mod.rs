pub mod health;
pub mod misc;

use axum::{
    extract::DefaultBodyLimit,
    routing::{get, post},
    Router,
};

use crate::analysis::handlers as analysis;
use crate::career::handlers as career;
use crate::company::handlers as company;
use crate::errors::AppError;
use crate::report::handlers as report;
use crate::resume::handlers as resume;
use crate::state::AppState;

/// Uploaded resumes above this size are rejected before parsing.
const MAX_UPLOAD_BYTES: usize = 10 * 1024 * 1024;

async fn not_found() -> AppError {
    AppError::NotFound("Endpoint not found".to_string())
}

pub fn build_router(state: AppState) -> Router {
    Router::new()
        .route("/health", get(health::health_handler))
        // Scoring
        .route("/analyze", post(analysis::handle_analyze))
        .route("/bulk-analyze", post(analysis::handle_bulk_analyze))
        .route(
            "/resume-check",
            post(resume::handle_resume_check).layer(DefaultBodyLimit::max(MAX_UPLOAD_BYTES)),
        )
        .route("/verify-company", post(company::handle_verify_company))
        .route("/career-guidance", post(career::handle_career_guidance))
        .route("/full-analysis", post(report::handle_full_analysis))
        // Static payloads
        .route("/test-data", get(misc::test_data))
        .route("/dashboard-stats", get(misc::dashboard_stats))
        .route("/history", get(misc::history))
        .route("/search", post(misc::search))
        .fallback(not_found)
        .with_state(state)
}

#[cfg(test)]
mod tests {
    use axum::body::{to_bytes, Body};
    use axum::http::{header, Request, StatusCode};
    use serde_json::{json, Value};
    use tower::ServiceExt;

    use super::*;
    use crate::config::Config;

    const BOUNDARY: &str = "jobguard-test-boundary";

    fn app() -> Router {
        build_router(AppState::new(Config::offline(), None))
    }

    fn post_json(uri: &str, body: Value) -> Request<Body> {
        Request::post(uri)
            .header(header::CONTENT_TYPE, "application/json")
            .body(Body::from(serde_json::to_vec(&body).unwrap()))
            .unwrap()
    }

    fn upload(field: &str, file_name: &str, content: &[u8]) -> Request<Body> {
        let mut body = format!(
            "--{BOUNDARY}\r\nContent-Disposition: form-data; name=\"{field}\"; \
             filename=\"{file_name}\"\r\nContent-Type: application/pdf\r\n\r\n"
        )
        .into_bytes();
        body.extend_from_slice(content);
        body.extend_from_slice(format!("\r\n--{BOUNDARY}--\r\n").as_bytes());

        Request::post("/resume-check")
            .header(
                header::CONTENT_TYPE,
                format!("multipart/form-data; boundary={BOUNDARY}"),
            )
            .body(Body::from(body))
            .unwrap()
    }

    /// A well-formed single-page PDF whose content stream draws nothing.
    fn blank_page_pdf() -> Vec<u8> {
        let objects = [
            "<< /Type /Catalog /Pages 2 0 R >>",
            "<< /Type /Pages /Kids [3 0 R] /Count 1 >>",
            "<< /Type /Page /Parent 2 0 R /MediaBox [0 0 612 792] \
             /Resources << >> /Contents 4 0 R >>",
            "<< /Length 0 >>\nstream\n\nendstream",
        ];
        let mut pdf = b"%PDF-1.4\n".to_vec();
        let mut offsets = Vec::new();
        for (i, object) in objects.iter().enumerate() {
            offsets.push(pdf.len());
            pdf.extend_from_slice(format!("{} 0 obj\n{object}\nendobj\n", i + 1).as_bytes());
        }
        let xref_at = pdf.len();
        let mut xref = format!("xref\n0 {}\n0000000000 65535 f \n", objects.len() + 1);
        for offset in offsets {
            xref.push_str(&format!("{offset:010} 00000 n \n"));
        }
        xref.push_str(&format!(
            "trailer\n<< /Size {} /Root 1 0 R >>\nstartxref\n{xref_at}\n%%EOF\n",
            objects.len() + 1
        ));
        pdf.extend_from_slice(xref.as_bytes());
        pdf
    }

    async fn send(request: Request<Body>) -> (StatusCode, Value) {
        let response = app().oneshot(request).await.expect("route executes");
        let status = response.status();
        let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
        (status, serde_json::from_slice(&bytes).unwrap())
    }

    #[tokio::test]
    async fn test_analyze_scores_scam() {
        let (status, body) = send(post_json(
            "/analyze",
            json!({"text": "URGENT!! Send $500 registration fee via bitcoin now, provide your SSN."}),
        ))
        .await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["risk_percentage"], 100);
        assert_eq!(body["risk_level"], "High");
        assert_eq!(body["scam_type"], "Advance Fee Fraud");
    }

    #[tokio::test]
    async fn test_analyze_requires_text() {
        let (status, body) = send(post_json("/analyze", json!({"text": ""}))).await;
        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert_eq!(body["error"], "Text is required");
    }

    #[tokio::test]
    async fn test_malformed_json_is_a_json_400() {
        let request = Request::post("/analyze")
            .header(header::CONTENT_TYPE, "application/json")
            .body(Body::from("{not json"))
            .unwrap();
        let (status, body) = send(request).await;
        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert!(body["error"].as_str().unwrap().starts_with("Invalid JSON body"));
    }

    #[tokio::test]
    async fn test_unknown_route_is_404() {
        let request = Request::get("/does-not-exist").body(Body::empty()).unwrap();
        let (status, body) = send(request).await;
        assert_eq!(status, StatusCode::NOT_FOUND);
        assert_eq!(body["error"], "Endpoint not found");
    }

    #[tokio::test]
    async fn test_verify_company_ledger_hit() {
        let (status, body) =
            send(post_json("/verify-company", json!({"company_name": "Google LLC"}))).await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["verified"], true);
        assert_eq!(body["risk_percentage"], 5);
    }

    #[tokio::test]
    async fn test_verify_company_requires_name() {
        let (status, body) = send(post_json("/verify-company", json!({"company_name": "  "}))).await;
        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert_eq!(body["error"], "Company name is required");
    }

    #[tokio::test]
    async fn test_bulk_analyze() {
        let (status, body) = send(post_json(
            "/bulk-analyze",
            json!({"texts": ["send money now and your ssn", "hello"]}),
        ))
        .await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["total"], 2);
        assert_eq!(body["high_risk_count"], 1);

        let (status, body) = send(post_json("/bulk-analyze", json!({"texts": []}))).await;
        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert_eq!(body["error"], "No texts provided");
    }

    #[tokio::test]
    async fn test_career_guidance_redirect() {
        let (status, body) =
            send(post_json("/career-guidance", json!({"skill": "Iron Man"}))).await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["status"], "unrealistic_career");
        assert_eq!(body["is_realistic"], false);
    }

    #[tokio::test]
    async fn test_resume_check_rejects_unreadable_pdf() {
        let (status, body) = send(upload("resume", "cv.pdf", b"this is not a pdf at all")).await;
        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert_eq!(body["risk_percentage"], 50);
        assert_eq!(body["risk_level"], "Medium");
        assert!(body["reasons"][0]
            .as_str()
            .unwrap()
            .starts_with("PDF processing error"));
    }

    #[tokio::test]
    async fn test_resume_check_rejects_pdf_without_text() {
        let (status, body) = send(upload("resume", "blank.pdf", &blank_page_pdf())).await;
        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert_eq!(body["code"], "DOCUMENT_ERROR");
        assert_eq!(body["error"], "PDF appears to be empty or unreadable");
        assert_eq!(body["reasons"][0], "Unable to extract text from PDF");
        assert_eq!(body["risk_level"], "Medium");
    }

    #[tokio::test]
    async fn test_resume_check_requires_file_field() {
        let (status, body) = send(upload("attachment", "cv.pdf", b"%PDF-1.4")).await;
        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert_eq!(body["error"], "No file provided");
    }

    #[tokio::test]
    async fn test_full_analysis_bundles_sections() {
        let (status, body) = send(post_json(
            "/full-analysis",
            json!({"company_name": "FakeCorp Scam Test", "skills": "cloud"}),
        ))
        .await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["company_verification"]["risk_percentage"], 85);
        assert_eq!(body["career_guidance"]["status"], "success");
        assert!(body.get("job_analysis").is_none());
        assert!(body["timestamp"].is_string());
    }

    #[tokio::test]
    async fn test_static_endpoints() {
        let (status, body) = send(Request::get("/health").body(Body::empty()).unwrap()).await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["status"], "healthy");
        assert_eq!(body["ai_enabled"], false);

        let (_, body) = send(Request::get("/test-data").body(Body::empty()).unwrap()).await;
        assert_eq!(body["job_offers"].as_array().unwrap().len(), 3);

        let (_, body) = send(post_json("/search", json!({"query": "ACME"}))).await;
        assert_eq!(body["query"], "acme");
    }
}
