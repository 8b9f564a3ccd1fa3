//! Static and placeholder endpoints. Nothing here is persisted.

use axum::Json;
use serde::Deserialize;
use serde_json::{json, Value};

use crate::errors::ApiJson;

/// GET /test-data
/// Sample inputs for manual testing from the front end.
pub async fn test_data() -> Json<Value> {
    Json(json!({
        "job_offers": [
            {
                "text": "URGENT! Work from home opportunity. Send $500 registration fee to secure your position. High salary guaranteed!",
                "expected_risk": 95
            },
            {
                "text": "We are looking for a Software Engineer at Google. Please apply through our official careers page at careers.google.com",
                "expected_risk": 10
            },
            {
                "text": "Congratulations! You've been selected. Please provide your bank details and SSN for verification.",
                "expected_risk": 90
            }
        ],
        "companies": {
            "Google": {"verified": true, "risk": 5},
            "Microsoft": {"verified": true, "risk": 5},
            "FakeCorp Inc": {"verified": false, "risk": 85}
        }
    }))
}

/// GET /dashboard-stats
pub async fn dashboard_stats() -> Json<Value> {
    Json(json!({
        "total_analyses": 0,
        "high_risk_detected": 0,
        "companies_verified": 0,
        "resumes_checked": 0,
        "recent_activity": []
    }))
}

/// GET /history
pub async fn history() -> Json<Value> {
    Json(json!({
        "history": [],
        "message": "History stored in localStorage on client side"
    }))
}

#[derive(Debug, Default, Deserialize)]
#[serde(default)]
pub struct SearchRequest {
    pub query: String,
}

/// POST /search
pub async fn search(ApiJson(request): ApiJson<SearchRequest>) -> Json<Value> {
    Json(json!({
        "results": [],
        "query": request.query.to_lowercase(),
        "message": "Search is not backed by storage; no results are kept server side"
    }))
}
