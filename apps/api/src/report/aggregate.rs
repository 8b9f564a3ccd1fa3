//! Runs the engines a request asks for and bundles their results.
//!
//! Job analysis, company verification and career guidance may each wait on
//! the hosted model, so they run concurrently. Resume text scoring is local.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::analysis::scorer::RiskAssessment;
use crate::career::models::CareerGuidance;
use crate::company::profile::CompanyVerification;
use crate::resume::scorer::ResumeAssessment;
use crate::state::AppState;

/// Missing, `null` and empty fields all skip their section.
#[derive(Debug, Default, Deserialize)]
pub struct FullAnalysisRequest {
    pub job_message: Option<String>,
    pub company_name: Option<String>,
    pub skills: Option<String>,
    /// Preferred over `skills` when both are present.
    pub career_goal: Option<String>,
    pub resume_text: Option<String>,
}

#[derive(Debug, Clone, Serialize)]
#[serde(untagged)]
pub enum ResumeOutcome {
    Scored(ResumeAssessment),
    Rejected { error: String },
}

/// Sections are omitted when their input was not supplied.
#[derive(Debug, Clone, Serialize)]
pub struct FullReport {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub job_analysis: Option<RiskAssessment>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub company_verification: Option<CompanyVerification>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub career_guidance: Option<CareerGuidance>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub resume_check: Option<ResumeOutcome>,
    pub timestamp: DateTime<Utc>,
}

pub async fn full_report(state: &AppState, request: &FullAnalysisRequest) -> FullReport {
    let job_message = request.job_message.as_deref().filter(|m| !m.is_empty());
    let company_name = present(request.company_name.as_deref());
    let career_input =
        present(request.career_goal.as_deref()).or_else(|| present(request.skills.as_deref()));

    let (job_analysis, company_verification, career_guidance) = tokio::join!(
        async {
            match job_message {
                Some(message) => Some(state.analyzer.analyze(message).await),
                None => None,
            }
        },
        async {
            match company_name {
                Some(name) => Some(state.resolver.verify(name).await),
                None => None,
            }
        },
        async {
            match career_input {
                Some(skill) => Some(state.advisor.guide(skill).await),
                None => None,
            }
        },
    );

    let resume_check = request
        .resume_text
        .as_deref()
        .filter(|t| !t.is_empty())
        .map(|text| match state.resume_scorer.score_text(text) {
            Ok(assessment) => ResumeOutcome::Scored(assessment),
            Err(_) => ResumeOutcome::Rejected {
                error: "Resume text is empty or too short".to_string(),
            },
        });

    FullReport {
        job_analysis,
        company_verification,
        career_guidance,
        resume_check,
        timestamp: Utc::now(),
    }
}

fn present(value: Option<&str>) -> Option<&str> {
    value.map(str::trim).filter(|v| !v.is_empty())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::Config;

    fn offline_state() -> AppState {
        AppState::new(Config::offline(), None)
    }

    #[tokio::test]
    async fn test_empty_request_has_only_timestamp() {
        let report = full_report(&offline_state(), &FullAnalysisRequest::default()).await;
        let value = serde_json::to_value(&report).unwrap();
        let keys: Vec<_> = value.as_object().unwrap().keys().cloned().collect();
        assert_eq!(keys, vec!["timestamp"]);
    }

    #[tokio::test]
    async fn test_all_sections_present() {
        let request = FullAnalysisRequest {
            job_message: Some(
                "URGENT!! Send $500 registration fee via bitcoin now, provide your SSN."
                    .to_string(),
            ),
            company_name: Some("Google".to_string()),
            skills: Some("python".to_string()),
            career_goal: Some(String::new()),
            resume_text: Some("Education: BSc 2015 - 2019, jane@example.com".to_string()),
        };
        let report = full_report(&offline_state(), &request).await;

        assert_eq!(report.job_analysis.as_ref().map(|a| a.score), Some(100));
        assert_eq!(
            report.company_verification.as_ref().map(|c| c.risk_percentage),
            Some(5)
        );
        assert!(matches!(report.career_guidance, Some(CareerGuidance::Roadmap(_))));
        assert!(matches!(report.resume_check, Some(ResumeOutcome::Scored(_))));
    }

    #[tokio::test]
    async fn test_career_goal_preferred_over_skills() {
        let request = FullAnalysisRequest {
            skills: Some("python".to_string()),
            career_goal: Some("wizard".to_string()),
            ..FullAnalysisRequest::default()
        };
        let report = full_report(&offline_state(), &request).await;
        assert!(matches!(report.career_guidance, Some(CareerGuidance::Unrealistic(_))));
    }

    #[tokio::test]
    async fn test_short_resume_text_is_rejected_inline() {
        let request = FullAnalysisRequest {
            resume_text: Some("cv".to_string()),
            ..FullAnalysisRequest::default()
        };
        let report = full_report(&offline_state(), &request).await;
        let value = serde_json::to_value(&report).unwrap();
        assert_eq!(value["resume_check"]["error"], "Resume text is empty or too short");
    }

    #[tokio::test]
    async fn test_null_fields_are_treated_as_omitted() {
        let request: FullAnalysisRequest = serde_json::from_value(serde_json::json!({
            "job_message": null,
            "company_name": null,
            "skills": "cloud",
            "career_goal": null,
            "resume_text": null,
        }))
        .unwrap();
        let report = full_report(&offline_state(), &request).await;
        let value = serde_json::to_value(&report).unwrap();
        let mut keys: Vec<_> = value.as_object().unwrap().keys().cloned().collect();
        keys.sort();
        assert_eq!(keys, vec!["career_guidance", "timestamp"]);
    }
}
