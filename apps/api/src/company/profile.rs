//! Company profile and the verification report built from it.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::models::risk::RiskLevel;

/// Which resolution tier produced a profile.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum DataSource {
    #[serde(rename = "AI Neural Search (Live)")]
    Ai,
    #[serde(rename = "Verified Corporate Ledger (Cached)")]
    CachedLedger,
    #[serde(rename = "Pattern Recognition (Suspicious)")]
    PatternMatch,
    #[serde(rename = "Probabilistic Fallback (Unverified)")]
    ProbabilisticFallback,
}

/// External registry signals, derived from the tier's verdict.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GlobalChecks {
    pub bbb_registered: bool,
    pub ftc_reports: String,
    pub whois_age: String,
    pub dns_sec: bool,
}

#[derive(Debug, Clone, Serialize)]
pub struct CompanyProfile {
    pub full_name: String,
    pub industry: String,
    pub headquarters: String,
    pub location_verified: bool,
    pub website: Option<String>,
    pub linkedin: Option<String>,
    pub glassdoor: Option<String>,
    pub rating: f32,
    pub employees: String,
    pub history: String,
    pub past_issues: Vec<String>,
    pub competitors: Vec<String>,
    pub growth_stats: [u8; 6],
    pub verified: bool,
    /// Reported at the top level of the verification report.
    #[serde(skip_serializing)]
    pub risk: u8,
    pub global_checks: GlobalChecks,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub recruitment_integrity: Option<u8>,
    pub data_source: DataSource,
}

#[derive(Debug, Clone, Serialize)]
pub struct PresenceDetails {
    pub registered: bool,
    pub domain_exists: bool,
    pub linkedin_presence: bool,
    pub reviews_available: bool,
}

/// Response body of `/verify-company`.
#[derive(Debug, Clone, Serialize)]
pub struct CompanyVerification {
    pub company_name: String,
    pub verified: bool,
    pub risk_percentage: u8,
    pub details: PresenceDetails,
    pub recommendation: String,
    pub company_information: CompanyProfile,
    pub warning_signs: Vec<String>,
    pub trust_elements: Vec<String>,
    pub timestamp: DateTime<Utc>,
}

/// Below this risk a verified company is presented as an established leader.
const LEADER_CEILING: u8 = 20;
const HIGH_RISK_FLOOR: u8 = 70;

impl CompanyVerification {
    pub fn new(company_name: &str, profile: CompanyProfile) -> Self {
        debug_assert!(
            !profile.verified || RiskLevel::from_score(profile.risk) == RiskLevel::Low,
            "verified company '{}' carries risk {}",
            company_name,
            profile.risk
        );

        let verified = profile.verified;
        let risk = profile.risk;

        let mut warning_signs = Vec::new();
        if risk > HIGH_RISK_FLOOR {
            warning_signs.push("High risk characteristics detected".to_string());
        }
        if !verified {
            warning_signs.push("Unverified entity status".to_string());
        }

        let mut trust_elements = Vec::new();
        if verified && risk < LEADER_CEILING {
            trust_elements.push("Verified Fortune 500 Entity".to_string());
        }
        if profile.website.is_some() {
            trust_elements.push("Official Domain Active".to_string());
        }
        if profile.linkedin.is_some() {
            trust_elements.push("Professional Social Presence".to_string());
        }

        let recommendation = if verified && risk < LEADER_CEILING {
            "✓ Verified company - This is a legitimate global leader."
        } else if risk > HIGH_RISK_FLOOR {
            "🚨 High Risk - Extreme caution advised. This entity matches known fraud patterns."
        } else {
            "⚠️ Unverified - Please perform manual due diligence before sharing any data."
        };

        Self {
            company_name: company_name.to_string(),
            verified,
            risk_percentage: risk,
            details: PresenceDetails {
                registered: verified,
                domain_exists: profile.website.is_some(),
                linkedin_presence: profile.linkedin.is_some(),
                reviews_available: profile.glassdoor.is_some(),
            },
            recommendation: recommendation.to_string(),
            company_information: profile,
            warning_signs,
            trust_elements,
            timestamp: Utc::now(),
        }
    }
}
