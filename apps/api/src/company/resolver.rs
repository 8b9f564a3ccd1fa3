//! Three-tier company resolution.
//!
//! 1. Hosted-model lookup (only when AI is configured). A failed call or an
//!    unparseable reply falls through.
//! 2. The static ledger, matched by substring.
//! 3. A deterministic fallback: a fixed negative profile for names with a
//!    suspicious token, otherwise filler drawn from the name-seeded stream.

use std::sync::Arc;

use serde::Deserialize;
use serde_json::Value;

use crate::company::ledger::{self, LedgerEntry};
use crate::company::profile::{CompanyProfile, CompanyVerification, DataSource, GlobalChecks};
use crate::company::prompts::{COMPANY_INVESTIGATOR, COMPANY_LOOKUP_TEMPLATE};
use crate::company::seeded::SeededStream;
use crate::llm_client::prompts::json_system;
use crate::llm_client::{generate_json, GenerationOptions, LlmError, SharedGenerator, TextGenerator};
use crate::models::risk::clamp_score;

const SUSPICIOUS_TOKENS: [&str; 8] = [
    "fake", "scam", "fraud", "phishing", "test", "example", "demo", "temp",
];

const AI_SCAM_RISK: u8 = 85;
const AI_CLEAN_RISK: u8 = 15;
const LEDGER_RISK: u8 = 5;
const SUSPICIOUS_RISK: u8 = 85;

const LOOKUP_OPTIONS: GenerationOptions = GenerationOptions {
    temperature: 0.2,
    top_p: None,
    top_k: None,
    max_output_tokens: Some(2048),
    json: true,
};

/// The structured record requested from the model. Descriptive fields may be
/// sparse; a reply without the `is_scam` verdict is not a lookup result.
#[derive(Debug, Deserialize)]
struct AiCompanyRecord {
    full_name: Option<String>,
    industry: Option<String>,
    headquarters: Option<String>,
    location_verified: Option<bool>,
    website: Option<String>,
    linkedin: Option<String>,
    glassdoor: Option<String>,
    rating: Option<f32>,
    employees: Option<Value>,
    history: Option<String>,
    #[serde(default)]
    past_issues: Vec<String>,
    #[serde(default)]
    competitors: Vec<String>,
    #[serde(default)]
    growth_stats: Vec<f64>,
    is_scam: bool,
}

pub struct CompanyResolver {
    generator: Option<Arc<dyn TextGenerator>>,
}

impl CompanyResolver {
    pub fn new(generator: &SharedGenerator) -> Self {
        Self {
            generator: generator.clone(),
        }
    }

    /// Resolves `name` and wraps the profile into the full report.
    pub async fn verify(&self, name: &str) -> CompanyVerification {
        let name = name.trim();
        CompanyVerification::new(name, self.resolve(name).await)
    }

    pub async fn resolve(&self, name: &str) -> CompanyProfile {
        if let Some(generator) = &self.generator {
            match ai_lookup(generator.as_ref(), name).await {
                Ok(profile) => {
                    tracing::info!(
                        company = name,
                        verified = profile.verified,
                        risk = profile.risk,
                        "AI company lookup succeeded"
                    );
                    return profile;
                }
                Err(e) => tracing::warn!(company = name, "AI company lookup failed: {e}"),
            }
        }
        resolve_offline(name)
    }
}

/// Ledger, then deterministic fallback. Never touches the network.
pub fn resolve_offline(name: &str) -> CompanyProfile {
    let lower = name.trim().to_lowercase();
    let mut stream = SeededStream::for_name(&lower);

    if let Some(entry) = ledger::lookup(&lower) {
        return from_ledger(entry, &mut stream);
    }
    if SUSPICIOUS_TOKENS.iter().any(|t| lower.contains(t)) {
        return suspicious(name, &mut stream);
    }
    generic(name, &mut stream)
}

async fn ai_lookup(generator: &dyn TextGenerator, name: &str) -> Result<CompanyProfile, LlmError> {
    let system = json_system(COMPANY_INVESTIGATOR);
    let prompt = COMPANY_LOOKUP_TEMPLATE.replace("{company_name}", name);
    let record: AiCompanyRecord = generate_json(generator, &system, &prompt, LOOKUP_OPTIONS).await?;
    Ok(from_ai_record(name, record))
}

fn from_ai_record(name: &str, record: AiCompanyRecord) -> CompanyProfile {
    let verified = !record.is_scam;
    let risk = if record.is_scam { AI_SCAM_RISK } else { AI_CLEAN_RISK };

    CompanyProfile {
        full_name: record.full_name.unwrap_or_else(|| name.to_string()),
        industry: record.industry.unwrap_or_else(|| "Unknown Industry".to_string()),
        headquarters: record
            .headquarters
            .unwrap_or_else(|| "Location Unknown".to_string()),
        location_verified: record.location_verified.unwrap_or(false),
        website: non_empty(record.website),
        linkedin: non_empty(record.linkedin),
        glassdoor: non_empty(record.glassdoor),
        rating: record.rating.unwrap_or(0.0).clamp(0.0, 5.0),
        employees: record
            .employees
            .map(|v| match v {
                Value::String(s) => s,
                other => other.to_string(),
            })
            .unwrap_or_else(|| "Unknown".to_string()),
        history: record
            .history
            .unwrap_or_else(|| "No data available.".to_string()),
        past_issues: record.past_issues,
        competitors: record.competitors,
        growth_stats: six_points(&record.growth_stats),
        verified,
        risk,
        global_checks: GlobalChecks {
            bbb_registered: verified && risk < 30,
            ftc_reports: if risk < 50 {
                "Clear".to_string()
            } else {
                "Potential Warnings Found".to_string()
            },
            whois_age: if verified {
                "5+ Years".to_string()
            } else {
                "Less than 1 Year / Hidden".to_string()
            },
            dns_sec: verified,
        },
        recruitment_integrity: Some(if verified { 100 - risk } else { 15 }),
        data_source: DataSource::Ai,
    }
}

fn from_ledger(entry: &LedgerEntry, stream: &mut SeededStream) -> CompanyProfile {
    CompanyProfile {
        full_name: entry.full_name.to_string(),
        industry: entry.industry.to_string(),
        headquarters: entry.headquarters.to_string(),
        location_verified: true,
        website: Some(entry.website.to_string()),
        linkedin: Some(entry.linkedin.to_string()),
        glassdoor: Some(entry.glassdoor.to_string()),
        rating: entry.rating,
        employees: entry.employees.to_string(),
        history: entry.history.to_string(),
        past_issues: owned(entry.issues),
        competitors: owned(entry.competitors),
        growth_stats: stream.growth(80..=100),
        verified: true,
        risk: LEDGER_RISK,
        global_checks: GlobalChecks {
            bbb_registered: true,
            ftc_reports: "Clear".to_string(),
            whois_age: "20+ Years".to_string(),
            dns_sec: true,
        },
        recruitment_integrity: Some(95),
        data_source: DataSource::CachedLedger,
    }
}

fn suspicious(name: &str, stream: &mut SeededStream) -> CompanyProfile {
    CompanyProfile {
        full_name: name.to_string(),
        industry: "Unknown / Suspicious".to_string(),
        headquarters: "Unverified".to_string(),
        location_verified: false,
        website: None,
        linkedin: None,
        glassdoor: None,
        rating: 1.2,
        employees: "Unknown".to_string(),
        history: "Negative history or associated with known scam patterns.".to_string(),
        past_issues: owned(&[
            "High risk of fraud",
            "Multiple reports of phishing",
            "Unverifiable management",
        ]),
        competitors: Vec::new(),
        growth_stats: stream.growth(5..=20),
        verified: false,
        risk: SUSPICIOUS_RISK,
        global_checks: GlobalChecks {
            bbb_registered: false,
            ftc_reports: "Multiple Red Flags Detected".to_string(),
            whois_age: "Unknown / Suspicious".to_string(),
            dns_sec: false,
        },
        recruitment_integrity: None,
        data_source: DataSource::PatternMatch,
    }
}

/// Draw order is fixed: risk, rating, employees, growth, dns_sec.
fn generic(name: &str, stream: &mut SeededStream) -> CompanyProfile {
    let risk = stream.int(35..=65) as u8;
    let rating = stream.rating();
    let employees = format!("{}+", stream.int(50..=5000));
    let growth_stats = stream.growth(20..=70);
    let dns_sec = stream.coin();

    let lower = name.to_lowercase();
    CompanyProfile {
        full_name: name.to_string(),
        industry: "General Business".to_string(),
        headquarters: "Unverified Location".to_string(),
        location_verified: false,
        website: Some(format!("https://www.{}.com", lower.replace(' ', ""))),
        linkedin: Some(format!(
            "https://www.linkedin.com/company/{}",
            lower.replace(' ', "-")
        )),
        glassdoor: Some(format!(
            "https://www.glassdoor.com/Search/results.htm?keyword={}",
            name.replace(' ', "+")
        )),
        rating,
        employees,
        history: "Limited public records available for this entity. Please confirm via official channels.".to_string(),
        past_issues: owned(&["Lack of transparent business records"]),
        competitors: owned(&["Competitor A", "Competitor B", "Competitor C"]),
        growth_stats,
        verified: false,
        risk,
        global_checks: GlobalChecks {
            bbb_registered: false,
            ftc_reports: "Insufficient Data".to_string(),
            whois_age: "Unknown / Not Verified".to_string(),
            dns_sec,
        },
        recruitment_integrity: None,
        data_source: DataSource::ProbabilisticFallback,
    }
}

/// Pads a short series with 50 and drops anything past six points.
fn six_points(series: &[f64]) -> [u8; 6] {
    let mut stats = [50u8; 6];
    for (slot, value) in stats.iter_mut().zip(series) {
        *slot = clamp_score(value.round() as i32);
    }
    stats
}

fn non_empty(value: Option<String>) -> Option<String> {
    value.filter(|v| !v.trim().is_empty())
}

fn owned(items: &[&str]) -> Vec<String> {
    items.iter().map(|s| s.to_string()).collect()
}
