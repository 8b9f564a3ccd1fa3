//! Abbreviated scoring for batches. Uses a six-keyword subset on purpose;
//! it is a triage pass, not the full scorer.

use serde::{Deserialize, Serialize};

use crate::analysis::rules::KeywordRule;
use crate::models::risk::{clamp_score, RiskLevel};

const BULK_KEYWORDS: &[KeywordRule] = &[
    KeywordRule { phrase: "urgent", weight: 15 },
    KeywordRule { phrase: "guaranteed", weight: 20 },
    KeywordRule { phrase: "registration fee", weight: 40 },
    KeywordRule { phrase: "send money", weight: 50 },
    KeywordRule { phrase: "bank details", weight: 45 },
    KeywordRule { phrase: "ssn", weight: 50 },
];

const PREVIEW_CHARS: usize = 100;

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BulkItem {
    /// Input text, truncated for display.
    pub text: String,
    pub risk_percentage: u8,
    pub risk_level: RiskLevel,
    pub reasons: Vec<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BulkReport {
    pub results: Vec<BulkItem>,
    pub total: usize,
    pub high_risk_count: usize,
}

pub fn score_one(text: &str) -> BulkItem {
    let lower = text.to_lowercase();
    let mut points = 0;
    let mut reasons = Vec::new();

    for rule in BULK_KEYWORDS {
        if lower.contains(rule.phrase) {
            points += rule.weight;
            reasons.push(format!("Contains suspicious keyword: '{}'", rule.phrase));
        }
    }
    if reasons.is_empty() {
        reasons.push("No obvious scam indicators".to_string());
    }

    let score = clamp_score(points);
    BulkItem {
        text: preview(text),
        risk_percentage: score,
        risk_level: RiskLevel::from_score(score),
        reasons,
    }
}

pub fn score_batch(texts: &[String]) -> BulkReport {
    let results: Vec<BulkItem> = texts.iter().map(|t| score_one(t)).collect();
    let high_risk_count = results
        .iter()
        .filter(|r| r.risk_level == RiskLevel::High)
        .count();
    BulkReport {
        total: results.len(),
        high_risk_count,
        results,
    }
}

fn preview(text: &str) -> String {
    if text.chars().count() > PREVIEW_CHARS {
        let head: String = text.chars().take(PREVIEW_CHARS).collect();
        format!("{head}...")
    } else {
        text.to_string()
    }
}
