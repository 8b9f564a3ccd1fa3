//! Deterministic job-posting risk scorer.
//!
//! Algorithm:
//! 1. Inputs with fewer than 10 significant characters short-circuit to a
//!    fixed Medium/50 assessment.
//! 2. Keyword tables (high, medium, legitimate) add their weights for every
//!    phrase found as a substring of the lower-cased text.
//! 3. Pattern rules add or subtract fixed deltas, in table order.
//! 4. The total is clamped to 0–100; level, tips, action plan and scam type
//!    are derived from the clamped score.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::analysis::guidance::{
    action_plan, safety_tips, short_text_tips, ScamType, VerificationChecklist,
    LEGITIMATE_OPPORTUNITY,
};
use crate::analysis::rules::{
    contains_any, has_exclamation_run, has_shouting, Sample, FINANCIAL_WORDS, IDENTITY_WORDS,
    KEYWORD_TIERS, PATTERN_RULES, URGENCY_WORDS,
};
use crate::models::risk::{clamp_score, RiskLevel};

/// Supplementary per-dimension breakdown. Not part of the main score.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct CategoryScores {
    pub linguistic: u8,
    pub financial: u8,
    pub identity: u8,
}

impl CategoryScores {
    pub fn compute(sample: &Sample) -> Self {
        let mut linguistic = 0;
        if has_exclamation_run(sample) {
            linguistic += 30;
        }
        if has_shouting(sample) {
            linguistic += 20;
        }
        if contains_any(&sample.normalized, URGENCY_WORDS) {
            linguistic += 40;
        }

        let financial = if contains_any(&sample.normalized, FINANCIAL_WORDS) {
            80
        } else {
            0
        };
        let identity = if contains_any(&sample.normalized, IDENTITY_WORDS) {
            90
        } else {
            0
        };

        Self {
            linguistic: clamp_score(linguistic),
            financial: clamp_score(financial),
            identity: clamp_score(identity),
        }
    }
}

/// Full result of scoring one job posting or message.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RiskAssessment {
    #[serde(rename = "risk_percentage")]
    pub score: u8,
    #[serde(rename = "risk_level")]
    pub level: RiskLevel,
    pub reasons: Vec<String>,
    pub safety_tips: Vec<String>,
    pub verification_checklist: VerificationChecklist,
    pub ai_explanation: Option<String>,
    /// Only present when the level is not Low.
    pub scam_type: Option<ScamType>,
    #[serde(rename = "scam_type_desc")]
    pub scam_type_description: String,
    pub action_plan: Vec<String>,
    pub category_scores: CategoryScores,
    pub timestamp: DateTime<Utc>,
}

impl RiskAssessment {
    /// Fixed answer for input too short to analyze. No rule runs.
    pub fn too_short() -> Self {
        let safety_tips = short_text_tips();
        let reasons = vec!["Text is too short to analyze properly".to_string()];
        Self {
            score: 50,
            level: RiskLevel::Medium,
            verification_checklist: VerificationChecklist::from_reasons(&reasons, &safety_tips),
            reasons,
            safety_tips,
            ai_explanation: None,
            scam_type: None,
            scam_type_description: ScamType::Generic.description().to_string(),
            action_plan: Vec::new(),
            category_scores: CategoryScores::default(),
            timestamp: Utc::now(),
        }
    }

    /// Derives every level-dependent field from `score`.
    pub fn settle(
        score: u8,
        reasons: Vec<String>,
        category_scores: CategoryScores,
        normalized: &str,
        ai_explanation: Option<String>,
    ) -> Self {
        let level = RiskLevel::from_score(score);
        let safety_tips = safety_tips(level);
        let (scam_type, scam_type_description) = match level {
            RiskLevel::Low => (None, LEGITIMATE_OPPORTUNITY.to_string()),
            _ => {
                let kind = ScamType::classify(normalized);
                (Some(kind), kind.description().to_string())
            }
        };

        Self {
            score,
            level,
            verification_checklist: VerificationChecklist::from_reasons(&reasons, &safety_tips),
            reasons,
            safety_tips,
            ai_explanation,
            scam_type,
            scam_type_description,
            action_plan: action_plan(level),
            category_scores,
            timestamp: Utc::now(),
        }
    }
}

/// Points and reasons accumulated by the rule fold, before clamping.
#[derive(Debug, Clone, Default)]
pub struct RuleTally {
    pub points: i32,
    pub reasons: Vec<String>,
}

impl RuleTally {
    fn add(&mut self, weight: i32, reason: String) {
        self.points += weight;
        self.reasons.push(reason);
    }
}

/// Stateless scorer over the immutable rule tables.
#[derive(Debug, Clone, Copy, Default)]
pub struct RiskScorer;

impl RiskScorer {
    pub fn score(&self, text: &str) -> RiskAssessment {
        let sample = Sample::new(text);
        if sample.is_too_short() {
            return RiskAssessment::too_short();
        }

        let tally = self.tally(&sample);
        let score = clamp_score(tally.points);
        let reasons = with_fallback_reasons(tally.reasons, score);

        RiskAssessment::settle(
            score,
            reasons,
            CategoryScores::compute(&sample),
            &sample.normalized,
            None,
        )
    }

    /// Folds keyword tables then pattern rules over the sample.
    pub fn tally(&self, sample: &Sample) -> RuleTally {
        let mut tally = RuleTally::default();

        for tier in KEYWORD_TIERS {
            for rule in tier.rules() {
                if sample.normalized.contains(rule.phrase) {
                    tally.add(rule.weight, tier.reason(rule.phrase));
                }
            }
        }

        for rule in PATTERN_RULES {
            if (rule.detector)(sample) {
                tally.add(rule.weight, rule.reason.to_string());
            }
        }

        tally
    }
}

fn with_fallback_reasons(mut reasons: Vec<String>, score: u8) -> Vec<String> {
    let level = RiskLevel::from_score(score);
    if score == 0 && level == RiskLevel::Low {
        reasons.push("No scam indicators detected - appears legitimate".to_string());
    }
    if reasons.is_empty() {
        reasons = match level {
            RiskLevel::Low => vec![
                "No obvious scam indicators detected".to_string(),
                "Contains standard job posting language".to_string(),
            ],
            _ => vec!["Multiple risk factors detected".to_string()],
        };
    }
    reasons
}

#[cfg(test)]
mod tests {
    use super::*;

    const SCAM: &str = "URGENT!! Send $500 registration fee via bitcoin now, provide your SSN.";

    const LEGIT: &str = "We are hiring a backend engineer. The role requires 3 years of \
        experience, strong skills in SQL and clear responsibilities. Apply through our \
        official website or contact hr@acme.com. Benefits package includes health insurance.";

    fn reason_mentions(assessment: &RiskAssessment, phrase: &str) -> bool {
        assessment
            .reasons
            .iter()
            .any(|r| r.contains(&format!("'{phrase}'")))
    }

    #[test]
    fn test_end_to_end_advance_fee_scam() {
        let assessment = RiskScorer.score(SCAM);
        for phrase in ["urgent", "registration fee", "bitcoin", "ssn"] {
            assert!(reason_mentions(&assessment, phrase), "missing reason for {phrase}");
        }
        assert!(assessment.score >= 70);
        assert_eq!(assessment.score, 100);
        assert_eq!(assessment.level, RiskLevel::High);
        assert_eq!(assessment.scam_type, Some(ScamType::AdvanceFee));
        assert_eq!(assessment.action_plan.len(), 5);
    }

    #[test]
    fn test_legitimate_posting_is_low() {
        let assessment = RiskScorer.score(LEGIT);
        assert_eq!(assessment.score, 0);
        assert_eq!(assessment.level, RiskLevel::Low);
        assert_eq!(assessment.scam_type, None);
        assert_eq!(assessment.scam_type_description, LEGITIMATE_OPPORTUNITY);
        assert!(assessment
            .reasons
            .iter()
            .any(|r| r == "No scam indicators detected - appears legitimate"));
        assert!(!assessment.verification_checklist.green_flags.is_empty());
    }

    #[test]
    fn test_short_text_floor() {
        for input in ["", "   ", "hi there", "a b c d e f g h i"] {
            let assessment = RiskScorer.score(input);
            assert_eq!(assessment.score, 50, "input {input:?}");
            assert_eq!(assessment.level, RiskLevel::Medium);
            assert!(assessment.action_plan.is_empty());
            assert_eq!(assessment.scam_type, None);
        }
    }

    #[test]
    fn test_short_text_ignores_rules() {
        // "ssn" alone would otherwise add 50.
        let assessment = RiskScorer.score("ssn ssn");
        assert_eq!(assessment.score, 50);
        assert_eq!(assessment.reasons, vec!["Text is too short to analyze properly"]);
    }

    #[test]
    fn test_score_always_within_bounds() {
        let inputs = [
            SCAM,
            LEGIT,
            "send money wire transfer bitcoin ssn bank details nigerian prince lottery!!",
            "linkedin.com indeed.com glassdoor.com official website hr department 401k pto",
            "plain sentence with nothing of note inside it",
        ];
        for input in inputs {
            let score = RiskScorer.score(input).score;
            assert!(score <= 100, "score {score} for {input:?}");
        }
    }

    #[test]
    fn test_scoring_is_idempotent_apart_from_timestamp() {
        let mut first = serde_json::to_value(RiskScorer.score(SCAM)).unwrap();
        let mut second = serde_json::to_value(RiskScorer.score(SCAM)).unwrap();
        first.as_object_mut().unwrap().remove("timestamp");
        second.as_object_mut().unwrap().remove("timestamp");
        assert_eq!(first, second);
    }

    #[test]
    fn test_adding_ssn_never_lowers_score() {
        let neutral = "Join our team to build dashboards for internal reporting tools";
        let base = RiskScorer.score(neutral).score;
        let with_ssn = RiskScorer.score(&format!("{neutral} ssn")).score;
        assert!(with_ssn >= base);
        assert_eq!(with_ssn, base + 50);
    }

    #[test]
    fn test_level_matches_score_bands() {
        // medium-risk "part time" (5) + "high salary" (10) + "flexible hours" (3) = 18
        let low = RiskScorer.score("part time job, high salary and flexible hours for you");
        assert_eq!(low.score, 18);
        assert_eq!(low.level, RiskLevel::Low);

        // "urgent" (15) + "guaranteed" (20) + "guarantee" (18) = 53
        let medium = RiskScorer.score("urgent hiring, income guaranteed for the right people");
        assert_eq!(medium.score, 53);
        assert_eq!(medium.level, RiskLevel::Medium);
        assert_eq!(medium.scam_type, Some(ScamType::Urgency));
    }

    #[test]
    fn test_pattern_rules_contribute() {
        let tally = RiskScorer.tally(&Sample::new("Please CLICK HERE to verify your account!!"));
        // "!!" 10, caps 8, link bait 15, verification 20
        assert_eq!(tally.points, 53);
        assert_eq!(tally.reasons.len(), 4);
    }

    #[test]
    fn test_category_scores_are_independent_of_main_score() {
        let assessment = RiskScorer.score("URGENT!! verify your identity and pay the fee");
        assert_eq!(assessment.category_scores.linguistic, 90);
        assert_eq!(assessment.category_scores.financial, 80);
        assert_eq!(assessment.category_scores.identity, 90);
    }

    #[test]
    fn test_wire_names_match_legacy_clients() {
        let value = serde_json::to_value(RiskScorer.score(SCAM)).unwrap();
        assert_eq!(value["risk_percentage"], 100);
        assert_eq!(value["risk_level"], "High");
        assert_eq!(value["scam_type"], "Advance Fee Fraud");
        assert!(value["scam_type_desc"].is_string());
        assert!(value["ai_explanation"].is_null());
    }
}
