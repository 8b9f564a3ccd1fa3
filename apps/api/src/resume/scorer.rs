//! Resume authenticity scoring.
//!
//! Starts from a base of 10 and adds a fixed weight for each suspicious
//! pattern. Positive indicators are advisory and never lower the score.

use chrono::{DateTime, Utc};
use once_cell::sync::Lazy;
use regex::Regex;
use serde::{Deserialize, Serialize};

use crate::analysis::rules::EMAIL_RE;
use crate::config::TunableRules;
use crate::models::risk::{clamp_score, RiskLevel};
use crate::resume::extract::{usable_text, ExtractError};

const BASE_SCORE: i32 = 10;
const BUZZWORD_LIMIT: usize = 5;
const VAGUE_LIMIT: usize = 3;
const TECH_SKILLS_NEEDED: usize = 4;

static BUZZWORD_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"\b(?:expert|master|guru|ninja)\b").expect("static regex"));
static VAGUE_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"\b(?:various|many|several|multiple)\b").expect("static regex"));
static YEAR_RE: Lazy<Regex> = Lazy::new(|| Regex::new(r"\d{4}").expect("static regex"));
static DATE_RANGE_RE: Lazy<Regex> = Lazy::new(|| Regex::new(r"\d{4}.*\d{4}").expect("static regex"));
static TECH_SKILL_RE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"\b(?:python|javascript|react|node|sql|aws)\b").expect("static regex")
});

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ResumeAssessment {
    #[serde(rename = "risk_percentage")]
    pub score: u8,
    #[serde(rename = "risk_level")]
    pub level: RiskLevel,
    pub reasons: Vec<String>,
    pub warnings: Vec<String>,
    pub positives: Vec<String>,
    pub message: String,
    pub suggestions: Vec<String>,
    pub improvement_plan: Vec<String>,
    pub word_count: usize,
    pub timestamp: DateTime<Utc>,
}

#[derive(Debug, Clone)]
pub struct ResumeScorer {
    mismatch_languages: Vec<String>,
    mismatch_threshold: usize,
}

impl ResumeScorer {
    pub fn new(rules: &TunableRules) -> Self {
        Self {
            mismatch_languages: rules
                .skill_mismatch_languages
                .iter()
                .map(|l| l.to_lowercase())
                .collect(),
            mismatch_threshold: rules.skill_mismatch_threshold,
        }
    }

    /// Scores free text, rejecting input with no usable content.
    pub fn score_text(&self, text: &str) -> Result<ResumeAssessment, ExtractError> {
        let text = usable_text(text.to_string())?;
        Ok(self.score(&text))
    }

    pub fn score(&self, text: &str) -> ResumeAssessment {
        let text = text.to_lowercase();

        let issues = [
            (
                "Excessive Keywords",
                BUZZWORD_RE.find_iter(&text).count() > BUZZWORD_LIMIT,
                15,
            ),
            (
                "Unverifiable Experience",
                text.contains("10+ years") || text.contains("15+ years"),
                10,
            ),
            ("Missing Dates", !YEAR_RE.is_match(&text), 5),
            (
                "Certification Without Proof",
                text.contains("certified")
                    && !text.contains("certificate")
                    && !text.contains("certification"),
                20,
            ),
            ("Skill Mismatch", self.has_skill_mismatch(&text), 10),
            (
                "Vague Descriptions",
                VAGUE_RE.find_iter(&text).count() > VAGUE_LIMIT,
                8,
            ),
        ];

        let mut points = BASE_SCORE;
        let mut reasons = Vec::new();
        for (label, fired, weight) in issues {
            if fired {
                points += weight;
                reasons.push(format!("Potential issue: {label}"));
            }
        }
        if reasons.is_empty() {
            reasons.push("No major issues detected".to_string());
        }

        let score = clamp_score(points);
        let level = RiskLevel::from_score(score);

        ResumeAssessment {
            score,
            level,
            reasons,
            warnings: warnings(&text),
            positives: positives(&text),
            message: message(level).to_string(),
            suggestions: suggestions(level),
            improvement_plan: improvement_plan(level),
            word_count: text.split_whitespace().count(),
            timestamp: Utc::now(),
        }
    }

    fn has_skill_mismatch(&self, text: &str) -> bool {
        if self.mismatch_threshold == 0 {
            return false;
        }
        self.mismatch_languages
            .iter()
            .filter(|lang| text.contains(lang.as_str()))
            .count()
            >= self.mismatch_threshold
    }
}

fn positives(text: &str) -> Vec<String> {
    let indicators = [
        (
            text.contains("education") || text.contains("university") || text.contains("degree"),
            "Has education section",
        ),
        (DATE_RANGE_RE.is_match(text), "Has date ranges for experience"),
        (
            TECH_SKILL_RE.find_iter(text).count() >= TECH_SKILLS_NEEDED,
            "Lists specific technical skills",
        ),
        (EMAIL_RE.is_match(text), "Has contact information"),
        (
            text.contains("project") || text.contains("portfolio"),
            "Mentions projects or portfolio",
        ),
    ];
    indicators
        .into_iter()
        .filter(|(present, _)| *present)
        .map(|(_, label)| label.to_string())
        .collect()
}

/// Missing evidence a recruiter will look for first.
fn warnings(text: &str) -> Vec<String> {
    let mut out = Vec::new();
    if !EMAIL_RE.is_match(text) {
        out.push("No contact email found".to_string());
    }
    if !DATE_RANGE_RE.is_match(text) {
        out.push("No employment date ranges found".to_string());
    }
    out
}

fn message(level: RiskLevel) -> &'static str {
    match level {
        RiskLevel::Low => "Resume appears authentic with minor concerns",
        RiskLevel::Medium => "Resume has some areas that need verification",
        RiskLevel::High => "Resume has significant authenticity concerns",
    }
}

fn suggestions(level: RiskLevel) -> Vec<String> {
    let lines: &[&str] = match level {
        RiskLevel::Low => &[
            "Tailor your resume for each job application (keywords + relevance)",
            "Ensure LinkedIn profile matches resume and is up to date",
            "Apply to roles that match your experience and network with recruiters",
        ],
        RiskLevel::Medium => &[
            "Add specific achievements and quantify impact (e.g., improved X by Y%)",
            "Include date ranges for employment and education",
            "List relevant projects and provide links to code/portfolio",
            "Add verifiable certifications or details for claimed certifications",
        ],
        RiskLevel::High => &[
            "Review and remove unverifiable claims",
            "Provide supporting evidence for certifications and roles",
            "Add clear contact information and project links",
            "Consider rebuilding resume with a template focused on clarity and verification",
        ],
    };
    lines.iter().map(|s| s.to_string()).collect()
}

fn improvement_plan(level: RiskLevel) -> Vec<String> {
    let steps: &[&str] = match level {
        RiskLevel::Low => &[
            "Step 1: Refresh titles, dates and contact details before each application round",
            "Step 2: Add your most recent achievement with a measurable outcome",
            "Step 3: Check that portfolio and GitHub links still resolve",
            "Step 4: Keep LinkedIn in sync with the resume",
        ],
        RiskLevel::Medium => &[
            "Step 1: Add dates and contact information",
            "Step 2: Replace vague words with measurable achievements",
            "Step 3: Add 1-2 portfolio projects with descriptions and links",
            "Step 4: Proofread and get peer feedback",
        ],
        RiskLevel::High => &[
            "Step 1: Verify all dates and roles; remove inflated claims",
            "Step 2: Add project links, GitHub, portfolio or published work",
            "Step 3: Obtain verifiable certifications or references",
            "Step 4: Reformat resume for clarity and include measurable outcomes",
        ],
    };
    steps.iter().map(|s| s.to_string()).collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    const CLEAN: &str = "Jane Doe - jane@example.com. Education: BSc, University of Leeds 2015 - 2019. \
        Backend engineer at Acme 2019 - 2023 shipping python, sql, aws and react services. \
        Portfolio and project write-ups on GitHub.";

    const INFLATED: &str = "Certified expert, master, guru and ninja. Expert master with 10+ years \
        across various teams, many stacks, several clouds and multiple domains. \
        Python, JavaScript, Java and C++.";

    fn scorer() -> ResumeScorer {
        ResumeScorer::new(&TunableRules::default())
    }

    #[test]
    fn test_clean_resume_stays_at_base() {
        let assessment = scorer().score(CLEAN);
        assert_eq!(assessment.score, 10);
        assert_eq!(assessment.level, RiskLevel::Low);
        assert_eq!(assessment.reasons, vec!["No major issues detected"]);
        assert_eq!(assessment.positives.len(), 5);
        assert!(assessment.warnings.is_empty());
        assert_eq!(assessment.improvement_plan.len(), 4);
    }

    #[test]
    fn test_every_issue_fires_on_inflated_resume() {
        let assessment = scorer().score(INFLATED);
        // 10 + 15 + 10 + 5 + 20 + 10 + 8
        assert_eq!(assessment.score, 78);
        assert_eq!(assessment.level, RiskLevel::High);
        assert_eq!(assessment.reasons.len(), 6);
        assert_eq!(assessment.reasons[0], "Potential issue: Excessive Keywords");
        assert_eq!(assessment.message, "Resume has significant authenticity concerns");
    }

    #[test]
    fn test_positives_do_not_lower_score() {
        let bare = scorer().score("certified scrum lead, 2020 - 2022");
        let rich = scorer().score(
            "certified scrum lead, 2020 - 2022, jane@x.io, university degree, project portfolio",
        );
        assert_eq!(bare.score, rich.score);
        assert_eq!(rich.score, 30);
        assert_eq!(rich.level, RiskLevel::Medium);
    }

    #[test]
    fn test_certificate_mention_clears_certified_claim() {
        let assessment = scorer().score("certified architect, certificate id 1234-5678");
        assert_eq!(assessment.score, 10);
    }

    #[test]
    fn test_skill_mismatch_threshold_is_tunable() {
        let text = "worked 2018 - 2020 with python, java and javascript";
        assert_eq!(scorer().score(text).score, 10);

        let rules = TunableRules {
            skill_mismatch_threshold: 3,
            ..TunableRules::default()
        };
        let tuned = ResumeScorer::new(&rules).score(text);
        assert_eq!(tuned.score, 20);
        assert!(tuned.reasons.iter().any(|r| r == "Potential issue: Skill Mismatch"));
    }

    #[test]
    fn test_short_text_is_rejected() {
        assert!(matches!(
            scorer().score_text("  cv  "),
            Err(ExtractError::Empty)
        ));
        assert!(scorer().score_text(CLEAN).is_ok());
    }

    #[test]
    fn test_word_count() {
        assert_eq!(scorer().score("one two  three\nfour").word_count, 4);
    }
}
