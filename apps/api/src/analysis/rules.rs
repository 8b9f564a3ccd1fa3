//! Rule tables for job-posting risk scoring.
//!
//! Every point of a risk score traces back to one entry in this file. The
//! tables are immutable process-wide constants; the scorer only folds them.

use once_cell::sync::Lazy;
use regex::Regex;

/// A literal phrase and the signed score delta it contributes when present.
#[derive(Debug, Clone, Copy)]
pub struct KeywordRule {
    pub phrase: &'static str,
    pub weight: i32,
}

const fn kw(phrase: &'static str, weight: i32) -> KeywordRule {
    KeywordRule { phrase, weight }
}

/// Which table a keyword came from. Drives the reason wording.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum KeywordTier {
    High,
    Medium,
    Legitimate,
}

impl KeywordTier {
    pub fn rules(&self) -> &'static [KeywordRule] {
        match self {
            KeywordTier::High => HIGH_RISK_KEYWORDS,
            KeywordTier::Medium => MEDIUM_RISK_KEYWORDS,
            KeywordTier::Legitimate => LEGITIMATE_KEYWORDS,
        }
    }

    pub fn reason(&self, phrase: &str) -> String {
        match self {
            KeywordTier::High => format!("Contains high-risk keyword: '{phrase}'"),
            KeywordTier::Medium => format!("Contains medium-risk indicator: '{phrase}'"),
            KeywordTier::Legitimate => format!("Contains legitimate indicator: '{phrase}'"),
        }
    }
}

/// Evaluation order of the keyword tables.
pub const KEYWORD_TIERS: [KeywordTier; 3] =
    [KeywordTier::High, KeywordTier::Medium, KeywordTier::Legitimate];

pub const HIGH_RISK_KEYWORDS: &[KeywordRule] = &[
    kw("urgent", 15),
    kw("urgently", 15),
    kw("immediately", 12),
    kw("asap", 10),
    kw("guaranteed", 20),
    kw("guarantee", 18),
    kw("guaranteed income", 25),
    kw("easy money", 25),
    kw("quick money", 20),
    kw("work from home", 8),
    kw("no experience needed", 15),
    kw("no experience required", 15),
    kw("registration fee", 40),
    kw("processing fee", 35),
    kw("application fee", 35),
    kw("send money", 50),
    kw("wire transfer", 40),
    kw("western union", 35),
    kw("moneygram", 35),
    kw("bitcoin", 30),
    kw("cryptocurrency", 25),
    kw("crypto", 25),
    kw("bank details", 45),
    kw("bank account", 40),
    kw("account number", 40),
    kw("ssn", 50),
    kw("social security", 50),
    kw("social security number", 50),
    kw("credit card", 35),
    kw("paypal", 20),
    kw("venmo", 20),
    kw("zelle", 20),
    kw("congratulations", 5),
    kw("you have been selected", 10),
    kw("you won", 15),
    kw("prize", 20),
    kw("lottery", 25),
    kw("inheritance", 30),
    kw("nigerian prince", 50),
    kw("royal family", 40),
    kw("unclaimed funds", 35),
];

pub const MEDIUM_RISK_KEYWORDS: &[KeywordRule] = &[
    kw("high salary", 10),
    kw("unlimited income", 15),
    kw("passive income", 12),
    kw("get rich", 20),
    kw("become rich", 18),
    kw("millionaire", 15),
    kw("part time", 5),
    kw("flexible hours", 3),
    kw("no interview", 8),
    kw("instant approval", 10),
    kw("pre-approved", 8),
    kw("limited time", 8),
    kw("act now", 10),
    kw("call now", 8),
    kw("text now", 8),
    kw("reply immediately", 12),
];

pub const LEGITIMATE_KEYWORDS: &[KeywordRule] = &[
    kw("careers.google.com", -20),
    kw("linkedin.com", -15),
    kw("indeed.com", -15),
    kw("glassdoor.com", -15),
    kw("monster.com", -10),
    kw("official website", -15),
    kw("apply through", -10),
    kw("company website", -10),
    kw("hr department", -10),
    kw("human resources", -10),
    kw("interview process", -10),
    kw("background check", -5),
    kw("references required", -5),
    kw("benefits package", -8),
    kw("health insurance", -8),
    kw("401k", -5),
    kw("pto", -5),
    kw("paid time off", -5),
];

/// Input text in the two shapes the detectors need.
#[derive(Debug, Clone)]
pub struct Sample<'a> {
    /// Trimmed text with its original casing.
    pub original: &'a str,
    /// Trimmed, lower-cased text. Keyword and phrase rules only see this.
    pub normalized: String,
}

impl<'a> Sample<'a> {
    pub fn new(text: &'a str) -> Self {
        let original = text.trim();
        Self {
            original,
            normalized: original.to_lowercase(),
        }
    }

    /// Below this many non-whitespace characters nothing is scored.
    pub const MIN_SIGNIFICANT_CHARS: usize = 10;

    pub fn is_too_short(&self) -> bool {
        self.original
            .chars()
            .filter(|c| !c.is_whitespace())
            .count()
            < Self::MIN_SIGNIFICANT_CHARS
    }
}

/// A structural check with a fixed delta and the reason it reports.
pub struct PatternRule {
    pub detector: fn(&Sample) -> bool,
    pub weight: i32,
    pub reason: &'static str,
}

static EXCLAMATION_RUN_RE: Lazy<Regex> = Lazy::new(|| Regex::new(r"!{2,}").expect("static regex"));
static SHOUTING_RE: Lazy<Regex> = Lazy::new(|| Regex::new(r"[A-Z]{5,}").expect("static regex"));
pub(crate) static EMAIL_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"[\w.-]+@[\w.-]+\.\w+").expect("static regex"));
static PHONE_RE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"(\+?\d{1,3}[-.\s]?)?\(?\d{3}\)?[-.\s]?\d{3}[-.\s]?\d{4}").expect("static regex")
});

/// Job-posting vocabulary; three or more distinct terms earn the bonus.
pub const PROFESSIONAL_TERMS: [&str; 8] = [
    "position",
    "role",
    "responsibilities",
    "qualifications",
    "requirements",
    "experience",
    "skills",
    "education",
];
pub const PROFESSIONAL_TERMS_NEEDED: usize = 3;

pub fn has_exclamation_run(sample: &Sample) -> bool {
    EXCLAMATION_RUN_RE.is_match(&sample.normalized)
}

/// Runs on the original casing; lower-cased text can never shout.
pub fn has_shouting(sample: &Sample) -> bool {
    SHOUTING_RE.is_match(sample.original)
}

fn has_link_bait(sample: &Sample) -> bool {
    contains_any(&sample.normalized, &["click here", "click this link"])
}

fn requests_account_verification(sample: &Sample) -> bool {
    contains_any(
        &sample.normalized,
        &["verify your account", "confirm your identity"],
    )
}

fn has_professional_language(sample: &Sample) -> bool {
    PROFESSIONAL_TERMS
        .iter()
        .filter(|term| sample.normalized.contains(*term))
        .count()
        >= PROFESSIONAL_TERMS_NEEDED
}

fn has_contact_info(sample: &Sample) -> bool {
    EMAIL_RE.is_match(&sample.normalized) || PHONE_RE.is_match(&sample.normalized)
}

/// Applied in this order, each independently additive.
pub const PATTERN_RULES: &[PatternRule] = &[
    PatternRule {
        detector: has_exclamation_run,
        weight: 10,
        reason: "Excessive exclamation marks (common in scams)",
    },
    PatternRule {
        detector: has_shouting,
        weight: 8,
        reason: "Excessive capitalization (common in scam messages)",
    },
    PatternRule {
        detector: has_link_bait,
        weight: 15,
        reason: "Contains suspicious link request",
    },
    PatternRule {
        detector: requests_account_verification,
        weight: 20,
        reason: "Requests account verification (common phishing tactic)",
    },
    PatternRule {
        detector: has_professional_language,
        weight: -15,
        reason: "Contains professional job posting language",
    },
    PatternRule {
        detector: has_contact_info,
        weight: -5,
        reason: "Contains contact information (legitimate postings usually include this)",
    },
];

pub fn contains_any(text: &str, needles: &[&str]) -> bool {
    needles.iter().any(|n| text.contains(n))
}

// Supplementary category breakdown. Independent of the main score.

pub const URGENCY_WORDS: &[&str] = &["urgent", "immediately", "asap"];
pub const FINANCIAL_WORDS: &[&str] = &["fee", "money", "transfer", "bitcoin", "pay", "bank"];
pub const IDENTITY_WORDS: &[&str] = &["ssn", "social security", "identity", "verify"];

// Substrings that classify a finished reason as a red or green flag.

pub const RED_FLAG_MARKERS: &[&str] = &[
    "high-risk",
    "suspicious",
    "excessive",
    "requests account",
    "send money",
    "bank details",
    "ssn",
    "verify your account",
    "click here",
];

pub const GREEN_FLAG_MARKERS: &[&str] = &[
    "professional job posting language",
    "contact information",
    "legitimate indicator",
    "no scam indicators",
];
