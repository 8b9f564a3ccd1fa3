//! Fixed, tier-selected advice attached to a risk assessment.
//!
//! Nothing here is computed from weights: tips and action plans are literal
//! text picked by risk level, and the scam type is the first keyword cluster
//! that matches.

use serde::{Deserialize, Serialize};

use crate::analysis::rules::{contains_any, GREEN_FLAG_MARKERS, RED_FLAG_MARKERS};
use crate::models::risk::RiskLevel;

/// Broad fraud pattern a posting most resembles.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ScamType {
    #[serde(rename = "Advance Fee Fraud")]
    AdvanceFee,
    #[serde(rename = "Phishing / Identity Theft")]
    Phishing,
    #[serde(rename = "Reshipping Scam")]
    Reshipping,
    #[serde(rename = "Urgency / Click-bait")]
    Urgency,
    #[serde(rename = "Unknown / Generic Risk")]
    Generic,
}

/// Clusters in priority order; the first cluster with a hit wins.
const SCAM_CLUSTERS: &[(ScamType, &[&str])] = &[
    (
        ScamType::AdvanceFee,
        &[
            "registration fee",
            "processing fee",
            "application fee",
            "send money",
            "wire transfer",
            "bitcoin",
            "check",
        ],
    ),
    (
        ScamType::Phishing,
        &["ssn", "bank details", "credit card", "verify your account", "login"],
    ),
    (
        ScamType::Reshipping,
        &["package", "shipping", "warehouse", "receiving"],
    ),
    (
        ScamType::Urgency,
        &["click here", "urgent", "immediately", "act now"],
    ),
];

pub const LEGITIMATE_OPPORTUNITY: &str = "This appears to be a legitimate opportunity.";

impl ScamType {
    pub fn classify(normalized: &str) -> Self {
        SCAM_CLUSTERS
            .iter()
            .find(|(_, needles)| contains_any(normalized, needles))
            .map(|(kind, _)| *kind)
            .unwrap_or(ScamType::Generic)
    }

    pub fn description(&self) -> &'static str {
        match self {
            ScamType::AdvanceFee => "The scammer asks for money upfront (for equipment, software, or fees) before you start working. Legitimate employers NEVER ask for money.",
            ScamType::Phishing => "The goal is to steal your personal information (SSN, Bank Info) to commit identity fraud.",
            ScamType::Reshipping => "You are asked to receive and reship packages. You are essentially moving stolen goods.",
            ScamType::Urgency => "Scammers use urgency to make you act without thinking. Be very careful with links.",
            ScamType::Generic => "Examples include vague job descriptions or unrealistic promises.",
        }
    }
}

pub fn safety_tips(level: RiskLevel) -> Vec<String> {
    let tips: &[&str] = match level {
        RiskLevel::Low => &[
            "✓ This appears to be a legitimate job posting",
            "Verify the company's official website",
            "Check the job posting on official platforms (LinkedIn, Indeed, company website)",
            "Research the company and read reviews",
        ],
        RiskLevel::Medium => &[
            "⚠️ Be cautious and verify all details",
            "Do not provide personal information upfront",
            "Check company registration and reviews",
            "Contact the company directly through official channels",
            "Never pay to apply for a job",
        ],
        RiskLevel::High => &[
            "🚨 HIGH RISK - This appears to be a SCAM",
            "⚠️ DO NOT send any money or fees",
            "⚠️ DO NOT provide bank details, SSN, or credit card information",
            "⚠️ DO NOT click on suspicious links",
            "⚠️ Report this to the appropriate authorities",
            "⚠️ Block and delete this message",
        ],
    };
    to_owned(tips)
}

/// Tips for input too short to score.
pub fn short_text_tips() -> Vec<String> {
    to_owned(&[
        "Please provide more details about the job offer",
        "Verify the source of the message",
    ])
}

pub fn action_plan(level: RiskLevel) -> Vec<String> {
    let plan: &[&str] = match level {
        RiskLevel::High => &[
            "⛔ STOP Communication: Do not reply to the message.",
            "💰 DO NOT PAY: Never send money for a job application.",
            "🔒 Protect Info: Do not share SSN or Bank details.",
            "🚩 Report It: Report the user/message to the platform (LinkedIn, Indeed, etc.).",
            "🛡️ Check Accounts: If you clicked a link, change your passwords immediately.",
        ],
        RiskLevel::Medium => &[
            "🕵️ Verify Sender: Check if the email domain matches the official company website.",
            "📞 Call the Company: Find the official number (not from the message) and verify the role.",
            "❌ No Money: Refuse any requests for money or 'equipment checks'.",
            "📝 Ask Questions: specific questions about the role. Scammers often hate details.",
        ],
        RiskLevel::Low => &[
            "✅ Proceed with Caution: Standard interview protocols apply.",
            "📄 Research: Look up the company on Glassdoor.",
            "🤝 Interview: Ensure you have a video or in-person interview.",
        ],
    };
    to_owned(plan)
}

/// Reasons split into alarm and reassurance lists, plus the tips shown with them.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct VerificationChecklist {
    pub red_flags: Vec<String>,
    pub green_flags: Vec<String>,
    pub tips: Vec<String>,
}

impl VerificationChecklist {
    /// Partitions by matching each reason's own text against the flag markers.
    pub fn from_reasons(reasons: &[String], tips: &[String]) -> Self {
        let matching = |markers: &[&str]| -> Vec<String> {
            reasons
                .iter()
                .filter(|r| contains_any(&r.to_lowercase(), markers))
                .cloned()
                .collect()
        };
        Self {
            red_flags: matching(RED_FLAG_MARKERS),
            green_flags: matching(GREEN_FLAG_MARKERS),
            tips: tips.to_vec(),
        }
    }
}

fn to_owned(lines: &[&str]) -> Vec<String> {
    lines.iter().map(|s| s.to_string()).collect()
}
