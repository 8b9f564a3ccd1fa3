//! Optional AI adjustment of a deterministic risk score.
//!
//! The model returns a free-text narrative. Its wording nudges the score by
//! bounded amounts; the narrative is never parsed as structured data. Any
//! failure leaves the deterministic assessment untouched.

use std::sync::Arc;

use crate::analysis::prompts::{
    MESSAGE_CHAR_LIMIT, RISK_NARRATIVE_PROMPT_TEMPLATE, RISK_NARRATIVE_SYSTEM,
};
use crate::llm_client::{GenerationOptions, LlmError, SharedGenerator, TextGenerator};
use crate::models::risk::clamp_score;

/// Narrative mentions fraud at all.
const FRAUD_NUDGE: i32 = 20;
/// Narrative is emphatic about it.
const EMPHATIC_NUDGE: i32 = 15;
/// Narrative leans towards legitimacy.
const LEGITIMACY_NUDGE: i32 = -10;

const NARRATIVE_OPTIONS: GenerationOptions = GenerationOptions {
    temperature: 0.4,
    top_p: Some(0.95),
    top_k: Some(40),
    max_output_tokens: Some(1024),
    json: false,
};

/// Successful augmentation: the adjusted score and the narrative behind it.
#[derive(Debug, Clone, PartialEq)]
pub struct Augmentation {
    pub adjusted_score: u8,
    pub explanation: String,
}

/// Sends the message to the hosted model and applies the adjustment policy.
pub struct AiAugmenter {
    generator: Arc<dyn TextGenerator>,
}

impl AiAugmenter {
    pub fn new(generator: Arc<dyn TextGenerator>) -> Self {
        Self { generator }
    }

    pub fn from_shared(generator: &SharedGenerator) -> Option<Self> {
        generator.clone().map(Self::new)
    }

    pub async fn augment(&self, normalized: &str, base_score: u8) -> Result<Augmentation, LlmError> {
        let excerpt: String = normalized.chars().take(MESSAGE_CHAR_LIMIT).collect();
        let prompt = RISK_NARRATIVE_PROMPT_TEMPLATE.replace("{message}", &excerpt);

        let explanation = self
            .generator
            .generate(RISK_NARRATIVE_SYSTEM, &prompt, NARRATIVE_OPTIONS)
            .await?;

        Ok(Augmentation {
            adjusted_score: adjust_score(base_score, &explanation),
            explanation,
        })
    }
}

/// Applies the keyword nudges to `base`. All nudges are independent and the
/// result is clamped once at the end.
pub fn adjust_score(base: u8, narrative: &str) -> u8 {
    let lower = narrative.to_lowercase();
    let mut delta = 0;

    if lower.contains("scam") || lower.contains("fraud") {
        delta += FRAUD_NUDGE;
    }
    if lower.contains("highly suspicious") || lower.contains("definitely a scam") {
        delta += EMPHATIC_NUDGE;
    }
    if lower.contains("legitimate") && lower.contains("appears to be") {
        delta += LEGITIMACY_NUDGE;
    }

    clamp_score(i32::from(base) + delta)
}
