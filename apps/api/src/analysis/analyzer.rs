//! Risk analysis service: deterministic scoring plus optional AI augmentation.

use tracing::{info, warn};

use crate::analysis::augment::{AiAugmenter, Augmentation};
use crate::analysis::rules::Sample;
use crate::analysis::scorer::{RiskAssessment, RiskScorer};
use crate::llm_client::SharedGenerator;

/// Entry point used by handlers and the aggregate report.
pub struct RiskAnalyzer {
    scorer: RiskScorer,
    augmenter: Option<AiAugmenter>,
}

impl RiskAnalyzer {
    pub fn new(generator: &SharedGenerator) -> Self {
        Self {
            scorer: RiskScorer,
            augmenter: AiAugmenter::from_shared(generator),
        }
    }

    /// Scores `text` and, when AI is configured, lets the narrative adjust it.
    /// Augmentation failures are logged and the deterministic result returned.
    pub async fn analyze(&self, text: &str) -> RiskAssessment {
        let sample = Sample::new(text);
        if sample.is_too_short() {
            return RiskAssessment::too_short();
        }
        let base = self.scorer.score(text);
        let Some(augmenter) = &self.augmenter else {
            return base;
        };

        match augmenter.augment(&sample.normalized, base.score).await {
            Ok(augmentation) => {
                info!(
                    "Job risk AI analysis applied: {} -> {}",
                    base.score, augmentation.adjusted_score
                );
                merge(base, augmentation, &sample.normalized)
            }
            Err(e) => {
                warn!("Job risk AI analysis skipped: {e}");
                base
            }
        }
    }
}

/// Re-derives level, tips, plan and scam type from the adjusted score.
fn merge(base: RiskAssessment, augmentation: Augmentation, normalized: &str) -> RiskAssessment {
    RiskAssessment::settle(
        augmentation.adjusted_score,
        base.reasons,
        base.category_scores,
        normalized,
        Some(augmentation.explanation),
    )
}
