//! Career guidance engine.

use std::sync::Arc;

use serde::Deserialize;

use crate::career::catalog;
use crate::career::models::{
    CareerGuidance, CareerOption, CareerRoadmap, RoadmapPhase, SalaryBenchmarks,
};
use crate::career::prompts::{CAREER_COUNSELOR_SYSTEM, CAREER_ROADMAP_TEMPLATE};
use crate::career::reality;
use crate::config::TunableRules;
use crate::llm_client::prompts::json_system;
use crate::llm_client::{generate_json, GenerationOptions, LlmError, SharedGenerator, TextGenerator};

const ROADMAP_OPTIONS: GenerationOptions = GenerationOptions {
    temperature: 0.7,
    top_p: None,
    top_k: None,
    max_output_tokens: Some(4096),
    json: true,
};

#[derive(Debug, Deserialize)]
#[serde(default)]
struct AiRoadmap {
    market_outlook: String,
    careers: Vec<CareerOption>,
    detailed_roadmap: Vec<RoadmapPhase>,
    salary_benchmarks: Option<SalaryBenchmarks>,
    difficulty_rating: f64,
    improvement_tips: Vec<String>,
}

impl Default for AiRoadmap {
    fn default() -> Self {
        Self {
            market_outlook: "Stable growth".to_string(),
            careers: Vec::new(),
            detailed_roadmap: Vec::new(),
            salary_benchmarks: None,
            difficulty_rating: 5.0,
            improvement_tips: Vec::new(),
        }
    }
}

pub struct CareerAdvisor {
    generator: Option<Arc<dyn TextGenerator>>,
    blocklist: Vec<String>,
}

impl CareerAdvisor {
    pub fn new(generator: &SharedGenerator, rules: &TunableRules) -> Self {
        Self {
            generator: generator.clone(),
            blocklist: rules
                .fictional_keywords
                .iter()
                .map(|k| k.to_lowercase())
                .collect(),
        }
    }

    pub async fn guide(&self, skill: &str) -> CareerGuidance {
        let skill = skill.trim().to_lowercase();

        if let Some(check) = reality::check(&skill, &self.blocklist) {
            tracing::info!(skill = %skill, "Career goal redirected as unrealistic");
            return CareerGuidance::Unrealistic(check);
        }

        if let Some(generator) = &self.generator {
            match ai_roadmap(generator.as_ref(), &skill).await {
                Ok(roadmap) => return CareerGuidance::Roadmap(roadmap),
                Err(e) => tracing::warn!(skill = %skill, "AI career roadmap failed: {e}"),
            }
        }

        CareerGuidance::Roadmap(catalog::fallback_roadmap(&skill))
    }
}

async fn ai_roadmap(generator: &dyn TextGenerator, skill: &str) -> Result<CareerRoadmap, LlmError> {
    let system = json_system(CAREER_COUNSELOR_SYSTEM);
    let prompt = CAREER_ROADMAP_TEMPLATE.replace("{skill}", skill);
    let reply: AiRoadmap = generate_json(generator, &system, &prompt, ROADMAP_OPTIONS).await?;

    Ok(CareerRoadmap {
        skill_searched: skill.to_string(),
        market_outlook: reply.market_outlook,
        careers: reply.careers,
        detailed_roadmap: reply.detailed_roadmap,
        salary_benchmarks: reply.salary_benchmarks.unwrap_or_default(),
        difficulty_rating: reply.difficulty_rating.round().clamp(1.0, 10.0) as u8,
        improvement_tips: reply.improvement_tips,
    })
}
