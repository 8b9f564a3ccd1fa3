use std::sync::Arc;

use crate::analysis::analyzer::RiskAnalyzer;
use crate::career::advisor::CareerAdvisor;
use crate::company::resolver::CompanyResolver;
use crate::config::Config;
use crate::llm_client::SharedGenerator;
use crate::resume::scorer::ResumeScorer;

/// Shared application state injected into all route handlers via Axum extractors.
/// Everything here is immutable after startup.
#[derive(Clone)]
pub struct AppState {
    pub config: Arc<Config>,
    pub analyzer: Arc<RiskAnalyzer>,
    pub resume_scorer: Arc<ResumeScorer>,
    pub resolver: Arc<CompanyResolver>,
    pub advisor: Arc<CareerAdvisor>,
}

impl AppState {
    /// Wires every engine from `config`. `generator` is `None` when AI is disabled.
    pub fn new(config: Config, generator: SharedGenerator) -> Self {
        Self {
            analyzer: Arc::new(RiskAnalyzer::new(&generator)),
            resume_scorer: Arc::new(ResumeScorer::new(&config.rules)),
            resolver: Arc::new(CompanyResolver::new(&generator)),
            advisor: Arc::new(CareerAdvisor::new(&generator, &config.rules)),
            config: Arc::new(config),
        }
    }
}
