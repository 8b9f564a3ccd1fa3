use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct CareerOption {
    pub title: String,
    pub salary: String,
    pub growth: String,
    pub skills: Vec<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct RoadmapStep {
    pub title: String,
    pub notes: String,
    /// Search query for a tutorial video covering this step.
    pub video_query: String,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct RoadmapPhase {
    pub phase: String,
    pub steps: Vec<RoadmapStep>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SalaryBenchmarks {
    pub entry: String,
    pub mid: String,
    pub senior: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CareerRoadmap {
    pub skill_searched: String,
    pub market_outlook: String,
    pub careers: Vec<CareerOption>,
    pub detailed_roadmap: Vec<RoadmapPhase>,
    pub salary_benchmarks: SalaryBenchmarks,
    /// 1 (easy) to 10 (hard).
    pub difficulty_rating: u8,
    pub improvement_tips: Vec<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Alternative {
    pub title: String,
    pub reason: String,
}

/// Redirect payload for goals that are not real careers.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RealityCheck {
    pub skill_searched: String,
    pub is_realistic: bool,
    pub message: String,
    pub realistic_alternatives: Vec<Alternative>,
    pub helpful_tip: String,
}

/// Response body of `/career-guidance`, discriminated by `status`.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(tag = "status")]
pub enum CareerGuidance {
    #[serde(rename = "unrealistic_career")]
    Unrealistic(RealityCheck),
    #[serde(rename = "success")]
    Roadmap(CareerRoadmap),
}
