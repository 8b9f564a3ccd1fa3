use serde::{Deserialize, Serialize};

/// Scores below this are Low.
pub const LOW_CEILING: i32 = 30;
/// Scores below this (and at least `LOW_CEILING`) are Medium.
pub const MEDIUM_CEILING: i32 = 70;

/// Low/Medium/High banding shared by job, resume and bulk scoring.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum RiskLevel {
    Low,
    Medium,
    High,
}

impl RiskLevel {
    /// Pure function of the (already clamped) score.
    pub fn from_score(score: u8) -> Self {
        let score = i32::from(score);
        if score < LOW_CEILING {
            RiskLevel::Low
        } else if score < MEDIUM_CEILING {
            RiskLevel::Medium
        } else {
            RiskLevel::High
        }
    }
}

/// Clamps a signed running total into the 0–100 score range.
pub fn clamp_score(raw: i32) -> u8 {
    raw.clamp(0, 100) as u8
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_level_boundaries() {
        assert_eq!(RiskLevel::from_score(0), RiskLevel::Low);
        assert_eq!(RiskLevel::from_score(29), RiskLevel::Low);
        assert_eq!(RiskLevel::from_score(30), RiskLevel::Medium);
        assert_eq!(RiskLevel::from_score(69), RiskLevel::Medium);
        assert_eq!(RiskLevel::from_score(70), RiskLevel::High);
        assert_eq!(RiskLevel::from_score(100), RiskLevel::High);
    }

    #[test]
    fn test_clamp_score_bounds() {
        assert_eq!(clamp_score(-45), 0);
        assert_eq!(clamp_score(55), 55);
        assert_eq!(clamp_score(185), 100);
    }

    #[test]
    fn test_level_serializes_as_label() {
        assert_eq!(serde_json::to_string(&RiskLevel::High).unwrap(), "\"High\"");
    }
}
