use std::fmt;

use serde::{Deserialize, Serialize};
use ts_rs::TS;

/// Final categorical risk level assigned to a patient.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, TS)]
#[serde(rename_all = "snake_case")]
#[ts(export)]
pub enum RiskTier {
    Low,
    Medium,
    High,
}

impl fmt::Display for RiskTier {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            RiskTier::Low => "Low",
            RiskTier::Medium => "Medium",
            RiskTier::High => "High",
        };
        f.write_str(label)
    }
}

/// Minimum pre-anesthesia fasting times, in hours.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct FastingGuidance {
    pub solids_hours: u8,
    pub clear_liquids_hours: u8,
}

/// The derived output of one questionnaire submission.
///
/// Produced once per submission and never mutated afterwards.
#[derive(Debug, Clone, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct RiskAssessment {
    pub tier: RiskTier,
    pub score: u32,
    pub fasting: FastingGuidance,
    /// Generation order; duplicates allowed.
    pub recommendations: Vec<String>,
}
