use serde::{Deserialize, Serialize};

use preop_core::models::assessment::{RiskAssessment, RiskTier};
use preop_core::models::questionnaire::PatientQuestionnaire;

/// Flattened view of a questionnaire and its assessment.
/// Every field is addressable by name in the report template.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ReportContext {
    pub generated_at: String,
    pub age: u32,
    pub comorbidities: String,
    pub asa_class: String,
    pub uses_anticoagulants: bool,
    pub uses_corticosteroids: bool,
    pub recent_surgery: bool,
    pub surgery_type: String,
    pub anesthesia_type: String,
    pub surgery_complexity: String,
    pub tier: String,
    pub tier_class: String,
    pub score: u32,
    pub solids_hours: u8,
    pub clear_liquids_hours: u8,
    pub recommendations: Vec<String>,
}

impl ReportContext {
    /// Build the template context. The generation time is supplied by the
    /// caller so rendering stays deterministic.
    pub fn new(
        questionnaire: &PatientQuestionnaire,
        assessment: &RiskAssessment,
        generated_at: &jiff::Zoned,
    ) -> Self {
        let comorbidities = if questionnaire.comorbidities.is_empty() {
            "None".to_string()
        } else {
            questionnaire
                .comorbidities
                .iter()
                .map(ToString::to_string)
                .collect::<Vec<_>>()
                .join(", ")
        };

        let tier_class = match assessment.tier {
            RiskTier::Low => "risk-low",
            RiskTier::Medium => "risk-medium",
            RiskTier::High => "risk-high",
        };

        ReportContext {
            generated_at: generated_at.strftime("%d/%m/%Y %H:%M").to_string(),
            age: questionnaire.age,
            comorbidities,
            asa_class: questionnaire.asa_class.to_string(),
            uses_anticoagulants: questionnaire.uses_anticoagulants,
            uses_corticosteroids: questionnaire.uses_corticosteroids,
            recent_surgery: questionnaire.recent_surgery,
            surgery_type: questionnaire.surgery_type.to_string(),
            anesthesia_type: questionnaire.anesthesia_type.to_string(),
            surgery_complexity: questionnaire.surgery_complexity.to_string(),
            tier: assessment.tier.to_string(),
            tier_class: tier_class.to_string(),
            score: assessment.score,
            solids_hours: assessment.fasting.solids_hours,
            clear_liquids_hours: assessment.fasting.clear_liquids_hours,
            recommendations: assessment.recommendations.clone(),
        }
    }
}
