//! preop-engine
//!
//! Surgical risk evaluation. Pure rules — no network or storage dependency.
//! One questionnaire in, one assessment out; nothing here holds state between
//! submissions.

pub mod fasting;
pub mod recommend;
pub mod rules;

use preop_core::models::assessment::RiskAssessment;
use preop_core::models::questionnaire::PatientQuestionnaire;

/// Evaluate a submitted questionnaire.
///
/// Computes the additive risk score, classifies the risk tier, derives
/// fasting guidance, and assembles the base recommendation list.
pub fn assess(questionnaire: &PatientQuestionnaire) -> RiskAssessment {
    let summary = rules::compute_score(questionnaire);
    let tier = rules::classify_tier(summary);
    let fasting = fasting::fasting_guidance(
        questionnaire.surgery_type,
        questionnaire.anesthesia_type,
    );
    let recommendations = recommend::base_recommendations(questionnaire, tier);

    RiskAssessment {
        tier,
        score: summary.points,
        fasting,
        recommendations,
    }
}
