use tracing::{info, warn};

use preop_core::models::assessment::{RiskAssessment, RiskTier};
use preop_core::models::questionnaire::PatientQuestionnaire;

use crate::client::GeminiClient;
use crate::{parse, prompt};

/// Ask Gemini for personalized recommendations for an assessed case.
///
/// One attempt, no retry. Never fails: any error is degraded to a single
/// informational line carrying the reason, so the caller's assessment flow
/// always runs to completion.
pub async fn personalized_recommendations(
    client: &GeminiClient,
    questionnaire: &PatientQuestionnaire,
    tier: RiskTier,
) -> Vec<String> {
    let prompt = prompt::case_summary_prompt(questionnaire, tier);

    match client.generate_text(&prompt).await {
        Ok(reply) => {
            let lines = parse::parse_recommendation_lines(&reply);
            info!(count = lines.len(), "personalized recommendations parsed");
            lines
        }
        Err(e) => {
            warn!(error = %e, "personalized recommendation call failed");
            vec![format!(
                "Additional personalized recommendations could not be generated. Error: {e}"
            )]
        }
    }
}

/// Evaluate a questionnaire and append Gemini-generated recommendations.
///
/// The deterministic assessment is computed first; the model call only ever
/// extends the recommendation list.
pub async fn assess_with_personalization(
    client: &GeminiClient,
    questionnaire: &PatientQuestionnaire,
) -> RiskAssessment {
    let mut assessment = preop_engine::assess(questionnaire);
    let extra = personalized_recommendations(client, questionnaire, assessment.tier).await;
    assessment.recommendations.extend(extra);
    assessment
}
