use preop_core::models::assessment::RiskTier;
use preop_core::models::questionnaire::{Comorbidity, PatientQuestionnaire};

/// Assemble the base recommendation list for a questionnaire and its tier.
///
/// Lines are appended in a fixed order: age, comorbidities (in questionnaire
/// order), medication, then tier. Each condition is independent, so calling
/// this twice with the same inputs yields the same sequence.
pub fn base_recommendations(
    questionnaire: &PatientQuestionnaire,
    tier: RiskTier,
) -> Vec<String> {
    let mut recommendations = Vec::new();

    if questionnaire.age >= 70 {
        recommendations.push("Consider a geriatric pre-operative evaluation.".to_string());
    }

    for comorbidity in &questionnaire.comorbidities {
        if let Some(line) = comorbidity_recommendation(*comorbidity) {
            recommendations.push(line.to_string());
        }
    }

    if questionnaire.uses_anticoagulants {
        recommendations.push(
            "Anticoagulant use must be interrupted before surgery. Consult your \
             physician for a safe interruption plan."
                .to_string(),
        );
    }

    match tier {
        RiskTier::High => recommendations.push(
            "Your surgical risk is high. A complete cardiology evaluation is \
             strongly recommended before the procedure."
                .to_string(),
        ),
        RiskTier::Medium => recommendations.push(
            "Your surgical risk is moderate. Consider additional pre-operative \
             tests as directed by your physician."
                .to_string(),
        ),
        RiskTier::Low => {}
    }

    recommendations
}

/// Comorbidity-specific guidance. Only three conditions carry a line; the
/// rest of the catalog produces nothing here.
fn comorbidity_recommendation(comorbidity: Comorbidity) -> Option<&'static str> {
    match comorbidity {
        Comorbidity::DecompensatedDiabetes => Some(
            "Glucose levels must be brought under control before surgery. \
             Schedule a consultation with your endocrinologist.",
        ),
        Comorbidity::UncontrolledHypertension => Some(
            "Blood pressure must be controlled before the procedure. Keep \
             taking your medication as directed by your physician.",
        ),
        Comorbidity::HeartFailure => Some(
            "Stay current with your cardiac medications and tell the medical \
             team about any recent symptoms.",
        ),
        _ => None,
    }
}
