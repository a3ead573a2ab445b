use preop_core::models::assessment::RiskTier;
use preop_core::models::questionnaire::PatientQuestionnaire;

/// Build the structured case summary sent to Gemini for personalized
/// recommendations, with the fixed instruction to produce exactly three
/// objective lines.
pub fn case_summary_prompt(questionnaire: &PatientQuestionnaire, tier: RiskTier) -> String {
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

    format!(
        "Based on a patient with the following characteristics:\n\
         - Age: {} years\n\
         - Comorbidities: {}\n\
         - ASA classification: {}\n\
         - Uses anticoagulants: {}\n\
         - Uses corticosteroids: {}\n\
         - Surgery type: {}\n\
         - Surgery complexity: {}\n\
         \n\
         Provide 3 specific recommendations for this patient in the \
         pre-operative period, considering that their surgical risk was \
         classified as {}.\n\
         Give objective and practical recommendations, without introductions \
         or conclusions.",
        questionnaire.age,
        comorbidities,
        questionnaire.asa_class,
        yes_no(questionnaire.uses_anticoagulants),
        yes_no(questionnaire.uses_corticosteroids),
        questionnaire.surgery_type,
        questionnaire.surgery_complexity,
        tier,
    )
}

fn yes_no(flag: bool) -> &'static str {
    if flag { "Yes" } else { "No" }
}
