use serde::{Deserialize, Serialize};
use ts_rs::TS;

use preop_core::models::assessment::RiskTier;
use preop_core::models::questionnaire::{
    AsaClass, Comorbidity, PatientQuestionnaire, SurgeryComplexity,
};

/// One independent scoring rule: a predicate over the questionnaire and the
/// points it contributes when the predicate holds.
///
/// Rules do not interact; the total score is the sum over all applicable
/// rules, in any order.
pub struct ScoringRule {
    pub id: &'static str,
    pub points: u32,
    /// Severe rules also increment the severe-factor count, which can force
    /// the high tier regardless of the raw score.
    pub severe: bool,
    pub applies: fn(&PatientQuestionnaire) -> bool,
}

/// The aggregate of a scoring pass.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct ScoreSummary {
    pub points: u32,
    pub severe_factors: u32,
}

/// The full scoring rule table.
///
/// Age brackets, ASA classes, and complexity levels are encoded as mutually
/// exclusive predicates, so at most one rule per group applies. ASA I and V
/// carry no rule, as do chronic kidney disease and liver cirrhosis — they are
/// accepted inputs that contribute nothing.
pub fn scoring_rules() -> &'static [ScoringRule] {
    static RULES: std::sync::LazyLock<Vec<ScoringRule>> = std::sync::LazyLock::new(|| {
        fn has(q: &PatientQuestionnaire, c: Comorbidity) -> bool {
            q.comorbidities.contains(&c)
        }

        vec![
            ScoringRule {
                id: "age_70_plus",
                points: 3,
                severe: false,
                applies: |q| q.age >= 70,
            },
            ScoringRule {
                id: "age_60_to_69",
                points: 2,
                severe: false,
                applies: |q| (60..70).contains(&q.age),
            },
            ScoringRule {
                id: "age_50_to_59",
                points: 1,
                severe: false,
                applies: |q| (50..60).contains(&q.age),
            },
            ScoringRule {
                id: "decompensated_diabetes",
                points: 3,
                severe: true,
                applies: |q| has(q, Comorbidity::DecompensatedDiabetes),
            },
            ScoringRule {
                id: "heart_failure",
                points: 3,
                severe: true,
                applies: |q| has(q, Comorbidity::HeartFailure),
            },
            ScoringRule {
                id: "severe_coronary_disease",
                points: 3,
                severe: true,
                applies: |q| has(q, Comorbidity::SevereCoronaryDisease),
            },
            ScoringRule {
                id: "severe_copd",
                points: 3,
                severe: true,
                applies: |q| has(q, Comorbidity::SevereCopd),
            },
            ScoringRule {
                id: "uncontrolled_hypertension",
                points: 2,
                severe: false,
                applies: |q| has(q, Comorbidity::UncontrolledHypertension),
            },
            ScoringRule {
                id: "controlled_diabetes",
                points: 2,
                severe: false,
                applies: |q| has(q, Comorbidity::ControlledDiabetes),
            },
            ScoringRule {
                id: "morbid_obesity",
                points: 2,
                severe: false,
                applies: |q| has(q, Comorbidity::MorbidObesity),
            },
            ScoringRule {
                id: "controlled_hypertension",
                points: 1,
                severe: false,
                applies: |q| has(q, Comorbidity::ControlledHypertension),
            },
            ScoringRule {
                id: "asthma",
                points: 1,
                severe: false,
                applies: |q| has(q, Comorbidity::Asthma),
            },
            ScoringRule {
                id: "hypothyroidism",
                points: 1,
                severe: false,
                applies: |q| has(q, Comorbidity::Hypothyroidism),
            },
            ScoringRule {
                id: "anticoagulants",
                points: 2,
                severe: false,
                applies: |q| q.uses_anticoagulants,
            },
            ScoringRule {
                id: "corticosteroids",
                points: 1,
                severe: false,
                applies: |q| q.uses_corticosteroids,
            },
            ScoringRule {
                id: "asa_iv",
                points: 4,
                severe: false,
                applies: |q| q.asa_class == AsaClass::Iv,
            },
            ScoringRule {
                id: "asa_iii",
                points: 3,
                severe: false,
                applies: |q| q.asa_class == AsaClass::Iii,
            },
            ScoringRule {
                id: "asa_ii",
                points: 1,
                severe: false,
                applies: |q| q.asa_class == AsaClass::Ii,
            },
            ScoringRule {
                id: "recent_surgery",
                points: 2,
                severe: false,
                applies: |q| q.recent_surgery,
            },
            ScoringRule {
                id: "complexity_high",
                points: 3,
                severe: false,
                applies: |q| q.surgery_complexity == SurgeryComplexity::High,
            },
            ScoringRule {
                id: "complexity_medium",
                points: 2,
                severe: false,
                applies: |q| q.surgery_complexity == SurgeryComplexity::Medium,
            },
            ScoringRule {
                id: "complexity_low",
                points: 1,
                severe: false,
                applies: |q| q.surgery_complexity == SurgeryComplexity::Low,
            },
        ]
    });
    &RULES
}

/// Fold the rule table over a questionnaire.
pub fn compute_score(questionnaire: &PatientQuestionnaire) -> ScoreSummary {
    scoring_rules()
        .iter()
        .filter(|rule| (rule.applies)(questionnaire))
        .fold(
            ScoreSummary {
                points: 0,
                severe_factors: 0,
            },
            |acc, rule| ScoreSummary {
                points: acc.points + rule.points,
                severe_factors: acc.severe_factors + u32::from(rule.severe),
            },
        )
}

/// Classify the risk tier from a score summary.
///
/// The severe-factor override is checked before the score thresholds: two
/// severe comorbidities force the high tier even when the raw score is low.
pub fn classify_tier(summary: ScoreSummary) -> RiskTier {
    if summary.severe_factors >= 2 || summary.points >= 10 {
        RiskTier::High
    } else if summary.points >= 6 {
        RiskTier::Medium
    } else {
        RiskTier::Low
    }
}
