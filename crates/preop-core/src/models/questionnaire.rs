use std::fmt;

use serde::{Deserialize, Serialize};
use ts_rs::TS;

/// Answers collected by the pre-operative questionnaire form.
///
/// Immutable once submitted. Range and label validation happens at the form
/// boundary — the engine assumes a well-formed questionnaire.
#[derive(Debug, Clone, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct PatientQuestionnaire {
    pub age: u32,
    /// Comorbidities in the order the patient entered them.
    pub comorbidities: Vec<Comorbidity>,
    pub asa_class: AsaClass,
    pub uses_anticoagulants: bool,
    pub uses_corticosteroids: bool,
    /// Surgery within the prior 3 months.
    pub recent_surgery: bool,
    pub surgery_type: SurgeryType,
    pub anesthesia_type: AnesthesiaType,
    pub surgery_complexity: SurgeryComplexity,
}

/// The fixed comorbidity catalog offered by the questionnaire form.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, TS)]
#[serde(rename_all = "snake_case")]
#[ts(export)]
pub enum Comorbidity {
    ControlledHypertension,
    UncontrolledHypertension,
    ControlledDiabetes,
    DecompensatedDiabetes,
    HeartFailure,
    SevereCoronaryDisease,
    SevereCopd,
    Asthma,
    MorbidObesity,
    Hypothyroidism,
    ChronicKidneyDisease,
    LiverCirrhosis,
}

impl fmt::Display for Comorbidity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            Comorbidity::ControlledHypertension => "Controlled hypertension",
            Comorbidity::UncontrolledHypertension => "Uncontrolled hypertension",
            Comorbidity::ControlledDiabetes => "Controlled diabetes",
            Comorbidity::DecompensatedDiabetes => "Decompensated diabetes",
            Comorbidity::HeartFailure => "Heart failure",
            Comorbidity::SevereCoronaryDisease => "Severe coronary disease",
            Comorbidity::SevereCopd => "Severe COPD",
            Comorbidity::Asthma => "Asthma",
            Comorbidity::MorbidObesity => "Morbid obesity",
            Comorbidity::Hypothyroidism => "Hypothyroidism",
            Comorbidity::ChronicKidneyDisease => "Chronic kidney disease",
            Comorbidity::LiverCirrhosis => "Liver cirrhosis",
        };
        f.write_str(label)
    }
}

/// American Society of Anesthesiologists physical-status classification.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, TS)]
#[serde(rename_all = "UPPERCASE")]
#[ts(export)]
pub enum AsaClass {
    I,
    Ii,
    Iii,
    Iv,
    V,
}

impl fmt::Display for AsaClass {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            AsaClass::I => "ASA I",
            AsaClass::Ii => "ASA II",
            AsaClass::Iii => "ASA III",
            AsaClass::Iv => "ASA IV",
            AsaClass::V => "ASA V",
        };
        f.write_str(label)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, TS)]
#[serde(rename_all = "snake_case")]
#[ts(export)]
pub enum SurgeryType {
    General,
    Cardiac,
    Vascular,
    Neuro,
    Orthopedic,
    Abdominal,
    SimpleAmbulatory,
}

impl fmt::Display for SurgeryType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            SurgeryType::General => "General surgery",
            SurgeryType::Cardiac => "Cardiac surgery",
            SurgeryType::Vascular => "Vascular surgery",
            SurgeryType::Neuro => "Neurosurgery",
            SurgeryType::Orthopedic => "Orthopedic surgery",
            SurgeryType::Abdominal => "Abdominal surgery",
            SurgeryType::SimpleAmbulatory => "Simple ambulatory surgery",
        };
        f.write_str(label)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, TS)]
#[serde(rename_all = "snake_case")]
#[ts(export)]
pub enum AnesthesiaType {
    General,
    Regional,
    Local,
    Sedation,
}

impl fmt::Display for AnesthesiaType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            AnesthesiaType::General => "General",
            AnesthesiaType::Regional => "Regional",
            AnesthesiaType::Local => "Local",
            AnesthesiaType::Sedation => "Sedation",
        };
        f.write_str(label)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, TS)]
#[serde(rename_all = "snake_case")]
#[ts(export)]
pub enum SurgeryComplexity {
    Low,
    Medium,
    High,
}

impl fmt::Display for SurgeryComplexity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            SurgeryComplexity::Low => "Low",
            SurgeryComplexity::Medium => "Medium",
            SurgeryComplexity::High => "High",
        };
        f.write_str(label)
    }
}
