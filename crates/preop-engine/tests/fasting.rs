use preop_core::models::assessment::FastingGuidance;
use preop_core::models::questionnaire::{AnesthesiaType, SurgeryType};
use preop_engine::fasting::fasting_guidance;

#[test]
fn general_anesthesia_defaults_to_eight_and_two() {
    assert_eq!(
        fasting_guidance(SurgeryType::General, AnesthesiaType::General),
        FastingGuidance {
            solids_hours: 8,
            clear_liquids_hours: 2
        }
    );
}

#[test]
fn regional_anesthesia_also_requires_two_hours_clear_liquids() {
    let guidance = fasting_guidance(SurgeryType::Orthopedic, AnesthesiaType::Regional);
    assert_eq!(guidance.clear_liquids_hours, 2);
    assert_eq!(guidance.solids_hours, 8);
}

#[test]
fn local_and_sedation_require_one_hour_clear_liquids() {
    for anesthesia in [AnesthesiaType::Local, AnesthesiaType::Sedation] {
        let guidance = fasting_guidance(SurgeryType::General, anesthesia);
        assert_eq!(guidance.clear_liquids_hours, 1);
    }
}

#[test]
fn abdominal_surgery_extends_solids_to_ten() {
    assert_eq!(
        fasting_guidance(SurgeryType::Abdominal, AnesthesiaType::General),
        FastingGuidance {
            solids_hours: 10,
            clear_liquids_hours: 2
        }
    );
}

/// The abdominal override applies regardless of anesthesia type.
#[test]
fn abdominal_with_local_anesthesia_keeps_ten_hours() {
    assert_eq!(
        fasting_guidance(SurgeryType::Abdominal, AnesthesiaType::Local),
        FastingGuidance {
            solids_hours: 10,
            clear_liquids_hours: 1
        }
    );
}

#[test]
fn simple_ambulatory_with_local_anesthesia_shortens_to_six() {
    assert_eq!(
        fasting_guidance(SurgeryType::SimpleAmbulatory, AnesthesiaType::Local),
        FastingGuidance {
            solids_hours: 6,
            clear_liquids_hours: 1
        }
    );
}

/// The six-hour shortcut needs both conditions; simple ambulatory surgery
/// under general anesthesia keeps the baseline.
#[test]
fn simple_ambulatory_without_local_keeps_baseline() {
    assert_eq!(
        fasting_guidance(SurgeryType::SimpleAmbulatory, AnesthesiaType::General),
        FastingGuidance {
            solids_hours: 8,
            clear_liquids_hours: 2
        }
    );
}

/// Guidance depends on nothing but its two inputs.
#[test]
fn identical_inputs_yield_identical_guidance() {
    for surgery in [
        SurgeryType::General,
        SurgeryType::Cardiac,
        SurgeryType::Vascular,
        SurgeryType::Neuro,
        SurgeryType::Orthopedic,
        SurgeryType::Abdominal,
        SurgeryType::SimpleAmbulatory,
    ] {
        for anesthesia in [
            AnesthesiaType::General,
            AnesthesiaType::Regional,
            AnesthesiaType::Local,
            AnesthesiaType::Sedation,
        ] {
            assert_eq!(
                fasting_guidance(surgery, anesthesia),
                fasting_guidance(surgery, anesthesia)
            );
        }
    }
}
