use preop_core::models::assessment::FastingGuidance;
use preop_core::models::questionnaire::{AnesthesiaType, SurgeryType};

/// Derive minimum fasting times from the surgery and anesthesia types.
///
/// Solids baseline is 8 hours. The overrides are checked in a fixed order;
/// the two surgery-type conditions are mutually exclusive today, but the
/// order is load-bearing if either condition is ever broadened.
pub fn fasting_guidance(
    surgery_type: SurgeryType,
    anesthesia_type: AnesthesiaType,
) -> FastingGuidance {
    let clear_liquids_hours = match anesthesia_type {
        AnesthesiaType::General | AnesthesiaType::Regional => 2,
        AnesthesiaType::Local | AnesthesiaType::Sedation => 1,
    };

    let solids_hours = if surgery_type == SurgeryType::Abdominal {
        10
    } else if surgery_type == SurgeryType::SimpleAmbulatory
        && anesthesia_type == AnesthesiaType::Local
    {
        6
    } else {
        8
    };

    FastingGuidance {
        solids_hours,
        clear_liquids_hours,
    }
}
