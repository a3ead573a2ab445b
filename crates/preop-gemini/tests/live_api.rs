//! Integration tests against the real Gemini API.
//!
//! These tests require a valid key in the `GEMINI_API_KEY` environment
//! variable and network access.
//!
//! Run with: `cargo test -p preop-gemini --test live_api -- --ignored`

use preop_core::models::assessment::RiskTier;
use preop_core::models::questionnaire::{
    AnesthesiaType, AsaClass, Comorbidity, PatientQuestionnaire, SurgeryComplexity, SurgeryType,
};
use preop_gemini::client::GeminiClient;
use preop_gemini::recommend::personalized_recommendations;

fn client_from_env() -> GeminiClient {
    let api_key = std::env::var("GEMINI_API_KEY").expect("GEMINI_API_KEY must be set");
    GeminiClient::new(api_key)
}

#[tokio::test]
#[ignore]
async fn generate_text_returns_nonempty_reply() {
    let client = client_from_env();
    let reply = client
        .generate_text("Reply with the single word: pong")
        .await
        .expect("generation should succeed");

    println!("model replied: {reply}");
    assert!(!reply.trim().is_empty());
}

#[tokio::test]
#[ignore]
async fn personalized_recommendations_survive_parsing() {
    let q = PatientQuestionnaire {
        age: 72,
        comorbidities: vec![
            Comorbidity::UncontrolledHypertension,
            Comorbidity::ControlledDiabetes,
        ],
        asa_class: AsaClass::Iii,
        uses_anticoagulants: true,
        uses_corticosteroids: false,
        recent_surgery: false,
        surgery_type: SurgeryType::Abdominal,
        anesthesia_type: AnesthesiaType::General,
        surgery_complexity: SurgeryComplexity::High,
    };

    let client = client_from_env();
    let lines = personalized_recommendations(&client, &q, RiskTier::High).await;

    println!("parsed {} recommendation lines:", lines.len());
    for line in &lines {
        println!("  - {line}");
    }

    assert!(
        !lines.is_empty(),
        "expected at least one parsed recommendation line"
    );
}
