//! Offline tests for the Gemini client and the flows built on it, against a
//! local mock server.

use httpmock::prelude::*;
use serde_json::json;
use uuid::Uuid;

use preop_core::models::assessment::RiskTier;
use preop_core::models::consultation::{Consultation, ConsultationRole};
use preop_core::models::questionnaire::{
    AnesthesiaType, AsaClass, Comorbidity, PatientQuestionnaire, SurgeryComplexity, SurgeryType,
};
use preop_gemini::agents::run_consultation;
use preop_gemini::client::GeminiClient;
use preop_gemini::error::GeminiError;
use preop_gemini::recommend::{assess_with_personalization, personalized_recommendations};

fn client_for(server: &MockServer) -> GeminiClient {
    GeminiClient::new("test-key").with_base_url(server.base_url())
}

fn reply_body(text: &str) -> serde_json::Value {
    json!({
        "candidates": [
            {"content": {"role": "model", "parts": [{"text": text}]}}
        ]
    })
}

fn questionnaire() -> PatientQuestionnaire {
    PatientQuestionnaire {
        age: 55,
        comorbidities: vec![Comorbidity::ControlledHypertension],
        asa_class: AsaClass::I,
        uses_anticoagulants: false,
        uses_corticosteroids: false,
        recent_surgery: false,
        surgery_type: SurgeryType::General,
        anesthesia_type: AnesthesiaType::General,
        surgery_complexity: SurgeryComplexity::Low,
    }
}

#[tokio::test]
async fn generate_text_joins_candidate_parts() {
    let server = MockServer::start_async().await;
    let mock = server
        .mock_async(|when, then| {
            when.method(POST)
                .path("/models/gemini-pro:generateContent")
                .query_param("key", "test-key");
            then.status(200).json_body(json!({
                "candidates": [
                    {"content": {"role": "model", "parts": [
                        {"text": "Hello "},
                        {"text": "world"}
                    ]}}
                ]
            }));
        })
        .await;

    let text = client_for(&server)
        .generate_text("say hello")
        .await
        .expect("generation should succeed");

    assert_eq!(text, "Hello world");
    mock.assert_async().await;
}

#[tokio::test]
async fn non_success_status_surfaces_as_api_error() {
    let server = MockServer::start_async().await;
    server
        .mock_async(|when, then| {
            when.method(POST).path("/models/gemini-pro:generateContent");
            then.status(403).body("API key not valid");
        })
        .await;

    let err = client_for(&server)
        .generate_text("say hello")
        .await
        .expect_err("403 must fail");

    match err {
        GeminiError::Api { status, body } => {
            assert_eq!(status, 403);
            assert!(body.contains("API key not valid"));
        }
        other => panic!("expected Api error, got: {other:?}"),
    }
}

#[tokio::test]
async fn empty_candidate_list_is_a_parse_error() {
    let server = MockServer::start_async().await;
    server
        .mock_async(|when, then| {
            when.method(POST).path("/models/gemini-pro:generateContent");
            then.status(200).json_body(json!({"candidates": []}));
        })
        .await;

    let err = client_for(&server)
        .generate_text("say hello")
        .await
        .expect_err("empty candidates must fail");

    assert!(matches!(err, GeminiError::ResponseParse(_)));
}

#[tokio::test]
async fn personalized_recommendations_parse_the_model_reply() {
    let server = MockServer::start_async().await;
    server
        .mock_async(|when, then| {
            when.method(POST).path("/models/gemini-pro:generateContent");
            then.status(200).json_body(reply_body(
                "1. Keep your blood pressure log with you on the day of surgery.\n\
                 2. Bring a current list of all medications you take.\n\
                 3. Arrange transportation home after the procedure.",
            ));
        })
        .await;

    let client = client_for(&server);
    let lines = personalized_recommendations(&client, &questionnaire(), RiskTier::Low).await;

    assert_eq!(lines.len(), 3);
    assert_eq!(
        lines[0],
        "Keep your blood pressure log with you on the day of surgery."
    );
}

/// A failed call degrades to one informational line; it never errors out.
#[tokio::test]
async fn failed_call_degrades_to_a_fallback_line() {
    let server = MockServer::start_async().await;
    server
        .mock_async(|when, then| {
            when.method(POST).path("/models/gemini-pro:generateContent");
            then.status(500).body("internal error");
        })
        .await;

    let client = client_for(&server);
    let lines = personalized_recommendations(&client, &questionnaire(), RiskTier::Low).await;

    assert_eq!(lines.len(), 1);
    assert!(
        lines[0].starts_with("Additional personalized recommendations could not be generated.")
    );
    assert!(lines[0].contains("500"));
}

#[tokio::test]
async fn assessment_completes_with_appended_model_lines() {
    let server = MockServer::start_async().await;
    server
        .mock_async(|when, then| {
            when.method(POST).path("/models/gemini-pro:generateContent");
            then.status(200).json_body(reply_body(
                "1. Maintain your usual antihypertensive schedule.\n\
                 2. Avoid alcohol for 48 hours before the procedure.\n\
                 3. Confirm your arrival time with the surgical center.",
            ));
        })
        .await;

    let client = client_for(&server);
    let assessment = assess_with_personalization(&client, &questionnaire()).await;

    assert_eq!(assessment.score, 3);
    assert_eq!(assessment.tier, RiskTier::Low);
    // Low tier produces no base recommendations; only the model lines remain.
    assert_eq!(assessment.recommendations.len(), 3);
    assert_eq!(
        assessment.recommendations[2],
        "Confirm your arrival time with the surgical center."
    );
}

/// The three post-intake stages run in sequence, each against its own agent
/// prompt.
#[tokio::test]
async fn consultation_pipeline_runs_all_three_stages() {
    let server = MockServer::start_async().await;

    let notes_mock = server
        .mock_async(|when, then| {
            when.method(POST)
                .path("/models/gemini-pro:generateContent")
                .body_contains("note-taking agent");
            then.status(200)
                .json_body(reply_body("Chief complaint: headache for three days."));
        })
        .await;

    let diagnosis_mock = server
        .mock_async(|when, then| {
            when.method(POST)
                .path("/models/gemini-pro:generateContent")
                .body_contains("diagnosis agent");
            then.status(200).json_body(reply_body(
                "1. Tension headache - most consistent with the reported pattern.",
            ));
        })
        .await;

    let conduct_mock = server
        .mock_async(|when, then| {
            when.method(POST)
                .path("/models/gemini-pro:generateContent")
                .body_contains("conduct agent");
            then.status(200).json_body(reply_body(
                "Request a neurological evaluation. This guidance does not replace \
                 an in-person medical evaluation.",
            ));
        })
        .await;

    let mut consultation = Consultation::new(Uuid::new_v4());
    consultation.push_message(ConsultationRole::Assistant, "What brings you in today?");
    consultation.push_message(ConsultationRole::User, "A headache for three days.");

    let client = client_for(&server);
    let outcome = run_consultation(&client, &consultation.messages)
        .await
        .expect("pipeline should complete");

    assert_eq!(outcome.notes, "Chief complaint: headache for three days.");
    assert!(outcome.diagnosis.contains("Tension headache"));
    assert!(outcome.conduct.contains("does not replace"));

    notes_mock.assert_async().await;
    diagnosis_mock.assert_async().await;
    conduct_mock.assert_async().await;
}
