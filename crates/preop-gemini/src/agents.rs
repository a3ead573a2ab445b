//! Four-agent diagnostic consultation pipeline.
//!
//! A linear, stateless sequence of prompt templates over a conversation
//! transcript: intake gathers information turn by turn until the model
//! signals readiness, note-taking condenses the transcript into a clinical
//! note, diagnosis ranks hypotheses from the note, and conduct proposes next
//! steps. The only branching is the readiness keyword check.

use tracing::info;

use preop_core::models::consultation::{ConsultationMessage, ConsultationRole};

use crate::client::GeminiClient;
use crate::error::GeminiError;

/// Marker the intake agent appends when it judges the collected information
/// sufficient to proceed to diagnosis.
pub const READY_MARKER: &str = "READY";

/// The four fixed agent roles, in pipeline order.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AgentRole {
    Intake,
    NoteTaking,
    Diagnosis,
    Conduct,
}

impl AgentRole {
    pub fn system_prompt(&self) -> &'static str {
        match self {
            AgentRole::Intake => INTAKE_PROMPT,
            AgentRole::NoteTaking => NOTE_TAKING_PROMPT,
            AgentRole::Diagnosis => DIAGNOSIS_PROMPT,
            AgentRole::Conduct => CONDUCT_PROMPT,
        }
    }
}

const INTAKE_PROMPT: &str = "\
You are the intake agent of a clinical decision-support assistant. Your job \
is to gather the information needed to characterize the patient's complaint: \
onset, duration, intensity, associated symptoms, current medications, and \
relevant history. Ask one focused question at a time, in plain language. \
When the information already collected is sufficient for a diagnostic \
hypothesis, append the single word READY to the end of your reply.";

const NOTE_TAKING_PROMPT: &str = "\
You are the note-taking agent of a clinical decision-support assistant. From \
the conversation transcript you receive, produce a concise structured \
clinical note: chief complaint, history of present illness, associated \
symptoms, current medications, and relevant personal history. Output only \
the note, with no commentary.";

const DIAGNOSIS_PROMPT: &str = "\
You are the diagnosis agent of a clinical decision-support assistant. Based \
exclusively on the clinical note you receive, list the most likely \
diagnostic hypotheses in order of probability, each with a one-line \
justification. Do not recommend treatment.";

const CONDUCT_PROMPT: &str = "\
You are the conduct agent of a clinical decision-support assistant. From the \
clinical note and diagnostic hypotheses you receive, propose the recommended \
conduct: exams to request, referrals, and immediate care guidance. State \
clearly that this guidance does not replace an in-person medical evaluation.";

/// One intake exchange: the model's next question (or closing message) and
/// whether it declared the collected information sufficient.
#[derive(Debug, Clone)]
pub struct IntakeTurn {
    pub message: String,
    pub ready: bool,
}

/// The output of a completed consultation pipeline.
#[derive(Debug, Clone)]
pub struct ConsultationOutcome {
    pub notes: String,
    pub diagnosis: String,
    pub conduct: String,
}

/// Run one intake exchange against the transcript so far.
pub async fn intake_turn(
    client: &GeminiClient,
    transcript: &[ConsultationMessage],
) -> Result<IntakeTurn, GeminiError> {
    let reply = client
        .converse(AgentRole::Intake.system_prompt(), transcript)
        .await?;
    Ok(split_ready(&reply))
}

/// Detect the readiness marker in an intake reply and strip it from the
/// user-visible message.
pub fn split_ready(reply: &str) -> IntakeTurn {
    if reply.contains(READY_MARKER) {
        IntakeTurn {
            message: reply.replace(READY_MARKER, "").trim().to_string(),
            ready: true,
        }
    } else {
        IntakeTurn {
            message: reply.trim().to_string(),
            ready: false,
        }
    }
}

/// Condense the transcript into a structured clinical note.
pub async fn take_notes(
    client: &GeminiClient,
    transcript: &[ConsultationMessage],
) -> Result<String, GeminiError> {
    let block = conversation_block(transcript);
    let reply = client
        .generate_with_system(AgentRole::NoteTaking.system_prompt(), &block)
        .await?;
    Ok(reply.trim().to_string())
}

/// Rank diagnostic hypotheses from a clinical note.
pub async fn diagnose(client: &GeminiClient, notes: &str) -> Result<String, GeminiError> {
    let reply = client
        .generate_with_system(AgentRole::Diagnosis.system_prompt(), notes)
        .await?;
    Ok(reply.trim().to_string())
}

/// Propose conduct from the note and the diagnostic hypotheses.
pub async fn recommend_conduct(
    client: &GeminiClient,
    notes: &str,
    diagnosis: &str,
) -> Result<String, GeminiError> {
    let input = format!(
        "<clinical_note>\n{notes}\n</clinical_note>\n\n\
         <diagnostic_hypotheses>\n{diagnosis}\n</diagnostic_hypotheses>"
    );
    let reply = client
        .generate_with_system(AgentRole::Conduct.system_prompt(), &input)
        .await?;
    Ok(reply.trim().to_string())
}

/// Run the note-taking, diagnosis, and conduct stages over a transcript the
/// intake agent has declared ready. Each stage is a single model call; a
/// failure at any stage aborts the pipeline.
pub async fn run_consultation(
    client: &GeminiClient,
    transcript: &[ConsultationMessage],
) -> Result<ConsultationOutcome, GeminiError> {
    info!(messages = transcript.len(), "running consultation pipeline");

    let notes = take_notes(client, transcript).await?;
    let diagnosis = diagnose(client, &notes).await?;
    let conduct = recommend_conduct(client, &notes, &diagnosis).await?;

    info!("consultation pipeline complete");

    Ok(ConsultationOutcome {
        notes,
        diagnosis,
        conduct,
    })
}

/// Render a transcript as a structured block for single-message prompts.
///
/// Returns an XML-style block; empty transcripts produce an empty string.
pub fn conversation_block(messages: &[ConsultationMessage]) -> String {
    if messages.is_empty() {
        return String::new();
    }

    let mut block = String::from("<conversation>\n");

    for message in messages {
        let role = match message.role {
            ConsultationRole::User => "patient",
            ConsultationRole::Assistant => "assistant",
        };
        block.push_str(&format!("<message role=\"{role}\">\n"));
        block.push_str(&message.content);
        if !message.content.ends_with('\n') {
            block.push('\n');
        }
        block.push_str("</message>\n");
    }

    block.push_str("</conversation>");
    block
}
