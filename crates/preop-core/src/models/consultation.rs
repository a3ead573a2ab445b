use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// A persisted consultation between a patient and the diagnostic assistant.
///
/// The storage collaborator writes this after every call/response pair so the
/// conversation is durable and traceable.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Consultation {
    pub id: Uuid,
    pub patient_id: Uuid,
    pub messages: Vec<ConsultationMessage>,
    pub created_at: jiff::Timestamp,
    pub updated_at: jiff::Timestamp,
}

impl Consultation {
    pub fn new(patient_id: Uuid) -> Self {
        let now = jiff::Timestamp::now();
        Consultation {
            id: Uuid::new_v4(),
            patient_id,
            messages: Vec::new(),
            created_at: now,
            updated_at: now,
        }
    }

    /// Append a message and stamp the conversation as updated.
    pub fn push_message(&mut self, role: ConsultationRole, content: impl Into<String>) {
        let now = jiff::Timestamp::now();
        self.messages.push(ConsultationMessage {
            role,
            content: content.into(),
            timestamp: now,
        });
        self.updated_at = now;
    }
}

/// A single message in a persisted consultation.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ConsultationMessage {
    pub role: ConsultationRole,
    pub content: String,
    pub timestamp: jiff::Timestamp,
}

/// Role of a consultation message.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ConsultationRole {
    User,
    Assistant,
}
