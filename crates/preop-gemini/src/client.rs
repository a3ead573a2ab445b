//! HTTP client for the Gemini `generateContent` API.
//!
//! The API key travels as a URL query parameter, matching how Google's
//! endpoint authenticates; it is never logged. The base URL is injectable so
//! tests can point the client at a local mock server.

use serde::{Deserialize, Serialize};
use tracing::info;

use preop_core::models::consultation::{ConsultationMessage, ConsultationRole};

use crate::error::GeminiError;

pub const DEFAULT_BASE_URL: &str = "https://generativelanguage.googleapis.com/v1beta";
pub const DEFAULT_MODEL: &str = "gemini-pro";

/// A configured Gemini API client.
#[derive(Debug, Clone)]
pub struct GeminiClient {
    http: reqwest::Client,
    base_url: String,
    model: String,
    api_key: String,
}

impl GeminiClient {
    pub fn new(api_key: impl Into<String>) -> Self {
        GeminiClient {
            http: reqwest::Client::new(),
            base_url: DEFAULT_BASE_URL.to_string(),
            model: DEFAULT_MODEL.to_string(),
            api_key: api_key.into(),
        }
    }

    /// Override the API base URL (used by tests to target a mock server).
    pub fn with_base_url(mut self, base_url: impl Into<String>) -> Self {
        self.base_url = base_url.into();
        self
    }

    pub fn with_model(mut self, model: impl Into<String>) -> Self {
        self.model = model.into();
        self
    }

    pub fn model(&self) -> &str {
        &self.model
    }

    /// Single-turn generation with no system instruction.
    pub async fn generate_text(&self, prompt: &str) -> Result<String, GeminiError> {
        let request = GenerateContentRequest {
            system_instruction: None,
            contents: vec![Content::user(prompt)],
        };
        self.send(&request).await
    }

    /// Single-turn generation under a system instruction.
    pub async fn generate_with_system(
        &self,
        system_prompt: &str,
        user_text: &str,
    ) -> Result<String, GeminiError> {
        let request = GenerateContentRequest {
            system_instruction: Some(Content::system(system_prompt)),
            contents: vec![Content::user(user_text)],
        };
        self.send(&request).await
    }

    /// Send a multi-turn conversation and return the model's reply.
    ///
    /// The caller provides the full message history; nothing is cached
    /// between calls.
    pub async fn converse(
        &self,
        system_prompt: &str,
        messages: &[ConsultationMessage],
    ) -> Result<String, GeminiError> {
        let contents = messages
            .iter()
            .map(|message| {
                let role = match message.role {
                    ConsultationRole::User => "user",
                    ConsultationRole::Assistant => "model",
                };
                Content {
                    role: Some(role.to_string()),
                    parts: vec![Part {
                        text: message.content.clone(),
                    }],
                }
            })
            .collect();

        let request = GenerateContentRequest {
            system_instruction: Some(Content::system(system_prompt)),
            contents,
        };
        self.send(&request).await
    }

    /// Core invocation. Returns the concatenated text parts of the first
    /// candidate.
    async fn send(&self, request: &GenerateContentRequest) -> Result<String, GeminiError> {
        let url = format!("{}/models/{}:generateContent", self.base_url, self.model);

        info!(model = %self.model, "invoking Gemini generateContent");

        let response = self
            .http
            .post(&url)
            .query(&[("key", self.api_key.as_str())])
            .json(request)
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            return Err(GeminiError::Api {
                status: status.as_u16(),
                body,
            });
        }

        let parsed: GenerateContentResponse = response
            .json()
            .await
            .map_err(|e| GeminiError::ResponseParse(e.to_string()))?;

        let candidate = parsed
            .candidates
            .first()
            .ok_or_else(|| GeminiError::ResponseParse("no candidates in response".to_string()))?;

        let content = candidate
            .content
            .as_ref()
            .ok_or_else(|| GeminiError::ResponseParse("candidate has no content".to_string()))?;

        let text = content
            .parts
            .iter()
            .map(|part| part.text.as_str())
            .collect::<Vec<_>>()
            .join("");

        info!(model = %self.model, text_len = text.len(), "Gemini response received");

        Ok(text)
    }
}

// ── Wire types ───────────────────────────────────────────────────────────────

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
struct GenerateContentRequest {
    #[serde(skip_serializing_if = "Option::is_none")]
    system_instruction: Option<Content>,
    contents: Vec<Content>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
struct Content {
    #[serde(skip_serializing_if = "Option::is_none")]
    role: Option<String>,
    parts: Vec<Part>,
}

impl Content {
    fn user(text: &str) -> Self {
        Content {
            role: Some("user".to_string()),
            parts: vec![Part {
                text: text.to_string(),
            }],
        }
    }

    fn system(text: &str) -> Self {
        Content {
            role: None,
            parts: vec![Part {
                text: text.to_string(),
            }],
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
struct Part {
    text: String,
}

#[derive(Debug, Deserialize)]
struct GenerateContentResponse {
    #[serde(default)]
    candidates: Vec<Candidate>,
}

#[derive(Debug, Deserialize)]
struct Candidate {
    content: Option<Content>,
}
