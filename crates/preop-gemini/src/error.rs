use thiserror::Error;

#[derive(Debug, Error)]
pub enum GeminiError {
    #[error("request transport failed: {0}")]
    Transport(#[from] reqwest::Error),

    #[error("Gemini API returned status {status}: {body}")]
    Api { status: u16, body: String },

    #[error("response parsing failed: {0}")]
    ResponseParse(String),
}
