//! preop-gemini
//!
//! Gemini model invocation for the pre-operative suite: personalized
//! recommendation generation for the risk form, and the four-agent
//! diagnostic consultation pipeline.

pub mod agents;
pub mod client;
pub mod error;
pub mod parse;
pub mod prompt;
pub mod recommend;
