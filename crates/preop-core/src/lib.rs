//! preop-core
//!
//! Pure domain types for the pre-operative assessment suite.
//! No I/O and no HTTP dependency — this is the shared vocabulary between the
//! risk engine, the Gemini collaborator, and the report exporter.

pub mod models;
