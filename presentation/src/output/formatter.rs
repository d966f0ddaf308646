//! JSON output for the action results
//!
//! These are the wire shapes callers depend on, so every result is printed
//! exactly as it serializes.

use miniperplx_domain::{GroupConfig, PageMetadata, QuestionSet, SpeechResult};
use serde::Serialize;

/// Formats action results as pretty-printed JSON
pub struct JsonFormatter;

impl JsonFormatter {
    /// `{ "questions": [...] }`
    pub fn questions(questions: &QuestionSet) -> String {
        Self::to_json(questions)
    }

    /// `{ "audio": "data:audio/mp3;base64,..." }`
    pub fn speech(speech: &SpeechResult) -> String {
        Self::to_json(speech)
    }

    /// `{ "title", "description" }`, or `null` when the fetch failed
    pub fn metadata(metadata: Option<&PageMetadata>) -> String {
        Self::to_json(&metadata)
    }

    /// `{ "tools": [...], "systemPrompt": "..." }`
    pub fn group_config(config: &GroupConfig) -> String {
        Self::to_json(config)
    }

    fn to_json<T: Serialize + ?Sized>(value: &T) -> String {
        serde_json::to_string_pretty(value).unwrap_or_else(|_| "null".to_string())
    }
}
