//! Domain error types

use thiserror::Error;

/// Domain-level errors
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum DomainError {
    #[error("Unknown search group: {0}")]
    UnknownSearchGroup(String),

    #[error("Unknown voice: {0}")]
    UnknownVoice(String),

    #[error("Unknown tool: {0}")]
    UnknownTool(String),

    #[error("Expected exactly {expected} questions, got {actual}")]
    QuestionCount { expected: usize, actual: usize },

    #[error("Question {0} is empty")]
    EmptyQuestion(usize),

    #[error("Invalid audio payload: {0}")]
    InvalidAudio(String),
}
