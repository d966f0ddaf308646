//! Action error taxonomy
//!
//! Each use case has its own error enum; [`ActionError`] folds them into the
//! categories callers act on.

use crate::ports::llm_gateway::GatewayError;
use crate::ports::page_fetcher::FetchError;
use crate::use_cases::generate_speech::GenerateSpeechError;
use crate::use_cases::suggest_questions::SuggestQuestionsError;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum ActionError {
    /// A required credential is missing; no network call was made
    #[error("Configuration error: {0}")]
    Configuration(String),

    /// The AI provider failed or returned output violating the schema
    #[error("Provider error: {0}")]
    Provider(String),

    /// Transport-level failure
    #[error("Network error: {0}")]
    Network(String),

    /// HTML could not be parsed
    #[error("Parse error: {0}")]
    Parse(String),

    /// The caller's input cannot be sent at all
    #[error("Invalid input: {0}")]
    InvalidInput(String),
}

impl ActionError {
    pub fn is_configuration(&self) -> bool {
        matches!(self, ActionError::Configuration(_))
    }
}

impl From<SuggestQuestionsError> for ActionError {
    fn from(err: SuggestQuestionsError) -> Self {
        match err {
            SuggestQuestionsError::EmptyHistory => ActionError::InvalidInput(err.to_string()),
            SuggestQuestionsError::Gateway(GatewayError::MissingCredential(_)) => {
                ActionError::Configuration(err.to_string())
            }
            SuggestQuestionsError::Gateway(_) | SuggestQuestionsError::NonConforming(_) => {
                ActionError::Provider(err.to_string())
            }
        }
    }
}

impl From<GenerateSpeechError> for ActionError {
    fn from(err: GenerateSpeechError) -> Self {
        match err {
            GenerateSpeechError::MissingCredential(_) => {
                ActionError::Configuration(err.to_string())
            }
            GenerateSpeechError::Provider(_) => ActionError::Network(err.to_string()),
        }
    }
}

impl From<FetchError> for ActionError {
    fn from(err: FetchError) -> Self {
        match err {
            FetchError::InvalidUrl(_) => ActionError::InvalidInput(err.to_string()),
            FetchError::Network(_) => ActionError::Network(err.to_string()),
            FetchError::Parse(_) => ActionError::Parse(err.to_string()),
        }
    }
}
