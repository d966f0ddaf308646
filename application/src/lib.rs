//! Application layer for miniperplx-actions
//!
//! This crate contains use cases, port definitions, and application configuration.
//! It depends only on the domain layer.

pub mod config;
pub mod error;
pub mod ports;
pub mod use_cases;

// Re-export commonly used types
pub use config::ActionParams;
pub use error::ActionError;
pub use ports::{
    clock::{Clock, FixedClock, SystemClock},
    credentials::CredentialSource,
    llm_gateway::{GatewayError, LlmGateway, ObjectRequest},
    page_fetcher::{FetchError, FetchOptions, PageFetcher},
    speech_provider::{SpeechProvider, SpeechProviderError},
};
pub use use_cases::fetch_metadata::FetchMetadataUseCase;
pub use use_cases::generate_speech::{GenerateSpeechError, GenerateSpeechUseCase};
pub use use_cases::resolve_group_config::ResolveGroupConfigUseCase;
pub use use_cases::suggest_questions::{SuggestQuestionsError, SuggestQuestionsUseCase};
