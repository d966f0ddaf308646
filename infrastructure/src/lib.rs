//! Infrastructure layer for miniperplx-actions
//!
//! This crate contains adapters that implement the ports defined
//! in the application layer, including configuration file loading.

pub mod config;
pub mod credentials;
pub mod providers;
pub mod web;

// Re-export commonly used types
pub use config::{
    ConfigLoader, ConfigValidationError, FileConfig, FileFetchConfig, FileLlmConfig,
    FileSpeechConfig,
};
pub use credentials::EnvCredentialSource;
pub use providers::{ElevenLabsSpeechProvider, GeminiLlmGateway, VoiceMap};
pub use web::{HttpPageFetcher, extract_metadata};
