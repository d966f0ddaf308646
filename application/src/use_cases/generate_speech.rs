//! Generate Speech use case.
//!
//! Looks up the speech credential, sends the text to the speech provider and
//! wraps the returned audio as an MP3 data URI.

use crate::config::DEFAULT_SPEECH_API_KEY_ENV;
use crate::ports::credentials::CredentialSource;
use crate::ports::speech_provider::{SpeechProvider, SpeechProviderError};
use miniperplx_domain::{SpeechRequest, SpeechResult};
use std::sync::Arc;
use thiserror::Error;
use tracing::{debug, info};

/// Errors that can occur while generating speech.
#[derive(Error, Debug)]
pub enum GenerateSpeechError {
    #[error("{0} is not defined")]
    MissingCredential(String),

    #[error("Speech provider error: {0}")]
    Provider(#[from] SpeechProviderError),
}

/// Use case for text-to-speech synthesis.
#[derive(Clone)]
pub struct GenerateSpeechUseCase {
    provider: Arc<dyn SpeechProvider>,
    credentials: Arc<dyn CredentialSource>,
    api_key_env: String,
}

impl GenerateSpeechUseCase {
    pub fn new(provider: Arc<dyn SpeechProvider>, credentials: Arc<dyn CredentialSource>) -> Self {
        Self {
            provider,
            credentials,
            api_key_env: DEFAULT_SPEECH_API_KEY_ENV.to_string(),
        }
    }

    /// Use a different credential name.
    pub fn with_api_key_env(mut self, name: impl Into<String>) -> Self {
        self.api_key_env = name.into();
        self
    }

    /// Synthesize `request` into a data URI.
    ///
    /// The credential is checked before the provider is contacted.
    pub async fn execute(
        &self,
        request: &SpeechRequest,
    ) -> Result<SpeechResult, GenerateSpeechError> {
        let api_key = self
            .credentials
            .credential(&self.api_key_env)
            .ok_or_else(|| GenerateSpeechError::MissingCredential(self.api_key_env.clone()))?;

        info!(
            "Generating speech: voice={}, {} chars",
            request.voice,
            request.text.chars().count()
        );

        let audio = self.provider.synthesize(request, &api_key).await?;
        debug!("Speech provider returned {} bytes", audio.len());

        Ok(SpeechResult::from_mp3_bytes(&audio))
    }
}
