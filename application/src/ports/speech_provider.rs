//! Speech provider port
//!
//! Abstracts the text-to-speech HTTP provider.

use async_trait::async_trait;
use miniperplx_domain::SpeechRequest;
use thiserror::Error;

/// Errors raised by a speech provider
#[derive(Error, Debug)]
pub enum SpeechProviderError {
    #[error("Transport error: {0}")]
    Transport(String),
}

/// Text-to-speech provider
#[async_trait]
pub trait SpeechProvider: Send + Sync {
    /// Synthesize `request` and return the raw audio body.
    ///
    /// The body is returned whatever the HTTP status; only transport
    /// failures are errors.
    async fn synthesize(
        &self,
        request: &SpeechRequest,
        api_key: &str,
    ) -> Result<Vec<u8>, SpeechProviderError>;
}
