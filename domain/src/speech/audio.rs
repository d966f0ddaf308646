//! Embeddable audio payload

use crate::core::error::DomainError;
use base64::Engine;
use base64::engine::general_purpose::STANDARD;
use serde::{Deserialize, Serialize};

/// Prefix of every audio data URI produced by the synthesizer
pub const MP3_DATA_URI_PREFIX: &str = "data:audio/mp3;base64,";

/// Synthesized speech as a `data:audio/mp3;base64,...` URI (Value Object)
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SpeechResult {
    audio: String,
}

impl SpeechResult {
    /// Wrap raw MP3 bytes as a base64 data URI
    pub fn from_mp3_bytes(bytes: &[u8]) -> Self {
        Self {
            audio: format!("{}{}", MP3_DATA_URI_PREFIX, STANDARD.encode(bytes)),
        }
    }

    pub fn data_uri(&self) -> &str {
        &self.audio
    }

    /// Decode the payload back into raw audio bytes
    pub fn decode_audio(&self) -> Result<Vec<u8>, DomainError> {
        let payload = self
            .audio
            .strip_prefix(MP3_DATA_URI_PREFIX)
            .ok_or_else(|| DomainError::InvalidAudio("missing data URI prefix".to_string()))?;
        STANDARD
            .decode(payload)
            .map_err(|e| DomainError::InvalidAudio(e.to_string()))
    }
}
