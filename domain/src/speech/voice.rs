//! Voice identifiers and synthesis settings

use crate::core::error::DomainError;
use serde::{Deserialize, Serialize};

/// Voices a caller may request (Value Object)
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Default, Serialize, Deserialize,
)]
#[serde(rename_all = "lowercase")]
pub enum VoiceId {
    #[default]
    Alloy,
    Echo,
    Fable,
    Onyx,
    Nova,
    Shimmer,
}

impl VoiceId {
    pub const ALL: [VoiceId; 6] = [
        VoiceId::Alloy,
        VoiceId::Echo,
        VoiceId::Fable,
        VoiceId::Onyx,
        VoiceId::Nova,
        VoiceId::Shimmer,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            VoiceId::Alloy => "alloy",
            VoiceId::Echo => "echo",
            VoiceId::Fable => "fable",
            VoiceId::Onyx => "onyx",
            VoiceId::Nova => "nova",
            VoiceId::Shimmer => "shimmer",
        }
    }
}

impl std::fmt::Display for VoiceId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl std::str::FromStr for VoiceId {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        VoiceId::ALL
            .into_iter()
            .find(|voice| voice.as_str() == s)
            .ok_or_else(|| DomainError::UnknownVoice(s.to_string()))
    }
}

/// Provider-side voice tuning
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct VoiceSettings {
    pub stability: f32,
    pub similarity_boost: f32,
}

impl Default for VoiceSettings {
    fn default() -> Self {
        Self {
            stability: 0.5,
            similarity_boost: 0.5,
        }
    }
}

/// Text to synthesize plus the requested voice
///
/// Empty text is allowed; it is forwarded to the provider as-is.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SpeechRequest {
    pub text: String,
    pub voice: VoiceId,
}

impl SpeechRequest {
    pub fn new(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            voice: VoiceId::default(),
        }
    }

    pub fn with_voice(mut self, voice: VoiceId) -> Self {
        self.voice = voice;
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_voice_is_alloy() {
        assert_eq!(VoiceId::default(), VoiceId::Alloy);
        assert_eq!(SpeechRequest::new("hi").voice, VoiceId::Alloy);
    }

    #[test]
    fn test_voice_round_trip_names() {
        for voice in VoiceId::ALL {
            assert_eq!(voice.as_str().parse::<VoiceId>().unwrap(), voice);
        }
        assert!("george".parse::<VoiceId>().is_err());
    }

    #[test]
    fn test_voice_serde_lowercase() {
        let json = serde_json::to_string(&VoiceId::Shimmer).unwrap();
        assert_eq!(json, "\"shimmer\"");
    }

    #[test]
    fn test_default_settings() {
        let settings = VoiceSettings::default();
        assert_eq!(settings.stability, 0.5);
        assert_eq!(settings.similarity_boost, 0.5);
    }
}
