//! Voice name → ElevenLabs voice id mapping
//!
//! Every [`VoiceId`] resolves to a provider voice. Configured overrides win;
//! anything not overridden uses the built-in premade voice.

use miniperplx_domain::VoiceId;
use std::collections::BTreeMap;

/// Built-in premade voice for each requested voice name.
///
/// `alloy` is the default voice, so it maps to the stock "George" voice.
pub fn default_voice_id(voice: VoiceId) -> &'static str {
    match voice {
        VoiceId::Alloy => "JBFqnCBsd6RMkjVDRZzb",
        VoiceId::Echo => "pNInz6obpgDQGcFmaJgB",
        VoiceId::Fable => "ErXwobaYiN019PkySvjV",
        VoiceId::Onyx => "VR6AewLTigWG4xSOukaG",
        VoiceId::Nova => "21m00Tcm4TlvDq8ikWAM",
        VoiceId::Shimmer => "EXAVITQu4vr4xnJggr5b",
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct VoiceMap {
    overrides: BTreeMap<VoiceId, String>,
}

impl VoiceMap {
    pub fn new(overrides: BTreeMap<VoiceId, String>) -> Self {
        Self { overrides }
    }

    pub fn resolve(&self, voice: VoiceId) -> &str {
        self.overrides
            .get(&voice)
            .map(String::as_str)
            .unwrap_or_else(|| default_voice_id(voice))
    }
}
