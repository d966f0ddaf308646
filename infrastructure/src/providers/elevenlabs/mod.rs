//! ElevenLabs text-to-speech provider

mod adapter;
mod voice_map;

pub use adapter::ElevenLabsSpeechProvider;
pub use voice_map::VoiceMap;
