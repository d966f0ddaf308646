//! Provider adapters for the external AI services

pub mod elevenlabs;
pub mod gemini;

pub use elevenlabs::{ElevenLabsSpeechProvider, VoiceMap};
pub use gemini::GeminiLlmGateway;
