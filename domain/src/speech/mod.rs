//! Text-to-speech value objects.

pub mod audio;
pub mod voice;

pub use audio::{MP3_DATA_URI_PREFIX, SpeechResult};
pub use voice::{SpeechRequest, VoiceId, VoiceSettings};
