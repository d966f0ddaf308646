//! Raw TOML configuration data types
//!
//! These structs represent the exact structure of the TOML config file.
//! They are deserialized directly and use domain types where appropriate.

use miniperplx_application::config::{DEFAULT_METADATA_REVALIDATE, DEFAULT_SPEECH_API_KEY_ENV};
use miniperplx_application::ActionParams;
use miniperplx_domain::suggestion::DEFAULT_SUGGESTION_MODEL;
use miniperplx_domain::{VoiceId, VoiceSettings};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::time::Duration;
use thiserror::Error;

/// Configuration validation errors
#[derive(Debug, Error, PartialEq)]
pub enum ConfigValidationError {
    #[error("llm.model cannot be empty")]
    EmptyModelName,

    #[error("{0} cannot be empty")]
    EmptyBaseUrl(&'static str),

    #[error("speech.{0} must be between 0.0 and 1.0, got {1}")]
    SettingOutOfRange(&'static str, f32),

    #[error("speech.voices.{0} is not a known voice")]
    UnknownVoice(String),

    #[error("speech.voices.{0} cannot be empty")]
    EmptyVoiceId(VoiceId),

    #[error("fetch.revalidate_seconds cannot be 0")]
    InvalidRevalidate,
}

/// Raw language-model configuration from TOML
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct FileLlmConfig {
    /// Generative Language API root
    pub base_url: String,
    /// Model used for question suggestions
    pub model: String,
    /// Environment variable holding the API key
    pub api_key_env: String,
}

impl Default for FileLlmConfig {
    fn default() -> Self {
        Self {
            base_url: "https://generativelanguage.googleapis.com".to_string(),
            model: DEFAULT_SUGGESTION_MODEL.to_string(),
            api_key_env: "GOOGLE_GENERATIVE_AI_API_KEY".to_string(),
        }
    }
}

/// Raw speech configuration from TOML
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct FileSpeechConfig {
    /// Text-to-speech API root
    pub base_url: String,
    /// Provider model identifier
    pub model_id: String,
    pub stability: f32,
    pub similarity_boost: f32,
    /// Environment variable holding the API key
    pub api_key_env: String,
    /// Provider voice id per requested voice name
    pub voices: BTreeMap<String, String>,
}

impl Default for FileSpeechConfig {
    fn default() -> Self {
        let settings = VoiceSettings::default();
        Self {
            base_url: "https://api.elevenlabs.io".to_string(),
            model_id: "eleven_turbo_v2_5".to_string(),
            stability: settings.stability,
            similarity_boost: settings.similarity_boost,
            api_key_env: DEFAULT_SPEECH_API_KEY_ENV.to_string(),
            voices: BTreeMap::new(),
        }
    }
}

impl FileSpeechConfig {
    /// Voice overrides keyed by parsed [`VoiceId`]
    pub fn voice_overrides(&self) -> Result<BTreeMap<VoiceId, String>, ConfigValidationError> {
        self.voices
            .iter()
            .map(|(name, id)| {
                let voice = name
                    .parse::<VoiceId>()
                    .map_err(|_| ConfigValidationError::UnknownVoice(name.clone()))?;
                if id.trim().is_empty() {
                    return Err(ConfigValidationError::EmptyVoiceId(voice));
                }
                Ok((voice, id.clone()))
            })
            .collect()
    }

    pub fn voice_settings(&self) -> VoiceSettings {
        VoiceSettings {
            stability: self.stability,
            similarity_boost: self.similarity_boost,
        }
    }
}

/// Raw page-fetch configuration from TOML
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct FileFetchConfig {
    /// Revalidation hint sent with every page fetch
    pub revalidate_seconds: u64,
    pub user_agent: String,
}

impl Default for FileFetchConfig {
    fn default() -> Self {
        Self {
            revalidate_seconds: DEFAULT_METADATA_REVALIDATE.as_secs(),
            user_agent: "MiniPerplx/0.1 (Metadata Fetcher)".to_string(),
        }
    }
}

/// Complete file configuration (raw TOML structure)
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct FileConfig {
    /// Language-model settings
    pub llm: FileLlmConfig,
    /// Text-to-speech settings
    pub speech: FileSpeechConfig,
    /// Page fetch settings
    pub fetch: FileFetchConfig,
}

impl FileConfig {
    /// Validate the configuration
    pub fn validate(&self) -> Result<(), ConfigValidationError> {
        if self.llm.model.trim().is_empty() {
            return Err(ConfigValidationError::EmptyModelName);
        }
        if self.llm.base_url.trim().is_empty() {
            return Err(ConfigValidationError::EmptyBaseUrl("llm.base_url"));
        }
        if self.speech.base_url.trim().is_empty() {
            return Err(ConfigValidationError::EmptyBaseUrl("speech.base_url"));
        }

        for (name, value) in [
            ("stability", self.speech.stability),
            ("similarity_boost", self.speech.similarity_boost),
        ] {
            if !(0.0..=1.0).contains(&value) {
                return Err(ConfigValidationError::SettingOutOfRange(name, value));
            }
        }

        self.speech.voice_overrides()?;

        if self.fetch.revalidate_seconds == 0 {
            return Err(ConfigValidationError::InvalidRevalidate);
        }

        Ok(())
    }

    /// Use case parameters derived from this configuration
    pub fn action_params(&self) -> ActionParams {
        ActionParams::default()
            .with_speech_api_key_env(self.speech.api_key_env.clone())
            .with_metadata_revalidate(Duration::from_secs(self.fetch.revalidate_seconds))
    }
}
