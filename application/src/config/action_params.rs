//! Action parameters: per-call knobs shared by the use cases.
//!
//! [`ActionParams`] holds values the use cases need at call time that are
//! not part of any provider protocol: which credential name to look up and
//! how long a fetched page may be reused.

use std::time::Duration;

/// Default environment variable holding the speech API credential.
pub const DEFAULT_SPEECH_API_KEY_ENV: &str = "ELEVENLABS_API_KEY";

/// Default revalidation hint for page fetches (one hour).
pub const DEFAULT_METADATA_REVALIDATE: Duration = Duration::from_secs(3600);

/// Use case parameters.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ActionParams {
    /// Credential name looked up before every speech request.
    pub speech_api_key_env: String,
    /// Revalidation hint attached to metadata fetches.
    pub metadata_revalidate: Duration,
}

impl Default for ActionParams {
    fn default() -> Self {
        Self {
            speech_api_key_env: DEFAULT_SPEECH_API_KEY_ENV.to_string(),
            metadata_revalidate: DEFAULT_METADATA_REVALIDATE,
        }
    }
}

impl ActionParams {
    pub fn with_speech_api_key_env(mut self, name: impl Into<String>) -> Self {
        self.speech_api_key_env = name.into();
        self
    }

    pub fn with_metadata_revalidate(mut self, revalidate: Duration) -> Self {
        self.metadata_revalidate = revalidate;
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let params = ActionParams::default();
        assert_eq!(params.speech_api_key_env, "ELEVENLABS_API_KEY");
        assert_eq!(params.metadata_revalidate, Duration::from_secs(3600));
    }

    #[test]
    fn test_builders() {
        let params = ActionParams::default()
            .with_speech_api_key_env("SPEECH_API_KEY")
            .with_metadata_revalidate(Duration::from_secs(60));
        assert_eq!(params.speech_api_key_env, "SPEECH_API_KEY");
        assert_eq!(params.metadata_revalidate.as_secs(), 60);
    }
}
