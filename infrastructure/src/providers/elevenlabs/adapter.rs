//! ElevenLabs text-to-speech adapter
//!
//! Posts the text to `/v1/text-to-speech/{voice_id}` and returns the MP3
//! body. A non-success status is logged but its body is still returned, so
//! callers see exactly what the provider sent back.

use super::voice_map::VoiceMap;
use crate::config::{ConfigValidationError, FileSpeechConfig};
use async_trait::async_trait;
use miniperplx_application::{SpeechProvider, SpeechProviderError};
use miniperplx_domain::{SpeechRequest, VoiceSettings};
use reqwest::header::ACCEPT;
use serde::Serialize;
use tracing::{debug, warn};

#[derive(Debug, Serialize)]
struct TextToSpeechBody<'a> {
    text: &'a str,
    model_id: &'a str,
    voice_settings: VoiceSettings,
}

pub struct ElevenLabsSpeechProvider {
    client: reqwest::Client,
    base_url: String,
    model_id: String,
    voice_settings: VoiceSettings,
    voices: VoiceMap,
}

impl ElevenLabsSpeechProvider {
    pub fn new(config: &FileSpeechConfig) -> Result<Self, ConfigValidationError> {
        Ok(Self {
            client: reqwest::Client::new(),
            base_url: config.base_url.trim_end_matches('/').to_string(),
            model_id: config.model_id.clone(),
            voice_settings: config.voice_settings(),
            voices: VoiceMap::new(config.voice_overrides()?),
        })
    }

    fn endpoint(&self, voice_id: &str) -> String {
        format!("{}/v1/text-to-speech/{}", self.base_url, voice_id)
    }
}

#[async_trait]
impl SpeechProvider for ElevenLabsSpeechProvider {
    async fn synthesize(
        &self,
        request: &SpeechRequest,
        api_key: &str,
    ) -> Result<Vec<u8>, SpeechProviderError> {
        let voice_id = self.voices.resolve(request.voice);
        debug!(
            "Synthesizing {} chars with voice {} ({})",
            request.text.chars().count(),
            request.voice,
            voice_id
        );

        let body = TextToSpeechBody {
            text: &request.text,
            model_id: &self.model_id,
            voice_settings: self.voice_settings,
        };

        let response = self
            .client
            .post(self.endpoint(voice_id))
            .header(ACCEPT, "audio/mpeg")
            .header("xi-api-key", api_key)
            .json(&body)
            .send()
            .await
            .map_err(|e| SpeechProviderError::Transport(e.to_string()))?;

        let status = response.status();
        if !status.is_success() {
            warn!("Text-to-speech returned HTTP {}", status.as_u16());
        }

        let bytes = response
            .bytes()
            .await
            .map_err(|e| SpeechProviderError::Transport(e.to_string()))?;
        Ok(bytes.to_vec())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use miniperplx_domain::VoiceId;
    use serde_json::json;
    use wiremock::matchers::{body_json, header, method, path};
    use wiremock::{Mock, MockServer, ResponseTemplate};

    fn provider(base_url: &str) -> ElevenLabsSpeechProvider {
        let config = FileSpeechConfig {
            base_url: base_url.to_string(),
            ..FileSpeechConfig::default()
        };
        ElevenLabsSpeechProvider::new(&config).unwrap()
    }

    #[tokio::test]
    async fn test_posts_text_with_default_voice() {
        let server = MockServer::start().await;
        Mock::given(method("POST"))
            .and(path("/v1/text-to-speech/JBFqnCBsd6RMkjVDRZzb"))
            .and(header("accept", "audio/mpeg"))
            .and(header("xi-api-key", "k"))
            .and(body_json(json!({
                "text": "Hello",
                "model_id": "eleven_turbo_v2_5",
                "voice_settings": { "stability": 0.5, "similarity_boost": 0.5 }
            })))
            .respond_with(ResponseTemplate::new(200).set_body_bytes(b"ID3".to_vec()))
            .expect(1)
            .mount(&server)
            .await;

        let audio = provider(&server.uri())
            .synthesize(&SpeechRequest::new("Hello"), "k")
            .await
            .unwrap();

        assert_eq!(audio, b"ID3");
    }

    #[tokio::test]
    async fn test_requested_voice_selects_path() {
        let server = MockServer::start().await;
        Mock::given(method("POST"))
            .and(path("/v1/text-to-speech/21m00Tcm4TlvDq8ikWAM"))
            .respond_with(ResponseTemplate::new(200).set_body_bytes(vec![1, 2, 3]))
            .expect(1)
            .mount(&server)
            .await;

        let request = SpeechRequest::new("Hi").with_voice(VoiceId::Nova);
        let audio = provider(&server.uri()).synthesize(&request, "k").await.unwrap();

        assert_eq!(audio, vec![1, 2, 3]);
    }

    #[tokio::test]
    async fn test_empty_text_is_still_sent() {
        let server = MockServer::start().await;
        Mock::given(method("POST"))
            .and(body_json(json!({
                "text": "",
                "model_id": "eleven_turbo_v2_5",
                "voice_settings": { "stability": 0.5, "similarity_boost": 0.5 }
            })))
            .respond_with(ResponseTemplate::new(200))
            .expect(1)
            .mount(&server)
            .await;

        let audio = provider(&server.uri())
            .synthesize(&SpeechRequest::new(""), "k")
            .await
            .unwrap();

        assert!(audio.is_empty());
    }

    #[tokio::test]
    async fn test_error_status_body_is_returned() {
        let server = MockServer::start().await;
        Mock::given(method("POST"))
            .respond_with(ResponseTemplate::new(401).set_body_string("invalid_api_key"))
            .mount(&server)
            .await;

        let audio = provider(&server.uri())
            .synthesize(&SpeechRequest::new("Hello"), "bad")
            .await
            .unwrap();

        assert_eq!(audio, b"invalid_api_key");
    }

    #[tokio::test]
    async fn test_unreachable_host_is_transport_error() {
        let err = provider("http://127.0.0.1:1")
            .synthesize(&SpeechRequest::new("Hello"), "k")
            .await
            .unwrap_err();

        assert!(matches!(err, SpeechProviderError::Transport(_)));
    }
}
