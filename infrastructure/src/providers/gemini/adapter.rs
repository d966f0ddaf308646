//! Gemini structured-output adapter
//!
//! Implements [`LlmGateway`] against the Generative Language REST API.
//! Structured output is requested with `responseMimeType: application/json`
//! plus a `responseSchema`, so the provider enforces the shape.
//!
//! `fileData` only accepts Files API or Cloud Storage URIs, so ordinary
//! http(s) image URLs are downloaded first and sent as `inlineData`.

use super::schema::to_gemini_schema;
use super::types::{
    Blob, Content, FileData, GenerateContentRequest, GenerateContentResponse, GenerationConfig,
    Part,
};
use crate::config::FileLlmConfig;
use async_trait::async_trait;
use base64::Engine;
use base64::engine::general_purpose::STANDARD;
use miniperplx_application::ports::llm_gateway::{GatewayError, LlmGateway, ObjectRequest};
use miniperplx_application::CredentialSource;
use miniperplx_domain::{ContentPart, ConversationMessage, MessageContent, Role};
use reqwest::header::CONTENT_TYPE;
use std::sync::Arc;
use tracing::debug;

/// Media type assumed for image URLs that do not declare one
const DEFAULT_IMAGE_MIME: &str = "image/jpeg";

pub struct GeminiLlmGateway {
    client: reqwest::Client,
    base_url: String,
    model: String,
    api_key_env: String,
    credentials: Arc<dyn CredentialSource>,
}

impl GeminiLlmGateway {
    pub fn new(config: &FileLlmConfig, credentials: Arc<dyn CredentialSource>) -> Self {
        Self {
            client: reqwest::Client::new(),
            base_url: config.base_url.clone(),
            model: config.model.clone(),
            api_key_env: config.api_key_env.clone(),
            credentials,
        }
    }

    fn endpoint(&self) -> String {
        format!(
            "{}/v1beta/models/{}:generateContent",
            self.base_url.trim_end_matches('/'),
            self.model
        )
    }

    /// http(s) URLs other than uploaded Files API resources
    fn needs_download(&self, uri: &str) -> bool {
        let files_prefix = format!("{}/v1beta/files/", self.base_url.trim_end_matches('/'));
        (uri.starts_with("http://") || uri.starts_with("https://"))
            && !uri.starts_with(&files_prefix)
    }

    /// Replace remote image URLs with `data:` URIs holding the downloaded bytes
    async fn inline_remote_images(
        &self,
        messages: &[ConversationMessage],
    ) -> Result<Vec<ConversationMessage>, GatewayError> {
        let mut resolved = Vec::with_capacity(messages.len());
        for message in messages {
            let MessageContent::Parts(parts) = &message.content else {
                resolved.push(message.clone());
                continue;
            };

            let mut inlined = Vec::with_capacity(parts.len());
            for part in parts {
                match part {
                    ContentPart::Image { image, mime_type } if self.needs_download(image) => {
                        inlined.push(ContentPart::Image {
                            image: self.download_image(image).await?,
                            mime_type: mime_type.clone(),
                        });
                    }
                    other => inlined.push(other.clone()),
                }
            }
            resolved.push(ConversationMessage::new(message.role, MessageContent::Parts(inlined)));
        }
        Ok(resolved)
    }

    async fn download_image(&self, url: &str) -> Result<String, GatewayError> {
        debug!("Downloading image {}", url);

        let response = self
            .client
            .get(url)
            .send()
            .await
            .map_err(|e| {
                GatewayError::ConnectionError(format!("Failed to fetch {}: {}", url, e))
            })?;

        let status = response.status();
        if !status.is_success() {
            return Err(GatewayError::RequestFailed(format!(
                "image {} returned HTTP {}",
                url,
                status.as_u16()
            )));
        }

        let mime = response
            .headers()
            .get(CONTENT_TYPE)
            .and_then(|v| v.to_str().ok())
            .and_then(|v| v.split(';').next())
            .map(str::trim)
            .filter(|v| !v.is_empty())
            .unwrap_or(DEFAULT_IMAGE_MIME)
            .to_string();

        let bytes = response
            .bytes()
            .await
            .map_err(|e| {
                GatewayError::ConnectionError(format!("Failed to read {}: {}", url, e))
            })?;

        Ok(format!("data:{};base64,{}", mime, STANDARD.encode(&bytes)))
    }
}

/// Build the wire request for a structured completion
pub(crate) fn build_request(request: &ObjectRequest) -> GenerateContentRequest {
    let mut system_parts = Vec::new();
    if !request.system_prompt.is_empty() {
        system_parts.push(Part::Text(request.system_prompt.clone()));
    }

    let mut contents = Vec::new();
    for message in &request.messages {
        match message.role {
            // System messages in the history extend the system instruction
            Role::System => system_parts.push(Part::Text(message.content.text())),
            Role::User => contents.push(to_content("user", message)),
            Role::Assistant => contents.push(to_content("model", message)),
        }
    }

    GenerateContentRequest {
        contents,
        system_instruction: (!system_parts.is_empty()).then(|| Content {
            role: None,
            parts: system_parts,
        }),
        generation_config: GenerationConfig {
            temperature: request.sampling.temperature,
            top_p: request.sampling.top_p,
            top_k: request.sampling.top_k,
            max_output_tokens: request.sampling.max_output_tokens,
            response_mime_type: "application/json",
            response_schema: to_gemini_schema(&request.schema),
        },
    }
}

fn to_content(role: &'static str, message: &ConversationMessage) -> Content {
    Content {
        role: Some(role),
        parts: message.content.parts().into_iter().map(to_part).collect(),
    }
}

fn to_part(part: ContentPart) -> Part {
    match part {
        ContentPart::Text { text } => Part::Text(text),
        ContentPart::Image { image, mime_type } => match parse_data_uri(&image) {
            Some((data_mime, data)) => Part::InlineData(Blob {
                mime_type: mime_type.unwrap_or(data_mime),
                data,
            }),
            None => Part::FileData(FileData {
                mime_type: mime_type.unwrap_or_else(|| DEFAULT_IMAGE_MIME.to_string()),
                file_uri: image,
            }),
        },
    }
}

/// Split `data:<mime>;base64,<payload>` into its media type and payload
fn parse_data_uri(uri: &str) -> Option<(String, String)> {
    let rest = uri.strip_prefix("data:")?;
    let (header, payload) = rest.split_once(',')?;
    let mime = header.strip_suffix(";base64")?;
    let mime = if mime.is_empty() {
        DEFAULT_IMAGE_MIME
    } else {
        mime
    };
    Some((mime.to_string(), payload.to_string()))
}

#[async_trait]
impl LlmGateway for GeminiLlmGateway {
    async fn generate_object(
        &self,
        request: &ObjectRequest,
    ) -> Result<serde_json::Value, GatewayError> {
        let api_key = self
            .credentials
            .credential(&self.api_key_env)
            .ok_or_else(|| GatewayError::MissingCredential(self.api_key_env.clone()))?;

        let request = ObjectRequest {
            messages: self.inline_remote_images(&request.messages).await?,
            ..request.clone()
        };
        let body = build_request(&request);
        debug!(
            "Gemini request: model={}, {} contents",
            self.model,
            body.contents.len()
        );

        let response = self
            .client
            .post(self.endpoint())
            .header("x-goog-api-key", api_key)
            .json(&body)
            .send()
            .await
            .map_err(|e| GatewayError::ConnectionError(e.to_string()))?;

        let status = response.status();
        if !status.is_success() {
            let detail = response.text().await.unwrap_or_default();
            return Err(GatewayError::RequestFailed(format!(
                "HTTP {}: {}",
                status.as_u16(),
                detail.trim()
            )));
        }

        let parsed: GenerateContentResponse = response
            .json()
            .await
            .map_err(|e| GatewayError::InvalidResponse(e.to_string()))?;

        let text = parsed
            .text()
            .ok_or_else(|| GatewayError::InvalidResponse(parsed.failure_reason()))?;

        serde_json::from_str(&text)
            .map_err(|e| GatewayError::InvalidResponse(format!("model output is not JSON: {}", e)))
    }
}
