//! LLM Gateway port
//!
//! Defines the interface for structured-output completions.

use async_trait::async_trait;
use miniperplx_domain::{ConversationMessage, SamplingParams};
use thiserror::Error;

/// Errors that can occur during LLM gateway operations
#[derive(Error, Debug)]
pub enum GatewayError {
    #[error("Missing credential: {0} is not set")]
    MissingCredential(String),

    #[error("Connection error: {0}")]
    ConnectionError(String),

    #[error("Request failed: {0}")]
    RequestFailed(String),

    #[error("Invalid response: {0}")]
    InvalidResponse(String),
}

/// A structured-output completion request
///
/// `schema` is a JSON Schema describing the object the model must return.
/// Adapters translate it into whatever dialect their provider accepts.
#[derive(Debug, Clone)]
pub struct ObjectRequest {
    pub system_prompt: String,
    pub messages: Vec<ConversationMessage>,
    pub sampling: SamplingParams,
    pub schema: serde_json::Value,
}

/// Gateway for structured LLM completions
///
/// Implementations (adapters) live in the infrastructure layer and are
/// responsible for constraining the model to `request.schema`.
#[async_trait]
pub trait LlmGateway: Send + Sync {
    /// Run a completion and return the generated JSON object
    async fn generate_object(
        &self,
        request: &ObjectRequest,
    ) -> Result<serde_json::Value, GatewayError>;
}
