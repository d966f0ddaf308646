//! Suggest Questions use case.
//!
//! Asks a language model for exactly three follow-up questions based on a
//! conversation history. The model is constrained to a fixed output schema;
//! this use case only checks that the returned object deserializes into a
//! [`QuestionSet`] and does not retry.

use crate::ports::llm_gateway::{GatewayError, LlmGateway, ObjectRequest};
use miniperplx_domain::suggestion::QUESTIONS_FIELD_DESCRIPTION;
use miniperplx_domain::util::log_preview;
use miniperplx_domain::{ConversationMessage, QuestionPolicy, QuestionSet, SamplingParams};
use serde_json::json;
use std::sync::Arc;
use thiserror::Error;
use tracing::{debug, info};

/// Errors that can occur while suggesting questions.
#[derive(Error, Debug)]
pub enum SuggestQuestionsError {
    #[error("Conversation history is empty")]
    EmptyHistory,

    #[error("Gateway error: {0}")]
    Gateway(#[from] GatewayError),

    #[error("Model output does not match the question schema: {0}")]
    NonConforming(String),
}

/// Use case for generating follow-up questions.
#[derive(Clone)]
pub struct SuggestQuestionsUseCase {
    gateway: Arc<dyn LlmGateway>,
}

impl SuggestQuestionsUseCase {
    pub fn new(gateway: Arc<dyn LlmGateway>) -> Self {
        Self { gateway }
    }

    /// JSON Schema the model output must satisfy.
    pub fn output_schema() -> serde_json::Value {
        let count = QuestionPolicy::question_count();
        json!({
            "type": "object",
            "properties": {
                "questions": {
                    "type": "array",
                    "items": { "type": "string" },
                    "minItems": count,
                    "maxItems": count,
                    "description": QUESTIONS_FIELD_DESCRIPTION,
                }
            },
            "required": ["questions"],
            "additionalProperties": false,
        })
    }

    /// Generate three follow-up questions for `history`.
    pub async fn execute(
        &self,
        history: &[ConversationMessage],
    ) -> Result<QuestionSet, SuggestQuestionsError> {
        debug!("Suggestion history: {:?}", history);

        let Some(last) = history.last() else {
            return Err(SuggestQuestionsError::EmptyHistory);
        };

        info!(
            "Suggesting questions for {} messages (last: {})",
            history.len(),
            log_preview(&last.content.text(), 80)
        );

        let request = ObjectRequest {
            system_prompt: QuestionPolicy::system_prompt().to_string(),
            messages: history.to_vec(),
            sampling: SamplingParams::suggestions(),
            schema: Self::output_schema(),
        };

        let object = self.gateway.generate_object(&request).await?;

        serde_json::from_value::<QuestionSet>(object)
            .map_err(|e| SuggestQuestionsError::NonConforming(e.to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use async_trait::async_trait;
    use std::sync::Mutex;

    // ==================== Test Mocks ====================

    struct MockGateway {
        response: Mutex<Option<Result<serde_json::Value, GatewayError>>>,
        requests: Mutex<Vec<ObjectRequest>>,
    }

    impl MockGateway {
        fn returning(response: Result<serde_json::Value, GatewayError>) -> Arc<Self> {
            Arc::new(Self {
                response: Mutex::new(Some(response)),
                requests: Mutex::new(Vec::new()),
            })
        }

        fn calls(&self) -> usize {
            self.requests.lock().unwrap().len()
        }
    }

    #[async_trait]
    impl LlmGateway for MockGateway {
        async fn generate_object(
            &self,
            request: &ObjectRequest,
        ) -> Result<serde_json::Value, GatewayError> {
            self.requests.lock().unwrap().push(request.clone());
            self.response
                .lock()
                .unwrap()
                .take()
                .unwrap_or_else(|| Err(GatewayError::RequestFailed("No more responses".into())))
        }
    }

    fn history() -> Vec<ConversationMessage> {
        vec![
            ConversationMessage::user("What is the weather in Tokyo?"),
            ConversationMessage::assistant("It is sunny in Tokyo today."),
        ]
    }

    // ==================== Tests ====================

    #[tokio::test]
    async fn test_returns_three_questions_verbatim() {
        let gateway = MockGateway::returning(Ok(json!({
            "questions": [
                "What are the latest Tokyo news headlines?",
                "Which sports events are happening in Tokyo?",
                "What festivals does Tokyo host this month?"
            ]
        })));
        let use_case = SuggestQuestionsUseCase::new(gateway.clone());

        let set = use_case.execute(&history()).await.unwrap();

        assert_eq!(set.questions().len(), 3);
        assert_eq!(set.questions()[0], "What are the latest Tokyo news headlines?");
        assert_eq!(gateway.calls(), 1);
    }

    #[tokio::test]
    async fn test_request_carries_policy_and_history() {
        let gateway = MockGateway::returning(Ok(json!({ "questions": ["a", "b", "c"] })));
        let use_case = SuggestQuestionsUseCase::new(gateway.clone());

        use_case.execute(&history()).await.unwrap();

        let requests = gateway.requests.lock().unwrap();
        let request = &requests[0];
        assert_eq!(request.system_prompt, QuestionPolicy::system_prompt());
        assert_eq!(request.messages, history());
        assert_eq!(request.sampling, SamplingParams::suggestions());
        assert_eq!(request.schema["properties"]["questions"]["minItems"], 3);
        assert_eq!(request.schema["properties"]["questions"]["maxItems"], 3);
    }

    #[tokio::test]
    async fn test_wrong_count_is_non_conforming() {
        let gateway = MockGateway::returning(Ok(json!({ "questions": ["a", "b"] })));
        let use_case = SuggestQuestionsUseCase::new(gateway);

        let err = use_case.execute(&history()).await.unwrap_err();
        assert!(matches!(err, SuggestQuestionsError::NonConforming(_)));
    }

    #[tokio::test]
    async fn test_missing_field_is_non_conforming() {
        let gateway = MockGateway::returning(Ok(json!({ "items": [] })));
        let use_case = SuggestQuestionsUseCase::new(gateway);

        let err = use_case.execute(&history()).await.unwrap_err();
        assert!(matches!(err, SuggestQuestionsError::NonConforming(_)));
    }

    #[tokio::test]
    async fn test_gateway_error_propagates() {
        let gateway =
            MockGateway::returning(Err(GatewayError::RequestFailed("429 Too Many".into())));
        let use_case = SuggestQuestionsUseCase::new(gateway);

        let err = use_case.execute(&history()).await.unwrap_err();
        assert!(matches!(
            err,
            SuggestQuestionsError::Gateway(GatewayError::RequestFailed(_))
        ));
    }

    #[tokio::test]
    async fn test_empty_history_skips_gateway() {
        let gateway = MockGateway::returning(Ok(json!({ "questions": ["a", "b", "c"] })));
        let use_case = SuggestQuestionsUseCase::new(gateway.clone());

        let err = use_case.execute(&[]).await.unwrap_err();
        assert!(matches!(err, SuggestQuestionsError::EmptyHistory));
        assert_eq!(gateway.calls(), 0);
    }
}
