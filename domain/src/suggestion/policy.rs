//! Question generation policy: system prompt and sampling parameters

use super::question_set::QUESTION_COUNT;

/// Default model used for question suggestions
pub const DEFAULT_SUGGESTION_MODEL: &str = "gemini-1.5-flash-8b";

/// Description attached to the `questions` field of the output schema
pub const QUESTIONS_FIELD_DESCRIPTION: &str =
    "The generated questions based on the message history.";

/// Sampling parameters for a structured completion
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SamplingParams {
    pub temperature: f32,
    pub top_p: f32,
    pub top_k: u32,
    pub max_output_tokens: u32,
}

impl SamplingParams {
    /// Parameters used for question suggestions
    pub const fn suggestions() -> Self {
        Self {
            temperature: 1.0,
            top_p: 0.95,
            top_k: 40,
            max_output_tokens: 300,
        }
    }
}

impl Default for SamplingParams {
    fn default() -> Self {
        Self::suggestions()
    }
}

/// Prompt templates for the question suggester
pub struct QuestionPolicy;

impl QuestionPolicy {
    /// Number of questions the model must return
    pub const fn question_count() -> usize {
        QUESTION_COUNT
    }

    /// System prompt describing how follow-up questions are generated
    pub fn system_prompt() -> &'static str {
        r#"You are a search engine query generator. You 'have' to create only '3' questions for the search engine based on the message history which has been provided to you.
The questions should be open-ended and should encourage further discussion while maintaining the whole context. Limit it to 5-10 words per question.
Always put the user input's context is some way so that the next search knows what to search for exactly.
Try to stick to the context of the conversation and avoid asking questions that are too general or too specific.
For weather based converations sent to you, always generate questions that are about news, sports, or other topics that are not related to the weather.
For programming based conversations, always generate questions that are about the algorithms, data structures, or other topics that are related to it or an improvement of the question.
For location based conversations, always generate questions that are about the culture, history, or other topics that are related to the location.
For the translation based conversations, always generate questions that may continue the conversation or ask for more information or translations.
Do not use pronouns like he, she, him, his, her, etc. in the questions as they blur the context. Always use the proper nouns from the context."#
    }
}
