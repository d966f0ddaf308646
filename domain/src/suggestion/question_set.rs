//! QuestionSet value object

use crate::core::error::DomainError;
use serde::{Deserialize, Serialize};

/// Number of follow-up questions generated per call
pub const QUESTION_COUNT: usize = 3;

/// Exactly three follow-up questions (Value Object)
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "RawQuestionSet")]
pub struct QuestionSet {
    questions: [String; QUESTION_COUNT],
}

#[derive(Deserialize)]
struct RawQuestionSet {
    questions: Vec<String>,
}

impl TryFrom<RawQuestionSet> for QuestionSet {
    type Error = DomainError;

    fn try_from(raw: RawQuestionSet) -> Result<Self, Self::Error> {
        Self::try_from(raw.questions)
    }
}

impl TryFrom<Vec<String>> for QuestionSet {
    type Error = DomainError;

    fn try_from(questions: Vec<String>) -> Result<Self, Self::Error> {
        if let Some(index) = questions.iter().position(|q| q.trim().is_empty()) {
            return Err(DomainError::EmptyQuestion(index));
        }
        let actual = questions.len();
        let questions: [String; QUESTION_COUNT] =
            questions.try_into().map_err(|_| DomainError::QuestionCount {
                expected: QUESTION_COUNT,
                actual,
            })?;
        Ok(Self { questions })
    }
}

impl QuestionSet {
    pub fn questions(&self) -> &[String] {
        &self.questions
    }
}
