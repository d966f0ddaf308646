//! Follow-up question suggestions.

pub mod policy;
pub mod question_set;

pub use policy::{
    DEFAULT_SUGGESTION_MODEL, QUESTIONS_FIELD_DESCRIPTION, QuestionPolicy, SamplingParams,
};
pub use question_set::{QUESTION_COUNT, QuestionSet};
