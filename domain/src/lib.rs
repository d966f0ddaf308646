//! Domain layer for miniperplx-actions
//!
//! This crate contains the value objects and static tables behind the four
//! server actions. It has no dependencies on infrastructure or presentation
//! concerns and performs no I/O.
//!
//! # Core Concepts
//!
//! ## Search Groups
//!
//! A search group (web, academic, shopping, youtube, x, writing) restricts
//! which tools an assistant may call and supplies a tailored system prompt.
//! The group table is an immutable static mapping; prompts are stamped with
//! the current date at resolve time.
//!
//! ## Actions
//!
//! - **Suggestions**: a conversation history yields exactly three follow-up questions
//! - **Speech**: text + voice yields an MP3 data URI
//! - **Metadata**: a webpage yields its title and description

pub mod conversation;
pub mod core;
pub mod metadata;
pub mod prompt;
pub mod search_group;
pub mod speech;
pub mod suggestion;
pub mod util;

// Re-export commonly used types
pub use conversation::{ContentPart, ConversationMessage, MessageContent, Role};
pub use core::error::DomainError;
pub use metadata::PageMetadata;
pub use prompt::{GroupPromptTemplate, format_prompt_date};
pub use search_group::{GroupConfig, SearchGroupId, ToolName, groups_allowing};
pub use speech::{SpeechRequest, SpeechResult, VoiceId, VoiceSettings};
pub use suggestion::{QuestionPolicy, QuestionSet, SamplingParams};
