//! Conversation history passed in by callers.

pub mod message;

pub use message::{ContentPart, ConversationMessage, MessageContent, Role};
