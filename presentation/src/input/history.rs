//! Conversation history input
//!
//! The history is a JSON array of `{ "role", "content" }` messages, where
//! `content` is either a string or an array of text/image parts.

use miniperplx_domain::ConversationMessage;
use std::io::Read;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum HistoryInputError {
    #[error("Failed to read history: {0}")]
    Io(#[from] std::io::Error),

    #[error("Invalid history JSON: {0}")]
    Json(#[from] serde_json::Error),
}

/// Parse a message history from any reader
pub fn read_history<R: Read>(
    mut reader: R,
) -> Result<Vec<ConversationMessage>, HistoryInputError> {
    let mut raw = String::new();
    reader.read_to_string(&mut raw)?;
    Ok(serde_json::from_str(&raw)?)
}

#[cfg(test)]
mod tests {
    use super::*;
    use miniperplx_domain::{ContentPart, MessageContent, Role};

    #[test]
    fn test_plain_text_history() {
        let input = r#"[
            {"role": "user", "content": "What is Rust?"},
            {"role": "assistant", "content": "A systems language."}
        ]"#;

        let history = read_history(input.as_bytes()).unwrap();
        assert_eq!(history.len(), 2);
        assert_eq!(history[0], ConversationMessage::user("What is Rust?"));
        assert_eq!(history[1].role, Role::Assistant);
    }

    #[test]
    fn test_multimodal_history() {
        let input = r#"[{"role": "user", "content": [
            {"type": "text", "text": "What is this?"},
            {"type": "image", "image": "https://example.com/cat.png"}
        ]}]"#;

        let history = read_history(input.as_bytes()).unwrap();
        assert_eq!(
            history[0].content,
            MessageContent::Parts(vec![
                ContentPart::Text {
                    text: "What is this?".into()
                },
                ContentPart::Image {
                    image: "https://example.com/cat.png".into(),
                    mime_type: None,
                },
            ])
        );
    }

    #[test]
    fn test_empty_array_is_accepted() {
        assert!(read_history("[]".as_bytes()).unwrap().is_empty());
    }

    #[test]
    fn test_unknown_role_rejected() {
        let input = r#"[{"role": "tool", "content": "x"}]"#;
        assert!(matches!(
            read_history(input.as_bytes()),
            Err(HistoryInputError::Json(_))
        ));
    }
}
