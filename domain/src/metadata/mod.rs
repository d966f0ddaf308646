//! Webpage metadata.

use serde::{Deserialize, Serialize};

/// Title and description extracted from a webpage (Value Object)
///
/// Absent fields are empty strings, never missing.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct PageMetadata {
    pub title: String,
    pub description: String,
}

impl PageMetadata {
    pub fn new(title: impl Into<String>, description: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            description: description.into(),
        }
    }

    /// True when the page had neither a title nor a description
    pub fn is_empty(&self) -> bool {
        self.title.is_empty() && self.description.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_json_shape() {
        let metadata = PageMetadata::new("Example", "");
        let json = serde_json::to_value(&metadata).unwrap();
        assert_eq!(
            json,
            serde_json::json!({ "title": "Example", "description": "" })
        );
    }

    #[test]
    fn test_is_empty() {
        assert!(PageMetadata::default().is_empty());
        assert!(!PageMetadata::new("", "Desc").is_empty());
    }
}
