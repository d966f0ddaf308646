//! Resolved group configuration

use super::group::SearchGroupId;
use super::tool::ToolName;
use crate::prompt::GroupPromptTemplate;
use chrono::NaiveDate;
use serde::Serialize;

/// Allowed tools and system prompt for one search group (Value Object)
///
/// Serializes as `{ "tools": [...], "systemPrompt": "..." }`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct GroupConfig {
    pub tools: &'static [ToolName],
    pub system_prompt: String,
}

impl GroupConfig {
    /// Look up the static table entry for `group`, stamping the prompt with `today`
    pub fn resolve(group: SearchGroupId, today: NaiveDate) -> Self {
        Self {
            tools: group.tools(),
            system_prompt: GroupPromptTemplate::render(group, today),
        }
    }

    pub fn tool_names(&self) -> Vec<&'static str> {
        self.tools.iter().map(ToolName::as_str).collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn day(d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(2026, 10, d).unwrap()
    }

    #[test]
    fn test_resolve_is_pure_for_same_day() {
        for group in SearchGroupId::ALL {
            assert_eq!(
                GroupConfig::resolve(group, day(15)),
                GroupConfig::resolve(group, day(15))
            );
        }
    }

    #[test]
    fn test_prompt_changes_with_the_day() {
        let a = GroupConfig::resolve(SearchGroupId::Academic, day(15));
        let b = GroupConfig::resolve(SearchGroupId::Academic, day(16));
        assert_eq!(a.tools, b.tools);
        assert_ne!(a.system_prompt, b.system_prompt);
    }

    #[test]
    fn test_json_shape() {
        let config = GroupConfig::resolve(SearchGroupId::Youtube, day(15));
        let json = serde_json::to_value(&config).unwrap();
        assert_eq!(json["tools"], serde_json::json!(["youtube_search"]));
        assert!(json["systemPrompt"].as_str().unwrap().contains("YouTube"));
    }

    #[test]
    fn test_writing_has_no_tools() {
        let config = GroupConfig::resolve(SearchGroupId::Writing, day(15));
        assert!(config.tools.is_empty());
        assert!(config.tool_names().is_empty());
    }
}
