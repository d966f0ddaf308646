//! Search group identifiers and their allowed tools

use super::tool::ToolName;
use crate::core::error::DomainError;
use serde::{Deserialize, Serialize};

/// A named search mode (Value Object)
///
/// Each group restricts the tools an assistant may call and selects
/// a tailored system prompt.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SearchGroupId {
    #[default]
    Web,
    Academic,
    Shopping,
    Youtube,
    X,
    Writing,
}

const WEB_TOOLS: &[ToolName] = &[
    ToolName::GetWeatherData,
    ToolName::FindPlace,
    ToolName::Programming,
    ToolName::WebSearch,
    ToolName::TextTranslate,
    ToolName::NearbySearch,
    ToolName::XSearch,
    ToolName::YoutubeSearch,
    ToolName::ShoppingSearch,
    ToolName::AcademicSearch,
];
const ACADEMIC_TOOLS: &[ToolName] = &[ToolName::AcademicSearch, ToolName::Programming];
const SHOPPING_TOOLS: &[ToolName] = &[ToolName::ShoppingSearch, ToolName::Programming];
const YOUTUBE_TOOLS: &[ToolName] = &[ToolName::YoutubeSearch];
const X_TOOLS: &[ToolName] = &[ToolName::XSearch];
const WRITING_TOOLS: &[ToolName] = &[];

impl SearchGroupId {
    pub const ALL: [SearchGroupId; 6] = [
        SearchGroupId::Web,
        SearchGroupId::Academic,
        SearchGroupId::Shopping,
        SearchGroupId::Youtube,
        SearchGroupId::X,
        SearchGroupId::Writing,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            SearchGroupId::Web => "web",
            SearchGroupId::Academic => "academic",
            SearchGroupId::Shopping => "shopping",
            SearchGroupId::Youtube => "youtube",
            SearchGroupId::X => "x",
            SearchGroupId::Writing => "writing",
        }
    }

    /// Tools this group may invoke, in table order
    pub const fn tools(self) -> &'static [ToolName] {
        match self {
            SearchGroupId::Web => WEB_TOOLS,
            SearchGroupId::Academic => ACADEMIC_TOOLS,
            SearchGroupId::Shopping => SHOPPING_TOOLS,
            SearchGroupId::Youtube => YOUTUBE_TOOLS,
            SearchGroupId::X => X_TOOLS,
            SearchGroupId::Writing => WRITING_TOOLS,
        }
    }

    pub fn allows(self, tool: ToolName) -> bool {
        self.tools().contains(&tool)
    }
}

/// Groups whose tool list contains `tool`
pub fn groups_allowing(tool: ToolName) -> Vec<SearchGroupId> {
    SearchGroupId::ALL
        .into_iter()
        .filter(|group| group.allows(tool))
        .collect()
}

impl std::fmt::Display for SearchGroupId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl std::str::FromStr for SearchGroupId {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        SearchGroupId::ALL
            .into_iter()
            .find(|group| group.as_str() == s)
            .ok_or_else(|| DomainError::UnknownSearchGroup(s.to_string()))
    }
}
