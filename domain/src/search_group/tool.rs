//! Global tool catalog

use crate::core::error::DomainError;
use serde::{Deserialize, Serialize};

/// A tool an assistant may be allowed to invoke
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ToolName {
    GetWeatherData,
    FindPlace,
    Programming,
    WebSearch,
    TextTranslate,
    NearbySearch,
    XSearch,
    YoutubeSearch,
    ShoppingSearch,
    AcademicSearch,
    Retrieve,
}

impl ToolName {
    /// The full catalog, in declaration order
    pub const ALL: [ToolName; 11] = [
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
        ToolName::Retrieve,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            ToolName::GetWeatherData => "get_weather_data",
            ToolName::FindPlace => "find_place",
            ToolName::Programming => "programming",
            ToolName::WebSearch => "web_search",
            ToolName::TextTranslate => "text_translate",
            ToolName::NearbySearch => "nearby_search",
            ToolName::XSearch => "x_search",
            ToolName::YoutubeSearch => "youtube_search",
            ToolName::ShoppingSearch => "shopping_search",
            ToolName::AcademicSearch => "academic_search",
            ToolName::Retrieve => "retrieve",
        }
    }
}

impl std::fmt::Display for ToolName {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl std::str::FromStr for ToolName {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        ToolName::ALL
            .into_iter()
            .find(|tool| tool.as_str() == s)
            .ok_or_else(|| DomainError::UnknownTool(s.to_string()))
    }
}
