//! Search groups: the process-wide group → (tools, prompt) table.
//!
//! - [`group::SearchGroupId`]: the closed set of search modes
//! - [`tool::ToolName`]: the global tool catalog
//! - [`config::GroupConfig`]: resolved tools and system prompt for a group

pub mod config;
pub mod group;
pub mod tool;

pub use config::GroupConfig;
pub use group::{SearchGroupId, groups_allowing};
pub use tool::ToolName;
