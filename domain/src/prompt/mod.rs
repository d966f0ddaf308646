//! Prompt construction for search groups.

pub mod date;
pub mod template;

pub use date::format_prompt_date;
pub use template::{CURRENT_DATE_PLACEHOLDER, GroupPromptTemplate};
