//! Use cases: one per server action.

pub mod fetch_metadata;
pub mod generate_speech;
pub mod resolve_group_config;
pub mod suggest_questions;
