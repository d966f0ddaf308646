//! Application-level configuration.

mod action_params;

pub use action_params::{ActionParams, DEFAULT_METADATA_REVALIDATE, DEFAULT_SPEECH_API_KEY_ENV};
