//! Configuration file loading for miniperplx-actions
//!
//! This module handles file I/O and merging of configuration from multiple sources.
//! The priority order (highest to lowest):
//!
//! 1. Environment variables prefixed with `MINIPERPLX_`
//! 2. `--config <path>` specified file
//! 3. Project root: `./miniperplx.toml` or `./.miniperplx.toml`
//! 4. XDG config: `$XDG_CONFIG_HOME/miniperplx/config.toml`
//! 5. Default values

mod file_config;
mod loader;

pub use file_config::{
    ConfigValidationError, FileConfig, FileFetchConfig, FileLlmConfig, FileSpeechConfig,
};
pub use loader::ConfigLoader;
