//! Presentation layer for miniperplx-actions
//!
//! This crate contains the CLI definition, history input parsing,
//! output formatters, and the progress spinner.

pub mod cli;
pub mod input;
pub mod output;
pub mod progress;

// Re-export commonly used types
pub use cli::commands::{Cli, Command};
pub use input::history::{HistoryInputError, read_history};
pub use output::console::ConsoleFormatter;
pub use output::formatter::JsonFormatter;
pub use progress::spinner::ActionSpinner;
