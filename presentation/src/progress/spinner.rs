//! Spinner shown on stderr while an action waits on the network

use indicatif::{ProgressBar, ProgressStyle};
use std::time::Duration;

/// Wraps an indicatif spinner; a hidden one when progress is suppressed
pub struct ActionSpinner {
    bar: ProgressBar,
}

impl ActionSpinner {
    pub fn start(message: &str, quiet: bool) -> Self {
        if quiet {
            return Self {
                bar: ProgressBar::hidden(),
            };
        }

        let bar = ProgressBar::new_spinner();
        if let Ok(style) = ProgressStyle::default_spinner().template("{spinner:.green} {msg}") {
            bar.set_style(style);
        }
        bar.set_message(message.to_string());
        bar.enable_steady_tick(Duration::from_millis(100));
        Self { bar }
    }

    pub fn finish(self) {
        self.bar.finish_and_clear();
    }
}
