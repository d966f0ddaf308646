//! Clock port
//!
//! Prompt text embeds the current date; reading it through this port keeps
//! prompt construction deterministic under test.

use chrono::NaiveDate;

pub trait Clock: Send + Sync {
    /// The current calendar day in local time
    fn today(&self) -> NaiveDate;
}

/// Reads the system clock
#[derive(Debug, Clone, Copy, Default)]
pub struct SystemClock;

impl Clock for SystemClock {
    fn today(&self) -> NaiveDate {
        chrono::Local::now().date_naive()
    }
}

/// Always returns the same day
#[derive(Debug, Clone, Copy)]
pub struct FixedClock(pub NaiveDate);

impl Clock for FixedClock {
    fn today(&self) -> NaiveDate {
        self.0
    }
}
