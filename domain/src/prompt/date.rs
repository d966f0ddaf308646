//! Date stamping for system prompts

use chrono::NaiveDate;

/// Format a date the way prompts display it, e.g. `Thu, Oct 15, 2026`
///
/// Weekday and month names are always English abbreviations; the day is
/// zero-padded to two digits.
pub fn format_prompt_date(date: NaiveDate) -> String {
    date.format("%a, %b %d, %Y").to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_prompt_date() {
        let date = NaiveDate::from_ymd_opt(2026, 10, 15).unwrap();
        assert_eq!(format_prompt_date(date), "Thu, Oct 15, 2026");
    }

    #[test]
    fn test_single_digit_day_is_padded() {
        let date = NaiveDate::from_ymd_opt(2024, 3, 5).unwrap();
        assert_eq!(format_prompt_date(date), "Tue, Mar 05, 2024");
    }
}
