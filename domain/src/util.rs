//! Shared utility functions.

use std::borrow::Cow;

/// Shorten `s` to at most `max_bytes` for log output, marking the cut with `...`.
///
/// Never splits a UTF-8 character; strings that already fit are borrowed unchanged.
pub fn log_preview(s: &str, max_bytes: usize) -> Cow<'_, str> {
    if s.len() <= max_bytes {
        return Cow::Borrowed(s);
    }
    let mut end = max_bytes;
    while end > 0 && !s.is_char_boundary(end) {
        end -= 1;
    }
    Cow::Owned(format!("{}...", &s[..end]))
}
