//! Character-aware text truncation

use std::borrow::Cow;

/// Truncate `text` to at most `max_chars` characters plus an ellipsis.
///
/// Returns the input unchanged when `max_chars` is zero or the text already
/// fits. Counts `char`s, so multi-byte text is never split mid code point.
pub fn truncate(text: &str, max_chars: usize) -> Cow<'_, str> {
    if max_chars == 0 || text.chars().count() <= max_chars {
        return Cow::Borrowed(text);
    }
    let cut: String = text.chars().take(max_chars).collect();
    Cow::Owned(format!("{cut}..."))
}
