//! Name sanitization for stored person fields.
//!
//! Stored names may only contain ASCII letters, ASCII digits, `-` and `'`.
//! Every other character is deleted, not substituted, so a run of disallowed
//! characters collapses to nothing.

use std::borrow::Cow;

/// Check if a character may appear in a stored name.
#[must_use]
pub fn is_name_char(c: char) -> bool {
    c.is_ascii_alphanumeric() || matches!(c, '-' | '\'')
}

/// Sanitize a raw name for storage.
///
/// Strips every character outside `[A-Za-z0-9'-]`. Sanitizing an already
/// sanitized string returns it unchanged.
///
/// # Performance
///
/// Returns `Cow::Borrowed` when the input is already clean, avoiding allocation.
///
/// # Examples
///
/// ```
/// use accessors_types::sanitize_name;
///
/// assert_eq!(sanitize_name("O'Brien-Smith"), "O'Brien-Smith");
/// assert_eq!(sanitize_name("Carr@ol-Ann"), "Carrol-Ann");
/// ```
#[must_use]
pub fn sanitize_name(input: &str) -> Cow<'_, str> {
    // Fast path: nothing to strip
    if input.chars().all(is_name_char) {
        return Cow::Borrowed(input);
    }

    let result: String = input.chars().filter(|&c| is_name_char(c)).collect();
    tracing::debug!(
        removed = input.chars().count() - result.chars().count(),
        "Stripped disallowed characters from name"
    );
    Cow::Owned(result)
}
