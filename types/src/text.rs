//! Small pure text helpers.

/// Uppercase the first character of `s`, leaving the rest untouched.
///
/// No case normalization happens beyond the first character: `"mcDonald"`
/// becomes `"McDonald"`, not `"Mcdonald"`.
#[must_use]
pub fn capitalize_first(s: &str) -> String {
    let mut chars = s.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => String::new(),
    }
}
