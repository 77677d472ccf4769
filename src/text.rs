//! Small text helpers for labels.

/// Uppercase the first character of `text`, leaving the rest untouched.
///
/// ```
/// use gilt_pagination::text::capitalize;
///
/// assert_eq!(capitalize("next page"), "Next page");
/// ```
pub fn capitalize(text: &str) -> String {
    let mut chars = text.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => String::new(),
    }
}

/// Uppercase the first character of every space-separated word.
pub fn capitalize_all_after_spaces(text: &str) -> String {
    text.split(' ')
        .map(capitalize)
        .collect::<Vec<_>>()
        .join(" ")
}
