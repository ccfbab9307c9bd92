use crate::constants::LIST_SEPARATOR;

pub(crate) fn normalize_lower(value: &str) -> String {
    if value.is_ascii() {
        let mut owned = value.to_owned();
        owned.make_ascii_lowercase();
        owned
    } else {
        value.to_lowercase()
    }
}

/// Splits a comma-space delimited configuration string into trimmed, non-empty tokens.
pub(crate) fn split_list(value: &str) -> impl Iterator<Item = &str> {
    value
        .split(LIST_SEPARATOR)
        .map(str::trim)
        .filter(|token| !token.is_empty())
}

/// Strips surrounding whitespace and control characters from a request header token.
pub(crate) fn trim_token(value: &str) -> &str {
    value.trim_matches(|ch: char| ch.is_whitespace() || ch.is_control())
}

#[cfg(test)]
#[path = "util_test.rs"]
mod util_test;
