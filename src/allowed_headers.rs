use crate::util::{normalize_lower, split_list, trim_token};
use indexmap::IndexSet;

/// Configuration for the `Access-Control-Allow-Headers` response value.
///
/// Matching uses the lowercased names; the original string is kept for rendering.
#[derive(Clone, PartialEq, Eq, Debug)]
pub struct AllowedHeaders {
    normalized: IndexSet<String>,
    header_value: String,
}

impl AllowedHeaders {
    pub fn parse(raw: &str) -> Self {
        Self {
            normalized: split_list(raw).map(normalize_lower).collect(),
            header_value: raw.to_owned(),
        }
    }

    pub fn normalized(&self) -> impl Iterator<Item = &str> {
        self.normalized.iter().map(String::as_str)
    }

    pub fn header_value(&self) -> Option<&str> {
        if self.header_value.is_empty() {
            None
        } else {
            Some(&self.header_value)
        }
    }

    /// Case-insensitive subset check of a raw `Access-Control-Request-Headers` value.
    ///
    /// Every comma-separated token counts, empty ones included, so a blank value never
    /// passes.
    pub fn allows_headers(&self, request_headers: &str) -> bool {
        request_headers
            .split(',')
            .map(trim_token)
            .all(|header| self.normalized.contains(normalize_lower(header).as_str()))
    }
}

#[cfg(test)]
#[path = "allowed_headers_test.rs"]
mod allowed_headers_test;
