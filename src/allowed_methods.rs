use crate::util::split_list;

/// Configuration for the `Access-Control-Allow-Methods` response header.
///
/// Methods keep their configured order and case; matching is case-sensitive.
#[derive(Clone, PartialEq, Eq, Debug)]
pub struct AllowedMethods {
    values: Vec<String>,
    header_value: String,
}

impl AllowedMethods {
    /// Parses a comma-space delimited method list, keeping the raw string for rendering.
    pub fn parse(raw: &str) -> Self {
        Self {
            values: split_list(raw).map(str::to_owned).collect(),
            header_value: raw.to_owned(),
        }
    }

    pub fn values(&self) -> &[String] {
        &self.values
    }

    /// Return the header value representation, if any.
    pub fn header_value(&self) -> Option<&str> {
        if self.header_value.is_empty() {
            None
        } else {
            Some(&self.header_value)
        }
    }

    pub fn allows_method(&self, method: &str) -> bool {
        !method.is_empty() && self.values.iter().any(|value| value == method)
    }
}

#[cfg(test)]
#[path = "allowed_methods_test.rs"]
mod allowed_methods_test;
