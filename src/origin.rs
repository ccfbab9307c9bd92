use crate::config::ValidationError;
use crate::constants::WILDCARD;
use crate::util::split_list;
use indexmap::IndexSet;

/// Origins admitted by the policy.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AllowedOrigins {
    /// The `*` rule: every origin is admitted.
    Any,
    /// Exact origin strings, compared byte for byte.
    List(IndexSet<String>),
}

impl AllowedOrigins {
    pub fn any() -> Self {
        Self::Any
    }

    pub fn list<I, S>(values: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self::List(values.into_iter().map(Into::into).collect())
    }

    /// Parses the comma-space delimited origin rule.
    pub fn parse(rule: &str) -> Result<Self, ValidationError> {
        if rule == WILDCARD {
            return Ok(Self::Any);
        }

        let origins = split_list(rule).map(str::to_owned).collect::<IndexSet<_>>();
        if origins.is_empty() {
            return Err(ValidationError::EmptyOrigins);
        }

        Ok(Self::List(origins))
    }

    pub fn is_any(&self) -> bool {
        matches!(self, Self::Any)
    }

    /// Case-sensitive match of the `Origin` header. No scheme or port normalization.
    pub fn matches(&self, origin: &str) -> bool {
        match self {
            Self::Any => true,
            Self::List(origins) => origins.contains(origin),
        }
    }
}

#[cfg(test)]
#[path = "origin_test.rs"]
mod origin_test;
