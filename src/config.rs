use std::time::Duration;
use thiserror::Error;

const DEFAULT_ORIGINS: &str = "*";
const DEFAULT_METHODS: &str = "GET, PUT, POST, DELETE";
const DEFAULT_REQUEST_HEADERS: &str = "Origin, Authorization, Content-Type";
const DEFAULT_MAX_AGE: Duration = Duration::from_secs(60);

/// Raw CORS configuration supplied by the hosting application at startup.
///
/// List fields are comma-space delimited (`"GET, POST"`). The value is consumed once
/// by [`Cors::new`](crate::Cors::new), which normalizes it into a [`PolicyConfig`](crate::PolicyConfig).
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(
    feature = "serialization",
    derive(serde::Serialize, serde::Deserialize),
    serde(default)
)]
pub struct CorsConfig {
    /// Compare the preflight probe method and headers against the configured lists
    /// instead of advertising them unconditionally.
    pub validate_headers: bool,
    /// Allowed origins, or `"*"` to admit any origin.
    pub origins: String,
    /// Request headers the resource accepts.
    pub request_headers: String,
    /// Headers the client may read from the response, emitted verbatim.
    pub exposed_headers: String,
    /// Accepted HTTP methods.
    pub methods: String,
    /// How long the client may cache a preflight response.
    #[cfg_attr(feature = "serialization", serde(with = "duration_secs"))]
    pub max_age: Duration,
    /// Allow cookies and authorization headers on cross-origin requests.
    pub credentials: bool,
}

impl Default for CorsConfig {
    fn default() -> Self {
        Self {
            validate_headers: false,
            origins: DEFAULT_ORIGINS.into(),
            request_headers: DEFAULT_REQUEST_HEADERS.into(),
            exposed_headers: String::new(),
            methods: DEFAULT_METHODS.into(),
            max_age: DEFAULT_MAX_AGE,
            credentials: true,
        }
    }
}

impl CorsConfig {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn validate_headers(mut self, enabled: bool) -> Self {
        self.validate_headers = enabled;
        self
    }

    pub fn origins(mut self, origins: impl Into<String>) -> Self {
        self.origins = origins.into();
        self
    }

    pub fn request_headers(mut self, headers: impl Into<String>) -> Self {
        self.request_headers = headers.into();
        self
    }

    pub fn exposed_headers(mut self, headers: impl Into<String>) -> Self {
        self.exposed_headers = headers.into();
        self
    }

    pub fn methods(mut self, methods: impl Into<String>) -> Self {
        self.methods = methods.into();
        self
    }

    pub fn max_age(mut self, max_age: Duration) -> Self {
        self.max_age = max_age;
        self
    }

    pub fn credentials(mut self, enabled: bool) -> Self {
        self.credentials = enabled;
        self
    }

    pub fn validate(&self) -> Result<(), ValidationError> {
        if self.origins.trim().is_empty() {
            return Err(ValidationError::EmptyOrigins);
        }

        Ok(())
    }
}

/// Errors that can be produced while turning a [`CorsConfig`] into a policy.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ValidationError {
    #[error(
        "at least one allowed origin must be configured; remove the CORS layer instead of leaving origins empty"
    )]
    EmptyOrigins,
}

#[cfg(feature = "serialization")]
mod duration_secs {
    use serde::{Deserialize, Deserializer, Serializer};
    use std::time::Duration;

    pub fn serialize<S: Serializer>(value: &Duration, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_u64(value.as_secs())
    }

    pub fn deserialize<'de, D: Deserializer<'de>>(deserializer: D) -> Result<Duration, D::Error> {
        u64::deserialize(deserializer).map(Duration::from_secs)
    }
}

#[cfg(test)]
#[path = "config_test.rs"]
mod config_test;
