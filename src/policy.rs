use crate::allowed_headers::AllowedHeaders;
use crate::allowed_methods::AllowedMethods;
use crate::config::{CorsConfig, ValidationError};
use crate::origin::AllowedOrigins;

/// Normalized, immutable form of a [`CorsConfig`].
///
/// Every derived value is computed here once, so request evaluation never re-parses
/// configuration strings.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PolicyConfig {
    origins: AllowedOrigins,
    methods: AllowedMethods,
    allowed_headers: AllowedHeaders,
    exposed_headers: Option<String>,
    max_age: String,
    credentials: bool,
    credentials_value: &'static str,
    validate_headers: bool,
}

impl PolicyConfig {
    pub fn from_config(config: &CorsConfig) -> Result<Self, ValidationError> {
        config.validate()?;

        let exposed_headers = Some(config.exposed_headers.clone()).filter(|value| !value.is_empty());

        Ok(Self {
            origins: AllowedOrigins::parse(&config.origins)?,
            methods: AllowedMethods::parse(&config.methods),
            allowed_headers: AllowedHeaders::parse(&config.request_headers),
            exposed_headers,
            max_age: config.max_age.as_secs_f64().round_ties_even().to_string(),
            credentials: config.credentials,
            credentials_value: if config.credentials { "true" } else { "false" },
            validate_headers: config.validate_headers,
        })
    }

    pub fn origins(&self) -> &AllowedOrigins {
        &self.origins
    }

    pub fn allows_all_origins(&self) -> bool {
        self.origins.is_any()
    }

    pub fn methods(&self) -> &AllowedMethods {
        &self.methods
    }

    pub fn allowed_headers(&self) -> &AllowedHeaders {
        &self.allowed_headers
    }

    pub fn exposed_headers(&self) -> Option<&str> {
        self.exposed_headers.as_deref()
    }

    /// Preflight cache lifetime in whole seconds.
    pub fn max_age(&self) -> &str {
        &self.max_age
    }

    /// `Access-Control-Max-Age` value, absent when the lifetime is zero.
    pub fn max_age_header(&self) -> Option<&str> {
        if self.max_age == "0" {
            None
        } else {
            Some(&self.max_age)
        }
    }

    pub fn credentials(&self) -> bool {
        self.credentials
    }

    pub fn credentials_value(&self) -> &'static str {
        self.credentials_value
    }

    pub fn validate_headers(&self) -> bool {
        self.validate_headers
    }

    /// Strict mode compares the probed method against the configured list.
    pub(crate) fn accepts_request_method(&self, method: &str) -> bool {
        !self.validate_headers || self.methods.allows_method(method)
    }

    /// Strict mode requires every probed header to be configured.
    pub(crate) fn accepts_request_headers(&self, headers: &str) -> bool {
        !self.validate_headers || self.allowed_headers.allows_headers(headers)
    }
}

impl TryFrom<CorsConfig> for PolicyConfig {
    type Error = ValidationError;

    fn try_from(config: CorsConfig) -> Result<Self, Self::Error> {
        Self::from_config(&config)
    }
}

impl TryFrom<&CorsConfig> for PolicyConfig {
    type Error = ValidationError;

    fn try_from(config: &CorsConfig) -> Result<Self, Self::Error> {
        Self::from_config(config)
    }
}

#[cfg(test)]
#[path = "policy_test.rs"]
mod policy_test;
