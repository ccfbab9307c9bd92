use crate::constants::{WILDCARD, header};
use crate::headers::HeaderCollection;
use crate::policy::PolicyConfig;

pub(crate) struct HeaderBuilder<'a> {
    policy: &'a PolicyConfig,
}

impl<'a> HeaderBuilder<'a> {
    pub(crate) fn new(policy: &'a PolicyConfig) -> Self {
        Self { policy }
    }

    /// Every evaluated response varies on `Origin`, CORS or not.
    pub(crate) fn start(&self) -> HeaderCollection {
        let mut headers = HeaderCollection::new();
        headers.add_vary(header::ORIGIN);
        headers
    }

    pub(crate) fn build_preflight_headers(&self, headers: &mut HeaderCollection) {
        if let Some(value) = self.policy.methods().header_value() {
            headers.set(header::ACCESS_CONTROL_ALLOW_METHODS, value);
        }
        if let Some(value) = self.policy.allowed_headers().header_value() {
            headers.set(header::ACCESS_CONTROL_ALLOW_HEADERS, value);
        }
        if let Some(value) = self.policy.max_age_header() {
            headers.set(header::ACCESS_CONTROL_MAX_AGE, value);
        }
    }

    pub(crate) fn build_exposed_headers(&self, headers: &mut HeaderCollection) {
        if let Some(value) = self.policy.exposed_headers() {
            headers.set(header::ACCESS_CONTROL_EXPOSE_HEADERS, value);
        }
    }

    /// Credentials force the literal origin to be echoed; `*` is never paired with them.
    pub(crate) fn build_origin_headers(&self, headers: &mut HeaderCollection, origin: &str) {
        if self.policy.credentials() {
            headers.set(
                header::ACCESS_CONTROL_ALLOW_CREDENTIALS,
                self.policy.credentials_value(),
            );
            headers.set(header::ACCESS_CONTROL_ALLOW_ORIGIN, origin);
        } else if self.policy.allows_all_origins() {
            headers.set(header::ACCESS_CONTROL_ALLOW_ORIGIN, WILDCARD);
        } else {
            headers.set(header::ACCESS_CONTROL_ALLOW_ORIGIN, origin);
        }
    }
}

#[cfg(test)]
#[path = "header_builder_test.rs"]
mod header_builder_test;
