use crate::constants::method;

/// Facts about an inbound request that drive a CORS decision.
///
/// Absent headers are represented by the empty string.
#[derive(Debug, Clone, Default)]
pub struct RequestContext<'a> {
    pub method: &'a str,
    pub origin: &'a str,
    pub access_control_request_method: &'a str,
    pub access_control_request_headers: &'a str,
}

impl RequestContext<'_> {
    /// `OPTIONS` carrying a non-empty `Access-Control-Request-Method` probe.
    ///
    /// A bare `OPTIONS` without the probe is an actual request.
    pub fn is_preflight(&self) -> bool {
        self.method == method::OPTIONS && !self.access_control_request_method.is_empty()
    }
}

#[cfg(test)]
#[path = "context_test.rs"]
mod context_test;
