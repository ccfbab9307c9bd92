use crate::headers::Headers;

/// Why an admitted preflight failed strict validation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PreflightRejectionReason {
    MethodNotAllowed { requested_method: String },
    HeadersNotAllowed { requested_headers: String },
}

/// A preflight from an admitted origin that failed strict validation.
///
/// Carries only `Vary`; the allow headers are withheld.
#[derive(Debug, Clone)]
pub struct PreflightRejection {
    pub headers: Headers,
    pub reason: PreflightRejectionReason,
}

/// Overall decision returned by the policy engine.
///
/// No variant implies an HTTP status code; terminating variants are answered with
/// whatever the hosting framework uses when the chain stops.
#[derive(Debug, Clone)]
pub enum CorsDecision {
    /// No `Origin` header: not a cross-origin request. Continue.
    NotApplicable { headers: Headers },
    /// Admitted actual request. Continue with the headers applied.
    SimpleAccepted { headers: Headers },
    /// Admitted and validated preflight. Answer without invoking downstream handlers.
    PreflightAccepted { headers: Headers },
    /// Admitted preflight that failed strict validation. Answer without allow headers.
    PreflightRejected(PreflightRejection),
    /// Origin not in the allow-list. Stop the chain.
    OriginRejected { headers: Headers },
}

impl CorsDecision {
    pub fn headers(&self) -> &Headers {
        match self {
            Self::NotApplicable { headers }
            | Self::SimpleAccepted { headers }
            | Self::PreflightAccepted { headers }
            | Self::OriginRejected { headers } => headers,
            Self::PreflightRejected(rejection) => &rejection.headers,
        }
    }

    pub fn into_headers(self) -> Headers {
        match self {
            Self::NotApplicable { headers }
            | Self::SimpleAccepted { headers }
            | Self::PreflightAccepted { headers }
            | Self::OriginRejected { headers } => headers,
            Self::PreflightRejected(rejection) => rejection.headers,
        }
    }

    /// Whether the request proceeds to the next handler in the chain.
    pub fn should_continue(&self) -> bool {
        matches!(self, Self::NotApplicable { .. } | Self::SimpleAccepted { .. })
    }

    pub fn is_preflight(&self) -> bool {
        matches!(
            self,
            Self::PreflightAccepted { .. } | Self::PreflightRejected(_)
        )
    }
}
