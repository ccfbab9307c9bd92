use crate::config::{CorsConfig, ValidationError};
use crate::context::RequestContext;
use crate::header_builder::HeaderBuilder;
use crate::headers::HeaderCollection;
use crate::policy::PolicyConfig;
use crate::result::{CorsDecision, PreflightRejection, PreflightRejectionReason};
use log::{debug, trace};

/// Core CORS policy engine that evaluates requests against a [`PolicyConfig`].
///
/// Evaluation is a pure function of the immutable policy and the request facts, so a
/// single instance can be shared across threads behind an `Arc`.
#[derive(Debug, Clone)]
pub struct Cors {
    policy: PolicyConfig,
}

impl Cors {
    pub fn new(config: CorsConfig) -> Result<Self, ValidationError> {
        PolicyConfig::from_config(&config).map(Self::from_policy)
    }

    pub fn from_policy(policy: PolicyConfig) -> Self {
        Self { policy }
    }

    pub fn policy(&self) -> &PolicyConfig {
        &self.policy
    }

    pub fn check(&self, request: &RequestContext<'_>) -> CorsDecision {
        let builder = HeaderBuilder::new(&self.policy);
        let mut headers = builder.start();

        if request.origin.is_empty() {
            return CorsDecision::NotApplicable {
                headers: headers.into_headers(),
            };
        }

        if !self.policy.origins().matches(request.origin) {
            debug!("CORS origin {:?} is not allowed", request.origin);
            return CorsDecision::OriginRejected {
                headers: headers.into_headers(),
            };
        }

        if request.is_preflight() {
            return self.process_preflight(&builder, headers, request);
        }

        builder.build_exposed_headers(&mut headers);
        builder.build_origin_headers(&mut headers, request.origin);
        trace!(
            "CORS {} request from {:?} accepted",
            request.method, request.origin
        );

        CorsDecision::SimpleAccepted {
            headers: headers.into_headers(),
        }
    }

    fn process_preflight(
        &self,
        builder: &HeaderBuilder<'_>,
        mut headers: HeaderCollection,
        request: &RequestContext<'_>,
    ) -> CorsDecision {
        let reason = if !self
            .policy
            .accepts_request_method(request.access_control_request_method)
        {
            PreflightRejectionReason::MethodNotAllowed {
                requested_method: request.access_control_request_method.to_owned(),
            }
        } else if !self
            .policy
            .accepts_request_headers(request.access_control_request_headers)
        {
            PreflightRejectionReason::HeadersNotAllowed {
                requested_headers: request.access_control_request_headers.to_owned(),
            }
        } else {
            builder.build_preflight_headers(&mut headers);
            trace!("CORS preflight from {:?} accepted", request.origin);
            return CorsDecision::PreflightAccepted {
                headers: headers.into_headers(),
            };
        };

        debug!(
            "CORS preflight from {:?} rejected: {:?}",
            request.origin, reason
        );
        CorsDecision::PreflightRejected(PreflightRejection {
            headers: headers.into_headers(),
            reason,
        })
    }
}

#[cfg(test)]
#[path = "cors_test.rs"]
mod cors_test;
