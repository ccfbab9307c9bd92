//! Binding between the policy engine and a hosting HTTP layer.
//!
//! Frameworks implement [`CorsExchange`] over their request/response pair and call
//! [`Cors::handle`] from their handler chain.

use crate::constants::header;
use crate::context::RequestContext;
use crate::cors::Cors;
use crate::result::CorsDecision;

/// Minimal view of one in-flight request/response pair.
pub trait CorsExchange {
    fn method(&self) -> &str;

    /// Value of a request header, `None` when absent.
    fn request_header(&self, name: &str) -> Option<&str>;

    /// Sets a response header, replacing any previous value.
    fn set_response_header(&mut self, name: &str, value: &str);

    /// Adds a response header value without removing existing ones.
    fn append_response_header(&mut self, name: &str, value: &str);
}

/// Control primitive returned to the hosting handler chain.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Flow {
    /// Invoke the next handler.
    Continue,
    /// Stop the chain without invoking downstream handlers.
    Break,
}

impl From<&CorsDecision> for Flow {
    fn from(decision: &CorsDecision) -> Self {
        if decision.should_continue() {
            Flow::Continue
        } else {
            Flow::Break
        }
    }
}

impl Cors {
    /// Evaluates the exchange, writes the resulting headers and reports how the chain
    /// should proceed. The body is never touched.
    pub fn handle<E: CorsExchange + ?Sized>(&self, exchange: &mut E) -> Flow {
        let decision = {
            let ctx = RequestContext {
                method: exchange.method(),
                origin: exchange.request_header(header::ORIGIN).unwrap_or_default(),
                access_control_request_method: exchange
                    .request_header(header::ACCESS_CONTROL_REQUEST_METHOD)
                    .unwrap_or_default(),
                access_control_request_headers: exchange
                    .request_header(header::ACCESS_CONTROL_REQUEST_HEADERS)
                    .unwrap_or_default(),
            };
            self.check(&ctx)
        };

        let flow = Flow::from(&decision);
        for (name, value) in decision.headers() {
            if name.eq_ignore_ascii_case(header::VARY) {
                exchange.append_response_header(name, value);
            } else {
                exchange.set_response_header(name, value);
            }
        }

        flow
    }
}

#[cfg(test)]
#[path = "middleware_test.rs"]
mod middleware_test;
