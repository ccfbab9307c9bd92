//! Framework-agnostic CORS policy engine.
//!
//! A [`CorsConfig`] is normalized once into an immutable [`PolicyConfig`]; [`Cors::check`]
//! then evaluates each request's [`RequestContext`] into a [`CorsDecision`] carrying the
//! response headers and whether the handler chain continues.

mod allowed_headers;
mod allowed_methods;
mod config;
pub mod constants;
mod context;
mod cors;
mod header_builder;
mod headers;
mod middleware;
mod origin;
mod policy;
mod result;
mod util;

pub use allowed_headers::AllowedHeaders;
pub use allowed_methods::AllowedMethods;
pub use config::{CorsConfig, ValidationError};
pub use context::RequestContext;
pub use cors::Cors;
pub use headers::Headers;
pub use middleware::{CorsExchange, Flow};
pub use origin::AllowedOrigins;
pub use policy::PolicyConfig;
pub use result::{CorsDecision, PreflightRejection, PreflightRejectionReason};
