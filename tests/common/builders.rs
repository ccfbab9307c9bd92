use gatekeep_cors::constants::method;
use gatekeep_cors::{Cors, CorsConfig, CorsDecision, RequestContext};
use std::time::Duration;

pub struct CorsBuilder {
    config: CorsConfig,
}

impl CorsBuilder {
    pub fn new() -> Self {
        Self {
            config: CorsConfig::default(),
        }
    }

    pub fn origins(mut self, origins: &str) -> Self {
        self.config = self.config.origins(origins);
        self
    }

    pub fn methods(mut self, methods: &str) -> Self {
        self.config = self.config.methods(methods);
        self
    }

    pub fn request_headers(mut self, headers: &str) -> Self {
        self.config = self.config.request_headers(headers);
        self
    }

    pub fn exposed_headers(mut self, headers: &str) -> Self {
        self.config = self.config.exposed_headers(headers);
        self
    }

    pub fn credentials(mut self, enabled: bool) -> Self {
        self.config = self.config.credentials(enabled);
        self
    }

    pub fn max_age(mut self, seconds: u64) -> Self {
        self.config = self.config.max_age(Duration::from_secs(seconds));
        self
    }

    pub fn strict(mut self, enabled: bool) -> Self {
        self.config = self.config.validate_headers(enabled);
        self
    }

    pub fn build(self) -> Cors {
        Cors::new(self.config).expect("valid CORS configuration")
    }
}

pub struct SimpleRequestBuilder {
    method: String,
    origin: Option<String>,
}

impl SimpleRequestBuilder {
    pub fn new() -> Self {
        Self {
            method: method::GET.into(),
            origin: None,
        }
    }

    pub fn method(mut self, method: impl Into<String>) -> Self {
        self.method = method.into();
        self
    }

    pub fn origin(mut self, origin: impl Into<String>) -> Self {
        self.origin = Some(origin.into());
        self
    }

    pub fn check(self, cors: &Cors) -> CorsDecision {
        let ctx = RequestContext {
            method: &self.method,
            origin: self.origin.as_deref().unwrap_or_default(),
            ..RequestContext::default()
        };
        cors.check(&ctx)
    }
}

#[derive(Default)]
pub struct PreflightRequestBuilder {
    origin: Option<String>,
    request_method: Option<String>,
    request_headers: Option<String>,
}

impl PreflightRequestBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn origin(mut self, origin: impl Into<String>) -> Self {
        self.origin = Some(origin.into());
        self
    }

    pub fn request_method(mut self, method: impl Into<String>) -> Self {
        self.request_method = Some(method.into());
        self
    }

    pub fn request_headers(mut self, headers: impl Into<String>) -> Self {
        self.request_headers = Some(headers.into());
        self
    }

    pub fn check(self, cors: &Cors) -> CorsDecision {
        let ctx = RequestContext {
            method: method::OPTIONS,
            origin: self.origin.as_deref().unwrap_or_default(),
            access_control_request_method: self.request_method.as_deref().unwrap_or_default(),
            access_control_request_headers: self.request_headers.as_deref().unwrap_or_default(),
        };
        cors.check(&ctx)
    }
}

pub fn cors() -> CorsBuilder {
    CorsBuilder::new()
}

pub fn simple_request() -> SimpleRequestBuilder {
    SimpleRequestBuilder::new()
}

pub fn preflight_request() -> PreflightRequestBuilder {
    PreflightRequestBuilder::new()
}
