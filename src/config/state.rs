// Application state module
// Read-only state shared by every connection task

use std::sync::Arc;

use super::types::Config;
use crate::handler::{AccessLogInterceptor, RequestInterceptor};
use crate::release::Release;

/// Application state
pub struct AppState {
    pub config: Config,
    pub release: &'static Release,
    /// Run in order before every dispatch
    pub interceptors: Vec<Arc<dyn RequestInterceptor>>,
}

impl AppState {
    /// Create state with the access log interceptor installed when enabled
    pub fn new(config: Config, release: &'static Release) -> Self {
        let mut interceptors: Vec<Arc<dyn RequestInterceptor>> = Vec::new();
        if config.logging.access_log {
            interceptors.push(Arc::new(AccessLogInterceptor::new(
                &config.logging.access_log_format,
            )));
        }

        Self {
            config,
            release,
            interceptors,
        }
    }

    /// Append an interceptor after the built-in ones
    #[must_use]
    pub fn with_interceptor(mut self, interceptor: Arc<dyn RequestInterceptor>) -> Self {
        self.interceptors.push(interceptor);
        self
    }
}
