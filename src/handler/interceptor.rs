//! Request interceptors
//!
//! Interceptors observe every request before it is dispatched. They get a
//! read-only view of the request line and cannot change the outcome.

use hyper::{Method, Uri};

use crate::logger::{self, RequestLogEntry, RequestLogFormat};
use crate::snapshot;

/// Read-only view of an inbound request
#[derive(Debug, Clone, Copy)]
pub struct RequestInfo<'a> {
    pub method: &'a Method,
    pub uri: &'a Uri,
}

/// Hook run before route dispatch
pub trait RequestInterceptor: Send + Sync {
    fn intercept(&self, request: &RequestInfo<'_>);
}

/// Writes one access log line per request
#[derive(Debug, Clone, Copy)]
pub struct AccessLogInterceptor {
    format: RequestLogFormat,
}

impl AccessLogInterceptor {
    pub fn new(format: &str) -> Self {
        Self {
            format: RequestLogFormat::parse(format),
        }
    }

    /// Build the entry for a request, stamped with the current time
    pub fn entry(request: &RequestInfo<'_>) -> RequestLogEntry {
        let uri = request
            .uri
            .path_and_query()
            .map_or_else(|| request.uri.path(), |pq| pq.as_str());
        RequestLogEntry::new(snapshot::now_iso8601(), request.method.as_str(), uri)
    }
}

impl RequestInterceptor for AccessLogInterceptor {
    fn intercept(&self, request: &RequestInfo<'_>) {
        logger::log_request(&Self::entry(request), self.format);
    }
}
