//! Request handler module
//!
//! Routing dispatch, the request interceptor chain, and the handlers behind
//! each route.

pub mod api;
pub mod interceptor;
pub mod page;
pub mod router;

// Re-export main entry point
pub use interceptor::{AccessLogInterceptor, RequestInfo, RequestInterceptor};
pub use router::{handle_request, Route};
