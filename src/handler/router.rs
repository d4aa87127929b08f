//! Request routing dispatch module
//!
//! Entry point for HTTP request processing: runs interceptors, validates the
//! method, matches the route, and dispatches to the handler.

use http_body_util::Full;
use hyper::body::Bytes;
use hyper::{Method, Request, Response, StatusCode};
use std::convert::Infallible;
use std::sync::Arc;

use super::interceptor::RequestInfo;
use super::{api, page};
use crate::config::AppState;
use crate::http;
use crate::release::Release;
use crate::snapshot::Snapshot;

/// Routes known to the servers
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Route {
    Landing,
    Health,
    Info,
    Features,
}

impl Route {
    /// Match a request path against the routes `release` serves
    pub fn resolve(path: &str, release: &Release) -> Option<Self> {
        match path {
            "/" => Some(Self::Landing),
            "/health" => Some(Self::Health),
            "/api/info" => Some(Self::Info),
            "/api/features" if release.has_feature_catalog() => Some(Self::Features),
            _ => None,
        }
    }
}

/// Main entry point for HTTP request handling
///
/// Generic over the body type: no route reads the request body.
#[allow(clippy::unused_async)]
pub async fn handle_request<B>(
    req: Request<B>,
    state: Arc<AppState>,
) -> Result<Response<Full<Bytes>>, Infallible> {
    let method = req.method();
    let uri = req.uri();

    // 1. Interceptors see every request, including ones that end up 404/405
    let info = RequestInfo { method, uri };
    for interceptor in &state.interceptors {
        interceptor.intercept(&info);
    }

    // 2. Check HTTP method
    let is_head = match *method {
        Method::GET => false,
        Method::HEAD => true,
        Method::OPTIONS => return Ok(http::build_options_response()),
        _ => return Ok(http::build_405_response()),
    };

    // 3. Route and dispatch
    let path = uri.path();
    let response = match Route::resolve(path, state.release) {
        Some(route) => dispatch(route, state.release, is_head),
        None => http::build_404_response(path, is_head),
    };
    Ok(response)
}

/// Dispatch to specific route handler
fn dispatch(route: Route, release: &Release, is_head: bool) -> Response<Full<Bytes>> {
    match route {
        Route::Landing => {
            http::build_html_response(page::render(release, &Snapshot::capture()), is_head)
        }
        Route::Health => {
            http::build_json_response(StatusCode::OK, &api::health(release), is_head)
        }
        Route::Info => http::build_json_response(
            StatusCode::OK,
            &api::info(release, Snapshot::capture()),
            is_head,
        ),
        Route::Features => match api::features(release) {
            Some(body) => http::build_json_response(StatusCode::OK, &body, is_head),
            None => http::build_404_response("/api/features", is_head),
        },
    }
}
