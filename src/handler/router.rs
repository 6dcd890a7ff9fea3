//! Request routing dispatch module
//!
//! Entry point for HTTP request processing: dispatches each request to the
//! CORS preflight, static file, or contact submission handler, falling back
//! to the structured 404.

use http_body_util::Full;
use hyper::body::Bytes;
use hyper::{Method, Request, Response};
use std::convert::Infallible;
use std::sync::Arc;

use crate::api;
use crate::config::AppState;
use crate::handler::static_files;
use crate::http;
use crate::logger;

/// Main entry point for HTTP request handling.
///
/// Dispatch order: OPTIONS preflight first (no other checks), then GET as a
/// static file request, then POST on the two contact paths, then the 404
/// envelope. Exactly one response per request.
pub async fn handle_request(
    req: Request<hyper::body::Incoming>,
    state: Arc<AppState>,
) -> Result<Response<Full<Bytes>>, Infallible> {
    let method = req.method().clone();
    let path = req.uri().path().to_string();

    if state.config.logging.access_log {
        logger::log_request(&method, req.uri(), req.version());
    }
    logger::log_headers_count(req.headers().len(), state.config.logging.show_headers);

    let response = if method == Method::OPTIONS {
        http::build_preflight_response(&state.config.cors)
    } else if method == Method::GET {
        static_files::serve_static(&path, &state).await
    } else if method == Method::POST && (path == "/api/contacto" || path == "/contacto") {
        api::handle_contact(req, &state).await
    } else {
        logger::log_warning(&format!("Unmatched route: {method} {path}"));
        api::route_not_found(&state.config.cors)
    };

    Ok(response)
}
