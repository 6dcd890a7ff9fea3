//! HTTP response building module
//!
//! Builders for the plain-text status responses and the static file success
//! response, decoupled from routing logic.
//!
//! The plain-text error branches intentionally carry no CORS headers while
//! the success branch does; that asymmetry is observable behavior this
//! server preserves.

use crate::config::CorsConfig;
use crate::http::cors;
use crate::logger;
use http_body_util::Full;
use hyper::body::Bytes;
use hyper::Response;

/// Build 403 Forbidden response with the given body text
pub fn build_forbidden_response(body: &'static str) -> Response<Full<Bytes>> {
    build_plain_response(403, body)
}

/// Build 404 Not Found response
pub fn build_not_found_response() -> Response<Full<Bytes>> {
    build_plain_response(404, "404 Not Found")
}

/// Build 500 Internal Server Error response
pub fn build_server_error_response() -> Response<Full<Bytes>> {
    build_plain_response(500, "500 Internal Server Error")
}

/// Build 200 static file response with CORS and cache headers merged in
pub fn build_static_response(
    data: Vec<u8>,
    content_type: &str,
    cors_cfg: &CorsConfig,
    cache_max_age: u32,
) -> Response<Full<Bytes>> {
    let content_length = data.len();

    cors::apply_headers(Response::builder().status(200), cors_cfg)
        .header("Content-Type", content_type)
        .header("Content-Length", content_length)
        .header("Cache-Control", format!("public, max-age={cache_max_age}"))
        .body(Full::new(Bytes::from(data)))
        .unwrap_or_else(|e| {
            log_build_error(200, &e);
            Response::new(Full::new(Bytes::new()))
        })
}

fn build_plain_response(status: u16, body: &'static str) -> Response<Full<Bytes>> {
    Response::builder()
        .status(status)
        .header("Content-Type", "text/plain")
        .body(Full::new(Bytes::from(body)))
        .unwrap_or_else(|e| {
            log_build_error(status, &e);
            Response::new(Full::new(Bytes::from(body)))
        })
}

/// Log response build error
fn log_build_error(status: u16, error: &hyper::http::Error) {
    logger::log_error(&format!("Failed to build {status} response: {error}"));
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_plain_error_responses_have_no_cors() {
        for resp in [
            build_not_found_response(),
            build_server_error_response(),
            build_forbidden_response("Acceso prohibido"),
        ] {
            assert_eq!(resp.headers()["Content-Type"], "text/plain");
            assert!(!resp.headers().contains_key("Access-Control-Allow-Origin"));
        }
    }

    #[test]
    fn test_static_response_headers() {
        let cors = CorsConfig::default();
        let resp = build_static_response(b"body { }".to_vec(), "text/css", &cors, 3600);

        assert_eq!(resp.status(), 200);
        assert_eq!(resp.headers()["Content-Type"], "text/css");
        assert_eq!(resp.headers()["Content-Length"], "8");
        assert_eq!(resp.headers()["Cache-Control"], "public, max-age=3600");
        assert_eq!(resp.headers()["Access-Control-Allow-Origin"], "*");
    }
}
