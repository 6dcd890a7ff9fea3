//! CORS header module
//!
//! Applies the cross-origin headers from the configuration injected at
//! startup. Every value is a plain string so the header set stays a single
//! source of truth in `CorsConfig`.

use crate::config::CorsConfig;
use crate::logger;
use http_body_util::Full;
use hyper::body::Bytes;
use hyper::http::response::Builder;
use hyper::Response;

/// Attach the configured CORS headers to a response builder
pub fn apply_headers(builder: Builder, cors: &CorsConfig) -> Builder {
    builder
        .header("Access-Control-Allow-Origin", cors.allow_origin.as_str())
        .header("Access-Control-Allow-Methods", cors.allow_methods.as_str())
        .header("Access-Control-Allow-Headers", cors.allow_headers.as_str())
        .header("Access-Control-Max-Age", cors.max_age.to_string())
}

/// Build the 204 response for OPTIONS preflight requests
pub fn build_preflight_response(cors: &CorsConfig) -> Response<Full<Bytes>> {
    apply_headers(Response::builder().status(204), cors)
        .body(Full::new(Bytes::new()))
        .unwrap_or_else(|e| {
            logger::log_error(&format!("Failed to build preflight response: {e}"));
            Response::new(Full::new(Bytes::new()))
        })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_preflight_response() {
        let cors = CorsConfig::default();
        let resp = build_preflight_response(&cors);

        assert_eq!(resp.status(), 204);
        assert_eq!(resp.headers()["Access-Control-Allow-Origin"], "*");
        assert_eq!(
            resp.headers()["Access-Control-Allow-Methods"],
            "GET, POST, OPTIONS"
        );
        assert_eq!(
            resp.headers()["Access-Control-Allow-Headers"],
            "Content-Type, Accept"
        );
        assert_eq!(resp.headers()["Access-Control-Max-Age"], "86400");
    }

    #[test]
    fn test_custom_origin() {
        let cors = CorsConfig {
            allow_origin: "https://example.com".to_string(),
            ..CorsConfig::default()
        };
        let resp = build_preflight_response(&cors);
        assert_eq!(
            resp.headers()["Access-Control-Allow-Origin"],
            "https://example.com"
        );
    }
}
