// API response utility functions module

use crate::config::CorsConfig;
use crate::http::cors;
use crate::logger;
use chrono::{SecondsFormat, Utc};
use http_body_util::Full;
use hyper::body::Bytes;
use hyper::{Response, StatusCode};
use serde::Serialize;

use super::types::{ApiError, Endpoint, RouteNotFound};

/// ISO 8601 UTC timestamp with millisecond precision
pub fn iso_timestamp() -> String {
    Utc::now().to_rfc3339_opts(SecondsFormat::Millis, true)
}

/// Build a JSON response with the configured CORS headers attached
pub fn json_response<T: Serialize>(
    status: StatusCode,
    body: &T,
    cors_cfg: &CorsConfig,
) -> Response<Full<Bytes>> {
    let json = match serde_json::to_string(body) {
        Ok(j) => j,
        Err(e) => {
            logger::log_error(&format!("Failed to serialize response: {e}"));
            return cors::apply_headers(
                Response::builder().status(StatusCode::INTERNAL_SERVER_ERROR),
                cors_cfg,
            )
            .header("Content-Type", "application/json")
            .body(Full::new(Bytes::from(
                r#"{"success":false,"error":"Error interno del servidor"}"#,
            )))
            .unwrap_or_else(|_| Response::new(Full::new(Bytes::from("Error"))));
        }
    };

    cors::apply_headers(Response::builder().status(status), cors_cfg)
        .header("Content-Type", "application/json")
        .body(Full::new(Bytes::from(json)))
        .unwrap_or_else(|e| {
            logger::log_error(&format!("Failed to build response: {e}"));
            Response::new(Full::new(Bytes::from("Error")))
        })
}

/// 400 Bad Request carrying the parse or validation error message
pub fn bad_request(message: String, cors_cfg: &CorsConfig) -> Response<Full<Bytes>> {
    let body = ApiError {
        success: false,
        error: message,
        timestamp: iso_timestamp(),
    };
    json_response(StatusCode::BAD_REQUEST, &body, cors_cfg)
}

/// 500 Internal Server Error for transport failures while reading the body
pub fn server_error(cors_cfg: &CorsConfig) -> Response<Full<Bytes>> {
    let body = ApiError {
        success: false,
        error: "Error interno del servidor".to_string(),
        timestamp: iso_timestamp(),
    };
    json_response(StatusCode::INTERNAL_SERVER_ERROR, &body, cors_cfg)
}

/// 404 for unmatched routes, listing the documented endpoints
pub fn route_not_found(cors_cfg: &CorsConfig) -> Response<Full<Bytes>> {
    let body = RouteNotFound {
        success: false,
        error: "Ruta no encontrada",
        timestamp: iso_timestamp(),
        available_endpoints: available_endpoints(),
    };
    json_response(StatusCode::NOT_FOUND, &body, cors_cfg)
}

fn available_endpoints() -> Vec<Endpoint> {
    vec![
        Endpoint {
            method: "GET",
            path: "/",
            description: "Formulario de contacto",
        },
        Endpoint {
            method: "POST",
            path: "/contacto",
            description: "Enviar mensaje de contacto",
        },
        Endpoint {
            method: "POST",
            path: "/api/contacto",
            description: "Enviar mensaje (proxy)",
        },
    ]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_route_not_found_envelope() {
        let cors = CorsConfig::default();
        let resp = route_not_found(&cors);

        assert_eq!(resp.status(), StatusCode::NOT_FOUND);
        assert_eq!(resp.headers()["Content-Type"], "application/json");
        assert_eq!(resp.headers()["Access-Control-Allow-Origin"], "*");
    }

    #[test]
    fn test_endpoint_listing() {
        let endpoints = available_endpoints();
        assert_eq!(endpoints.len(), 3);

        let json = serde_json::to_value(&endpoints).unwrap();
        assert_eq!(json[0]["method"], "GET");
        assert_eq!(json[0]["path"], "/");
        assert_eq!(json[1]["path"], "/contacto");
        assert_eq!(json[2]["path"], "/api/contacto");
    }

    #[test]
    fn test_not_found_body_shape() {
        let body = RouteNotFound {
            success: false,
            error: "Ruta no encontrada",
            timestamp: iso_timestamp(),
            available_endpoints: available_endpoints(),
        };
        let json = serde_json::to_value(&body).unwrap();

        assert_eq!(json["success"], false);
        assert_eq!(json["error"], "Ruta no encontrada");
        // Wire name is camelCase
        assert!(json["availableEndpoints"].is_array());
        assert!(json["timestamp"].is_string());
    }

    #[test]
    fn test_timestamp_shape() {
        let ts = iso_timestamp();
        // 2026-08-05T12:34:56.789Z
        assert!(ts.ends_with('Z'));
        assert_eq!(ts.len(), 24);
    }
}
