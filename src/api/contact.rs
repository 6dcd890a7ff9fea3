// Contact submission handler module
// Body collection, JSON validation, and the acknowledgement response

use http_body_util::{BodyExt, Full};
use hyper::body::Bytes;
use hyper::{Request, Response, StatusCode};
use serde_json::Value;
use std::sync::Arc;

use super::response::{self, json_response};
use super::types::{ContactAck, ContactData, ContactSubmission};
use crate::config::AppState;
use crate::logger;

/// Longest mensaje echoed back before truncation kicks in
const MESSAGE_ECHO_LIMIT: usize = 100;

/// Validation outcome for a submission body, matched by the handler to pick
/// status code and message. No exceptions-as-control-flow.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ValidationError {
    MissingFields,
    InvalidEmail,
}

impl ValidationError {
    pub const fn message(self) -> &'static str {
        match self {
            Self::MissingFields => "Todos los campos son requeridos",
            Self::InvalidEmail => "El email no tiene un formato válido",
        }
    }
}

/// Handle POST /contacto and /api/contacto
pub async fn handle_contact(
    req: Request<hyper::body::Incoming>,
    state: &Arc<AppState>,
) -> Response<Full<Bytes>> {
    let cors_cfg = &state.config.cors;

    // Host header decides the receivedVia diagnostic field
    let host = req
        .headers()
        .get("host")
        .and_then(|v| v.to_str().ok())
        .unwrap_or_default()
        .to_string();

    // A transport failure while reading the body is a 500, not a 400
    let body = match req.collect().await {
        Ok(collected) => collected.to_bytes(),
        Err(e) => {
            logger::log_error(&format!("Failed to read request body: {e}"));
            return response::server_error(cors_cfg);
        }
    };

    match parse_submission(&body) {
        Ok(submission) => {
            logger::log_contact_received(
                &submission.nombre,
                &submission.email,
                submission.mensaje.len(),
            );

            let ack = ContactAck {
                success: true,
                message: "Mensaje recibido correctamente",
                received_via: received_via(&host),
                timestamp: response::iso_timestamp(),
                data: ContactData {
                    nombre: submission.nombre,
                    email: submission.email,
                    mensaje: truncate_message(&submission.mensaje),
                },
            };
            json_response(StatusCode::OK, &ack, cors_cfg)
        }
        Err(message) => response::bad_request(message, cors_cfg),
    }
}

/// Parse and validate a submission body.
///
/// Returns the human-readable error message on failure: the JSON parser's
/// own message for malformed bodies, the fixed Spanish messages for
/// validation failures.
pub fn parse_submission(body: &[u8]) -> Result<ContactSubmission, String> {
    let value: Value = serde_json::from_slice(body).map_err(|e| e.to_string())?;
    validate(&value).map_err(|e| e.message().to_string())
}

/// Validate the parsed JSON against the submission contract
fn validate(value: &Value) -> Result<ContactSubmission, ValidationError> {
    let nombre = non_empty_field(value, "nombre");
    let email = non_empty_field(value, "email");
    let mensaje = non_empty_field(value, "mensaje");

    match (nombre, email, mensaje) {
        (Some(nombre), Some(email), Some(mensaje)) => {
            if is_valid_email(&email) {
                Ok(ContactSubmission {
                    nombre,
                    email,
                    mensaje,
                })
            } else {
                Err(ValidationError::InvalidEmail)
            }
        }
        _ => Err(ValidationError::MissingFields),
    }
}

/// Extract a field that is present, string-valued, and non-empty
fn non_empty_field(value: &Value, key: &str) -> Option<String> {
    value
        .get(key)
        .and_then(Value::as_str)
        .filter(|s| !s.is_empty())
        .map(ToString::to_string)
}

/// Check the email shape: one `@` with a non-empty local part, no
/// whitespace anywhere, and a dot inside the domain with at least one
/// character on each side
pub fn is_valid_email(email: &str) -> bool {
    if email.chars().any(char::is_whitespace) {
        return false;
    }
    let Some((local, domain)) = email.split_once('@') else {
        return false;
    };
    if local.is_empty() || domain.is_empty() || domain.contains('@') {
        return false;
    }
    domain
        .bytes()
        .enumerate()
        .any(|(i, b)| b == b'.' && i > 0 && i + 1 < domain.len())
}

/// Truncate the echoed mensaje to its first 100 characters, marking the cut
fn truncate_message(mensaje: &str) -> String {
    if mensaje.chars().count() > MESSAGE_ECHO_LIMIT {
        let mut truncated: String = mensaje.chars().take(MESSAGE_ECHO_LIMIT).collect();
        truncated.push_str("...");
        truncated
    } else {
        mensaje.to_string()
    }
}

fn received_via(host: &str) -> &'static str {
    if host.contains("3000") {
        "Node.js directo"
    } else {
        "Apache proxy"
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_valid_submission_round_trip() {
        let body = br#"{"nombre":"Ana","email":"ana@example.com","mensaje":"hi"}"#;
        let submission = parse_submission(body).unwrap();

        assert_eq!(submission.nombre, "Ana");
        assert_eq!(submission.email, "ana@example.com");
        assert_eq!(submission.mensaje, "hi");
    }

    #[test]
    fn test_missing_field() {
        let body = br#"{"nombre":"Ana","email":"ana@example.com"}"#;
        assert_eq!(
            parse_submission(body).unwrap_err(),
            "Todos los campos son requeridos"
        );
    }

    #[test]
    fn test_empty_field() {
        let body = br#"{"nombre":"","email":"ana@example.com","mensaje":"hi"}"#;
        assert_eq!(
            parse_submission(body).unwrap_err(),
            "Todos los campos son requeridos"
        );
    }

    #[test]
    fn test_null_field() {
        let body = br#"{"nombre":"Ana","email":null,"mensaje":"hi"}"#;
        assert_eq!(
            parse_submission(body).unwrap_err(),
            "Todos los campos son requeridos"
        );
    }

    #[test]
    fn test_non_string_field_is_missing() {
        let body = br#"{"nombre":42,"email":"ana@example.com","mensaje":"hi"}"#;
        assert_eq!(
            parse_submission(body).unwrap_err(),
            "Todos los campos son requeridos"
        );
    }

    #[test]
    fn test_invalid_email() {
        let body = br#"{"nombre":"Ana","email":"no-at-sign.com","mensaje":"hi"}"#;
        assert_eq!(
            parse_submission(body).unwrap_err(),
            "El email no tiene un formato válido"
        );
    }

    #[test]
    fn test_malformed_json() {
        let err = parse_submission(b"not json at all").unwrap_err();
        assert!(!err.is_empty());
        assert_ne!(err, "Todos los campos son requeridos");
    }

    #[test]
    fn test_email_pattern() {
        assert!(is_valid_email("ana@example.com"));
        assert!(is_valid_email("a.b+c@sub.example.co"));

        // no @
        assert!(!is_valid_email("no-at-sign.com"));
        // no dot in the domain
        assert!(!is_valid_email("a@b"));
        // empty local part
        assert!(!is_valid_email("@.com"));
        assert!(!is_valid_email("@example.com"));
        // dot at the domain edge
        assert!(!is_valid_email("a@.com"));
        assert!(!is_valid_email("a@com."));
        // whitespace and double @
        assert!(!is_valid_email("a b@example.com"));
        assert!(!is_valid_email("a@b@example.com"));
    }

    #[test]
    fn test_truncate_short_message() {
        assert_eq!(truncate_message("hi"), "hi");

        let exactly_100 = "x".repeat(100);
        assert_eq!(truncate_message(&exactly_100), exactly_100);
    }

    #[test]
    fn test_truncate_long_message() {
        let long = "y".repeat(150);
        let truncated = truncate_message(&long);

        assert_eq!(truncated.chars().count(), 103);
        assert!(truncated.ends_with("..."));
        assert!(truncated.starts_with(&"y".repeat(100)));
    }

    #[test]
    fn test_received_via() {
        assert_eq!(received_via("localhost:3000"), "Node.js directo");
        assert_eq!(received_via("localhost"), "Apache proxy");
        assert_eq!(received_via(""), "Apache proxy");
    }
}
