// Contact API types module
// Wire-format structures for the contact endpoint responses

use serde::Serialize;

/// A validated contact-form submission.
///
/// Transient: created from the request body, echoed back in the
/// acknowledgement, never stored.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ContactSubmission {
    pub nombre: String,
    pub email: String,
    pub mensaje: String,
}

/// Successful submission acknowledgement
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ContactAck {
    pub success: bool,
    pub message: &'static str,
    pub received_via: &'static str,
    pub timestamp: String,
    pub data: ContactData,
}

/// Echo of the accepted submission (mensaje possibly truncated)
#[derive(Debug, Serialize)]
pub struct ContactData {
    pub nombre: String,
    pub email: String,
    pub mensaje: String,
}

/// Error envelope shared by the 400 and 500 API responses
#[derive(Debug, Serialize)]
pub struct ApiError {
    pub success: bool,
    pub error: String,
    pub timestamp: String,
}

/// 404 envelope for unmatched method/path combinations
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct RouteNotFound {
    pub success: bool,
    pub error: &'static str,
    pub timestamp: String,
    pub available_endpoints: Vec<Endpoint>,
}

/// One documented endpoint listed in the 404 envelope
#[derive(Debug, Serialize)]
pub struct Endpoint {
    pub method: &'static str,
    pub path: &'static str,
    pub description: &'static str,
}
