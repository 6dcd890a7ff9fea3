//! HTTP protocol layer module
//!
//! Protocol-level helpers shared by the static file server and the contact
//! API, decoupled from specific business logic.

pub mod cors;
pub mod mime;
pub mod response;

// Re-export commonly used builders
pub use cors::build_preflight_response;
pub use response::{
    build_forbidden_response, build_not_found_response, build_server_error_response,
    build_static_response,
};
