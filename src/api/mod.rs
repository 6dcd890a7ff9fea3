// Contact API module entry
// JSON endpoint for contact-form submissions

mod contact;
mod response;
mod types;

// Re-export the handler surface used by the router
pub use contact::handle_contact;
pub use response::route_not_found;
