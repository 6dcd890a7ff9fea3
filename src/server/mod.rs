// Server module entry
// Listener creation, accept loop, and connection handling

pub mod connection;
pub mod listener;

// `loop` is a keyword, so the module keeps the file name via #[path]
#[path = "loop.rs"]
pub mod server_loop;

// Re-export commonly used entry points
pub use listener::create_listener;
pub use server_loop::run;
