// Configuration module entry point
// Loads layered configuration and holds the immutable application state

mod state;
mod types;

use std::net::{SocketAddr, ToSocketAddrs};

// Re-export public types
pub use state::AppState;
pub use types::{Config, CorsConfig, LoggingConfig, PerformanceConfig, ServerConfig, StaticConfig};

impl Config {
    /// Load configuration from "config.toml" (if present), `SERVER`-prefixed
    /// environment variables, and the `PORT` override
    pub fn load() -> Result<Self, config::ConfigError> {
        Self::load_from("config")
    }

    /// Load configuration from the specified file path (without extension)
    pub fn load_from(config_path: &str) -> Result<Self, config::ConfigError> {
        let settings = config::Config::builder()
            .add_source(config::File::with_name(config_path).required(false))
            .add_source(config::Environment::with_prefix("SERVER"))
            .set_default("server.host", "localhost")?
            .set_default("server.port", 3000)?
            .set_default("logging.level", "info")?
            .set_default("logging.access_log", true)?
            .set_default("logging.show_headers", false)?
            .set_default("cors.allow_origin", "*")?
            .set_default("cors.allow_methods", "GET, POST, OPTIONS")?
            .set_default("cors.allow_headers", "Content-Type, Accept")?
            .set_default("cors.max_age", 86400)?
            .set_default("static.root", ".")?
            .set_default("static.index_file", "index.html")?
            .set_default("static.cache_max_age", 3600)?
            .set_default("performance.keep_alive_timeout", 75)?
            .set_default("performance.read_timeout", 30)?
            .set_default("performance.write_timeout", 30)?
            .build()?;

        let mut cfg: Self = settings.try_deserialize()?;

        // PORT takes precedence over both the file and the SERVER_ prefix
        if let Ok(port) = std::env::var("PORT") {
            cfg.server.port = port.parse().map_err(|_| {
                config::ConfigError::Message(format!("Invalid PORT value: '{port}'"))
            })?;
        }

        Ok(cfg)
    }

    /// Resolve the listening address. Goes through `ToSocketAddrs` so the
    /// default host "localhost" resolves instead of failing to parse.
    pub fn socket_addr(&self) -> std::io::Result<SocketAddr> {
        let addr = format!("{}:{}", self.server.host, self.server.port);
        addr.to_socket_addrs()?.next().ok_or_else(|| {
            std::io::Error::new(
                std::io::ErrorKind::AddrNotAvailable,
                format!("Address did not resolve: {addr}"),
            )
        })
    }
}
