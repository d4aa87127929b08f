// Configuration module entry point
// Loads the immutable process configuration and builds the shared state

mod state;
mod types;

use std::net::SocketAddr;

use crate::error::ServerError;

// Re-export public types
pub use state::AppState;
pub use types::{Config, LoggingConfig, PerformanceConfig, ServerConfig};

/// Default config file name (without extension), looked up in the working directory
pub const DEFAULT_CONFIG_FILE: &str = "config";

/// Environment variable overriding `server.port`
pub const PORT_ENV: &str = "PORT";

impl Config {
    /// Load configuration from the default file, environment, and `PORT`
    pub fn load() -> Result<Self, ServerError> {
        Self::load_from(DEFAULT_CONFIG_FILE, std::env::var(PORT_ENV).ok())
    }

    /// Load configuration from specified file path (without extension)
    ///
    /// Sources in increasing priority: built-in defaults, the optional file,
    /// `BLUEGREEN_*` variables (`__` separates sections), then `port`.
    /// A blank `port` counts as unset.
    pub fn load_from(config_path: &str, port: Option<String>) -> Result<Self, ServerError> {
        let port = port
            .map(|p| p.trim().to_string())
            .filter(|p| !p.is_empty());

        let settings = config::Config::builder()
            .set_default("server.host", "0.0.0.0")?
            .set_default("server.port", 8080)?
            .set_default("logging.access_log", true)?
            .set_default("logging.access_log_format", "default")?
            .set_default("performance.keep_alive", true)?
            .set_default("performance.header_read_timeout", 30)?
            .add_source(config::File::with_name(config_path).required(false))
            .add_source(
                config::Environment::with_prefix("BLUEGREEN")
                    .prefix_separator("_")
                    .separator("__"),
            )
            .set_override_option("server.port", port)?
            .build()?;

        Ok(settings.try_deserialize()?)
    }

    pub fn get_socket_addr(&self) -> Result<SocketAddr, ServerError> {
        let addr = format!("{}:{}", self.server.host, self.server.port);
        addr.parse()
            .map_err(|e| ServerError::InvalidAddress(format!("{addr}: {e}")))
    }
}
