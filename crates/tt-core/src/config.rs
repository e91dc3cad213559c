//! Configuration types and loading
//!
//! Everything is driven by environment variables; defaults are suitable
//! for a local, single-user deployment.

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Main application configuration
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct AppConfig {
    /// HTTP server configuration
    pub server: ServerConfig,

    /// Snapshot storage configuration
    pub storage: StorageConfig,
}

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct ServerConfig {
    pub host: String,
    pub port: u16,
}

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct StorageConfig {
    /// Directory holding the snapshot and session files
    pub data_dir: String,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            server: ServerConfig {
                host: "127.0.0.1".to_string(),
                port: 8080,
            },
            storage: StorageConfig {
                data_dir: "./data".to_string(),
            },
        }
    }
}

/// Configuration error
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Invalid value for {key}: {message}")]
    InvalidValue { key: String, message: String },
}

impl AppConfig {
    /// Load configuration from environment variables
    pub fn from_env() -> Result<Self, ConfigError> {
        let mut config = Self::default();

        if let Ok(host) = std::env::var("TRACKTIME_HOST") {
            config.server.host = host;
        }
        if let Ok(port) = std::env::var("TRACKTIME_PORT") {
            config.server.port = port.parse().map_err(|_| ConfigError::InvalidValue {
                key: "TRACKTIME_PORT".to_string(),
                message: format!("{} is not a valid port", port),
            })?;
        }
        if let Ok(dir) = std::env::var("TRACKTIME_DATA_DIR") {
            config.storage.data_dir = dir;
        }

        Ok(config)
    }

    /// Get the server address
    pub fn server_addr(&self) -> std::net::SocketAddr {
        let ip: std::net::IpAddr = self.server.host.parse().unwrap_or([127, 0, 0, 1].into());
        std::net::SocketAddr::new(ip, self.server.port)
    }
}
