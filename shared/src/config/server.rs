//! HTTP server and storage configuration

use serde::{Deserialize, Serialize};
use std::env;

/// HTTP server configuration
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct ServerConfig {
    /// Host address to bind to
    pub host: String,

    /// Port to listen on
    pub port: u16,

    /// Allowed CORS origin for browser and mobile clients
    pub cors_allowed_origin: String,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            host: String::from("127.0.0.1"),
            port: 8080,
            cors_allowed_origin: String::from("http://localhost"),
        }
    }
}

impl ServerConfig {
    /// Load the server configuration from environment variables
    ///
    /// Reads `SERVER_HOST`, `SERVER_PORT` and `CORS_ALLOWED_ORIGIN`.
    pub fn from_env() -> Self {
        let defaults = Self::default();
        Self {
            host: env::var("SERVER_HOST").unwrap_or(defaults.host),
            port: env::var("SERVER_PORT")
                .ok()
                .and_then(|v| v.parse().ok())
                .unwrap_or(defaults.port),
            cors_allowed_origin: env::var("CORS_ALLOWED_ORIGIN")
                .unwrap_or(defaults.cors_allowed_origin),
        }
    }

    /// The address the server should bind to
    pub fn bind_address(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }
}

/// File storage configuration for uploaded avatars
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct StorageConfig {
    /// Root directory for uploaded content; avatar images land in an
    /// `Images` subdirectory created on demand
    pub upload_root: String,
}

impl Default for StorageConfig {
    fn default() -> Self {
        Self {
            upload_root: String::from("wwwroot"),
        }
    }
}

impl StorageConfig {
    /// Load the storage configuration from environment variables
    ///
    /// Reads `UPLOAD_ROOT`.
    pub fn from_env() -> Self {
        let defaults = Self::default();
        Self {
            upload_root: env::var("UPLOAD_ROOT").unwrap_or(defaults.upload_root),
        }
    }
}
