//! Server configuration

use serde::{Deserialize, Serialize};

/// The port the preview server listens on.
pub const DEFAULT_PORT: u16 = 8282;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ServerConfig {
    pub host: String,
    pub port: u16,
    /// Delay before the page reloads itself.
    pub refresh_ms: u64,
    /// Threads pulling requests off the listener.
    pub workers: usize,
}

impl ServerConfig {
    pub fn addr(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            host: "127.0.0.1".to_string(),
            port: DEFAULT_PORT,
            refresh_ms: 1000,
            workers: 4,
        }
    }
}
