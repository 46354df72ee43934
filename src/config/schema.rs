//! Configuration schema definitions.
//!
//! This module defines the complete configuration structure for the wiki.
//! All types derive Serde traits for deserialization from config files, and
//! every default reproduces the server's fixed out-of-the-box behavior.

use serde::{Deserialize, Serialize};
use std::path::PathBuf;

/// Root configuration for the wiki server.
#[derive(Debug, Clone, Deserialize, Serialize, Default)]
#[serde(default)]
pub struct WikiConfig {
    /// Listener configuration.
    pub listener: ListenerConfig,

    /// Page storage settings.
    pub pages: PagesConfig,

    /// Template settings.
    pub templates: TemplatesConfig,

    /// Response behavior.
    pub server: ServerConfig,

    /// Observability settings.
    pub observability: ObservabilityConfig,
}

/// Listener configuration.
#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(default)]
pub struct ListenerConfig {
    /// Bind address (e.g., "0.0.0.0:8080").
    pub bind_address: String,
}

impl Default for ListenerConfig {
    fn default() -> Self {
        Self {
            bind_address: "0.0.0.0:8080".to_string(),
        }
    }
}

/// Page storage configuration.
#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(default)]
pub struct PagesConfig {
    /// Directory holding `<title>.txt` files.
    pub directory: PathBuf,

    /// Save and read back the sample page at startup.
    pub seed_sample_page: bool,
}

impl Default for PagesConfig {
    fn default() -> Self {
        Self {
            directory: PathBuf::from("."),
            seed_sample_page: false,
        }
    }
}

/// Template configuration.
#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(default)]
pub struct TemplatesConfig {
    /// Directory containing `view.html` and `edit.html`.
    pub directory: PathBuf,
}

impl Default for TemplatesConfig {
    fn default() -> Self {
        Self {
            directory: PathBuf::from("templates"),
        }
    }
}

/// Response behavior.
#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(default)]
pub struct ServerConfig {
    /// Send raw internal error text in 500 responses.
    /// When false, clients get a generic message and the detail is only logged.
    pub expose_internal_errors: bool,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            expose_internal_errors: true,
        }
    }
}

/// Observability configuration.
#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(default)]
pub struct ObservabilityConfig {
    /// Log level (trace, debug, info, warn, error).
    pub log_level: String,

    /// Enable metrics endpoint.
    pub metrics_enabled: bool,

    /// Metrics endpoint bind address.
    pub metrics_address: String,
}

impl Default for ObservabilityConfig {
    fn default() -> Self {
        Self {
            log_level: "info".to_string(),
            metrics_enabled: false,
            metrics_address: "127.0.0.1:9090".to_string(),
        }
    }
}
