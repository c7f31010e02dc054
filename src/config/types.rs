//! Configuration types for the workload metrics engine.
//!
//! These structures are deserialized from `engine.yaml`. Every section and
//! field has a default, so a partial file is valid.

use serde::{Deserialize, Serialize};

use crate::calculation::STANDARD_WORKDAY_MINUTES;

/// Default address the HTTP server binds to.
pub const DEFAULT_BIND_ADDRESS: &str = "127.0.0.1:8080";

fn default_workday_minutes() -> i64 {
    STANDARD_WORKDAY_MINUTES
}

fn default_bind_address() -> String {
    DEFAULT_BIND_ADDRESS.to_string()
}

/// Metric policy settings.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PolicyConfig {
    /// Length of the standard workday in minutes.
    #[serde(default = "default_workday_minutes")]
    pub standard_workday_minutes: i64,
}

impl Default for PolicyConfig {
    fn default() -> Self {
        Self {
            standard_workday_minutes: default_workday_minutes(),
        }
    }
}

/// HTTP server settings.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ServerConfig {
    /// Socket address to listen on.
    #[serde(default = "default_bind_address")]
    pub bind_address: String,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            bind_address: default_bind_address(),
        }
    }
}

/// The complete engine configuration.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct EngineConfig {
    /// Metric policy.
    #[serde(default)]
    pub policy: PolicyConfig,
    /// HTTP server.
    #[serde(default)]
    pub server: ServerConfig,
}
