//! Configuration loading functionality.
//!
//! This module provides the [`ConfigLoader`] type for loading the engine
//! configuration from a YAML file.

use std::fs;
use std::path::Path;

use tracing::debug;

use crate::error::{EngineError, EngineResult};

use super::types::{EngineConfig, PolicyConfig, ServerConfig};

/// Name of the configuration file inside a configuration directory.
pub const CONFIG_FILE_NAME: &str = "engine.yaml";

/// Longest standard workday accepted, in minutes.
const MAX_WORKDAY_MINUTES: i64 = 24 * 60;

/// Loads, validates and provides access to the engine configuration.
///
/// # Directory Structure
///
/// ```text
/// config/default/
/// └── engine.yaml   # Policy and server settings
/// ```
///
/// # Example
///
/// ```no_run
/// use workload_metrics::config::ConfigLoader;
///
/// let loader = ConfigLoader::load("./config/default")?;
/// println!("Workday: {} minutes", loader.standard_workday_minutes());
/// # Ok::<(), workload_metrics::error::EngineError>(())
/// ```
#[derive(Debug, Clone, Default)]
pub struct ConfigLoader {
    config: EngineConfig,
}

impl ConfigLoader {
    /// Loads configuration from `engine.yaml` in the specified directory.
    ///
    /// # Returns
    ///
    /// Returns a `ConfigLoader` on success, or an error if:
    /// - The file is missing
    /// - The file contains invalid YAML
    /// - A policy value is out of range
    pub fn load<P: AsRef<Path>>(path: P) -> EngineResult<Self> {
        let config_path = path.as_ref().join(CONFIG_FILE_NAME);
        let config = Self::load_yaml::<EngineConfig>(&config_path)?;
        debug!(path = %config_path.display(), ?config, "Loaded engine configuration");
        Self::from_config(config)
    }

    /// Wraps an already-built configuration after validating it.
    pub fn from_config(config: EngineConfig) -> EngineResult<Self> {
        Self::validate(&config)?;
        Ok(Self { config })
    }

    /// Loads and parses a YAML file.
    fn load_yaml<T: serde::de::DeserializeOwned>(path: &Path) -> EngineResult<T> {
        let path_str = path.display().to_string();

        let content = fs::read_to_string(path).map_err(|_| EngineError::ConfigNotFound {
            path: path_str.clone(),
        })?;

        serde_yaml::from_str(&content).map_err(|e| EngineError::ConfigParseError {
            path: path_str,
            message: e.to_string(),
        })
    }

    fn validate(config: &EngineConfig) -> EngineResult<()> {
        let minutes = config.policy.standard_workday_minutes;
        if !(1..=MAX_WORKDAY_MINUTES).contains(&minutes) {
            return Err(EngineError::InvalidPolicy {
                field: "standard_workday_minutes".to_string(),
                message: format!("must be between 1 and {MAX_WORKDAY_MINUTES}, got {minutes}"),
            });
        }
        Ok(())
    }

    /// Returns the underlying configuration.
    pub fn config(&self) -> &EngineConfig {
        &self.config
    }

    /// Returns the policy section.
    pub fn policy(&self) -> &PolicyConfig {
        &self.config.policy
    }

    /// Returns the server section.
    pub fn server(&self) -> &ServerConfig {
        &self.config.server
    }

    /// The configured standard workday in minutes.
    pub fn standard_workday_minutes(&self) -> i64 {
        self.config.policy.standard_workday_minutes
    }
}
