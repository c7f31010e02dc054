//! Configuration loading and management for the workload metrics engine.
//!
//! Configuration lives in an `engine.yaml` file with a `policy` section
//! (standard workday length) and a `server` section (bind address).
//!
//! # Example
//!
//! ```no_run
//! use workload_metrics::config::ConfigLoader;
//!
//! let config = ConfigLoader::load("./config/default").unwrap();
//! println!("Binding to {}", config.server().bind_address);
//! ```

mod loader;
mod types;

pub use loader::{CONFIG_FILE_NAME, ConfigLoader};
pub use types::{DEFAULT_BIND_ADDRESS, EngineConfig, PolicyConfig, ServerConfig};
