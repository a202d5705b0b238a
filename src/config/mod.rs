//! Configuration loading and management for the employee pay service.
//!
//! This module loads the service configuration from a YAML file: the HTTP
//! listener, logging, and the employee records seeded into the store.
//!
//! # Example
//!
//! ```no_run
//! use employee_pay::config::ConfigLoader;
//!
//! let config = ConfigLoader::load("./config/app.yaml").unwrap();
//! println!("Seeded employees: {}", config.config().employees.len());
//! ```

mod loader;
mod types;

pub use loader::{ConfigLoader, DEFAULT_CONFIG_PATH};
pub use types::{AppConfig, LogFormat, LoggingConfig, ServerConfig};
