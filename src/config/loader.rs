//! Configuration loading functionality.
//!
//! This module provides the [`ConfigLoader`] type for loading the service
//! configuration from a YAML file.

use std::collections::HashSet;
use std::fs;
use std::path::Path;

use crate::error::{EngineError, EngineResult};

use super::types::AppConfig;

/// Default location of the configuration file.
pub const DEFAULT_CONFIG_PATH: &str = "./config/app.yaml";

/// Loads and validates the service configuration.
///
/// # File Format
///
/// ```text
/// server:
///   host: 127.0.0.1
///   port: 8080
/// logging:
///   filter: employee_pay=info
///   format: pretty        # or json
/// employees:
///   - id: 1
///     full_name: Jane Doe
///     birthdate: 1990-01-15
///     tin: "123215413"
///     employee_type_id: 1
/// ```
///
/// Every section is optional.
///
/// # Example
///
/// ```no_run
/// use employee_pay::config::ConfigLoader;
///
/// let loader = ConfigLoader::load("./config/app.yaml")?;
/// println!("Listening on {}", loader.config().server.bind_address());
/// # Ok::<(), employee_pay::error::EngineError>(())
/// ```
#[derive(Debug, Clone)]
pub struct ConfigLoader {
    config: AppConfig,
}

impl ConfigLoader {
    /// Loads configuration from the file at `path`.
    ///
    /// Returns an error if:
    /// - The file is missing or unreadable
    /// - The file contains invalid YAML or unknown value types
    /// - The configuration fails validation
    pub fn load<P: AsRef<Path>>(path: P) -> EngineResult<Self> {
        let path = path.as_ref();
        let path_str = path.display().to_string();

        let content = fs::read_to_string(path).map_err(|_| EngineError::ConfigNotFound {
            path: path_str.clone(),
        })?;

        Self::parse(&content, &path_str)
    }

    /// Parses configuration from a YAML string.
    pub fn from_yaml_str(content: &str) -> EngineResult<Self> {
        Self::parse(content, "<inline>")
    }

    fn parse(content: &str, path: &str) -> EngineResult<Self> {
        let config: AppConfig =
            serde_yaml::from_str(content).map_err(|e| EngineError::ConfigParseError {
                path: path.to_string(),
                message: e.to_string(),
            })?;

        Self::validate(&config)?;
        Ok(Self { config })
    }

    fn validate(config: &AppConfig) -> EngineResult<()> {
        if config.server.port == 0 {
            return Err(EngineError::InvalidConfig {
                message: "server.port must be non-zero".to_string(),
            });
        }

        let mut seen = HashSet::new();
        for employee in &config.employees {
            if !seen.insert(employee.id) {
                return Err(EngineError::InvalidConfig {
                    message: format!("duplicate employee id {}", employee.id),
                });
            }
            if employee.full_name.trim().is_empty() {
                return Err(EngineError::InvalidConfig {
                    message: format!("employee {} has a blank full_name", employee.id),
                });
            }
        }

        Ok(())
    }

    /// Returns the loaded configuration.
    pub fn config(&self) -> &AppConfig {
        &self.config
    }

    /// Consumes the loader, returning the configuration.
    pub fn into_config(self) -> AppConfig {
        self.config
    }
}
