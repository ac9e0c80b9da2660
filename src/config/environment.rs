// ABOUTME: Environment configuration management for deployment-specific settings
// ABOUTME: Handles environment variables, deployment modes, bind address, and breed table source
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 PetHealth Contributors

//! Environment-based configuration management for production deployment

use super::error::ConfigError;
use crate::constants::{env_config, service_names};
use pethealth_intelligence::BreedStandardRegistry;
use serde::{Deserialize, Serialize};
use std::env;
use std::fmt;
use std::fs;
use std::net::{IpAddr, SocketAddr};
use std::path::PathBuf;
use std::str::FromStr;
use tracing::info;

/// Environment type for logging and other configurations
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Default)]
#[serde(rename_all = "lowercase")]
pub enum Environment {
    /// Local development
    #[default]
    Development,
    /// Production deployment
    Production,
    /// Automated tests
    Testing,
}

impl Environment {
    /// Check if this is a production environment
    #[must_use]
    pub const fn is_production(self) -> bool {
        matches!(self, Self::Production)
    }
}

impl FromStr for Environment {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "production" | "prod" => Ok(Self::Production),
            "testing" | "test" => Ok(Self::Testing),
            "development" | "dev" => Ok(Self::Development),
            _ => Err("expected development, production or testing".to_owned()),
        }
    }
}

impl fmt::Display for Environment {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Development => write!(f, "development"),
            Self::Production => write!(f, "production"),
            Self::Testing => write!(f, "testing"),
        }
    }
}

/// Server configuration loaded once at startup
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ServerConfig {
    /// Address the HTTP listener binds to
    pub http_host: IpAddr,
    /// HTTP listen port
    pub http_port: u16,
    /// Deployment environment
    pub environment: Environment,
    /// Optional JSON file replacing the built-in breed table
    pub breed_table_path: Option<PathBuf>,
    /// Server name
    pub server_name: String,
    /// Server version (from Cargo.toml)
    pub server_version: String,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            http_host: IpAddr::from([127, 0, 0, 1]),
            http_port: env_config::DEFAULT_HTTP_PORT,
            environment: Environment::default(),
            breed_table_path: None,
            server_name: service_names::PETHEALTH_SERVER.to_owned(),
            server_version: env!("CARGO_PKG_VERSION").to_owned(),
        }
    }
}

impl ServerConfig {
    /// Load configuration from environment variables
    ///
    /// # Errors
    ///
    /// Returns an error if a variable is set to a value that cannot be parsed
    /// or the resulting configuration fails validation
    pub fn from_env() -> Result<Self, ConfigError> {
        info!("Loading configuration from environment variables");

        let defaults = Self::default();
        let config = Self {
            http_host: parse_var(env_config::HTTP_HOST, defaults.http_host)?,
            http_port: parse_var(env_config::HTTP_PORT, defaults.http_port)?,
            environment: parse_var(env_config::ENVIRONMENT, defaults.environment)?,
            breed_table_path: optional_var(env_config::BREED_TABLE)?.map(PathBuf::from),
            ..defaults
        };

        config.validate()?;
        Ok(config)
    }

    /// Validate the configuration
    ///
    /// # Errors
    ///
    /// Returns an error if the port is zero or the breed table path is blank
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.http_port == 0 {
            return Err(ConfigError::invalid_value(
                env_config::HTTP_PORT,
                "port must be between 1 and 65535",
            ));
        }
        if self
            .breed_table_path
            .as_ref()
            .is_some_and(|path| path.as_os_str().is_empty())
        {
            return Err(ConfigError::invalid_value(
                env_config::BREED_TABLE,
                "path must not be empty",
            ));
        }
        Ok(())
    }

    /// Socket address for the HTTP listener
    #[must_use]
    pub const fn socket_addr(&self) -> SocketAddr {
        SocketAddr::new(self.http_host, self.http_port)
    }

    /// Build the breed registry this configuration points at
    ///
    /// Uses the built-in reference table unless `breed_table_path` is set.
    ///
    /// # Errors
    ///
    /// Returns an error if the table file cannot be read or fails validation
    pub fn load_breed_registry(&self) -> Result<BreedStandardRegistry, ConfigError> {
        let Some(path) = &self.breed_table_path else {
            return Ok(BreedStandardRegistry::fci_reference());
        };

        let json = fs::read_to_string(path).map_err(|source| ConfigError::BreedTableIo {
            path: path.clone(),
            source,
        })?;
        let registry = BreedStandardRegistry::from_json_str(&json)?;
        info!(path = %path.display(), breeds = registry.len(), "Loaded custom breed table");
        Ok(registry)
    }

    /// One-line summary for startup logs
    #[must_use]
    pub fn summary(&self) -> String {
        format!(
            "{} v{} ({}) listening on {}, breed table: {}",
            self.server_name,
            self.server_version,
            self.environment,
            self.socket_addr(),
            self.breed_table_path
                .as_ref()
                .map_or_else(|| "built-in".to_owned(), |p| p.display().to_string())
        )
    }
}

/// Read a variable, treating unset and blank values as absent
fn optional_var(name: &'static str) -> Result<Option<String>, ConfigError> {
    match env::var(name) {
        Ok(value) if value.trim().is_empty() => Ok(None),
        Ok(value) => Ok(Some(value.trim().to_owned())),
        Err(env::VarError::NotPresent) => Ok(None),
        Err(e) => Err(ConfigError::EnvVar { name, source: e }),
    }
}

/// Parse a variable, falling back to `default` when it is absent
fn parse_var<T>(name: &'static str, default: T) -> Result<T, ConfigError>
where
    T: FromStr,
    T::Err: fmt::Display,
{
    optional_var(name)?.map_or(Ok(default), |raw| {
        raw.parse()
            .map_err(|e| ConfigError::invalid_value(name, format!("'{raw}': {e}")))
    })
}
