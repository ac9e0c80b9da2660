// ABOUTME: Configuration error types for server startup
// ABOUTME: Invalid environment values, unreadable breed tables, and rejected breed table contents
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 PetHealth Contributors

//! Configuration error types.

use pethealth_core::errors::{AppError, DiagnosticError};
use std::env;
use std::io;
use std::path::PathBuf;
use thiserror::Error;

/// Configuration-related errors
#[derive(Debug, Error)]
pub enum ConfigError {
    /// A variable is set but its value is unusable
    #[error("Invalid value for {name}: {reason}")]
    InvalidValue {
        /// Environment variable name
        name: &'static str,
        /// What was wrong with it
        reason: String,
    },

    /// Environment variable access error (e.g. not unicode)
    #[error("Environment variable error for {name}: {source}")]
    EnvVar {
        /// Environment variable name
        name: &'static str,
        /// Underlying error
        source: env::VarError,
    },

    /// Breed table file could not be read
    #[error("Cannot read breed table {}: {source}", path.display())]
    BreedTableIo {
        /// File that was requested
        path: PathBuf,
        /// Underlying error
        source: io::Error,
    },

    /// Breed table was read but rejected
    #[error("Invalid breed table: {0}")]
    BreedTable(#[from] DiagnosticError),
}

impl ConfigError {
    /// Create an invalid value error
    pub fn invalid_value(name: &'static str, reason: impl Into<String>) -> Self {
        Self::InvalidValue {
            name,
            reason: reason.into(),
        }
    }
}

impl From<ConfigError> for AppError {
    fn from(error: ConfigError) -> Self {
        Self::config_invalid(error.to_string()).with_source(error)
    }
}
