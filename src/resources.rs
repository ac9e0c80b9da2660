// ABOUTME: Centralized resource container for dependency injection in the HTTP server
// ABOUTME: Holds the shared read-only breed registry and the loaded server configuration
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 PetHealth Contributors

//! # Server Resources Module
//!
//! Built once at startup and shared with every route as `Arc<ServerResources>`.
//! Nothing in here is mutated after construction, so handlers need no locking.

use crate::config::{ConfigError, ServerConfig};
use pethealth_intelligence::BreedStandardRegistry;
use std::sync::Arc;

/// Centralized resource container for dependency injection
#[derive(Debug, Clone)]
pub struct ServerResources {
    /// Breed reference table every diagnostic reads from
    pub registry: Arc<BreedStandardRegistry>,
    /// Configuration the server was started with
    pub config: Arc<ServerConfig>,
}

impl ServerResources {
    /// Bundle an already-built registry with its configuration
    #[must_use]
    pub fn new(registry: BreedStandardRegistry, config: ServerConfig) -> Self {
        Self {
            registry: Arc::new(registry),
            config: Arc::new(config),
        }
    }

    /// Load the breed registry named by `config` and bundle both
    ///
    /// # Errors
    ///
    /// Returns an error if a configured breed table cannot be read or is invalid
    pub fn from_config(config: ServerConfig) -> Result<Self, ConfigError> {
        let registry = config.load_breed_registry()?;
        Ok(Self::new(registry, config))
    }
}
