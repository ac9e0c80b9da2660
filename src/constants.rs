// ABOUTME: Service-level constants and environment variable names for the PetHealth server
// ABOUTME: Re-exports the domain constants and adds ports, env var keys, and route prefixes
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 PetHealth Contributors

//! # Constants Module
//!
//! Domain constants live in `pethealth_core::constants`; this module adds
//! the names and defaults the server and CLI read from the environment.

pub use pethealth_core::constants::{energy, feeding, messages, metabolic_factors, service_names};

/// Environment variable names and their defaults
pub mod env_config {
    /// Listen port variable
    pub const HTTP_PORT: &str = "HTTP_PORT";

    /// Bind address variable
    pub const HTTP_HOST: &str = "HTTP_HOST";

    /// Deployment environment variable
    pub const ENVIRONMENT: &str = "ENVIRONMENT";

    /// Path to a JSON breed table replacing the built-in one
    pub const BREED_TABLE: &str = "PETHEALTH_BREED_TABLE";

    /// Default HTTP port
    pub const DEFAULT_HTTP_PORT: u16 = 8081;
}

/// HTTP route prefixes
pub mod routes {
    /// Versioned API prefix
    pub const API_V1: &str = "/api/v1";
}

/// Request size limits
pub mod limits {
    /// Most profiles accepted by one batch diagnostic request
    pub const MAX_BATCH_PROFILES: usize = 100;
}
