// ABOUTME: Main library entry point for the PetHealth nutrition diagnostic service
// ABOUTME: Wires configuration, logging, shared resources, and HTTP routes around the diagnostic engine
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 PetHealth Contributors

#![deny(unsafe_code)]

//! # `PetHealth` Server
//!
//! A JSON-over-HTTP service and command-line tool computing a dog's daily
//! feeding prescription and weight status against its breed standard.
//!
//! ## Architecture
//!
//! - **`pethealth_core`**: errors, constants, and domain models
//! - **`pethealth_intelligence`**: breed registry and diagnostic engine
//! - **this crate**: configuration, logging, routes, and the server runtime
//!
//! ## Example Usage
//!
//! ```rust,no_run
//! use pethealth_server::config::ServerConfig;
//! use pethealth_server::resources::ServerResources;
//! use std::sync::Arc;
//!
//! #[tokio::main]
//! async fn main() -> anyhow::Result<()> {
//!     let config = ServerConfig::from_env()?;
//!     let resources = Arc::new(ServerResources::from_config(config)?);
//!     pethealth_server::server::run_server(resources).await
//! }
//! ```

/// Environment-driven configuration
pub mod config;

/// Service constants and environment variable names
pub mod constants;

/// Structured logging setup
pub mod logging;

/// Shared resources handed to every route
pub mod resources;

/// HTTP route definitions
pub mod routes;

/// Server runtime and graceful shutdown
pub mod server;

/// Unified error types
pub mod errors {
    pub use pethealth_core::errors::*;
}

/// Domain models
pub mod models {
    pub use pethealth_core::models::*;
}

/// Diagnostic engine and breed registry
pub mod intelligence {
    pub use pethealth_intelligence::*;
}
