// ABOUTME: Configuration management module for server settings
// ABOUTME: Environment-driven server configuration and its error type
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 PetHealth Contributors

//! Configuration module for the `PetHealth` server
//!
//! All settings come from environment variables, read once at startup.

/// Environment and server configuration
pub mod environment;
/// Configuration error types
pub mod error;

pub use environment::{Environment, ServerConfig};
pub use error::ConfigError;
