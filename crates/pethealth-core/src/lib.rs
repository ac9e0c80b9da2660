// ABOUTME: Core types and constants for the PetHealth nutrition diagnostic
// ABOUTME: Foundation crate with error handling, domain models, and formula constants
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 PetHealth Contributors

#![deny(unsafe_code)]

//! # `PetHealth` Core
//!
//! Foundation crate providing shared types and constants for the `PetHealth`
//! canine nutrition diagnostic. It has no knowledge of HTTP routing, the CLI
//! or the breed registry contents, so it changes rarely.
//!
//! ## Modules
//!
//! - **errors**: Unified error handling with `AppError`, `ErrorCode`, and `DiagnosticError`
//! - **constants**: Energy formula coefficients, metabolic factors, feeding limits
//! - **models**: Animal profile input, weight ranges, and diagnostic results

/// Unified error handling system with standard error codes and HTTP responses
pub mod errors;

/// Formula coefficients and limits organized by domain
pub mod constants;

/// Core data models (`AnimalProfile`, `DiagnosticResult`, `WeightRange`, etc.)
pub mod models;
