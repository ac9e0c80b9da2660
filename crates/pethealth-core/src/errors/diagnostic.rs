// ABOUTME: Domain error types for diagnostic requests and breed registry construction
// ABOUTME: Validation, unknown breed, and invalid registry failures with field context
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 PetHealth Contributors

use thiserror::Error;

/// Errors produced by the diagnostic engine and the breed registry.
///
/// A failed request never carries partial numeric output: every variant is
/// raised before a `DiagnosticResult` exists.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum DiagnosticError {
    /// A profile field violates its constraint
    #[error("Invalid value for '{field}': {reason}")]
    Validation {
        /// Name of the offending field
        field: &'static str,
        /// Why the value was rejected
        reason: String,
    },

    /// The breed is not a key of the registry
    #[error("Breed '{breed}' is not in the breed standard registry")]
    UnknownBreed {
        /// Breed name as supplied by the caller
        breed: String,
    },

    /// Reference data rejected while building a registry
    #[error("Invalid breed registry: {reason}")]
    InvalidRegistry {
        /// What was wrong with the entries
        reason: String,
    },
}

impl DiagnosticError {
    /// Create a validation error for `field`
    #[must_use]
    pub fn validation(field: &'static str, reason: impl Into<String>) -> Self {
        Self::Validation {
            field,
            reason: reason.into(),
        }
    }

    /// Create an "unknown breed" error
    #[must_use]
    pub fn unknown_breed(breed: impl Into<String>) -> Self {
        Self::UnknownBreed {
            breed: breed.into(),
        }
    }

    /// Create an "invalid registry" error
    #[must_use]
    pub fn invalid_registry(reason: impl Into<String>) -> Self {
        Self::InvalidRegistry {
            reason: reason.into(),
        }
    }

    /// Name of the request field this error refers to, if any
    #[must_use]
    pub const fn field(&self) -> Option<&'static str> {
        match self {
            Self::Validation { field, .. } => Some(*field),
            Self::UnknownBreed { .. } => Some("breed_name"),
            Self::InvalidRegistry { .. } => None,
        }
    }

    /// Whether this is a field validation failure
    #[must_use]
    pub const fn is_validation(&self) -> bool {
        matches!(self, Self::Validation { .. })
    }

    /// Whether this is an unknown breed failure
    #[must_use]
    pub const fn is_unknown_breed(&self) -> bool {
        matches!(self, Self::UnknownBreed { .. })
    }
}
