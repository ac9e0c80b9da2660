// ABOUTME: Canine nutrition intelligence: breed standards and feeding diagnostics
// ABOUTME: Pure computation crate shared by the HTTP service and the CLI
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 PetHealth Contributors

#![deny(unsafe_code)]

//! # `PetHealth` Intelligence
//!
//! The diagnostic engine and the registry it reads from.
//!
//! ```rust
//! use pethealth_core::models::{AnimalProfile, ClinicalGoal, Gender, WeightStatus};
//! use pethealth_intelligence::{diagnose, BreedStandardRegistry};
//!
//! let registry = BreedStandardRegistry::fci_reference();
//! let profile = AnimalProfile {
//!     name: "Rex".to_owned(),
//!     breed_name: "Labrador Retriever".to_owned(),
//!     gender: Gender::Male,
//!     current_weight_kg: 32.0,
//!     neutered: true,
//!     food_energy_density_kcal_per_kg: 3500.0,
//!     clinical_goal: ClinicalGoal::Maintenance,
//!     meals_per_day: 2,
//! };
//!
//! let result = diagnose(&profile, &registry)?;
//! assert_eq!(result.weight_status, WeightStatus::Ideal);
//! # Ok::<(), pethealth_core::errors::DiagnosticError>(())
//! ```

/// Immutable breed -> gender -> healthy weight range lookup
pub mod breed_registry;

/// RER/DER formulas, factor table, feeding mass and weight classification
pub mod nutrition_calculator;

/// Display-ready report derived from a diagnostic result
pub mod report;

pub use breed_registry::{BreedStandard, BreedStandardRegistry};
pub use nutrition_calculator::{diagnose, diagnose_batch};
pub use report::DiagnosticReport;
