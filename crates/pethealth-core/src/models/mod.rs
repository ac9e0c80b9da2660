// ABOUTME: Domain models for canine nutrition diagnostics
// ABOUTME: Re-exports animal profile input types and diagnostic result types
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 PetHealth Contributors

//! Domain models shared by the engine, the HTTP layer and the CLI.

mod animal;
mod diagnostic;

pub use animal::{AnimalProfile, ClinicalGoal, Gender};
pub use diagnostic::{DiagnosticResult, WeightRange, WeightStatus};
