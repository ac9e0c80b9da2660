// ABOUTME: Breed table commands for pethealth-cli
// ABOUTME: Lists the reference table and shows a single breed's ranges
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 PetHealth Contributors

use anyhow::Result;
use pethealth_server::errors::DiagnosticError;
use pethealth_server::intelligence::BreedStandardRegistry;

use crate::helpers::display::{display_breed, display_breed_table};

/// Print every breed in table order
pub fn list(registry: &BreedStandardRegistry) {
    display_breed_table(registry.breeds());
}

/// Print one breed, or fail if it is not in the table
pub fn show(registry: &BreedStandardRegistry, name: &str) -> Result<()> {
    let standard = registry
        .get(name)
        .ok_or_else(|| DiagnosticError::unknown_breed(name.trim()))?;
    display_breed(standard);
    Ok(())
}
