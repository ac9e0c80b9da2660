// ABOUTME: Diagnose command for pethealth-cli
// ABOUTME: Runs the engine for one profile and prints the report or the JSON body
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 PetHealth Contributors

use anyhow::Result;
use pethealth_server::intelligence::{diagnose, BreedStandardRegistry};
use pethealth_server::models::AnimalProfile;
use pethealth_server::routes::DiagnosticResponse;
use tracing::info;

use crate::helpers::display::display_report;

/// Diagnose `profile` and print the outcome
pub fn run(registry: &BreedStandardRegistry, profile: &AnimalProfile, json: bool) -> Result<()> {
    info!(breed = %profile.breed_name, "Running diagnostic");

    let result = diagnose(profile, registry)?;
    let response = DiagnosticResponse::new(profile, result);

    if json {
        println!("{}", serde_json::to_string_pretty(&response)?);
    } else {
        display_report(&response);
    }

    Ok(())
}
