// ABOUTME: Shared test utilities and setup functions for integration tests
// ABOUTME: Provides quiet logging, profile fixtures, and an in-process router
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 PetHealth Contributors
#![allow(
    dead_code,
    clippy::missing_panics_doc,
    clippy::must_use_candidate,
    clippy::wildcard_in_or_patterns
)]
//! Shared test utilities for `pethealth_server`

use axum::Router;
use pethealth_server::config::ServerConfig;
use pethealth_server::intelligence::BreedStandardRegistry;
use pethealth_server::models::{AnimalProfile, ClinicalGoal, Gender};
use pethealth_server::resources::ServerResources;
use pethealth_server::routes::build_router;
use std::env;
use std::sync::{Arc, Once};
use tracing::Level;

static INIT_LOGGER: Once = Once::new();

/// Initialize quiet logging for tests (call once per test process)
pub fn init_test_logging() {
    INIT_LOGGER.call_once(|| {
        let log_level = match env::var("TEST_LOG").as_deref() {
            Ok("TRACE") => Level::TRACE,
            Ok("DEBUG") => Level::DEBUG,
            Ok("INFO") => Level::INFO,
            Ok("WARN" | "ERROR") | _ => Level::WARN,
        };

        let _ = tracing_subscriber::fmt()
            .with_max_level(log_level)
            .with_test_writer()
            .try_init();
    });
}

/// Intact male Labrador Retriever (range 29-36 kg), 3500 kcal/kg, two meals
pub fn labrador_profile(weight_kg: f64) -> AnimalProfile {
    AnimalProfile {
        name: "Rex".to_owned(),
        breed_name: "Labrador Retriever".to_owned(),
        gender: Gender::Male,
        current_weight_kg: weight_kg,
        neutered: false,
        food_energy_density_kcal_per_kg: 3500.0,
        clinical_goal: ClinicalGoal::Maintenance,
        meals_per_day: 2,
    }
}

/// Registry with the built-in reference table
pub fn reference_registry() -> BreedStandardRegistry {
    BreedStandardRegistry::fci_reference()
}

/// Shared resources over the built-in table and default config
pub fn test_resources() -> Arc<ServerResources> {
    init_test_logging();
    Arc::new(ServerResources::new(
        reference_registry(),
        ServerConfig::default(),
    ))
}

/// Full application router, ready for `oneshot`
pub fn test_router() -> Router {
    build_router(test_resources())
}
