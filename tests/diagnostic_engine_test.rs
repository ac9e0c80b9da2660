// ABOUTME: Integration tests for the nutrition diagnostic engine against the reference table
// ABOUTME: Covers the worked Labrador scenarios, factor table totality, and engine properties
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 PetHealth Contributors
//! Diagnostic engine tests
//!
//! - Worked scenarios for an intact male Labrador Retriever (29-36 kg)
//! - Metabolic factor table over every goal and neuter combination
//! - RER monotonicity, idempotence, meal split consistency
//! - Validation and unknown-breed failures

#![allow(clippy::unwrap_used, clippy::expect_used, clippy::panic)]
#![allow(missing_docs)]

use pethealth_server::errors::DiagnosticError;
use pethealth_server::intelligence::nutrition_calculator::{
    calculate_rer, classify_weight, select_metabolic_factor,
};
use pethealth_server::intelligence::{
    diagnose, diagnose_batch, BreedStandard, BreedStandardRegistry, DiagnosticReport,
};
use pethealth_server::models::{ClinicalGoal, Gender, WeightStatus};

mod common;

use common::{labrador_profile, reference_registry};

// ============================================================================
// WORKED SCENARIOS - Labrador Retriever male, 3500 kcal/kg, 2 meals
// ============================================================================

#[test]
fn test_underweight_labrador_prescription() {
    common::init_test_logging();
    let registry = reference_registry();

    let result = diagnose(&labrador_profile(15.0), &registry).unwrap();

    // 70 * 15^0.75 = 533.54
    assert!(
        (result.resting_energy_requirement_kcal - 533.5).abs() < 1.0,
        "RER should be approximately 533.5, got {}",
        result.resting_energy_requirement_kcal
    );
    assert!((result.metabolic_factor - 1.8).abs() < f64::EPSILON);
    assert!(
        (result.daily_energy_requirement_kcal - 960.4).abs() < 1.0,
        "DER should be approximately 960.4"
    );
    assert!(
        (result.daily_food_grams - 274.4).abs() < 0.5,
        "daily food should be approximately 274.4 g"
    );
    assert!(
        (result.grams_per_meal - 137.2).abs() < 0.5,
        "per meal should be approximately 137.2 g"
    );
    assert_eq!(result.weight_status, WeightStatus::Underweight);
}

#[test]
fn test_ideal_labrador() {
    let registry = reference_registry();

    let result = diagnose(&labrador_profile(32.0), &registry).unwrap();

    assert_eq!(result.weight_status, WeightStatus::Ideal);
    assert!((result.resting_energy_requirement_kcal - 941.8).abs() < 1.0);
    assert!((result.daily_food_grams - 484.4).abs() < 0.5);
}

#[test]
fn test_overweight_labrador() {
    let registry = reference_registry();

    let result = diagnose(&labrador_profile(40.0), &registry).unwrap();

    assert_eq!(result.weight_status, WeightStatus::Overweight);
    assert!((result.daily_energy_requirement_kcal - 2004.1).abs() < 1.0);
    assert!((result.breed_range.max_kg - 36.0).abs() < f64::EPSILON);
}

#[test]
fn test_intensive_weight_loss_ignores_neuter_status() {
    let registry = reference_registry();

    for neutered in [true, false] {
        let mut profile = labrador_profile(40.0);
        profile.clinical_goal = ClinicalGoal::IntensiveWeightLoss;
        profile.neutered = neutered;

        let result = diagnose(&profile, &registry).unwrap();

        assert!((result.metabolic_factor - 1.0).abs() < f64::EPSILON);
        assert_eq!(
            result.daily_energy_requirement_kcal.to_bits(),
            result.resting_energy_requirement_kcal.to_bits(),
            "DER must equal RER when K is 1.0"
        );
    }
}

#[test]
fn test_unknown_breed_is_rejected() {
    let registry = reference_registry();
    let mut profile = labrador_profile(20.0);
    profile.breed_name = "Dragon Hound".to_owned();

    let err = diagnose(&profile, &registry).unwrap_err();

    assert_eq!(err, DiagnosticError::unknown_breed("Dragon Hound"));
}

#[test]
fn test_invalid_meals_and_energy_density_are_rejected() {
    let registry = reference_registry();

    let mut no_meals = labrador_profile(20.0);
    no_meals.meals_per_day = 0;
    let err = diagnose(&no_meals, &registry).unwrap_err();
    assert_eq!(err.field(), Some("meals_per_day"));

    let mut negative_kcal = labrador_profile(20.0);
    negative_kcal.food_energy_density_kcal_per_kg = -5.0;
    let err = diagnose(&negative_kcal, &registry).unwrap_err();
    assert_eq!(err.field(), Some("food_energy_density_kcal_per_kg"));

    let mut five_meals = labrador_profile(20.0);
    five_meals.meals_per_day = 5;
    assert!(diagnose(&five_meals, &registry).unwrap_err().is_validation());

    let mut zero_weight = labrador_profile(0.0);
    zero_weight.breed_name = "Dragon Hound".to_owned();
    let err = diagnose(&zero_weight, &registry).unwrap_err();
    assert_eq!(
        err.field(),
        Some("current_weight_kg"),
        "field validation runs before the breed lookup"
    );
}

#[test]
fn test_vanishing_energy_density_never_yields_infinite_ration() {
    let registry = reference_registry();
    let mut profile = labrador_profile(15.0);
    profile.food_energy_density_kcal_per_kg = 1e-310;

    let err = diagnose(&profile, &registry).unwrap_err();

    assert!(err.is_validation());
    assert_eq!(err.field(), Some("food_energy_density_kcal_per_kg"));
}

// ============================================================================
// PROPERTIES
// ============================================================================

#[test]
fn test_rer_strictly_increasing() {
    let weights = [0.5, 1.0, 1.9, 3.2, 8.0, 15.0, 29.0, 36.0, 54.0, 90.0];

    for pair in weights.windows(2) {
        let lighter = calculate_rer(pair[0]).unwrap();
        let heavier = calculate_rer(pair[1]).unwrap();
        assert!(
            heavier > lighter,
            "RER({}) = {heavier} should exceed RER({}) = {lighter}",
            pair[1],
            pair[0]
        );
    }
}

#[test]
fn test_factor_table_is_total() {
    let expected = [
        (ClinicalGoal::IntensiveWeightLoss, true, 1.0),
        (ClinicalGoal::IntensiveWeightLoss, false, 1.0),
        (ClinicalGoal::MildWeightLoss, true, 1.2),
        (ClinicalGoal::MildWeightLoss, false, 1.2),
        (ClinicalGoal::Maintenance, true, 1.6),
        (ClinicalGoal::Maintenance, false, 1.8),
    ];

    assert_eq!(expected.len(), ClinicalGoal::ALL.len() * 2);
    for (goal, neutered, factor) in expected {
        assert!(
            (select_metabolic_factor(goal, neutered) - factor).abs() < f64::EPSILON,
            "{goal} neutered={neutered} should use K={factor}"
        );
    }
}

#[test]
fn test_factor_independent_of_other_fields() {
    let registry = reference_registry();

    for (breed, gender, weight) in [
        ("Chihuahua", Gender::Female, 2.0),
        ("Great Dane", Gender::Male, 70.0),
        ("Mixed Breed (Medium)", Gender::Female, 18.0),
    ] {
        let mut profile = labrador_profile(weight);
        profile.breed_name = breed.to_owned();
        profile.gender = gender;
        profile.neutered = true;
        profile.clinical_goal = ClinicalGoal::MildWeightLoss;

        let result = diagnose(&profile, &registry).unwrap();
        assert!((result.metabolic_factor - 1.2).abs() < f64::EPSILON, "{breed}");
    }
}

#[test]
fn test_diagnose_is_idempotent() {
    let registry = reference_registry();
    let profile = labrador_profile(27.3);

    let first = diagnose(&profile, &registry).unwrap();
    let second = diagnose(&profile, &registry).unwrap();

    assert_eq!(
        first.daily_food_grams.to_bits(),
        second.daily_food_grams.to_bits()
    );
    assert_eq!(first, second);
}

#[test]
fn test_meal_split_recombines_to_daily_total() {
    let registry = reference_registry();

    for meals in 1..=4 {
        let mut profile = labrador_profile(31.0);
        profile.meals_per_day = meals;

        let result = diagnose(&profile, &registry).unwrap();
        let recombined = result.grams_per_meal * f64::from(meals);

        assert!(
            (recombined - result.daily_food_grams).abs() < 1e-9,
            "{meals} meals: {recombined} vs {}",
            result.daily_food_grams
        );
    }
}

#[test]
fn test_breed_bounds_are_ideal() {
    let registry = reference_registry();
    let range = registry.lookup("Labrador Retriever", Gender::Male).unwrap();

    assert_eq!(classify_weight(29.0, range), WeightStatus::Ideal);
    assert_eq!(classify_weight(36.0, range), WeightStatus::Ideal);
    assert_eq!(
        diagnose(&labrador_profile(29.0), &registry)
            .unwrap()
            .weight_status,
        WeightStatus::Ideal
    );
    assert_eq!(
        diagnose(&labrador_profile(36.0), &registry)
            .unwrap()
            .weight_status,
        WeightStatus::Ideal
    );
}

#[test]
fn test_female_range_used_for_female() {
    let registry = reference_registry();
    let mut profile = labrador_profile(34.0);

    assert_eq!(
        diagnose(&profile, &registry).unwrap().weight_status,
        WeightStatus::Ideal
    );

    // Female Labrador range is 25-32 kg
    profile.gender = Gender::Female;
    assert_eq!(
        diagnose(&profile, &registry).unwrap().weight_status,
        WeightStatus::Overweight
    );
}

// ============================================================================
// FABRICATED REGISTRIES AND BATCHES
// ============================================================================

#[test]
fn test_engine_reads_only_the_injected_registry() {
    let registry = BreedStandardRegistry::new([BreedStandard::new(
        "Test Terrier",
        (5.0, 6.0),
        (4.0, 5.0),
    )
    .unwrap()])
    .unwrap();

    let mut profile = labrador_profile(5.5);
    profile.breed_name = "test terrier".to_owned();
    assert_eq!(
        diagnose(&profile, &registry).unwrap().weight_status,
        WeightStatus::Ideal
    );

    assert!(diagnose(&labrador_profile(32.0), &registry)
        .unwrap_err()
        .is_unknown_breed());
}

#[test]
fn test_batch_matches_single_diagnostics() {
    let registry = reference_registry();
    let profiles: Vec<_> = [12.0, 29.0, 32.5, 36.0, 44.0]
        .into_iter()
        .map(labrador_profile)
        .collect();

    let batch = diagnose_batch(&profiles, &registry);

    for (profile, outcome) in profiles.iter().zip(batch) {
        assert_eq!(outcome.unwrap(), diagnose(profile, &registry).unwrap());
    }
}

#[test]
fn test_report_for_overweight_labrador() {
    let registry = reference_registry();
    let profile = labrador_profile(40.0);
    let result = diagnose(&profile, &registry).unwrap();

    let report = DiagnosticReport::from_result(&profile, &result);

    assert_eq!(report.pet_name, "Rex");
    assert!(report.headline.contains("36 kg"));
    assert_eq!(report.daily_energy_kcal, 2004);
    assert_eq!(report.daily_food_g, 572);
    assert_eq!(report.grams_per_meal_g, 286);
}
