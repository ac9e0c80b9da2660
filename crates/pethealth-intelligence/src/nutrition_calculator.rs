// ABOUTME: Canine nutrition diagnostic algorithms using veterinary energy formulas
// ABOUTME: RER, metabolic factor selection, DER, food mass per day and meal, weight classification
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 PetHealth Contributors

//! Nutrition Diagnostic Module
//!
//! Computes the daily feeding prescription for a dog from its body weight,
//! neuter status and clinical goal, and classifies its weight against the
//! breed standard. Every function here is pure: no I/O, no shared mutable
//! state, identical inputs give bit-identical outputs.
//!
//! # Scientific References
//!
//! - National Research Council (2006). *Nutrient Requirements of Dogs and Cats*,
//!   Chapter 3: Energy. The National Academies Press.
//!   <https://doi.org/10.17226/10668>
//!
//! - Kleiber, M. (1932). Body size and metabolism. *Hilgardia*, 6(11), 315-353.
//!
//! - Brooks, D., et al. (2014). 2014 AAHA Weight Management Guidelines for Dogs
//!   and Cats. *JAAHA*, 50(1), 1-11. <https://doi.org/10.5326/JAAHA-MS-6331>

use crate::breed_registry::BreedStandardRegistry;
use pethealth_core::constants::{energy, metabolic_factors};
use pethealth_core::errors::DiagnosticError;
use pethealth_core::models::{
    AnimalProfile, ClinicalGoal, DiagnosticResult, WeightRange, WeightStatus,
};
use rayon::prelude::*;
use tracing::{debug, warn};

/// Calculate the Resting Energy Requirement (kcal/day)
///
/// Formula: RER = 70 x `weight_kg`^0.75
///
/// # Reference
/// NRC (2006) Nutrient Requirements of Dogs and Cats, Chapter 3
///
/// # Errors
///
/// Returns a validation error if the weight is not a positive finite number
pub fn calculate_rer(weight_kg: f64) -> Result<f64, DiagnosticError> {
    if !weight_kg.is_finite() || weight_kg <= 0.0 {
        return Err(DiagnosticError::validation(
            "current_weight_kg",
            format!("must be greater than zero, got {weight_kg}"),
        ));
    }

    Ok(energy::RER_COEFFICIENT * weight_kg.powf(energy::RER_EXPONENT))
}

/// Select the metabolic factor K for a clinical goal and neuter status
///
/// | goal | neutered | K |
/// |---|---|---|
/// | intensive weight loss | any | 1.0 |
/// | mild weight loss | any | 1.2 |
/// | maintenance | yes | 1.6 |
/// | maintenance | no | 1.8 |
///
/// Weight-loss goals ignore neuter status. The match is exhaustive over
/// `ClinicalGoal x bool`, so there is no fallback value.
#[must_use]
pub const fn select_metabolic_factor(goal: ClinicalGoal, neutered: bool) -> f64 {
    match (goal, neutered) {
        (ClinicalGoal::IntensiveWeightLoss, _) => metabolic_factors::INTENSIVE_WEIGHT_LOSS,
        (ClinicalGoal::MildWeightLoss, _) => metabolic_factors::MILD_WEIGHT_LOSS,
        (ClinicalGoal::Maintenance, true) => metabolic_factors::NEUTERED_MAINTENANCE,
        (ClinicalGoal::Maintenance, false) => metabolic_factors::INTACT_MAINTENANCE,
    }
}

/// Calculate the Daily Energy Requirement (kcal/day)
///
/// Formula: DER = RER x K
#[must_use]
pub fn calculate_der(rer_kcal: f64, metabolic_factor: f64) -> f64 {
    rer_kcal * metabolic_factor
}

/// Convert a daily energy requirement into grams of food
///
/// Formula: grams = (DER / `kcal_per_kg`) x 1000
///
/// # Errors
///
/// Returns a validation error if the energy density is not a positive finite
/// number, or is so small that the food mass overflows
pub fn calculate_daily_food_grams(
    der_kcal: f64,
    food_energy_density_kcal_per_kg: f64,
) -> Result<f64, DiagnosticError> {
    if !food_energy_density_kcal_per_kg.is_finite() || food_energy_density_kcal_per_kg <= 0.0 {
        return Err(DiagnosticError::validation(
            "food_energy_density_kcal_per_kg",
            format!("must be greater than zero, got {food_energy_density_kcal_per_kg}"),
        ));
    }

    let grams = (der_kcal / food_energy_density_kcal_per_kg) * energy::GRAMS_PER_KILOGRAM;
    if !grams.is_finite() {
        return Err(DiagnosticError::validation(
            "food_energy_density_kcal_per_kg",
            format!("{food_energy_density_kcal_per_kg} is too small to compute a food mass"),
        ));
    }

    Ok(grams)
}

/// Split the daily ration evenly across meals
///
/// # Errors
///
/// Returns a validation error if `meals_per_day` is zero or the daily mass
/// is not a finite number
pub fn calculate_grams_per_meal(
    daily_food_grams: f64,
    meals_per_day: u8,
) -> Result<f64, DiagnosticError> {
    if meals_per_day == 0 {
        return Err(DiagnosticError::validation(
            "meals_per_day",
            "must be at least 1",
        ));
    }
    if !daily_food_grams.is_finite() {
        return Err(DiagnosticError::validation(
            "food_energy_density_kcal_per_kg",
            format!("daily food mass is not finite ({daily_food_grams})"),
        ));
    }

    Ok(daily_food_grams / f64::from(meals_per_day))
}

/// Classify a weight against a breed range
///
/// Strictly above `max_kg` is overweight, strictly below `min_kg` is
/// underweight; both bounds count as ideal.
#[must_use]
pub fn classify_weight(weight_kg: f64, range: WeightRange) -> WeightStatus {
    if range.contains(weight_kg) {
        WeightStatus::Ideal
    } else if weight_kg > range.max_kg {
        WeightStatus::Overweight
    } else {
        WeightStatus::Underweight
    }
}

/// Run the complete diagnostic for one animal
///
/// This is the main entry point. Field validation runs first, then the breed
/// range lookup, then the energy and feeding computation, so a failure never
/// leaves partially computed values behind.
///
/// # Errors
///
/// - `DiagnosticError::Validation` if weight or energy density is not positive,
///   or `meals_per_day` is outside 1-4
/// - `DiagnosticError::UnknownBreed` if the breed is not in `registry`
pub fn diagnose(
    profile: &AnimalProfile,
    registry: &BreedStandardRegistry,
) -> Result<DiagnosticResult, DiagnosticError> {
    if let Err(e) = profile.validate() {
        warn!(field = ?e.field(), error = %e, "Rejected diagnostic request");
        return Err(e);
    }

    let breed_range = registry
        .lookup(&profile.breed_name, profile.gender)
        .inspect_err(|e| warn!(breed = %profile.breed_name, error = %e, "Unknown breed"))?;

    // Step 1: Resting energy requirement
    let rer = calculate_rer(profile.current_weight_kg)?;

    // Step 2: Metabolic factor from the decision table
    let factor = select_metabolic_factor(profile.clinical_goal, profile.neutered);

    // Step 3: Daily energy requirement
    let der = calculate_der(rer, factor);

    // Step 4-5: Food mass per day and per meal
    let daily_food_grams =
        calculate_daily_food_grams(der, profile.food_energy_density_kcal_per_kg)?;
    let grams_per_meal = calculate_grams_per_meal(daily_food_grams, profile.meals_per_day)?;

    // Step 6: Classification against the breed standard
    let weight_status = classify_weight(profile.current_weight_kg, breed_range);

    debug!(
        breed = %profile.breed_name,
        gender = %profile.gender,
        goal = %profile.clinical_goal,
        rer_kcal = rer,
        metabolic_factor = factor,
        der_kcal = der,
        daily_food_grams,
        weight_status = %weight_status,
        "Diagnostic computed"
    );

    Ok(DiagnosticResult {
        resting_energy_requirement_kcal: rer,
        metabolic_factor: factor,
        daily_energy_requirement_kcal: der,
        daily_food_grams,
        grams_per_meal,
        meals_per_day: profile.meals_per_day,
        weight_status,
        breed_range,
    })
}

/// Diagnose many profiles in parallel against one shared registry
///
/// Results keep the order of `profiles`; each entry succeeds or fails on its own.
#[must_use]
pub fn diagnose_batch(
    profiles: &[AnimalProfile],
    registry: &BreedStandardRegistry,
) -> Vec<Result<DiagnosticResult, DiagnosticError>> {
    profiles
        .par_iter()
        .map(|profile| diagnose(profile, registry))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use pethealth_core::models::Gender;

    fn labrador(weight_kg: f64) -> AnimalProfile {
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

    #[test]
    fn test_rer_unit_weight_equals_coefficient() {
        let rer = calculate_rer(1.0).unwrap();
        assert!((rer - 70.0).abs() < 1e-9);
    }

    #[test]
    fn test_rer_rejects_non_positive_weight() {
        assert!(calculate_rer(0.0).is_err());
        assert!(calculate_rer(-3.0).is_err());
        assert!(calculate_rer(f64::NAN).is_err());
    }

    #[test]
    fn test_factor_table_rows() {
        let rows = [
            (ClinicalGoal::IntensiveWeightLoss, true, 1.0),
            (ClinicalGoal::MildWeightLoss, false, 1.2),
            (ClinicalGoal::Maintenance, true, 1.6),
            (ClinicalGoal::Maintenance, false, 1.8),
        ];

        for (goal, neutered, expected) in rows {
            let factor = select_metabolic_factor(goal, neutered);
            assert!((factor - expected).abs() < f64::EPSILON, "{goal}/{neutered}");
        }
    }

    #[test]
    fn test_daily_food_grams_formula() {
        // 1120 kcal at 3500 kcal/kg is 320 g
        let grams = calculate_daily_food_grams(1120.0, 3500.0).unwrap();
        assert!((grams - 320.0).abs() < 1e-9);
        assert!(calculate_daily_food_grams(1120.0, 0.0).is_err());
    }

    #[test]
    fn test_subnormal_energy_density_is_rejected() {
        let err = calculate_daily_food_grams(960.0, 1e-310).unwrap_err();
        assert_eq!(err.field(), Some("food_energy_density_kcal_per_kg"));

        let err = diagnose(
            &AnimalProfile {
                food_energy_density_kcal_per_kg: 1e-310,
                ..labrador(15.0)
            },
            &BreedStandardRegistry::fci_reference(),
        )
        .unwrap_err();
        assert_eq!(err.field(), Some("food_energy_density_kcal_per_kg"));
    }

    #[test]
    fn test_grams_per_meal_rejects_non_finite_total() {
        assert!(calculate_grams_per_meal(f64::INFINITY, 2).is_err());
        assert!(calculate_grams_per_meal(f64::NAN, 2).is_err());
    }

    #[test]
    fn test_grams_per_meal_rejects_zero_meals() {
        assert!(calculate_grams_per_meal(300.0, 0).is_err());
        assert!((calculate_grams_per_meal(300.0, 3).unwrap() - 100.0).abs() < 1e-9);
    }

    #[test]
    fn test_classify_weight_bounds() {
        let range = WeightRange::new(29.0, 36.0).unwrap();

        assert_eq!(classify_weight(28.9, range), WeightStatus::Underweight);
        assert_eq!(classify_weight(29.0, range), WeightStatus::Ideal);
        assert_eq!(classify_weight(36.0, range), WeightStatus::Ideal);
        assert_eq!(classify_weight(36.1, range), WeightStatus::Overweight);
    }

    #[test]
    fn test_diagnose_validates_before_breed_lookup() {
        let registry = BreedStandardRegistry::fci_reference();
        let mut profile = labrador(15.0);
        profile.breed_name = "Dragon Hound".to_owned();
        profile.meals_per_day = 0;

        let err = diagnose(&profile, &registry).unwrap_err();
        assert!(err.is_validation());
    }

    #[test]
    fn test_batch_preserves_order_and_isolates_failures() {
        let registry = BreedStandardRegistry::fci_reference();
        let mut unknown = labrador(20.0);
        unknown.breed_name = "Dragon Hound".to_owned();
        let profiles = vec![labrador(15.0), unknown, labrador(40.0)];

        let results = diagnose_batch(&profiles, &registry);

        assert_eq!(results.len(), 3);
        assert_eq!(
            results[0].as_ref().unwrap().weight_status,
            WeightStatus::Underweight
        );
        assert!(results[1].as_ref().unwrap_err().is_unknown_breed());
        assert_eq!(
            results[2].as_ref().unwrap().weight_status,
            WeightStatus::Overweight
        );
    }
}
