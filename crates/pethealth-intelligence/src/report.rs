// ABOUTME: Human-readable diagnostic report built from a computed result
// ABOUTME: Status headline naming the crossed breed limit, whole-number figures, screening notice
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 PetHealth Contributors

use pethealth_core::constants::messages::SCREENING_NOTICE;
use pethealth_core::models::{AnimalProfile, DiagnosticResult, WeightStatus};
use serde::{Deserialize, Serialize};

/// Display-ready summary of one diagnostic
///
/// Whole-number figures are truncated toward zero, never rounded up, so the
/// prescription shown never exceeds the computed one.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DiagnosticReport {
    /// Pet name as entered
    pub pet_name: String,
    /// Breed name as entered
    pub breed_name: String,
    /// Weight classification
    pub weight_status: WeightStatus,
    /// One-line verdict, naming the breed limit when it was crossed
    pub headline: String,
    /// Daily energy requirement, whole kcal
    pub daily_energy_kcal: u32,
    /// Daily food, whole grams
    pub daily_food_g: u32,
    /// Food per meal, whole grams
    pub grams_per_meal_g: u32,
    /// Fixed veterinary screening notice
    pub notice: String,
}

impl DiagnosticReport {
    /// Build the report for `profile` from its computed `result`
    #[must_use]
    pub fn from_result(profile: &AnimalProfile, result: &DiagnosticResult) -> Self {
        Self {
            pet_name: profile.name.clone(),
            breed_name: profile.breed_name.clone(),
            weight_status: result.weight_status,
            headline: headline(result),
            daily_energy_kcal: whole(result.daily_energy_requirement_kcal),
            daily_food_g: whole(result.daily_food_grams),
            grams_per_meal_g: whole(result.grams_per_meal),
            notice: SCREENING_NOTICE.to_owned(),
        }
    }
}

fn headline(result: &DiagnosticResult) -> String {
    match result.weight_status {
        WeightStatus::Overweight => format!(
            "Overweight: current weight is above the breed standard ({} kg)",
            result.breed_range.max_kg
        ),
        WeightStatus::Underweight => format!(
            "Underweight: current weight is below the breed standard ({} kg)",
            result.breed_range.min_kg
        ),
        WeightStatus::Ideal => "Ideal weight: within the breed standard".to_owned(),
    }
}

/// Truncate toward zero; negative or NaN inputs become 0
fn whole(value: f64) -> u32 {
    value.trunc() as u32
}

#[cfg(test)]
mod tests {
    use super::*;
    use pethealth_core::models::{ClinicalGoal, Gender, WeightRange};

    fn profile() -> AnimalProfile {
        AnimalProfile {
            name: "Rex".to_owned(),
            breed_name: "Labrador Retriever".to_owned(),
            gender: Gender::Male,
            current_weight_kg: 40.0,
            neutered: false,
            food_energy_density_kcal_per_kg: 3500.0,
            clinical_goal: ClinicalGoal::Maintenance,
            meals_per_day: 3,
        }
    }

    fn result(status: WeightStatus) -> DiagnosticResult {
        DiagnosticResult {
            resting_energy_requirement_kcal: 1113.38,
            metabolic_factor: 1.8,
            daily_energy_requirement_kcal: 2004.08,
            daily_food_grams: 572.59,
            grams_per_meal: 572.59 / 3.0,
            meals_per_day: 3,
            weight_status: status,
            breed_range: WeightRange {
                min_kg: 29.0,
                max_kg: 36.0,
            },
        }
    }

    #[test]
    fn test_headline_names_crossed_limit() {
        let over = DiagnosticReport::from_result(&profile(), &result(WeightStatus::Overweight));
        assert!(over.headline.contains("(36 kg)"));

        let under = DiagnosticReport::from_result(&profile(), &result(WeightStatus::Underweight));
        assert!(under.headline.contains("(29 kg)"));

        let ideal = DiagnosticReport::from_result(&profile(), &result(WeightStatus::Ideal));
        assert!(ideal.headline.starts_with("Ideal"));
    }

    #[test]
    fn test_figures_truncate_instead_of_rounding() {
        let report = DiagnosticReport::from_result(&profile(), &result(WeightStatus::Overweight));

        assert_eq!(report.daily_energy_kcal, 2004);
        assert_eq!(report.daily_food_g, 572);
        // 190.86 g per meal, truncated from the exact quotient
        assert_eq!(report.grams_per_meal_g, 190);
        assert_eq!(report.notice, SCREENING_NOTICE);
    }

    #[test]
    fn test_whole_saturates_at_zero() {
        assert_eq!(whole(-4.2), 0);
        assert_eq!(whole(f64::NAN), 0);
        assert_eq!(whole(9.99), 9);
    }
}
