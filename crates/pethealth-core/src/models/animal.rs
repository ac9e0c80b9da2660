// ABOUTME: Animal profile input model with gender and clinical goal enumerations
// ABOUTME: Boundary parsing for closed enums and field validation before computation
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 PetHealth Contributors

use crate::constants::feeding::{MAX_MEALS_PER_DAY, MIN_MEALS_PER_DAY};
use crate::errors::DiagnosticError;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Biological sex used to pick the breed standard range
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "snake_case")]
pub enum Gender {
    /// Male dog
    Male,
    /// Female dog
    Female,
}

impl Gender {
    /// Every supported value
    pub const ALL: [Self; 2] = [Self::Male, Self::Female];

    /// Wire name (`snake_case`)
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Male => "male",
            Self::Female => "female",
        }
    }
}

impl fmt::Display for Gender {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Gender {
    type Err = DiagnosticError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match normalize_label(s).as_str() {
            "male" | "m" => Ok(Self::Male),
            "female" | "f" => Ok(Self::Female),
            _ => Err(DiagnosticError::validation(
                "gender",
                format!("'{s}' is not one of: male, female"),
            )),
        }
    }
}

/// Clinical objective of the feeding plan
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "snake_case")]
pub enum ClinicalGoal {
    /// Keep the current body weight
    Maintenance,
    /// Gradual weight reduction
    MildWeightLoss,
    /// Aggressive weight reduction under veterinary follow-up
    IntensiveWeightLoss,
}

impl ClinicalGoal {
    /// Every supported value
    pub const ALL: [Self; 3] = [
        Self::Maintenance,
        Self::MildWeightLoss,
        Self::IntensiveWeightLoss,
    ];

    /// Wire name (`snake_case`)
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Maintenance => "maintenance",
            Self::MildWeightLoss => "mild_weight_loss",
            Self::IntensiveWeightLoss => "intensive_weight_loss",
        }
    }
}

impl fmt::Display for ClinicalGoal {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for ClinicalGoal {
    type Err = DiagnosticError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match normalize_label(s).as_str() {
            "maintenance" => Ok(Self::Maintenance),
            "mild_weight_loss" => Ok(Self::MildWeightLoss),
            "intensive_weight_loss" => Ok(Self::IntensiveWeightLoss),
            _ => Err(DiagnosticError::validation(
                "clinical_goal",
                format!(
                    "'{s}' is not one of: maintenance, mild_weight_loss, intensive_weight_loss"
                ),
            )),
        }
    }
}

/// Lowercase, trim, and fold `-` and spaces into `_`
fn normalize_label(s: &str) -> String {
    s.trim()
        .to_lowercase()
        .chars()
        .map(|c| if c == '-' || c.is_whitespace() { '_' } else { c })
        .collect()
}

/// Input of one diagnostic request
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AnimalProfile {
    /// Display label, no semantic constraint
    #[serde(default)]
    pub name: String,
    /// Breed key in the registry
    pub breed_name: String,
    /// Selects the male or female breed range
    pub gender: Gender,
    /// Current body weight (kg), must be > 0
    pub current_weight_kg: f64,
    /// Whether the animal is neutered
    #[serde(default)]
    pub neutered: bool,
    /// Metabolizable energy of the food (kcal per kg), must be > 0
    pub food_energy_density_kcal_per_kg: f64,
    /// Feeding objective
    pub clinical_goal: ClinicalGoal,
    /// Number of meals the daily ration is split into, 1 to 4
    pub meals_per_day: u8,
}

impl AnimalProfile {
    /// Check every numeric field constraint.
    ///
    /// # Errors
    ///
    /// Returns `DiagnosticError::Validation` naming the first offending field
    pub fn validate(&self) -> Result<(), DiagnosticError> {
        validate_positive("current_weight_kg", self.current_weight_kg)?;
        validate_positive(
            "food_energy_density_kcal_per_kg",
            self.food_energy_density_kcal_per_kg,
        )?;

        if !(MIN_MEALS_PER_DAY..=MAX_MEALS_PER_DAY).contains(&self.meals_per_day) {
            return Err(DiagnosticError::validation(
                "meals_per_day",
                format!(
                    "must be between {MIN_MEALS_PER_DAY} and {MAX_MEALS_PER_DAY}, got {}",
                    self.meals_per_day
                ),
            ));
        }

        Ok(())
    }
}

/// Reject NaN, infinities, zero and negatives
fn validate_positive(field: &'static str, value: f64) -> Result<(), DiagnosticError> {
    if !value.is_finite() {
        return Err(DiagnosticError::validation(
            field,
            format!("must be a finite number, got {value}"),
        ));
    }
    if value <= 0.0 {
        return Err(DiagnosticError::validation(
            field,
            format!("must be greater than zero, got {value}"),
        ));
    }
    Ok(())
}
