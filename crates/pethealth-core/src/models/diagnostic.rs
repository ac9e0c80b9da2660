// ABOUTME: Diagnostic output models: weight range, weight status, and feeding result
// ABOUTME: Immutable values produced once per request and never persisted
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 PetHealth Contributors

use crate::errors::DiagnosticError;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Healthy adult weight envelope in kilograms, bounds inclusive
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct WeightRange {
    /// Lower bound (kg), > 0
    pub min_kg: f64,
    /// Upper bound (kg), >= `min_kg`
    pub max_kg: f64,
}

impl WeightRange {
    /// Build a range, checking `0 < min_kg <= max_kg`.
    ///
    /// # Errors
    ///
    /// Returns `DiagnosticError::InvalidRegistry` if the bounds are not finite,
    /// not positive, or inverted
    pub fn new(min_kg: f64, max_kg: f64) -> Result<Self, DiagnosticError> {
        let range = Self { min_kg, max_kg };
        range.check()?;
        Ok(range)
    }

    /// Re-check the invariant on a range built field by field (e.g. deserialized)
    ///
    /// # Errors
    ///
    /// Same conditions as [`WeightRange::new`]
    pub fn check(&self) -> Result<(), DiagnosticError> {
        if !self.min_kg.is_finite() || !self.max_kg.is_finite() {
            return Err(DiagnosticError::invalid_registry(format!(
                "range bounds must be finite, got ({}, {})",
                self.min_kg, self.max_kg
            )));
        }
        if self.min_kg <= 0.0 {
            return Err(DiagnosticError::invalid_registry(format!(
                "min_kg must be greater than zero, got {}",
                self.min_kg
            )));
        }
        if self.min_kg > self.max_kg {
            return Err(DiagnosticError::invalid_registry(format!(
                "min_kg ({}) must not exceed max_kg ({})",
                self.min_kg, self.max_kg
            )));
        }
        Ok(())
    }

    /// Whether `weight_kg` lies inside the range, bounds included
    #[must_use]
    pub fn contains(&self, weight_kg: f64) -> bool {
        (self.min_kg..=self.max_kg).contains(&weight_kg)
    }
}

impl fmt::Display for WeightRange {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}-{} kg", self.min_kg, self.max_kg)
    }
}

/// Classification of current weight against the breed range
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "snake_case")]
pub enum WeightStatus {
    /// Below `min_kg`
    Underweight,
    /// Within the range, bounds included
    Ideal,
    /// Above `max_kg`
    Overweight,
}

impl WeightStatus {
    /// Wire name (`snake_case`)
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Underweight => "underweight",
            Self::Ideal => "ideal",
            Self::Overweight => "overweight",
        }
    }
}

impl fmt::Display for WeightStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Energy requirement, feeding prescription and weight classification.
///
/// `grams_per_meal * meals_per_day == daily_food_grams` within floating-point
/// tolerance.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct DiagnosticResult {
    /// Resting energy requirement, kcal/day
    pub resting_energy_requirement_kcal: f64,
    /// Multiplier K selected from goal and neuter status
    pub metabolic_factor: f64,
    /// Daily energy requirement (RER x K), kcal/day
    pub daily_energy_requirement_kcal: f64,
    /// Daily food mass in grams
    pub daily_food_grams: f64,
    /// Food mass per meal in grams
    pub grams_per_meal: f64,
    /// Meals the daily ration was split into
    pub meals_per_day: u8,
    /// Classification against `breed_range`
    pub weight_status: WeightStatus,
    /// Breed standard range used for the classification
    pub breed_range: WeightRange,
}
