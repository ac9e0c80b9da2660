// ABOUTME: Domain constants for canine energy requirements and feeding prescriptions
// ABOUTME: RER coefficients, metabolic factor values, meal limits, and service names
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 PetHealth Contributors

//! Constants used by the diagnostic engine and its callers.
//!
//! The energy coefficients are fixed by veterinary convention and are not
//! configurable at runtime.
//!
//! # References
//!
//! - National Research Council (2006). *Nutrient Requirements of Dogs and Cats*.
//!   The National Academies Press. <https://doi.org/10.17226/10668>
//! - Kleiber, M. (1932). Body size and metabolism. *Hilgardia*, 6(11), 315-353.

/// Resting energy requirement formula: `RER = 70 * weight_kg^0.75`
pub mod energy {
    /// Coefficient of the allometric RER formula (kcal/day)
    pub const RER_COEFFICIENT: f64 = 70.0;

    /// Exponent applied to body weight in kilograms (metabolic body weight)
    pub const RER_EXPONENT: f64 = 0.75;

    /// Conversion from kilograms of food to grams
    pub const GRAMS_PER_KILOGRAM: f64 = 1000.0;
}

/// Multipliers applied to RER to obtain the daily energy requirement
pub mod metabolic_factors {
    /// Intensive weight loss, regardless of neuter status
    pub const INTENSIVE_WEIGHT_LOSS: f64 = 1.0;

    /// Mild weight loss, regardless of neuter status
    pub const MILD_WEIGHT_LOSS: f64 = 1.2;

    /// Maintenance for a neutered adult
    pub const NEUTERED_MAINTENANCE: f64 = 1.6;

    /// Maintenance for an intact adult
    pub const INTACT_MAINTENANCE: f64 = 1.8;
}

/// Feeding schedule limits and form defaults
pub mod feeding {
    /// Fewest meals a prescription may be split into
    pub const MIN_MEALS_PER_DAY: u8 = 1;

    /// Most meals a prescription may be split into
    pub const MAX_MEALS_PER_DAY: u8 = 4;

    /// Meals per day when the caller does not choose
    pub const DEFAULT_MEALS_PER_DAY: u8 = 2;

    /// Typical dry food metabolizable energy (kcal per kg of food)
    pub const DEFAULT_FOOD_ENERGY_DENSITY_KCAL_PER_KG: f64 = 3500.0;
}

/// User-facing fixed texts
pub mod messages {
    /// Shown alongside every report
    pub const SCREENING_NOTICE: &str = "This calculator is a screening tool. A body condition score (BCS) assessment by a veterinarian is indispensable.";
}

/// Service identifiers used in logs and health responses
pub mod service_names {
    /// HTTP service name
    pub const PETHEALTH_SERVER: &str = "pethealth-server";

    /// Command-line tool name
    pub const PETHEALTH_CLI: &str = "pethealth-cli";
}
