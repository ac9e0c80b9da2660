// ABOUTME: Immutable breed standard registry mapping breed and gender to healthy weight ranges
// ABOUTME: Built-in FCI-derived reference table plus validated construction from custom entries
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 PetHealth Contributors

//! Breed Standard Registry
//!
//! Read-only lookup of breed -> gender -> healthy adult weight range (kg).
//! A registry is built once, then shared by reference (or `Arc`) between any
//! number of concurrent diagnostics. There is no write path after
//! construction.
//!
//! Keys are matched after trimming surrounding whitespace and ignoring case;
//! the name stored in the table is the canonical display name.
//!
//! # Reference
//!
//! Fédération Cynologique Internationale (FCI) breed standards,
//! <https://www.fci.be/en/Nomenclature/>. Mixed-breed rows are estimates by
//! size class.

use pethealth_core::errors::DiagnosticError;
use pethealth_core::models::{Gender, WeightRange};
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use tracing::debug;

/// One breed's adult weight envelope per gender
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BreedStandard {
    /// Unique breed key and display name
    pub breed_name: String,
    /// Healthy range for males
    pub male_range: WeightRange,
    /// Healthy range for females
    pub female_range: WeightRange,
}

impl BreedStandard {
    /// Build a standard from `(min_kg, max_kg)` pairs.
    ///
    /// # Errors
    ///
    /// Returns `DiagnosticError::InvalidRegistry` if the name is blank or a range is invalid
    pub fn new(
        breed_name: impl Into<String>,
        male: (f64, f64),
        female: (f64, f64),
    ) -> Result<Self, DiagnosticError> {
        let standard = Self {
            breed_name: breed_name.into(),
            male_range: WeightRange::new(male.0, male.1)?,
            female_range: WeightRange::new(female.0, female.1)?,
        };
        standard.check()?;
        Ok(standard)
    }

    /// Range for the given gender
    #[must_use]
    pub const fn range_for(&self, gender: Gender) -> WeightRange {
        match gender {
            Gender::Male => self.male_range,
            Gender::Female => self.female_range,
        }
    }

    fn check(&self) -> Result<(), DiagnosticError> {
        if self.breed_name.trim().is_empty() {
            return Err(DiagnosticError::invalid_registry(
                "breed_name must not be empty",
            ));
        }
        for range in [self.male_range, self.female_range] {
            range.check().map_err(|e| {
                DiagnosticError::invalid_registry(format!("{}: {e}", self.breed_name))
            })?;
        }
        Ok(())
    }
}

/// Built-in reference rows: (breed, male (min, max), female (min, max))
const FCI_REFERENCE_TABLE: &[(&str, (f64, f64), (f64, f64))] = &[
    ("German Shepherd", (30.0, 40.0), (22.0, 32.0)),
    ("Border Collie", (14.0, 20.0), (12.0, 19.0)),
    ("Belgian Shepherd (Malinois)", (25.0, 30.0), (20.0, 25.0)),
    ("Boxer", (30.0, 32.0), (25.0, 27.0)),
    ("Rottweiler", (50.0, 60.0), (35.0, 48.0)),
    ("Bernese Mountain Dog", (38.0, 50.0), (36.0, 48.0)),
    ("Miniature Pinscher", (4.0, 6.0), (4.0, 6.0)),
    ("Great Dane", (54.0, 90.0), (45.0, 59.0)),
    ("Yorkshire Terrier", (2.0, 3.2), (2.0, 3.2)),
    ("Jack Russell Terrier", (6.0, 8.0), (6.0, 8.0)),
    ("Dachshund (Standard)", (7.0, 12.0), (7.0, 12.0)),
    ("Akita Inu", (32.0, 45.0), (23.0, 34.0)),
    ("German Spitz (Pomeranian)", (1.9, 3.5), (1.9, 3.5)),
    ("Beagle", (10.0, 11.0), (9.0, 10.0)),
    ("Labrador Retriever", (29.0, 36.0), (25.0, 32.0)),
    ("Golden Retriever", (30.0, 34.0), (25.0, 32.0)),
    ("French Bulldog", (9.0, 14.0), (8.0, 13.0)),
    ("Pug", (6.0, 8.0), (6.0, 8.0)),
    ("Shih Tzu", (4.5, 8.1), (4.5, 8.1)),
    ("Chihuahua", (1.5, 3.0), (1.5, 3.0)),
    ("Poodle (Standard)", (20.0, 32.0), (20.0, 27.0)),
    ("Whippet", (12.0, 14.0), (10.0, 13.0)),
    ("Mixed Breed (Small)", (1.0, 10.0), (1.0, 9.0)),
    ("Mixed Breed (Medium)", (11.0, 25.0), (10.0, 23.0)),
    ("Mixed Breed (Large)", (26.0, 45.0), (24.0, 42.0)),
];

/// Immutable breed -> gender -> weight range lookup
#[derive(Debug, Clone)]
pub struct BreedStandardRegistry {
    /// Rows in table order
    standards: Vec<BreedStandard>,
    /// Normalized key -> position in `standards`
    index: HashMap<String, usize>,
}

impl BreedStandardRegistry {
    /// Build a registry from arbitrary entries.
    ///
    /// # Errors
    ///
    /// Returns `DiagnosticError::InvalidRegistry` if any entry has a blank name or
    /// an invalid range, or if two entries share a name (ignoring case)
    pub fn new(entries: impl IntoIterator<Item = BreedStandard>) -> Result<Self, DiagnosticError> {
        let mut registry = Self {
            standards: Vec::new(),
            index: HashMap::new(),
        };

        for standard in entries {
            standard.check()?;
            let key = normalize_key(&standard.breed_name);
            if registry.index.contains_key(&key) {
                return Err(DiagnosticError::invalid_registry(format!(
                    "duplicate breed '{}'",
                    standard.breed_name
                )));
            }
            registry.index.insert(key, registry.standards.len());
            registry.standards.push(standard);
        }

        debug!(breeds = registry.len(), "Breed registry built");
        Ok(registry)
    }

    /// The built-in FCI-derived reference table
    #[must_use]
    pub fn fci_reference() -> Self {
        let standards: Vec<BreedStandard> = FCI_REFERENCE_TABLE
            .iter()
            .map(|&(name, (male_min, male_max), (female_min, female_max))| BreedStandard {
                breed_name: name.to_owned(),
                male_range: WeightRange {
                    min_kg: male_min,
                    max_kg: male_max,
                },
                female_range: WeightRange {
                    min_kg: female_min,
                    max_kg: female_max,
                },
            })
            .collect();
        let index = standards
            .iter()
            .enumerate()
            .map(|(position, standard)| (normalize_key(&standard.breed_name), position))
            .collect();

        Self { standards, index }
    }

    /// Parse a JSON array of [`BreedStandard`] objects and validate it.
    ///
    /// # Errors
    ///
    /// Returns `DiagnosticError::InvalidRegistry` if the JSON is malformed or any
    /// entry fails validation
    pub fn from_json_str(json: &str) -> Result<Self, DiagnosticError> {
        let entries: Vec<BreedStandard> = serde_json::from_str(json).map_err(|e| {
            DiagnosticError::invalid_registry(format!("malformed breed table: {e}"))
        })?;
        if entries.is_empty() {
            return Err(DiagnosticError::invalid_registry(
                "breed table must contain at least one breed",
            ));
        }
        Self::new(entries)
    }

    /// Weight range for a breed and gender.
    ///
    /// # Errors
    ///
    /// Returns `DiagnosticError::UnknownBreed` if the breed is not a key
    pub fn lookup(&self, breed_name: &str, gender: Gender) -> Result<WeightRange, DiagnosticError> {
        self.get(breed_name)
            .map(|standard| standard.range_for(gender))
            .ok_or_else(|| DiagnosticError::unknown_breed(breed_name.trim()))
    }

    /// Full standard for a breed, if present
    #[must_use]
    pub fn get(&self, breed_name: &str) -> Option<&BreedStandard> {
        self.index
            .get(&normalize_key(breed_name))
            .and_then(|&position| self.standards.get(position))
    }

    /// Whether the breed is a key of this registry
    #[must_use]
    pub fn contains(&self, breed_name: &str) -> bool {
        self.index.contains_key(&normalize_key(breed_name))
    }

    /// All standards in table order
    pub fn breeds(&self) -> impl Iterator<Item = &BreedStandard> {
        self.standards.iter()
    }

    /// Number of breeds
    #[must_use]
    pub fn len(&self) -> usize {
        self.standards.len()
    }

    /// Whether the registry has no breeds
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.standards.is_empty()
    }
}

impl Default for BreedStandardRegistry {
    fn default() -> Self {
        Self::fci_reference()
    }
}

fn normalize_key(breed_name: &str) -> String {
    breed_name.trim().to_lowercase()
}
