// ABOUTME: Output formatting helpers for pethealth-cli
// ABOUTME: Renders diagnostic reports and breed tables for the terminal
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 PetHealth Contributors

use pethealth_server::intelligence::BreedStandard;
use pethealth_server::routes::DiagnosticResponse;

/// Display a diagnostic report
pub fn display_report(response: &DiagnosticResponse) {
    let report = &response.report;
    let result = &response.result;

    println!("\nNutrition diagnostic for {} ({})", report.pet_name, report.breed_name);
    println!("{}", "=".repeat(60));
    println!("{}", report.headline);
    println!("   Breed standard: {}", result.breed_range);
    println!();
    println!("   Resting energy (RER): {:.1} kcal/day", result.resting_energy_requirement_kcal);
    println!("   Metabolic factor:     {}", result.metabolic_factor);
    println!("   Daily energy (DER):   {} kcal/day", report.daily_energy_kcal);
    println!("   Daily food:           {} g", report.daily_food_g);
    println!(
        "   Per meal:             {} g x {} meals",
        report.grams_per_meal_g, result.meals_per_day
    );
    println!("{}", "=".repeat(60));
    println!("{}", report.notice);
}

/// Display every breed as an aligned table
pub fn display_breed_table<'a>(breeds: impl Iterator<Item = &'a BreedStandard>) {
    println!("{:<30} {:>14} {:>14}", "Breed", "Male", "Female");
    println!("{}", "-".repeat(60));
    for standard in breeds {
        println!(
            "{:<30} {:>14} {:>14}",
            standard.breed_name,
            standard.male_range.to_string(),
            standard.female_range.to_string()
        );
    }
}

/// Display one breed
pub fn display_breed(standard: &BreedStandard) {
    println!("{}", standard.breed_name);
    println!("   Male:   {}", standard.male_range);
    println!("   Female: {}", standard.female_range);
}
