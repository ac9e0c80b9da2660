// ABOUTME: PetHealth CLI - command-line front end for the nutrition diagnostic
// ABOUTME: Runs a diagnostic for one dog and browses the breed reference table
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 PetHealth Contributors
//!
//! Usage:
//! ```bash
//! # Diagnose an intact male Labrador weighing 40 kg
//! pethealth-cli diagnose --breed "Labrador Retriever" --gender male --weight 40
//!
//! # Neutered female on a mild weight-loss plan, three meals, JSON output
//! pethealth-cli diagnose --breed beagle --gender female --weight 12 --neutered \
//!     --goal mild-weight-loss --meals 3 --json
//!
//! # Browse the reference table
//! pethealth-cli breeds list
//! pethealth-cli breeds show "german shepherd"
//! ```

mod commands;
mod helpers;

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use pethealth_server::config::ServerConfig;
use pethealth_server::constants::feeding;
use pethealth_server::intelligence::BreedStandardRegistry;
use pethealth_server::logging::LoggingConfig;
use pethealth_server::models::{AnimalProfile, ClinicalGoal, Gender};
use std::path::PathBuf;
use tracing::debug;

#[derive(Parser)]
#[command(
    name = "pethealth-cli",
    about = "Canine nutrition and weight diagnostic",
    long_about = "Computes a dog's daily energy requirement and food ration, and classifies its weight against the breed standard."
)]
struct Cli {
    #[command(subcommand)]
    command: Command,

    /// JSON breed table replacing the built-in reference table
    #[arg(long, global = true, env = "PETHEALTH_BREED_TABLE")]
    breed_table: Option<PathBuf>,

    /// Enable debug logging
    #[arg(long, short = 'v', global = true)]
    verbose: bool,
}

#[non_exhaustive]
#[derive(Subcommand)]
enum Command {
    /// Compute the feeding prescription and weight status for one dog
    Diagnose(DiagnoseArgs),

    /// Breed reference table commands
    Breeds {
        #[command(subcommand)]
        action: BreedsCommand,
    },
}

#[derive(clap::Args)]
struct DiagnoseArgs {
    /// Breed name (case-insensitive)
    #[arg(long)]
    breed: String,

    /// male or female
    #[arg(long)]
    gender: Gender,

    /// Current weight in kilograms
    #[arg(long, allow_negative_numbers = true)]
    weight: f64,

    /// The dog is neutered
    #[arg(long)]
    neutered: bool,

    /// Food energy density in kcal per kg
    #[arg(long, allow_negative_numbers = true, default_value_t = feeding::DEFAULT_FOOD_ENERGY_DENSITY_KCAL_PER_KG)]
    kcal_per_kg: f64,

    /// maintenance, mild-weight-loss or intensive-weight-loss
    #[arg(long, default_value_t = ClinicalGoal::Maintenance)]
    goal: ClinicalGoal,

    /// Meals per day (1-4)
    #[arg(long, default_value_t = feeding::DEFAULT_MEALS_PER_DAY)]
    meals: u8,

    /// Pet name shown in the report
    #[arg(long, default_value = "Rex")]
    name: String,

    /// Print the JSON response body instead of the report
    #[arg(long)]
    json: bool,
}

impl DiagnoseArgs {
    fn into_profile(self) -> (AnimalProfile, bool) {
        let profile = AnimalProfile {
            name: self.name,
            breed_name: self.breed,
            gender: self.gender,
            current_weight_kg: self.weight,
            neutered: self.neutered,
            food_energy_density_kcal_per_kg: self.kcal_per_kg,
            clinical_goal: self.goal,
            meals_per_day: self.meals,
        };
        (profile, self.json)
    }
}

#[non_exhaustive]
#[derive(Subcommand)]
enum BreedsCommand {
    /// List every breed with its male and female ranges
    List,

    /// Show one breed
    Show {
        /// Breed name (case-insensitive)
        name: String,
    },
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    let log_level = if cli.verbose { "debug" } else { "warn" };
    LoggingConfig::for_cli(log_level).init()?;

    let registry = load_registry(cli.breed_table)?;
    debug!(breeds = registry.len(), "Breed registry ready");

    match cli.command {
        Command::Diagnose(args) => {
            let (profile, json) = args.into_profile();
            commands::diagnose::run(&registry, &profile, json)?;
        }
        Command::Breeds { action } => match action {
            BreedsCommand::List => commands::breeds::list(&registry),
            BreedsCommand::Show { name } => commands::breeds::show(&registry, &name)?,
        },
    }

    Ok(())
}

fn load_registry(breed_table: Option<PathBuf>) -> Result<BreedStandardRegistry> {
    let config = ServerConfig {
        breed_table_path: breed_table,
        ..ServerConfig::default()
    };
    config
        .load_breed_registry()
        .context("Failed to load breed table")
}
