// ABOUTME: Re-exports command modules for pethealth-cli
// ABOUTME: Provides access to the diagnose and breed table commands
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 PetHealth Contributors

pub mod breeds;
pub mod diagnose;
