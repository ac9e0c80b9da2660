// ABOUTME: Re-exports helper modules for pethealth-cli
// ABOUTME: Provides access to terminal display formatting
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 PetHealth Contributors

pub mod display;
