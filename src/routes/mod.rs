// ABOUTME: Route module organization for the PetHealth HTTP endpoints
// ABOUTME: Merges health, diagnostic, and breed routes behind an HTTP trace layer
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 PetHealth Contributors

//! Route module for the `PetHealth` server
//!
//! Each domain module holds only route definitions and thin handlers that
//! delegate to `pethealth_intelligence`.

/// Breed reference routes
pub mod breeds;
/// Diagnostic computation routes
pub mod diagnostics;
/// Health check and readiness routes
pub mod health;

pub use breeds::BreedRoutes;
pub use diagnostics::{BatchDiagnosticRequest, DiagnosticResponse, DiagnosticRoutes};
pub use health::HealthRoutes;

use crate::resources::ServerResources;
use axum::Router;
use std::sync::Arc;
use tower_http::trace::TraceLayer;

/// Build the complete application router
pub fn build_router(resources: Arc<ServerResources>) -> Router {
    Router::new()
        .merge(HealthRoutes::routes(Arc::clone(&resources)))
        .merge(DiagnosticRoutes::routes(Arc::clone(&resources)))
        .merge(BreedRoutes::routes(resources))
        .layer(TraceLayer::new_for_http())
}
