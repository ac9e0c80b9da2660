// ABOUTME: Breed standard route handlers exposing the reference table
// ABOUTME: Lists every breed in table order and looks up one breed case-insensitively
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 PetHealth Contributors

//! Breed reference routes

use crate::constants::routes::API_V1;
use crate::resources::ServerResources;
use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::routing::get;
use axum::{Json, Router};
use pethealth_core::errors::{AppError, DiagnosticError};
use pethealth_intelligence::BreedStandard;
use serde::Serialize;
use std::sync::Arc;

/// Breed listing body
#[derive(Debug, Serialize)]
pub struct BreedListResponse<'a> {
    /// Number of breeds
    pub count: usize,
    /// Every breed, in table order
    pub breeds: Vec<&'a BreedStandard>,
}

/// Breed reference routes
pub struct BreedRoutes;

impl BreedRoutes {
    /// Create all breed routes
    pub fn routes(resources: Arc<ServerResources>) -> Router {
        Router::new()
            .route(&format!("{API_V1}/breeds"), get(Self::handle_list))
            .route(&format!("{API_V1}/breeds/:breed_name"), get(Self::handle_get))
            .with_state(resources)
    }

    async fn handle_list(State(resources): State<Arc<ServerResources>>) -> Response {
        let breeds: Vec<&BreedStandard> = resources.registry.breeds().collect();
        let body = BreedListResponse {
            count: breeds.len(),
            breeds,
        };
        (StatusCode::OK, Json(body)).into_response()
    }

    async fn handle_get(
        State(resources): State<Arc<ServerResources>>,
        Path(breed_name): Path<String>,
    ) -> Result<Response, AppError> {
        let standard = resources
            .registry
            .get(&breed_name)
            .ok_or_else(|| DiagnosticError::unknown_breed(breed_name.trim()))?;

        Ok((StatusCode::OK, Json(standard)).into_response())
    }
}
