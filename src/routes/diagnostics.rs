// ABOUTME: Diagnostic route handlers computing feeding prescriptions over HTTP
// ABOUTME: Single-profile and batch endpoints returning results with display-ready reports
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 PetHealth Contributors

//! Diagnostic routes
//!
//! Thin handlers: decode the profile, run the engine against the shared
//! registry, and pair the result with its report.

use crate::constants::limits::MAX_BATCH_PROFILES;
use crate::constants::routes::API_V1;
use crate::resources::ServerResources;
use axum::extract::rejection::JsonRejection;
use axum::extract::State;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::routing::post;
use axum::{Json, Router};
use pethealth_core::errors::{AppError, ErrorResponse};
use pethealth_core::models::{AnimalProfile, DiagnosticResult};
use pethealth_intelligence::{diagnose, diagnose_batch, DiagnosticReport};
use serde::{Deserialize, Serialize};
use std::sync::Arc;
use tokio::task;
use tracing::info;

/// Successful diagnostic: raw figures plus the rendered report
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DiagnosticResponse {
    /// Computed values
    pub result: DiagnosticResult,
    /// Display-ready summary
    pub report: DiagnosticReport,
}

impl DiagnosticResponse {
    /// Pair `result` with the report built for `profile`
    #[must_use]
    pub fn new(profile: &AnimalProfile, result: DiagnosticResult) -> Self {
        Self {
            report: DiagnosticReport::from_result(profile, &result),
            result,
        }
    }
}

/// Batch request body
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BatchDiagnosticRequest {
    /// Profiles to diagnose, at most `MAX_BATCH_PROFILES`
    pub profiles: Vec<AnimalProfile>,
}

/// One entry of a batch response, in request order
#[derive(Debug, Serialize)]
#[serde(untagged)]
pub enum BatchDiagnosticItem {
    /// The profile was diagnosed
    Diagnosed(DiagnosticResponse),
    /// The profile was rejected; same body as a single-request error
    Failed(ErrorResponse),
}

/// Batch response body
#[derive(Debug, Serialize)]
pub struct BatchDiagnosticResponse {
    /// Per-profile outcomes, in request order
    pub results: Vec<BatchDiagnosticItem>,
    /// Number of profiles that were diagnosed
    pub succeeded: usize,
    /// Number of profiles that were rejected
    pub failed: usize,
}

/// Diagnostic routes
pub struct DiagnosticRoutes;

impl DiagnosticRoutes {
    /// Create all diagnostic routes
    pub fn routes(resources: Arc<ServerResources>) -> Router {
        Router::new()
            .route(
                &format!("{API_V1}/diagnostics"),
                post(Self::handle_diagnose),
            )
            .route(
                &format!("{API_V1}/diagnostics/batch"),
                post(Self::handle_diagnose_batch),
            )
            .with_state(resources)
    }

    /// Handle a single diagnostic
    async fn handle_diagnose(
        State(resources): State<Arc<ServerResources>>,
        payload: Result<Json<AnimalProfile>, JsonRejection>,
    ) -> Result<Response, AppError> {
        let Json(profile) = payload.map_err(rejection_to_error)?;

        let result = diagnose(&profile, &resources.registry)?;

        info!(
            breed = %profile.breed_name,
            weight_status = %result.weight_status,
            "Diagnostic served"
        );

        Ok((StatusCode::OK, Json(DiagnosticResponse::new(&profile, result))).into_response())
    }

    /// Handle a batch of diagnostics; each profile succeeds or fails on its own
    async fn handle_diagnose_batch(
        State(resources): State<Arc<ServerResources>>,
        payload: Result<Json<BatchDiagnosticRequest>, JsonRejection>,
    ) -> Result<Response, AppError> {
        let Json(request) = payload.map_err(rejection_to_error)?;

        if request.profiles.is_empty() || request.profiles.len() > MAX_BATCH_PROFILES {
            return Err(AppError::invalid_input(format!(
                "profiles must contain between 1 and {MAX_BATCH_PROFILES} entries, got {}",
                request.profiles.len()
            ))
            .with_details(serde_json::json!({ "field": "profiles" })));
        }

        let registry = Arc::clone(&resources.registry);
        let profiles = request.profiles;
        let (profiles, outcomes) = task::spawn_blocking(move || {
            let outcomes = diagnose_batch(&profiles, &registry);
            (profiles, outcomes)
        })
        .await
        .map_err(|e| AppError::internal(format!("Batch diagnostic task failed: {e}")))?;

        let results: Vec<BatchDiagnosticItem> = profiles
            .iter()
            .zip(outcomes)
            .map(|(profile, outcome)| match outcome {
                Ok(result) => {
                    BatchDiagnosticItem::Diagnosed(DiagnosticResponse::new(profile, result))
                }
                Err(e) => BatchDiagnosticItem::Failed(AppError::from(e).into()),
            })
            .collect();

        let succeeded = results
            .iter()
            .filter(|item| matches!(item, BatchDiagnosticItem::Diagnosed(_)))
            .count();
        let failed = results.len() - succeeded;
        info!(succeeded, failed, "Batch diagnostic served");

        Ok((
            StatusCode::OK,
            Json(BatchDiagnosticResponse {
                results,
                succeeded,
                failed,
            }),
        )
            .into_response())
    }
}

/// Malformed bodies (bad JSON, unknown enum values, missing fields) are client input errors
fn rejection_to_error(rejection: JsonRejection) -> AppError {
    AppError::invalid_input(rejection.body_text())
}
