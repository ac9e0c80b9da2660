// ABOUTME: Health check route handlers for service monitoring and status endpoints
// ABOUTME: Provides liveness and readiness endpoints with RFC 3339 timestamps
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 PetHealth Contributors

//! Health check routes for service monitoring

use crate::resources::ServerResources;
use axum::extract::State;
use axum::routing::get;
use axum::{Json, Router};
use chrono::Utc;
use serde_json::{json, Value};
use std::sync::Arc;

/// Health routes implementation
pub struct HealthRoutes;

impl HealthRoutes {
    /// Create all health check routes
    pub fn routes(resources: Arc<ServerResources>) -> Router {
        Router::new()
            .route("/health", get(Self::handle_health))
            .route("/ready", get(Self::handle_ready))
            .with_state(resources)
    }

    async fn handle_health(State(resources): State<Arc<ServerResources>>) -> Json<Value> {
        Json(json!({
            "status": "healthy",
            "service": resources.config.server_name,
            "version": resources.config.server_version,
            "timestamp": Utc::now().to_rfc3339()
        }))
    }

    /// Ready once the registry holds at least one breed
    async fn handle_ready(State(resources): State<Arc<ServerResources>>) -> Json<Value> {
        let status = if resources.registry.is_empty() {
            "not_ready"
        } else {
            "ready"
        };
        Json(json!({
            "status": status,
            "breeds": resources.registry.len(),
            "timestamp": Utc::now().to_rfc3339()
        }))
    }
}
