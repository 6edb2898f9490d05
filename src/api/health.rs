//! Health check endpoints for Kubernetes probes

use std::time::Instant;

use axum::{extract::State, http::StatusCode, response::IntoResponse};
use serde::Serialize;

use crate::api::types::Json;
use crate::domain::championship::ChampionshipId;
use crate::domain::DomainError;

use super::state::AppState;

/// Health report, with per-store checks on the readiness endpoint
#[derive(Serialize)]
pub struct HealthResponse {
    pub status: HealthStatus,
    pub version: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub checks: Option<Vec<HealthCheck>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub latency_ms: Option<u64>,
}

/// Health check status
#[derive(Serialize, Clone, Copy, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum HealthStatus {
    Healthy,
    Degraded,
    Unhealthy,
}

/// Outcome of probing one backing store
#[derive(Serialize)]
pub struct HealthCheck {
    pub name: String,
    pub status: HealthStatus,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub latency_ms: Option<u64>,
}

impl HealthCheck {
    /// Build a check outcome from a store probe result
    fn from_probe(name: &str, started: Instant, result: Result<(), DomainError>) -> Self {
        let (status, message) = match result {
            Ok(()) => (HealthStatus::Healthy, None),
            Err(e) => (HealthStatus::Unhealthy, Some(e.to_string())),
        };

        Self {
            name: name.to_string(),
            status,
            message,
            latency_ms: Some(started.elapsed().as_millis() as u64),
        }
    }
}

/// Simple health check - returns 200 if the service is running
/// Used for basic liveness probes
pub async fn health_check() -> impl IntoResponse {
    let response = HealthResponse {
        status: HealthStatus::Healthy,
        version: env!("CARGO_PKG_VERSION").to_string(),
        checks: None,
        latency_ms: None,
    };

    (StatusCode::OK, Json(response))
}

/// Readiness check that verifies the backing stores are reachable
pub async fn ready_check(State(state): State<AppState>) -> impl IntoResponse {
    let started = Instant::now();

    let checks = vec![
        check_user_store(&state).await,
        check_enrollment_store(&state).await,
    ];

    let status = if checks.iter().all(|c| c.status == HealthStatus::Healthy) {
        HealthStatus::Healthy
    } else {
        HealthStatus::Degraded
    };

    // Degraded still serves requests, so only Unhealthy flips the probe red
    let status_code = match status {
        HealthStatus::Unhealthy => StatusCode::SERVICE_UNAVAILABLE,
        _ => StatusCode::OK,
    };

    let response = HealthResponse {
        status,
        version: env!("CARGO_PKG_VERSION").to_string(),
        checks: Some(checks),
        latency_ms: Some(started.elapsed().as_millis() as u64),
    };

    (status_code, Json(response))
}

/// Liveness check - simple check to verify the service is running
/// Used for Kubernetes liveness probes to detect crashes
pub async fn live_check() -> impl IntoResponse {
    StatusCode::OK
}

async fn check_user_store(state: &AppState) -> HealthCheck {
    let started = Instant::now();

    // The probe id never matches a stored account; the lookup only has to
    // reach the store and come back.
    let result = state.user_service.get("readiness-probe").await.map(|_| ());

    HealthCheck::from_probe("user_store", started, result)
}

async fn check_enrollment_store(state: &AppState) -> HealthCheck {
    let started = Instant::now();

    let result = match ChampionshipId::new("readiness-probe") {
        Ok(probe) => state
            .enrollment_service
            .roster_size(&probe)
            .await
            .map(|_| ()),
        Err(e) => Err(DomainError::internal(e.to_string())),
    };

    HealthCheck::from_probe("enrollment_store", started, result)
}
