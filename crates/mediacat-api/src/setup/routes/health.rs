//! Health check handler and response types.

use crate::state::AppState;
use axum::{extract::State, http::StatusCode, response::IntoResponse, Json};
use std::fmt::Display;
use std::future::Future;
use std::sync::Arc;
use std::time::{Duration, Instant};

/// Outcome of one dependency check.
#[derive(serde::Serialize)]
pub(super) struct CheckStatus {
    pub ok: bool,
    pub latency_ms: u64,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub detail: Option<String>,
}

/// Run an async check with a timeout, measuring how long it took.
async fn run_check<F, E>(timeout: Duration, f: F) -> CheckStatus
where
    F: Future<Output = Result<(), E>>,
    E: Display,
{
    let start = Instant::now();
    match tokio::time::timeout(timeout, f).await {
        Ok(Ok(())) => CheckStatus {
            ok: true,
            latency_ms: start.elapsed().as_millis() as u64,
            detail: None,
        },
        Ok(Err(e)) => CheckStatus {
            ok: false,
            latency_ms: start.elapsed().as_millis() as u64,
            detail: Some(e.to_string()),
        },
        Err(_) => CheckStatus {
            ok: false,
            latency_ms: timeout.as_millis() as u64,
            detail: Some("timeout".to_string()),
        },
    }
}

#[derive(serde::Serialize)]
pub(super) struct HealthChecks {
    pub storage: CheckStatus,
    pub catalog: CheckStatus,
}

#[derive(serde::Serialize)]
pub(super) struct HealthResponse {
    pub status: String,
    pub uptime_seconds: u64,
    pub timestamp: chrono::DateTime<chrono::Utc>,
    pub checks: HealthChecks,
}

/// Full health check (storage reachability, catalog readability).
pub async fn health_check(State(state): State<Arc<AppState>>) -> impl IntoResponse {
    const TIMEOUT: Duration = Duration::from_secs(5);

    let storage = state.storage.clone();
    let storage_check = run_check(TIMEOUT, async move {
        // Probing a key that never exists exercises the backend round trip
        // without touching stored media.
        storage
            .exists("health-check-non-existent-key")
            .await
            .map(drop)
    })
    .await;

    let catalog = state.catalog.clone();
    let catalog_check = run_check(TIMEOUT, async move { catalog.probe().await }).await;

    let overall_healthy = storage_check.ok && catalog_check.ok;

    let response = HealthResponse {
        status: if overall_healthy { "ok" } else { "degraded" }.to_string(),
        uptime_seconds: state.started_at.elapsed().as_secs(),
        timestamp: chrono::Utc::now(),
        checks: HealthChecks {
            storage: storage_check,
            catalog: catalog_check,
        },
    };

    let status_code = if overall_healthy {
        StatusCode::OK
    } else {
        StatusCode::SERVICE_UNAVAILABLE
    };

    (status_code, Json(response))
}
