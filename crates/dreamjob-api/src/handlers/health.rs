//! Health check handler.

use axum::Json;
use axum::extract::State;
use tracing::warn;

use crate::dto::response::{ComponentHealth, HealthResponse};
use crate::state::AppState;

/// GET /api/health
pub async fn health(State(state): State<AppState>) -> Json<HealthResponse> {
    let storage_ok = state.file_service.health_check().await.unwrap_or_else(|e| {
        warn!(error = %e, "Blob store health check failed");
        false
    });
    let database_ok = state.repositories.health_check().await.unwrap_or_else(|e| {
        warn!(error = %e, "Metadata store health check failed");
        false
    });

    let status = if storage_ok && database_ok { "ok" } else { "degraded" };

    Json(HealthResponse {
        status: status.to_string(),
        version: env!("CARGO_PKG_VERSION").to_string(),
        storage: ComponentHealth {
            provider: state.file_service.storage_provider().to_string(),
            healthy: storage_ok,
        },
        database: ComponentHealth {
            provider: state.repositories.provider().to_string(),
            healthy: database_ok,
        },
    })
}
