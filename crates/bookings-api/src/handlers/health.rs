//! Health check handler.

use axum::Json;
use axum::extract::State;
use axum::http::StatusCode;
use tracing::warn;

use bookings_core::traits::cache::CacheProvider;

use crate::dto::response::{ApiResponse, HealthResponse};
use crate::state::AppState;

/// GET /api/health
pub async fn health(State(state): State<AppState>) -> (StatusCode, Json<ApiResponse<HealthResponse>>) {
    let database = state.store.health_check().await.unwrap_or_else(|e| {
        warn!(error = %e, "Store health check failed");
        false
    });
    let cache = state.cache.health_check().await.unwrap_or_else(|e| {
        warn!(error = %e, "Cache health check failed");
        false
    });

    let healthy = database && cache;
    let status = if healthy {
        StatusCode::OK
    } else {
        StatusCode::SERVICE_UNAVAILABLE
    };

    (
        status,
        Json(ApiResponse::ok(HealthResponse {
            status: if healthy { "ok" } else { "degraded" }.to_string(),
            version: env!("CARGO_PKG_VERSION").to_string(),
            backend: state.config.database.backend.to_string(),
            database,
            cache,
        })),
    )
}
