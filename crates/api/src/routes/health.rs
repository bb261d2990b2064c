//! Liveness and schema readiness at `GET /health`.

use axum::extract::State;
use axum::routing::get;
use axum::{Json, Router};
use serde::Serialize;

use crate::state::AppState;

/// Health check response payload.
#[derive(Debug, Serialize)]
pub struct HealthResponse {
    /// `ok` when the database answers and its schema is current, else `degraded`.
    pub status: &'static str,
    pub version: &'static str,
    pub db_healthy: bool,
    /// `None` when the migration table cannot be read.
    pub migrations_applied: Option<i64>,
    pub migrations_expected: Option<i64>,
}

/// GET /health
async fn health_check(State(state): State<AppState>) -> Json<HealthResponse> {
    let db_healthy = minierp_db::health_check(&state.pool).await.is_ok();
    let migrations = match minierp_db::migration_status(&state.pool).await {
        Ok(status) => Some(status),
        Err(err) => {
            tracing::warn!(error = %err, "Could not read migration status");
            None
        }
    };

    let schema_current = migrations.is_some_and(|m| m.is_current());
    let status = if db_healthy && schema_current {
        "ok"
    } else {
        "degraded"
    };

    Json(HealthResponse {
        status,
        version: env!("CARGO_PKG_VERSION"),
        db_healthy,
        migrations_applied: migrations.map(|m| m.applied),
        migrations_expected: migrations.map(|m| m.expected),
    })
}

/// Mounted at the root, outside `/api/v1`.
pub fn router() -> Router<AppState> {
    Router::new().route("/health", get(health_check))
}
