//! Handler for loading demo data into an empty store.

use axum::extract::State;
use axum::Json;
use minierp_db::seed::{seed_demo_data, SeedOutcome};
use serde::Serialize;

use crate::error::AppResult;
use crate::state::AppState;

#[derive(Debug, Serialize)]
pub struct SeedResponse {
    pub seeded: bool,
    pub message: String,
}

/// POST /api/v1/demo/seed
///
/// Idempotent: does nothing once any client exists.
pub async fn seed(State(state): State<AppState>) -> AppResult<Json<SeedResponse>> {
    let outcome = seed_demo_data(&state.pool).await.inspect_err(|err| {
        tracing::error!(error = %err, "Demo seeding failed");
    })?;

    let response = match outcome {
        SeedOutcome::Seeded { clients, products } => SeedResponse {
            seeded: true,
            message: format!("Inserted {clients} clients and {products} products"),
        },
        SeedOutcome::AlreadyPresent => SeedResponse {
            seeded: false,
            message: "Data already present, nothing inserted".to_string(),
        },
    };
    Ok(Json(response))
}
