//! Handler for the reporting snapshot.

use axum::extract::State;
use axum::Json;
use minierp_core::reporting::{build_snapshot, StatsSnapshot};
use minierp_db::repositories::StatsRepo;

use crate::error::AppResult;
use crate::state::AppState;

/// GET /api/v1/stats
///
/// Computed from a single consistent read of the store on every call.
pub async fn get_stats(State(state): State<AppState>) -> AppResult<Json<StatsSnapshot>> {
    let rows = StatsRepo::snapshot_rows(&state.pool).await?;

    let snapshot = build_snapshot(
        rows.counts.clients,
        rows.counts.products,
        rows.counts.out_of_stock,
        rows.aggregates.into_iter().map(Into::into),
    )?;
    Ok(Json(snapshot))
}
