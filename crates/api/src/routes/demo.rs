//! Route definitions for demo data.

use axum::routing::post;
use axum::Router;

use crate::handlers::demo;
use crate::state::AppState;

/// Routes mounted at `/demo`.
///
/// ```text
/// POST   /seed      -> seed
/// ```
pub fn router() -> Router<AppState> {
    Router::new().route("/seed", post(demo::seed))
}
