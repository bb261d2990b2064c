//! Route definitions for the `/products` resource.

use axum::routing::{get, put};
use axum::Router;

use crate::handlers::product;
use crate::state::AppState;

/// Routes mounted at `/products`.
///
/// ```text
/// GET    /                  -> list
/// POST   /                  -> create
/// GET    /{id}              -> get_by_id
/// PUT    /{id}              -> update
/// PUT    /{id}/stock        -> set_stock
/// PUT    /{id}/add-stock    -> add_stock
/// ```
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/", get(product::list).post(product::create))
        .route("/{id}", get(product::get_by_id).put(product::update))
        .route("/{id}/stock", put(product::set_stock))
        .route("/{id}/add-stock", put(product::add_stock))
}
