pub mod clients;
pub mod demo;
pub mod health;
pub mod orders;
pub mod products;

use axum::extract::OriginalUri;
use axum::http::StatusCode;
use axum::routing::get;
use axum::{Json, Router};
use serde::Serialize;

use crate::handlers;
use crate::state::AppState;

/// Every route served by the application, as listed in 404 responses.
pub const AVAILABLE_ROUTES: &[&str] = &[
    "GET  /health",
    "GET  /api/v1/stats",
    "POST /api/v1/demo/seed",
    "GET  /api/v1/clients",
    "POST /api/v1/clients",
    "GET  /api/v1/clients/{id}",
    "GET  /api/v1/products",
    "POST /api/v1/products",
    "GET  /api/v1/products/{id}",
    "PUT  /api/v1/products/{id}",
    "PUT  /api/v1/products/{id}/stock",
    "PUT  /api/v1/products/{id}/add-stock",
    "GET  /api/v1/orders",
    "POST /api/v1/orders",
    "GET  /api/v1/orders/{id}",
    "PUT  /api/v1/orders/{id}/status",
];

/// Build the `/api/v1` route tree.
///
/// Route hierarchy:
///
/// ```text
/// /stats                                           reporting snapshot (GET)
/// /demo/seed                                       insert demo data (POST)
///
/// /clients                                         list, create
/// /clients/{id}                                    get
///
/// /products                                        list, create
/// /products/{id}                                   get, partial update
/// /products/{id}/stock                             set absolute stock (PUT)
/// /products/{id}/add-stock                         add to stock (PUT)
///
/// /orders                                          list, place
/// /orders/{id}                                     get (denormalized)
/// /orders/{id}/status                              update status (PUT)
/// ```
pub fn api_routes() -> Router<AppState> {
    Router::new()
        .route("/stats", get(handlers::stats::get_stats))
        .nest("/demo", demo::router())
        .nest("/clients", clients::router())
        .nest("/products", products::router())
        .nest("/orders", orders::router())
}

/// Body of the 404 returned for unmatched routes.
#[derive(Debug, Serialize)]
pub struct RouteNotFound {
    pub error: &'static str,
    pub code: &'static str,
    pub path: String,
    pub available_routes: &'static [&'static str],
}

/// Fallback handler: 404 with the list of available routes.
pub async fn not_found(OriginalUri(uri): OriginalUri) -> (StatusCode, Json<RouteNotFound>) {
    tracing::debug!(path = %uri.path(), "Route not found");
    (
        StatusCode::NOT_FOUND,
        Json(RouteNotFound {
            error: "Route not found",
            code: "NOT_FOUND",
            path: uri.path().to_string(),
            available_routes: AVAILABLE_ROUTES,
        }),
    )
}
