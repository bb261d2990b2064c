//! Handlers for the `/orders` resource.
//!
//! Placement runs as a single transaction in [`OrderRepo::place`]: the
//! product row is locked, stock is checked, the order is inserted and the
//! stock decremented. A rejected placement writes nothing.

use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::Json;
use minierp_core::error::CoreError;
use minierp_core::order::{resolve_initial_status, validate_order_quantity, OrderStatus};
use minierp_core::types::DbId;
use minierp_core::validation::require;
use minierp_db::models::order::{CreateOrder, OrderView};
use minierp_db::repositories::OrderRepo;
use serde::{Deserialize, Serialize};

use crate::error::{AppError, AppResult};
use crate::extract::AppJson;
use crate::response::{CreatedResponse, DataResponse};
use crate::state::AppState;

fn order_not_found(id: DbId) -> AppError {
    AppError::Core(CoreError::NotFound { entity: "Order", id })
}

/// Request body for `POST /orders`.
///
/// `clientId` / `productId` are accepted alongside the snake_case names.
#[derive(Debug, Deserialize)]
pub struct CreateOrderRequest {
    #[serde(alias = "clientId")]
    pub client_id: Option<DbId>,
    #[serde(alias = "productId")]
    pub product_id: Option<DbId>,
    pub quantity: Option<i32>,
    pub status: Option<String>,
}

impl CreateOrderRequest {
    fn validate(self) -> Result<CreateOrder, CoreError> {
        let client_id = require(self.client_id, "client_id")?;
        let product_id = require(self.product_id, "product_id")?;
        let quantity = require(self.quantity, "quantity")?;
        validate_order_quantity(quantity)?;
        let status = resolve_initial_status(self.status.as_deref())?;
        Ok(CreateOrder {
            client_id,
            product_id,
            quantity,
            status,
        })
    }
}

/// Request body for `PUT /orders/{id}/status`.
#[derive(Debug, Deserialize)]
pub struct UpdateStatusRequest {
    pub status: Option<String>,
}

#[derive(Debug, Serialize)]
pub struct UpdateStatusResponse {
    pub success: bool,
    pub message: String,
    pub order_id: DbId,
    pub status: OrderStatus,
}

/// POST /api/v1/orders
pub async fn create(
    State(state): State<AppState>,
    AppJson(input): AppJson<CreateOrderRequest>,
) -> AppResult<(StatusCode, Json<CreatedResponse>)> {
    let input = input.validate()?;

    let order = OrderRepo::place(&state.pool, &input)
        .await?
        .into_result()
        .inspect_err(|err| {
            tracing::warn!(
                client_id = input.client_id,
                product_id = input.product_id,
                quantity = input.quantity,
                error = %err,
                "Order rejected",
            );
        })?;

    tracing::info!(
        order_id = order.id,
        product_id = order.product_id,
        quantity = order.quantity,
        status = %order.status,
        "Order placed",
    );

    Ok((
        StatusCode::CREATED,
        Json(CreatedResponse {
            id: order.id,
            message: "Order created".to_string(),
        }),
    ))
}

/// GET /api/v1/orders
///
/// Newest first, each joined with client and product names.
pub async fn list(State(state): State<AppState>) -> AppResult<Json<DataResponse<Vec<OrderView>>>> {
    let orders = OrderRepo::list_views(&state.pool).await?;
    tracing::debug!(count = orders.len(), "Listed orders");
    Ok(Json(DataResponse { data: orders }))
}

/// GET /api/v1/orders/{id}
pub async fn get_by_id(
    State(state): State<AppState>,
    Path(id): Path<DbId>,
) -> AppResult<Json<DataResponse<OrderView>>> {
    let order = OrderRepo::find_view(&state.pool, id)
        .await?
        .ok_or_else(|| order_not_found(id))?;
    Ok(Json(DataResponse { data: order }))
}

/// PUT /api/v1/orders/{id}/status
///
/// Any valid status may follow any other. Stock is never adjusted here.
pub async fn update_status(
    State(state): State<AppState>,
    Path(id): Path<DbId>,
    AppJson(input): AppJson<UpdateStatusRequest>,
) -> AppResult<Json<UpdateStatusResponse>> {
    let raw = require(input.status, "status")?;
    let status = OrderStatus::from_str_value(&raw)?;

    OrderRepo::update_status(&state.pool, id, status)
        .await?
        .ok_or_else(|| order_not_found(id))?;
    tracing::info!(order_id = id, status = %status, "Order status updated");

    Ok(Json(UpdateStatusResponse {
        success: true,
        message: format!("Order status updated to {status}"),
        order_id: id,
        status,
    }))
}
