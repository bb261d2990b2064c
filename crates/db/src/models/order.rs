//! Order entity model, denormalized view, and placement outcome.

use minierp_core::error::CoreError;
use minierp_core::order::OrderStatus;
use minierp_core::types::{DbId, Timestamp};
use serde::Serialize;
use sqlx::FromRow;

/// An order row from the `orders` table.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct Order {
    pub id: DbId,
    pub client_id: DbId,
    pub product_id: DbId,
    pub quantity: i32,
    pub status: String,
    pub ordered_at: Timestamp,
    pub updated_at: Timestamp,
}

/// DTO for placing a new order. Quantity and status are already validated.
#[derive(Debug, Clone)]
pub struct CreateOrder {
    pub client_id: DbId,
    pub product_id: DbId,
    pub quantity: i32,
    pub status: OrderStatus,
}

/// An order joined with its client and product.
///
/// `total` is `quantity * price` using the product's current price, so
/// it changes when the product is repriced.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct OrderView {
    pub id: DbId,
    pub client_id: DbId,
    pub client_name: String,
    pub product_id: DbId,
    pub product_name: String,
    pub quantity: i32,
    pub status: String,
    pub ordered_at: Timestamp,
    pub total: f64,
}

/// Outcome of the order placement transaction.
///
/// Domain rejections detected while the product row is locked are returned
/// as `Rejected`; nothing has been written in that case.
#[derive(Debug)]
pub enum PlaceOrderOutcome {
    Placed(Order),
    Rejected(CoreError),
}

impl PlaceOrderOutcome {
    /// Collapse into a `Result`, treating a rejection as the error.
    pub fn into_result(self) -> Result<Order, CoreError> {
        match self {
            Self::Placed(order) => Ok(order),
            Self::Rejected(err) => Err(err),
        }
    }
}
