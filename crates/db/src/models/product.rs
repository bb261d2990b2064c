//! Product entity model and DTOs.

use minierp_core::types::{DbId, Timestamp};
use serde::Serialize;
use sqlx::FromRow;

/// A product row from the `products` table.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct Product {
    pub id: DbId,
    pub name: String,
    pub description: Option<String>,
    pub price: f64,
    pub stock: i32,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
}

/// DTO for creating a new product.
#[derive(Debug, Clone)]
pub struct CreateProduct {
    pub name: String,
    pub description: Option<String>,
    pub price: f64,
    /// Defaults to 0 if omitted.
    pub stock: Option<i32>,
}

/// DTO for a partial product update. Absent fields keep their value.
#[derive(Debug, Clone, Default)]
pub struct UpdateProduct {
    pub name: Option<String>,
    /// `Some(None)` clears the description.
    pub description: Option<Option<String>>,
    pub price: Option<f64>,
    pub stock: Option<i32>,
}

/// Result of an incremental stock addition, read from the updated row.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct StockAdjustment {
    pub id: DbId,
    pub name: String,
    pub old_stock: i32,
    pub new_stock: i32,
}
