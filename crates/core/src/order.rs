//! Order status values and order request validation.
//!
//! Statuses are stored as TEXT in the `orders` table; the constants below
//! are the only accepted values and match the table's CHECK constraint.

use serde::{Deserialize, Serialize};

use crate::error::CoreError;

/* --------------------------------------------------------------------------
Constants
-------------------------------------------------------------------------- */

/// Order received, not yet confirmed.
pub const ORDER_STATUS_PENDING: &str = "pending";

/// Order confirmed by the business.
pub const ORDER_STATUS_CONFIRMED: &str = "confirmed";

/// Order handed over to the client.
pub const ORDER_STATUS_DELIVERED: &str = "delivered";

/// Order abandoned. Does not return stock.
pub const ORDER_STATUS_CANCELLED: &str = "cancelled";

/// All valid order status strings, in lifecycle order.
pub const VALID_ORDER_STATUSES: &[&str] = &[
    ORDER_STATUS_PENDING,
    ORDER_STATUS_CONFIRMED,
    ORDER_STATUS_DELIVERED,
    ORDER_STATUS_CANCELLED,
];

/* --------------------------------------------------------------------------
Status enum
-------------------------------------------------------------------------- */

/// Lifecycle status of an order.
#[derive(
    Debug, Clone, Copy, Default, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize,
)]
#[serde(rename_all = "snake_case")]
pub enum OrderStatus {
    #[default]
    Pending,
    Confirmed,
    Delivered,
    Cancelled,
}

impl OrderStatus {
    /// Every status, in lifecycle order.
    pub const ALL: [OrderStatus; 4] = [
        Self::Pending,
        Self::Confirmed,
        Self::Delivered,
        Self::Cancelled,
    ];

    /// Convert from a database / request string value.
    pub fn from_str_value(s: &str) -> Result<Self, CoreError> {
        match s {
            ORDER_STATUS_PENDING => Ok(Self::Pending),
            ORDER_STATUS_CONFIRMED => Ok(Self::Confirmed),
            ORDER_STATUS_DELIVERED => Ok(Self::Delivered),
            ORDER_STATUS_CANCELLED => Ok(Self::Cancelled),
            _ => Err(CoreError::Validation(format!(
                "Invalid order status '{s}'. Must be one of: {}",
                VALID_ORDER_STATUSES.join(", ")
            ))),
        }
    }

    /// Convert to the database string value.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Pending => ORDER_STATUS_PENDING,
            Self::Confirmed => ORDER_STATUS_CONFIRMED,
            Self::Delivered => ORDER_STATUS_DELIVERED,
            Self::Cancelled => ORDER_STATUS_CANCELLED,
        }
    }

    /// Whether revenue from orders in this status counts toward the total.
    pub fn counts_as_revenue(&self) -> bool {
        !matches!(self, Self::Cancelled)
    }
}

impl std::fmt::Display for OrderStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/* --------------------------------------------------------------------------
Validation functions
-------------------------------------------------------------------------- */

/// Resolve the optional status supplied with a new order.
///
/// Absent means [`OrderStatus::Pending`]; anything else must be valid.
pub fn resolve_initial_status(status: Option<&str>) -> Result<OrderStatus, CoreError> {
    match status {
        None => Ok(OrderStatus::default()),
        Some(s) => OrderStatus::from_str_value(s),
    }
}

/// An order quantity must be a strictly positive integer.
pub fn validate_order_quantity(quantity: i32) -> Result<(), CoreError> {
    if quantity <= 0 {
        return Err(CoreError::Validation(format!(
            "quantity must be a positive integer, got {quantity}"
        )));
    }
    Ok(())
}
