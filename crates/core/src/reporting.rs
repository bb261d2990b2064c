//! Dashboard snapshot aggregation.
//!
//! The database returns one row per order status (count and revenue at
//! current prices). This module folds those rows into the snapshot shape,
//! filling in zero for statuses that have no orders and deriving the
//! overall order count and the non-cancelled revenue total.

use serde::Serialize;

use crate::error::CoreError;
use crate::order::OrderStatus;

/// Per-status order counts. Every status is always present.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct OrderStatusCounts {
    pub pending: i64,
    pub confirmed: i64,
    pub delivered: i64,
    pub cancelled: i64,
}

impl OrderStatusCounts {
    /// Count for a single status.
    pub fn get(&self, status: OrderStatus) -> i64 {
        match status {
            OrderStatus::Pending => self.pending,
            OrderStatus::Confirmed => self.confirmed,
            OrderStatus::Delivered => self.delivered,
            OrderStatus::Cancelled => self.cancelled,
        }
    }

    fn slot(&mut self, status: OrderStatus) -> &mut i64 {
        match status {
            OrderStatus::Pending => &mut self.pending,
            OrderStatus::Confirmed => &mut self.confirmed,
            OrderStatus::Delivered => &mut self.delivered,
            OrderStatus::Cancelled => &mut self.cancelled,
        }
    }

    /// Sum over all statuses.
    pub fn total(&self) -> i64 {
        OrderStatus::ALL.iter().map(|s| self.get(*s)).sum()
    }
}

/// One aggregated row per order status, as read from the store.
#[derive(Debug, Clone, PartialEq)]
pub struct StatusAggregate {
    pub status: String,
    pub order_count: i64,
    pub revenue: f64,
}

/// Point-in-time reporting snapshot. Computed fresh on every request.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct StatsSnapshot {
    pub clients: i64,
    pub products: i64,
    pub orders: i64,
    pub orders_by_status: OrderStatusCounts,
    pub revenue_delivered: f64,
    pub revenue_confirmed: f64,
    pub revenue_pending: f64,
    /// Revenue over every order that is not cancelled.
    pub revenue_total: f64,
    /// Products whose stock is exactly zero.
    pub out_of_stock: i64,
}

/// Fold per-status aggregates and entity counts into a [`StatsSnapshot`].
///
/// An unknown status string means the store holds data this build cannot
/// interpret, which is reported as [`CoreError::Internal`].
pub fn build_snapshot<I>(
    clients: i64,
    products: i64,
    out_of_stock: i64,
    aggregates: I,
) -> Result<StatsSnapshot, CoreError>
where
    I: IntoIterator<Item = StatusAggregate>,
{
    let mut counts = OrderStatusCounts::default();
    let mut revenue_delivered = 0.0;
    let mut revenue_confirmed = 0.0;
    let mut revenue_pending = 0.0;
    let mut revenue_total = 0.0;

    for row in aggregates {
        let status = OrderStatus::from_str_value(&row.status).map_err(|_| {
            CoreError::Internal(format!("unknown order status '{}' in store", row.status))
        })?;

        *counts.slot(status) += row.order_count;

        match status {
            OrderStatus::Delivered => revenue_delivered += row.revenue,
            OrderStatus::Confirmed => revenue_confirmed += row.revenue,
            OrderStatus::Pending => revenue_pending += row.revenue,
            OrderStatus::Cancelled => {}
        }
        if status.counts_as_revenue() {
            revenue_total += row.revenue;
        }
    }

    Ok(StatsSnapshot {
        clients,
        products,
        orders: counts.total(),
        orders_by_status: counts,
        revenue_delivered,
        revenue_confirmed,
        revenue_pending,
        revenue_total,
        out_of_stock,
    })
}
