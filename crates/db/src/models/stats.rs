//! Raw aggregate rows feeding the reporting snapshot.

use minierp_core::reporting::StatusAggregate;
use sqlx::FromRow;

/// Entity-level counts read in a single round trip.
#[derive(Debug, Clone, Copy, FromRow)]
pub struct EntityCounts {
    pub clients: i64,
    pub products: i64,
    pub out_of_stock: i64,
}

/// One row per order status: order count and revenue at current prices.
#[derive(Debug, Clone, FromRow)]
pub struct StatusAggregateRow {
    pub status: String,
    pub order_count: i64,
    pub revenue: f64,
}

/// Everything the reporting snapshot needs, read at one point in time.
#[derive(Debug, Clone)]
pub struct SnapshotRows {
    pub counts: EntityCounts,
    pub aggregates: Vec<StatusAggregateRow>,
}

impl From<StatusAggregateRow> for StatusAggregate {
    fn from(row: StatusAggregateRow) -> Self {
        StatusAggregate {
            status: row.status,
            order_count: row.order_count,
            revenue: row.revenue,
        }
    }
}
