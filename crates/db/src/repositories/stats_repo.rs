//! Read-only aggregates for the reporting snapshot.

use sqlx::PgPool;

use crate::models::stats::{EntityCounts, SnapshotRows, StatusAggregateRow};

/// Provides the raw aggregates behind `GET /stats`. Nothing is cached.
pub struct StatsRepo;

impl StatsRepo {
    /// Read entity counts and per-status order aggregates from one
    /// `REPEATABLE READ` snapshot, so both sides see the same data.
    ///
    /// Revenue is priced at the current product price. Statuses without
    /// orders produce no aggregate row.
    pub async fn snapshot_rows(pool: &PgPool) -> Result<SnapshotRows, sqlx::Error> {
        let mut tx = pool.begin().await?;

        sqlx::query("SET TRANSACTION ISOLATION LEVEL REPEATABLE READ, READ ONLY")
            .execute(&mut *tx)
            .await?;

        let counts = sqlx::query_as::<_, EntityCounts>(
            "SELECT \
                (SELECT COUNT(*) FROM clients) AS clients, \
                (SELECT COUNT(*) FROM products) AS products, \
                (SELECT COUNT(*) FROM products WHERE stock = 0) AS out_of_stock",
        )
        .fetch_one(&mut *tx)
        .await?;

        let aggregates = sqlx::query_as::<_, StatusAggregateRow>(
            "SELECT o.status, \
                    COUNT(*) AS order_count, \
                    COALESCE(SUM(o.quantity * p.price), 0)::DOUBLE PRECISION AS revenue \
             FROM orders o \
             JOIN products p ON p.id = o.product_id \
             GROUP BY o.status",
        )
        .fetch_all(&mut *tx)
        .await?;

        tx.commit().await?;

        Ok(SnapshotRows { counts, aggregates })
    }
}
