//! Repository for the `orders` table.
//!
//! Order placement is the only multi-statement write in the store: the
//! product row is locked, checked, and decremented in the same
//! transaction that inserts the order.

use minierp_core::error::CoreError;
use minierp_core::inventory::check_stock_available;
use minierp_core::order::OrderStatus;
use minierp_core::types::DbId;
use sqlx::PgPool;

use crate::models::order::{CreateOrder, Order, OrderView, PlaceOrderOutcome};

/// Column list shared across queries to avoid repetition.
const COLUMNS: &str = "id, client_id, product_id, quantity, status, ordered_at, updated_at";

/// Denormalized select shared by the single and list view queries.
const VIEW_SELECT: &str = "SELECT o.id, o.client_id, c.name AS client_name, \
            o.product_id, p.name AS product_name, o.quantity, o.status, o.ordered_at, \
            (o.quantity * p.price)::DOUBLE PRECISION AS total \
     FROM orders o \
     JOIN clients c ON c.id = o.client_id \
     JOIN products p ON p.id = o.product_id";

/// Provides placement, status, and read operations for orders.
pub struct OrderRepo;

impl OrderRepo {
    /// Place an order atomically.
    ///
    /// 1. Lock the product row (`FOR UPDATE`); concurrent placements on the
    ///    same product wait here.
    /// 2. Verify the client exists.
    /// 3. Reject if `quantity` exceeds the locked stock.
    /// 4. Insert the order and decrement stock, then commit.
    ///
    /// A rejection drops the transaction without writing anything. A
    /// database error at any step rolls back both the insert and the
    /// decrement.
    pub async fn place(pool: &PgPool, input: &CreateOrder) -> Result<PlaceOrderOutcome, sqlx::Error> {
        let mut tx = pool.begin().await?;

        let product: Option<(String, i32)> =
            sqlx::query_as("SELECT name, stock FROM products WHERE id = $1 FOR UPDATE")
                .bind(input.product_id)
                .fetch_optional(&mut *tx)
                .await?;

        let Some((product_name, stock)) = product else {
            return Ok(PlaceOrderOutcome::Rejected(CoreError::Validation(format!(
                "Product with id {} not found",
                input.product_id
            ))));
        };

        let client_exists: bool =
            sqlx::query_scalar("SELECT EXISTS (SELECT 1 FROM clients WHERE id = $1)")
                .bind(input.client_id)
                .fetch_one(&mut *tx)
                .await?;

        if !client_exists {
            return Ok(PlaceOrderOutcome::Rejected(CoreError::Validation(format!(
                "Client with id {} not found",
                input.client_id
            ))));
        }

        if let Err(err) = check_stock_available(&product_name, stock, input.quantity) {
            return Ok(PlaceOrderOutcome::Rejected(err));
        }

        let query = format!(
            "INSERT INTO orders (client_id, product_id, quantity, status)
             VALUES ($1, $2, $3, $4)
             RETURNING {COLUMNS}"
        );
        let order = sqlx::query_as::<_, Order>(&query)
            .bind(input.client_id)
            .bind(input.product_id)
            .bind(input.quantity)
            .bind(input.status.as_str())
            .fetch_one(&mut *tx)
            .await?;

        sqlx::query("UPDATE products SET stock = stock - $2, updated_at = NOW() WHERE id = $1")
            .bind(input.product_id)
            .bind(input.quantity)
            .execute(&mut *tx)
            .await?;

        tx.commit().await?;

        tracing::debug!(
            order_id = order.id,
            product_id = input.product_id,
            remaining_stock = stock - input.quantity,
            "Order placed and stock decremented",
        );

        Ok(PlaceOrderOutcome::Placed(order))
    }

    /// Find an order row by its ID.
    pub async fn find_by_id(pool: &PgPool, id: DbId) -> Result<Option<Order>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM orders WHERE id = $1");
        sqlx::query_as::<_, Order>(&query)
            .bind(id)
            .fetch_optional(pool)
            .await
    }

    /// Find the denormalized view of a single order.
    pub async fn find_view(pool: &PgPool, id: DbId) -> Result<Option<OrderView>, sqlx::Error> {
        let query = format!("{VIEW_SELECT} WHERE o.id = $1");
        sqlx::query_as::<_, OrderView>(&query)
            .bind(id)
            .fetch_optional(pool)
            .await
    }

    /// List the denormalized view of every order, most recent first.
    pub async fn list_views(pool: &PgPool) -> Result<Vec<OrderView>, sqlx::Error> {
        let query = format!("{VIEW_SELECT} ORDER BY o.ordered_at DESC, o.id DESC");
        sqlx::query_as::<_, OrderView>(&query).fetch_all(pool).await
    }

    /// Overwrite an order's status. Stock is not touched, even on cancel.
    ///
    /// Returns `None` if no order with the given `id` exists.
    pub async fn update_status(
        pool: &PgPool,
        id: DbId,
        status: OrderStatus,
    ) -> Result<Option<Order>, sqlx::Error> {
        let query = format!(
            "UPDATE orders SET status = $2, updated_at = NOW()
             WHERE id = $1
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Order>(&query)
            .bind(id)
            .bind(status.as_str())
            .fetch_optional(pool)
            .await
    }
}
