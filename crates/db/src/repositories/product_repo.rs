//! Repository for the `products` table.
//!
//! Every stock mutation here is a single statement, so concurrent
//! adjustments to the same product serialize on its row lock.

use minierp_core::types::DbId;
use sqlx::PgPool;

use crate::models::product::{CreateProduct, Product, StockAdjustment, UpdateProduct};

/// Column list shared across queries to avoid repetition.
const COLUMNS: &str = "id, name, description, price, stock, created_at, updated_at";

/// Provides CRUD and stock operations for products.
pub struct ProductRepo;

impl ProductRepo {
    /// Insert a new product, returning the created row.
    ///
    /// If `stock` is `None` in the input, defaults to 0.
    pub async fn create(pool: &PgPool, input: &CreateProduct) -> Result<Product, sqlx::Error> {
        let query = format!(
            "INSERT INTO products (name, description, price, stock)
             VALUES ($1, $2, $3, COALESCE($4, 0))
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Product>(&query)
            .bind(&input.name)
            .bind(&input.description)
            .bind(input.price)
            .bind(input.stock)
            .fetch_one(pool)
            .await
    }

    /// Find a product by its ID.
    pub async fn find_by_id(pool: &PgPool, id: DbId) -> Result<Option<Product>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM products WHERE id = $1");
        sqlx::query_as::<_, Product>(&query)
            .bind(id)
            .fetch_optional(pool)
            .await
    }

    /// List all products ordered by most recently created first.
    pub async fn list(pool: &PgPool) -> Result<Vec<Product>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM products ORDER BY created_at DESC, id DESC");
        sqlx::query_as::<_, Product>(&query).fetch_all(pool).await
    }

    /// Update a product. Only non-`None` fields in `input` are applied.
    ///
    /// `description` uses `Option<Option<String>>` so it can be cleared.
    /// Returns `None` if no row with the given `id` exists.
    pub async fn update(
        pool: &PgPool,
        id: DbId,
        input: &UpdateProduct,
    ) -> Result<Option<Product>, sqlx::Error> {
        let description_provided = input.description.is_some();
        let description_value = input.description.as_ref().and_then(|v| v.as_deref());

        let query = format!(
            "UPDATE products SET
                name = COALESCE($2, name),
                description = CASE WHEN $3 THEN $4 ELSE description END,
                price = COALESCE($5, price),
                stock = COALESCE($6, stock),
                updated_at = NOW()
             WHERE id = $1
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Product>(&query)
            .bind(id)
            .bind(&input.name)
            .bind(description_provided)
            .bind(description_value)
            .bind(input.price)
            .bind(input.stock)
            .fetch_optional(pool)
            .await
    }

    /// Replace the stock level. Returns `None` if the product does not exist.
    pub async fn set_stock(
        pool: &PgPool,
        id: DbId,
        stock: i32,
    ) -> Result<Option<Product>, sqlx::Error> {
        let query = format!(
            "UPDATE products SET stock = $2, updated_at = NOW()
             WHERE id = $1
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Product>(&query)
            .bind(id)
            .bind(stock)
            .fetch_optional(pool)
            .await
    }

    /// Add `delta` units to the stock level in one statement.
    ///
    /// The old value is derived from the same row version as the new one,
    /// so the pair is accurate even under concurrent additions. Returns
    /// `None` if the product does not exist.
    pub async fn add_stock(
        pool: &PgPool,
        id: DbId,
        delta: i32,
    ) -> Result<Option<StockAdjustment>, sqlx::Error> {
        sqlx::query_as::<_, StockAdjustment>(
            "UPDATE products SET stock = stock + $2, updated_at = NOW()
             WHERE id = $1
             RETURNING id, name, stock - $2 AS old_stock, stock AS new_stock",
        )
        .bind(id)
        .bind(delta)
        .fetch_optional(pool)
        .await
    }
}
