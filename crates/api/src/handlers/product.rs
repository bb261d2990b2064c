//! Handlers for the `/products` resource and its stock operations.

use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::Json;
use minierp_core::error::CoreError;
use minierp_core::inventory::{
    validate_price, validate_product_changes, validate_stock, validate_stock_delta,
};
use minierp_core::types::DbId;
use minierp_core::validation::{normalize_text, require, validate_name};
use minierp_db::models::product::{CreateProduct, Product, UpdateProduct};
use minierp_db::repositories::ProductRepo;
use serde::{Deserialize, Serialize};

use crate::error::{AppError, AppResult};
use crate::extract::AppJson;
use crate::response::{CreatedResponse, DataResponse};
use crate::state::AppState;

fn product_not_found(id: DbId) -> AppError {
    AppError::Core(CoreError::NotFound {
        entity: "Product",
        id,
    })
}

// ---------------------------------------------------------------------------
// Request / response types
// ---------------------------------------------------------------------------

/// Request body for `POST /products`. `name` and `price` are required.
#[derive(Debug, Deserialize)]
pub struct CreateProductRequest {
    pub name: Option<String>,
    pub description: Option<String>,
    pub price: Option<f64>,
    pub stock: Option<i32>,
}

/// Request body for `PUT /products/{id}`. Every field is optional.
///
/// `description` distinguishes an absent key (keep) from an explicit
/// `null` or blank string (clear).
#[derive(Debug, Deserialize)]
pub struct UpdateProductRequest {
    pub name: Option<String>,
    #[serde(default, deserialize_with = "present")]
    pub description: Option<Option<String>>,
    pub price: Option<f64>,
    pub stock: Option<i32>,
}

/// Request body for `PUT /products/{id}/stock`.
#[derive(Debug, Deserialize)]
pub struct SetStockRequest {
    pub stock: Option<i32>,
}

/// Request body for `PUT /products/{id}/add-stock`.
#[derive(Debug, Deserialize)]
pub struct AddStockRequest {
    pub quantity: Option<i32>,
}

#[derive(Debug, Serialize)]
pub struct UpdateProductResponse {
    pub success: bool,
    pub message: String,
    pub product_id: DbId,
    pub product: Product,
}

#[derive(Debug, Serialize)]
pub struct SetStockResponse {
    pub success: bool,
    pub message: String,
    pub product_id: DbId,
    pub stock: i32,
}

/// Stock movement reported by `PUT /products/{id}/add-stock`.
#[derive(Debug, Serialize)]
pub struct StockMovement {
    pub id: DbId,
    pub name: String,
    pub old_stock: i32,
    pub new_stock: i32,
    pub quantity_added: i32,
}

#[derive(Debug, Serialize)]
pub struct AddStockResponse {
    pub success: bool,
    pub message: String,
    pub product: StockMovement,
}

/// Wrap any value that is present in the body, `null` included, in `Some`.
fn present<'de, D, T>(deserializer: D) -> Result<Option<Option<T>>, D::Error>
where
    D: serde::Deserializer<'de>,
    T: Deserialize<'de>,
{
    Option::<T>::deserialize(deserializer).map(Some)
}

impl CreateProductRequest {
    fn validate(self) -> Result<CreateProduct, CoreError> {
        let name = validate_name(&require(self.name, "name")?, "name")?;
        let price = require(self.price, "price")?;
        validate_price(price)?;
        if let Some(stock) = self.stock {
            validate_stock(stock)?;
        }
        Ok(CreateProduct {
            name,
            description: normalize_text(self.description, "description")?,
            price,
            stock: self.stock,
        })
    }
}

impl UpdateProductRequest {
    /// Validate every supplied field before anything is written.
    fn validate(self) -> Result<UpdateProduct, CoreError> {
        validate_product_changes(self.price, self.stock)?;
        let name = self
            .name
            .map(|name| validate_name(&name, "name"))
            .transpose()?;
        Ok(UpdateProduct {
            name,
            description: self
                .description
                .map(|text| normalize_text(text, "description"))
                .transpose()?,
            price: self.price,
            stock: self.stock,
        })
    }
}

// ---------------------------------------------------------------------------
// CRUD
// ---------------------------------------------------------------------------

/// POST /api/v1/products
pub async fn create(
    State(state): State<AppState>,
    AppJson(input): AppJson<CreateProductRequest>,
) -> AppResult<(StatusCode, Json<CreatedResponse>)> {
    let input = input.validate()?;
    let product = ProductRepo::create(&state.pool, &input).await?;
    tracing::info!(product_id = product.id, stock = product.stock, "Product created");

    Ok((
        StatusCode::CREATED,
        Json(CreatedResponse {
            id: product.id,
            message: "Product created".to_string(),
        }),
    ))
}

/// GET /api/v1/products
pub async fn list(State(state): State<AppState>) -> AppResult<Json<DataResponse<Vec<Product>>>> {
    let products = ProductRepo::list(&state.pool).await?;
    tracing::debug!(count = products.len(), "Listed products");
    Ok(Json(DataResponse { data: products }))
}

/// GET /api/v1/products/{id}
pub async fn get_by_id(
    State(state): State<AppState>,
    Path(id): Path<DbId>,
) -> AppResult<Json<DataResponse<Product>>> {
    let product = ProductRepo::find_by_id(&state.pool, id)
        .await?
        .ok_or_else(|| product_not_found(id))?;
    Ok(Json(DataResponse { data: product }))
}

/// PUT /api/v1/products/{id}
///
/// Partial update: absent fields keep their stored value. A negative
/// price or stock rejects the whole update.
pub async fn update(
    State(state): State<AppState>,
    Path(id): Path<DbId>,
    AppJson(input): AppJson<UpdateProductRequest>,
) -> AppResult<Json<UpdateProductResponse>> {
    let input = input.validate()?;
    let product = ProductRepo::update(&state.pool, id, &input)
        .await?
        .ok_or_else(|| product_not_found(id))?;
    tracing::info!(product_id = id, "Product updated");

    Ok(Json(UpdateProductResponse {
        success: true,
        message: "Product updated".to_string(),
        product_id: id,
        product,
    }))
}

// ---------------------------------------------------------------------------
// Stock operations
// ---------------------------------------------------------------------------

/// PUT /api/v1/products/{id}/stock
///
/// Replaces the stock level with an absolute, non-negative value.
pub async fn set_stock(
    State(state): State<AppState>,
    Path(id): Path<DbId>,
    AppJson(input): AppJson<SetStockRequest>,
) -> AppResult<Json<SetStockResponse>> {
    let stock = require(input.stock, "stock")?;
    validate_stock(stock)?;

    let product = ProductRepo::set_stock(&state.pool, id, stock)
        .await?
        .ok_or_else(|| product_not_found(id))?;
    tracing::info!(product_id = id, stock = product.stock, "Stock set");

    Ok(Json(SetStockResponse {
        success: true,
        message: format!("Stock set to {}", product.stock),
        product_id: id,
        stock: product.stock,
    }))
}

/// PUT /api/v1/products/{id}/add-stock
///
/// Adds a positive quantity to the current stock level.
pub async fn add_stock(
    State(state): State<AppState>,
    Path(id): Path<DbId>,
    AppJson(input): AppJson<AddStockRequest>,
) -> AppResult<Json<AddStockResponse>> {
    let quantity = require(input.quantity, "quantity")?;
    validate_stock_delta(quantity)?;

    let adjustment = ProductRepo::add_stock(&state.pool, id, quantity)
        .await?
        .ok_or_else(|| product_not_found(id))?;
    tracing::info!(
        product_id = id,
        old_stock = adjustment.old_stock,
        new_stock = adjustment.new_stock,
        quantity,
        "Stock added",
    );

    Ok(Json(AddStockResponse {
        success: true,
        message: format!("Stock increased by {quantity} units"),
        product: StockMovement {
            id: adjustment.id,
            name: adjustment.name,
            old_stock: adjustment.old_stock,
            new_stock: adjustment.new_stock,
            quantity_added: quantity,
        },
    }))
}
