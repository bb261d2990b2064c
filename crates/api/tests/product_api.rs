//! HTTP-level integration tests for the `/products` endpoints, including
//! the set-stock and add-stock operations.

mod common;

use axum::http::StatusCode;
use common::{body_json, get, post_json, put_json};
use sqlx::PgPool;

// ---------------------------------------------------------------------------
// Create / read
// ---------------------------------------------------------------------------

#[sqlx::test(migrations = "../../db/migrations")]
async fn create_product_returns_201(pool: PgPool) {
    let app = common::build_test_app(pool);
    let response = post_json(
        app,
        "/api/v1/products",
        serde_json::json!({"name": "Pro Laptop", "price": 1299.99, "stock": 10}),
    )
    .await;

    assert_eq!(response.status(), StatusCode::CREATED);
    let json = body_json(response).await;
    assert!(json["id"].is_number());
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn create_product_defaults_stock_to_zero(pool: PgPool) {
    let response = post_json(
        common::build_test_app(pool.clone()),
        "/api/v1/products",
        serde_json::json!({"name": "Cable", "price": 4.5}),
    )
    .await;
    let id = body_json(response).await["id"].as_i64().unwrap();

    let json = body_json(get(common::build_test_app(pool), &format!("/api/v1/products/{id}")).await).await;
    assert_eq!(json["data"]["stock"], 0);
    assert_eq!(json["data"]["price"], 4.5);
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn create_product_rejects_missing_price(pool: PgPool) {
    let app = common::build_test_app(pool);
    let response = post_json(app, "/api/v1/products", serde_json::json!({"name": "Cable"})).await;

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    let json = body_json(response).await;
    assert!(json["error"].as_str().unwrap().contains("price"));
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn create_product_rejects_negative_values(pool: PgPool) {
    let response = post_json(
        common::build_test_app(pool.clone()),
        "/api/v1/products",
        serde_json::json!({"name": "Cable", "price": -1.0}),
    )
    .await;
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);

    let response = post_json(
        common::build_test_app(pool.clone()),
        "/api/v1/products",
        serde_json::json!({"name": "Cable", "price": 1.0, "stock": -3}),
    )
    .await;
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);

    let json = body_json(get(common::build_test_app(pool), "/api/v1/products").await).await;
    assert_eq!(json["data"], serde_json::json!([]));
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn get_nonexistent_product_returns_404(pool: PgPool) {
    let app = common::build_test_app(pool);
    let response = get(app, "/api/v1/products/999999").await;
    assert_eq!(response.status(), StatusCode::NOT_FOUND);
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn list_products_newest_first(pool: PgPool) {
    let first = common::create_product(&pool, "Mouse", 45.5, 25).await;
    let second = common::create_product(&pool, "Keyboard", 89.99, 15).await;

    let json = body_json(get(common::build_test_app(pool), "/api/v1/products").await).await;
    let data = json["data"].as_array().unwrap();
    assert_eq!(data.len(), 2);
    assert_eq!(data[0]["id"], second);
    assert_eq!(data[1]["id"], first);
}

// ---------------------------------------------------------------------------
// Partial update
// ---------------------------------------------------------------------------

#[sqlx::test(migrations = "../../db/migrations")]
async fn update_product_changes_only_supplied_fields(pool: PgPool) {
    let id = common::create_product(&pool, "Monitor", 189.99, 8).await;

    let response = put_json(
        common::build_test_app(pool),
        &format!("/api/v1/products/{id}"),
        serde_json::json!({"price": 179.99}),
    )
    .await;
    assert_eq!(response.status(), StatusCode::OK);

    let json = body_json(response).await;
    assert_eq!(json["success"], true);
    assert_eq!(json["product_id"], id);
    assert_eq!(json["product"]["name"], "Monitor");
    assert_eq!(json["product"]["price"], 179.99);
    assert_eq!(json["product"]["stock"], 8);
}

async fn create_described_product(pool: &PgPool) -> i64 {
    let response = post_json(
        common::build_test_app(pool.clone()),
        "/api/v1/products",
        serde_json::json!({"name": "Lamp", "description": "old text", "price": 20.0}),
    )
    .await;
    body_json(response).await["id"].as_i64().unwrap()
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn update_with_blank_description_clears_it(pool: PgPool) {
    let id = create_described_product(&pool).await;

    let response = put_json(
        common::build_test_app(pool.clone()),
        &format!("/api/v1/products/{id}"),
        serde_json::json!({"description": ""}),
    )
    .await;
    assert_eq!(response.status(), StatusCode::OK);
    assert!(body_json(response).await["product"]["description"].is_null());

    let json = body_json(get(common::build_test_app(pool), &format!("/api/v1/products/{id}")).await).await;
    assert!(json["data"]["description"].is_null());
    assert_eq!(json["data"]["name"], "Lamp");
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn update_with_null_description_clears_it(pool: PgPool) {
    let id = create_described_product(&pool).await;

    let response = put_json(
        common::build_test_app(pool),
        &format!("/api/v1/products/{id}"),
        serde_json::json!({"description": null}),
    )
    .await;
    assert_eq!(response.status(), StatusCode::OK);
    assert!(body_json(response).await["product"]["description"].is_null());
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn update_without_description_keeps_it(pool: PgPool) {
    let id = create_described_product(&pool).await;

    let response = put_json(
        common::build_test_app(pool),
        &format!("/api/v1/products/{id}"),
        serde_json::json!({"price": 25.0}),
    )
    .await;
    let json = body_json(response).await;
    assert_eq!(json["product"]["description"], "old text");
    assert_eq!(json["product"]["price"], 25.0);
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn update_with_negative_stock_writes_nothing(pool: PgPool) {
    let id = common::create_product(&pool, "Monitor", 189.99, 8).await;

    let response = put_json(
        common::build_test_app(pool.clone()),
        &format!("/api/v1/products/{id}"),
        serde_json::json!({"name": "Renamed", "stock": -1}),
    )
    .await;
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);

    let json = body_json(get(common::build_test_app(pool), &format!("/api/v1/products/{id}")).await).await;
    assert_eq!(json["data"]["name"], "Monitor");
    assert_eq!(json["data"]["stock"], 8);
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn update_nonexistent_product_returns_404(pool: PgPool) {
    let response = put_json(
        common::build_test_app(pool),
        "/api/v1/products/999999",
        serde_json::json!({"price": 1.0}),
    )
    .await;
    assert_eq!(response.status(), StatusCode::NOT_FOUND);
}

// ---------------------------------------------------------------------------
// Set stock
// ---------------------------------------------------------------------------

#[sqlx::test(migrations = "../../db/migrations")]
async fn set_stock_replaces_level(pool: PgPool) {
    let id = common::create_product(&pool, "Headset", 149.99, 12).await;

    let response = put_json(
        common::build_test_app(pool),
        &format!("/api/v1/products/{id}/stock"),
        serde_json::json!({"stock": 3}),
    )
    .await;
    assert_eq!(response.status(), StatusCode::OK);

    let json = body_json(response).await;
    assert_eq!(json["success"], true);
    assert_eq!(json["product_id"], id);
    assert_eq!(json["stock"], 3);
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn set_stock_to_zero_is_allowed(pool: PgPool) {
    let id = common::create_product(&pool, "Headset", 149.99, 12).await;

    let response = put_json(
        common::build_test_app(pool),
        &format!("/api/v1/products/{id}/stock"),
        serde_json::json!({"stock": 0}),
    )
    .await;
    assert_eq!(response.status(), StatusCode::OK);
    assert_eq!(body_json(response).await["stock"], 0);
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn set_stock_rejects_negative_and_missing(pool: PgPool) {
    let id = common::create_product(&pool, "Headset", 149.99, 12).await;

    for body in [serde_json::json!({"stock": -1}), serde_json::json!({})] {
        let response = put_json(
            common::build_test_app(pool.clone()),
            &format!("/api/v1/products/{id}/stock"),
            body,
        )
        .await;
        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    }

    let json = body_json(get(common::build_test_app(pool), &format!("/api/v1/products/{id}")).await).await;
    assert_eq!(json["data"]["stock"], 12);
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn set_stock_on_missing_product_returns_404(pool: PgPool) {
    let response = put_json(
        common::build_test_app(pool),
        "/api/v1/products/999999/stock",
        serde_json::json!({"stock": 5}),
    )
    .await;
    assert_eq!(response.status(), StatusCode::NOT_FOUND);
}

// ---------------------------------------------------------------------------
// Add stock
// ---------------------------------------------------------------------------

#[sqlx::test(migrations = "../../db/migrations")]
async fn add_stock_reports_old_and_new_levels(pool: PgPool) {
    let id = common::create_product(&pool, "Keyboard", 89.99, 10).await;

    let response = put_json(
        common::build_test_app(pool.clone()),
        &format!("/api/v1/products/{id}/add-stock"),
        serde_json::json!({"quantity": 3}),
    )
    .await;
    assert_eq!(response.status(), StatusCode::OK);

    let json = body_json(response).await;
    assert_eq!(json["success"], true);
    assert_eq!(json["product"]["id"], id);
    assert_eq!(json["product"]["name"], "Keyboard");
    assert_eq!(json["product"]["old_stock"], 10);
    assert_eq!(json["product"]["new_stock"], 13);
    assert_eq!(json["product"]["quantity_added"], 3);

    let response = put_json(
        common::build_test_app(pool),
        &format!("/api/v1/products/{id}/add-stock"),
        serde_json::json!({"quantity": 2}),
    )
    .await;
    let json = body_json(response).await;
    assert_eq!(json["product"]["old_stock"], 13);
    assert_eq!(json["product"]["new_stock"], 15);
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn add_stock_rejects_non_positive_quantity(pool: PgPool) {
    let id = common::create_product(&pool, "Keyboard", 89.99, 10).await;

    for quantity in [0, -5] {
        let response = put_json(
            common::build_test_app(pool.clone()),
            &format!("/api/v1/products/{id}/add-stock"),
            serde_json::json!({ "quantity": quantity }),
        )
        .await;
        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    }

    let json = body_json(get(common::build_test_app(pool), &format!("/api/v1/products/{id}")).await).await;
    assert_eq!(json["data"]["stock"], 10);
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn add_stock_on_missing_product_returns_404(pool: PgPool) {
    let response = put_json(
        common::build_test_app(pool),
        "/api/v1/products/999999/add-stock",
        serde_json::json!({"quantity": 5}),
    )
    .await;
    assert_eq!(response.status(), StatusCode::NOT_FOUND);
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn add_stock_overflow_returns_400(pool: PgPool) {
    let id = common::create_product(&pool, "Bulk", 1.0, i32::MAX - 1).await;

    let response = put_json(
        common::build_test_app(pool),
        &format!("/api/v1/products/{id}/add-stock"),
        serde_json::json!({"quantity": 10}),
    )
    .await;
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
}
