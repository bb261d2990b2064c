//! Inventory rules for products: price and stock bounds, stock deltas,
//! and the sufficiency check applied before an order is accepted.

use crate::error::CoreError;

/// Validate a unit price. Must be a finite, non-negative number.
pub fn validate_price(price: f64) -> Result<(), CoreError> {
    if !price.is_finite() {
        return Err(CoreError::Validation("price must be a finite number".into()));
    }
    if price < 0.0 {
        return Err(CoreError::Validation(format!(
            "price must not be negative, got {price}"
        )));
    }
    Ok(())
}

/// Validate an absolute stock level.
pub fn validate_stock(stock: i32) -> Result<(), CoreError> {
    if stock < 0 {
        return Err(CoreError::Validation(format!(
            "stock must not be negative, got {stock}"
        )));
    }
    Ok(())
}

/// Validate an incremental stock addition. Must be strictly positive.
pub fn validate_stock_delta(delta: i32) -> Result<(), CoreError> {
    if delta <= 0 {
        return Err(CoreError::Validation(format!(
            "quantity must be a positive integer, got {delta}"
        )));
    }
    Ok(())
}

/// Validate the optional numeric fields of a partial product update.
///
/// Every supplied field is checked before anything is written, so a
/// single bad value rejects the whole update.
pub fn validate_product_changes(price: Option<f64>, stock: Option<i32>) -> Result<(), CoreError> {
    if let Some(price) = price {
        validate_price(price)?;
    }
    if let Some(stock) = stock {
        validate_stock(stock)?;
    }
    Ok(())
}

/// Check that `requested` units can be taken from `available`.
///
/// No partial fulfilment: either the full quantity is available or the
/// order is rejected with [`CoreError::InsufficientStock`].
pub fn check_stock_available(
    product_name: &str,
    available: i32,
    requested: i32,
) -> Result<(), CoreError> {
    if requested > available {
        return Err(CoreError::InsufficientStock {
            product: product_name.to_string(),
            available,
            requested,
        });
    }
    Ok(())
}
