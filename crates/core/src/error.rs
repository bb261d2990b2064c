use crate::types::DbId;

#[derive(Debug, thiserror::Error)]
pub enum CoreError {
    #[error("Entity not found: {entity} with id {id}")]
    NotFound { entity: &'static str, id: DbId },

    #[error("Validation failed: {0}")]
    Validation(String),

    /// An order asked for more units than the product currently holds.
    #[error("Insufficient stock for '{product}': requested {requested}, available {available}")]
    InsufficientStock {
        product: String,
        available: i32,
        requested: i32,
    },

    #[error("Internal error: {0}")]
    Internal(String),
}
