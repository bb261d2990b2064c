//! Domain model structs and DTOs.
//!
//! Each submodule contains:
//! - A `FromRow` + `Serialize` entity struct matching the database row
//! - A create DTO carrying already-validated input for inserts
//! - Where the entity is mutable, an update DTO (all `Option` fields)

pub mod client;
pub mod order;
pub mod product;
pub mod stats;
