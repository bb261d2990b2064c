//! Domain logic for the mini-ERP backend.
//!
//! Pure functions and types with no I/O: validation rules, the order
//! status enumeration, inventory checks, and reporting aggregation. The
//! `minierp-db` and `minierp-api` crates build on these.

pub mod error;
pub mod inventory;
pub mod order;
pub mod reporting;
pub mod types;
pub mod validation;
