//! Request handlers.
//!
//! Each submodule provides async handler functions for a single resource.
//! Handlers validate input through `minierp_core`, delegate persistence to
//! the corresponding repository in `minierp_db`, and map errors via
//! [`AppError`](crate::error::AppError).

pub mod client;
pub mod demo;
pub mod order;
pub mod product;
pub mod stats;
