//! Repository layer.
//!
//! Each repository is a zero-sized struct providing async methods that
//! accept `&PgPool` as the first argument.

pub mod client_repo;
pub mod order_repo;
pub mod product_repo;
pub mod stats_repo;

pub use client_repo::ClientRepo;
pub use order_repo::OrderRepo;
pub use product_repo::ProductRepo;
pub use stats_repo::StatsRepo;
