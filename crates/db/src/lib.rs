//! Persistent store for the mini-ERP backend.
//!
//! PostgreSQL access through `sqlx`: pool construction, embedded
//! migrations, row models, and zero-sized repository structs.

use sqlx::migrate::Migrator;
use sqlx::postgres::PgPoolOptions;

pub mod models;
pub mod repositories;
pub mod seed;

pub type DbPool = sqlx::PgPool;

/// Migrations embedded from `db/migrations` at compile time.
static MIGRATOR: Migrator = sqlx::migrate!("../../db/migrations");

/// Default upper bound on pooled connections.
pub const DEFAULT_MAX_CONNECTIONS: u32 = 20;

/// Create a connection pool from a database URL.
///
/// Each request acquires its own connection from the pool and returns it
/// when the handler finishes.
pub async fn create_pool(database_url: &str, max_connections: u32) -> Result<DbPool, sqlx::Error> {
    PgPoolOptions::new()
        .max_connections(max_connections)
        .connect(database_url)
        .await
}

/// Verify the database answers a trivial query.
pub async fn health_check(pool: &DbPool) -> Result<(), sqlx::Error> {
    sqlx::query("SELECT 1").execute(pool).await?;
    Ok(())
}

/// Apply all pending migrations from `db/migrations`.
pub async fn run_migrations(pool: &DbPool) -> Result<(), sqlx::migrate::MigrateError> {
    MIGRATOR.run(pool).await
}

/// How far the connected schema is behind this build.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MigrationStatus {
    /// Migrations recorded as successfully applied in the database.
    pub applied: i64,
    /// Migrations embedded in this binary.
    pub expected: i64,
}

impl MigrationStatus {
    pub fn is_current(&self) -> bool {
        self.applied >= self.expected
    }
}

/// Compare applied migrations against the embedded set.
///
/// Fails if the migrations table does not exist yet.
pub async fn migration_status(pool: &DbPool) -> Result<MigrationStatus, sqlx::Error> {
    let applied: i64 =
        sqlx::query_scalar("SELECT COUNT(*) FROM _sqlx_migrations WHERE success")
            .fetch_one(pool)
            .await?;
    Ok(MigrationStatus {
        applied,
        expected: MIGRATOR.iter().count() as i64,
    })
}
