//! Database layer: connection pool, migrations, models, and repositories.
//!
//! Repositories are zero-sized structs with async methods taking `&PgPool`
//! as the first argument, so handlers stay free to share one pool.

pub mod models;
pub mod repositories;

use sqlx::postgres::PgPoolOptions;
use sqlx::PgPool;

/// Pool type used by the API crate's shared state.
pub type DbPool = PgPool;

/// Maximum number of pooled Postgres connections.
const MAX_CONNECTIONS: u32 = 5;

/// Open a connection pool against the given Postgres URL.
pub async fn create_pool(database_url: &str) -> Result<PgPool, sqlx::Error> {
    PgPoolOptions::new()
        .max_connections(MAX_CONNECTIONS)
        .connect(database_url)
        .await
}

/// Verify the database answers a trivial query.
pub async fn health_check(pool: &PgPool) -> Result<(), sqlx::Error> {
    sqlx::query("SELECT 1").execute(pool).await?;
    Ok(())
}

/// Apply all pending migrations from `db/migrations`.
pub async fn run_migrations(pool: &PgPool) -> Result<(), sqlx::migrate::MigrateError> {
    sqlx::migrate!("../../db/migrations").run(pool).await
}
