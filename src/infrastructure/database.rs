//! PostgreSQL connector: pool creation, liveness probe and schema bootstrap.

use sqlx::postgres::{PgPool, PgPoolOptions};
use thiserror::Error;

use crate::config::Config;

/// Idempotent schema for the single `users` table
pub const CREATE_USERS_TABLE: &str = r#"
    CREATE TABLE IF NOT EXISTS users (
        id SERIAL PRIMARY KEY,
        name VARCHAR(100),
        email VARCHAR(100)
    )
"#;

/// Fatal startup failures of the storage connector
#[derive(Debug, Error)]
pub enum DatabaseError {
    #[error("failed to connect to database: {0}")]
    Connection(#[source] sqlx::Error),

    #[error("database did not answer liveness probe: {0}")]
    Ping(#[source] sqlx::Error),

    #[error("failed to create users table: {0}")]
    Schema(#[source] sqlx::Error),
}

/// Opens the pool, verifies it with a round-trip and ensures the schema.
///
/// The returned pool is shared by every request handler.
pub async fn connect(config: &Config) -> Result<PgPool, DatabaseError> {
    tracing::info!(
        max_connections = config.max_connections,
        "Connecting to database..."
    );

    let pool = PgPoolOptions::new()
        .max_connections(config.max_connections)
        .connect(&config.database_url)
        .await
        .map_err(DatabaseError::Connection)?;

    ping(&pool).await.map_err(DatabaseError::Ping)?;
    ensure_schema(&pool).await?;

    tracing::info!("Database connected successfully");
    Ok(pool)
}

/// Runs `SELECT 1` against the pool
pub async fn ping(pool: &PgPool) -> Result<(), sqlx::Error> {
    sqlx::query("SELECT 1").execute(pool).await.map(|_| ())
}

/// Creates the `users` table when it is absent
pub async fn ensure_schema(pool: &PgPool) -> Result<(), DatabaseError> {
    sqlx::query(CREATE_USERS_TABLE)
        .execute(pool)
        .await
        .map_err(DatabaseError::Schema)?;

    Ok(())
}
